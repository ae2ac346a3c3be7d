// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;

use super::{
    AsYouTypeFormatter, DIGIT_PLACEHOLDER, LONGEST_PHONE_NUMBER, SEPARATOR_BEFORE_NATIONAL_NUMBER,
};
use crate::phonemetadata::NumberFormat;

impl<'a> AsYouTypeFormatter<'a> {
    /// Adopts the first candidate format a template can be built for.
    /// Returns `false` when the current template is still the best one, or
    /// when no candidate fits (formatting then stops).
    pub(super) fn maybe_create_new_template(&mut self) -> bool {
        for number_format in self.candidate_formats() {
            let pattern = number_format.pattern();
            if self.current_formatting_pattern == pattern {
                return false;
            }
            if self.create_formatting_template(number_format) {
                self.current_formatting_pattern = pattern.to_owned();
                self.set_should_add_space_after_national_prefix(number_format);
                // Positions matched in the old template mean nothing here.
                self.last_match_position = 0;
                trace!("Formatting with pattern {} as {}", pattern, number_format.format());
                return true;
            }
        }
        trace!("No format fits {:?}, echoing input", self.national_number);
        self.able_to_format = false;
        false
    }

    fn create_formatting_template(&mut self, format: &NumberFormat) -> bool {
        self.formatting_template.clear();
        match self.get_formatting_template(format.pattern(), format.format()) {
            Some(formatting_template) => {
                self.formatting_template = formatting_template;
                true
            }
            None => false,
        }
    }

    /// Builds the template of a format: the format applied to the longest
    /// run of 9s its pattern accepts, with every 9 replaced by a placeholder.
    pub(super) fn get_formatting_template(
        &self,
        number_pattern: &str,
        number_format: &str,
    ) -> Option<Vec<char>> {
        let a_phone_number = self.partial_match(number_pattern, LONGEST_PHONE_NUMBER)?;
        // The format cannot hold more digits than that.
        if a_phone_number.len() < self.national_number.len() {
            return None;
        }
        let formatted = self.global_replace(number_pattern, a_phone_number, number_format)?;
        Some(
            formatted
                .chars()
                .map(|c| if c == '9' { DIGIT_PLACEHOLDER } else { c })
                .collect(),
        )
    }

    /// Puts `next_char` into the first free placeholder of the template and
    /// returns the template up to it. Returns the verbatim input when the
    /// template is full.
    pub(super) fn input_digit_helper(&mut self, next_char: char) -> String {
        // The template may be empty, e.g. right after an IDD or NDD was
        // extracted.
        let placeholder = self.formatting_template[self.last_match_position.min(self.formatting_template.len())..]
            .iter()
            .position(|&c| c == DIGIT_PLACEHOLDER);
        match placeholder {
            Some(offset) => {
                let placeholder_pos = self.last_match_position + offset;
                self.formatting_template[placeholder_pos] = next_char;
                self.last_match_position = placeholder_pos;
                self.formatting_template[..=placeholder_pos].iter().collect()
            }
            None => {
                if self.possible_formats.len() == 1 {
                    // More digits than the only remaining format can hold.
                    self.able_to_format = false;
                }
                self.current_formatting_pattern.clear();
                self.accrued_input.clone()
            }
        }
    }

    /// Feeds the whole national number into a freshly built template.
    pub(super) fn input_accrued_national_number(&mut self) -> String {
        if self.national_number.is_empty() {
            return self.prefix_before_national_number.clone();
        }
        let national_number = self.national_number.clone();
        let mut temp_national_number = String::new();
        for digit in national_number.chars() {
            temp_national_number = self.input_digit_helper(digit);
        }
        if self.able_to_format {
            self.append_national_number(&temp_national_number)
        } else {
            self.accrued_input.clone()
        }
    }

    /// Formats the national number with the first candidate whose pattern
    /// matches it completely, provided no digit is lost or added on the way.
    pub(super) fn attempt_to_format_accrued_digits(&mut self) -> Option<String> {
        for number_format in self.candidate_formats() {
            let pattern = number_format.pattern();
            if !self.full_match(pattern, &self.national_number) {
                continue;
            }
            self.set_should_add_space_after_national_prefix(number_format);
            let Some(formatted_number) =
                self.global_replace(pattern, &self.national_number, number_format.format())
            else {
                continue;
            };
            let full_output = self.append_national_number(&formatted_number);
            // Some formats drop a digit (e.g. a mobile token), which must not
            // happen to what the user typed.
            if self.rules.normalize_diallable_chars_only(&full_output)
                == self.accrued_input_without_formatting
            {
                return Some(full_output);
            }
        }
        None
    }

    /// Joins the committed prefix with a formatted national number.
    pub(super) fn append_national_number(&self, national_number: &str) -> String {
        let prefix = &self.prefix_before_national_number;
        if self.should_add_space_after_national_prefix
            && !prefix.is_empty()
            && !prefix.ends_with(SEPARATOR_BEFORE_NATIONAL_NUMBER)
        {
            // The national prefix formatting rule separates prefix and number,
            // unless a space was already added after a long NDD.
            fast_cat::concat_str!(prefix, SEPARATOR_BEFORE_NATIONAL_NUMBER, national_number)
        } else {
            fast_cat::concat_str!(prefix, national_number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::DIGIT_PLACEHOLDER;
    use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

    fn template_string(template: &[char]) -> String {
        template
            .iter()
            .map(|&c| if c == DIGIT_PLACEHOLDER { 'X' } else { c })
            .collect()
    }

    #[test]
    fn template_follows_format_of_longest_match() {
        let phone_util = PhoneNumberUtil::new();
        let formatter = phone_util.get_as_you_type_formatter("US");
        let template = formatter
            .get_formatting_template("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3")
            .unwrap();
        assert_eq!("XXX XXX XXXX", template_string(&template));

        // Variable-length groups take as many digits as they can.
        let template = formatter
            .get_formatting_template("(\\d{2})(\\d{3,4})(\\d{4})", "$1-$2-$3")
            .unwrap();
        assert_eq!("XX-XXXX-XXXX", template_string(&template));
    }

    #[test]
    fn template_fails_when_too_many_digits_are_typed() {
        let phone_util = PhoneNumberUtil::new();
        let mut formatter = phone_util.get_as_you_type_formatter("US");
        for digit in "65025322".chars() {
            formatter.input_digit(digit);
        }
        assert!(formatter.get_formatting_template("(\\d{3})(\\d{4})", "$1 $2").is_none());
        assert!(formatter.get_formatting_template("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3").is_some());
    }

    #[test]
    fn pattern_not_matching_probe_gives_no_template() {
        let phone_util = PhoneNumberUtil::new();
        let formatter = phone_util.get_as_you_type_formatter("US");
        assert!(formatter.get_formatting_template("(1)(\\d{3})", "$1 $2").is_none());
    }

    #[test]
    fn space_after_prefix_follows_formatting_rule() {
        let phone_util = PhoneNumberUtil::new();
        let mut formatter = phone_util.get_as_you_type_formatter("US");
        for digit in "1650".chars() {
            formatter.input_digit(digit);
        }
        // "1 $1" separates the prefix from the number.
        assert!(formatter.should_add_space_after_national_prefix);
        assert_eq!("1 650 2", formatter.append_national_number("650 2"));

        let mut formatter = phone_util.get_as_you_type_formatter("GB");
        for digit in "0207".chars() {
            formatter.input_digit(digit);
        }
        // "(0$1)" does not.
        assert!(!formatter.should_add_space_after_national_prefix);
        assert_eq!("020 7", formatter.append_national_number("20 7"));
    }
}
