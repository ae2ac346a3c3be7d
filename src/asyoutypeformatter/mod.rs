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

//! Formats a phone number one character at a time, the way a dialer does
//! while the user is typing.

mod available_formats;
mod formatting_template;
mod position;
mod prefix_extraction;

use std::borrow::Cow;

use log::{error, trace};

use crate::{
    interfaces::{MetadataSource, NumberRules, PatternMatcher},
    phonemetadata::PhoneMetadata,
};

pub use available_formats::FormatFamily;

/// Number of national digits needed before a format is chosen. Also the
/// length of the prefix the first leading-digits pattern is written for.
const MIN_LEADING_DIGITS_LENGTH: usize = 3;

/// Marks a not-yet-typed digit in a formatting template. A punctuation space
/// never appears in formats or in user input.
const DIGIT_PLACEHOLDER: char = '\u{2008}';

/// Probe matched against a format's pattern to find out how many digits it
/// takes at most.
const LONGEST_PHONE_NUMBER: &str = "999999999999999";

const SEPARATOR_BEFORE_NATIONAL_NUMBER: &str = " ";
const NATIONAL_PREFIX_SEPARATORS_PATTERN: &str = "[- ]";
const PLUS_SIGN: char = '+';

/// A formatter for a single phone number typed one character at a time.
///
/// Every input returns the best rendering of the number typed so far. The
/// formatter is bound to a default region, which decides how numbers typed
/// without a `+` or an international prefix are read.
///
/// ```
/// use rlibphonenumber_aytf::PHONE_NUMBER_UTIL;
///
/// let mut formatter = PHONE_NUMBER_UTIL.get_as_you_type_formatter("US");
/// let mut output = String::new();
/// for digit in "6502532222".chars() {
///     output = formatter.input_digit(digit).to_owned();
/// }
/// assert_eq!("650 253 2222", output);
/// ```
pub struct AsYouTypeFormatter<'a> {
    metadata_source: &'a dyn MetadataSource,
    rules: &'a dyn NumberRules,
    matcher: &'a dyn PatternMatcher,

    current_output: String,
    /// The template of the chosen format, placeholders replaced by digits
    /// as they are typed.
    formatting_template: Vec<char>,
    /// Pattern of the format `formatting_template` was built from.
    current_formatting_pattern: String,
    /// Everything typed, verbatim.
    accrued_input: String,
    /// ASCII digits and the leading plus sign typed so far.
    accrued_input_without_formatting: String,
    /// Cleared when a format can no longer be applied or when the user typed
    /// a formatting character. Output is then `accrued_input` verbatim.
    able_to_format: bool,
    /// Set when the user typed a character other than a digit or a leading
    /// plus sign.
    input_has_formatting: bool,
    /// Set once an IDD, a country code or a national prefix was recognized,
    /// which rules out formats for numbers typed without area code.
    is_complete_number: bool,
    is_expecting_country_code: bool,
    default_country: String,
    default_metadata: &'a PhoneMetadata,
    current_metadata: &'a PhoneMetadata,
    last_match_position: usize,
    /// Code point position in `accrued_input` the caller asked to remember.
    original_position: usize,
    /// Position in `accrued_input_without_formatting` the caller asked to
    /// remember.
    position_to_remember: usize,
    /// Formatted IDD, country code and national prefix, committed as they
    /// are recognized.
    prefix_before_national_number: String,
    should_add_space_after_national_prefix: bool,
    /// Digits of the national prefix (or carrier code) that was removed from
    /// `national_number`.
    extracted_national_prefix: String,
    /// ASCII digits of the number without any recognized prefix.
    national_number: String,
    /// Which format list of `current_metadata` `possible_formats` indexes.
    format_family: FormatFamily,
    /// Indices of the formats still consistent with the digits typed.
    possible_formats: Vec<usize>,
}

impl<'a> AsYouTypeFormatter<'a> {
    /// Creates a formatter for numbers typed in `region_code`. Unknown
    /// regions are accepted; only numbers typed with `+` are formatted then.
    pub fn new(
        region_code: &str,
        metadata_source: &'a dyn MetadataSource,
        rules: &'a dyn NumberRules,
        matcher: &'a dyn PatternMatcher,
    ) -> Self {
        let default_metadata = Self::metadata_for_region_of(metadata_source, rules, region_code);
        Self {
            metadata_source,
            rules,
            matcher,
            current_output: String::new(),
            formatting_template: Vec::new(),
            current_formatting_pattern: String::new(),
            accrued_input: String::new(),
            accrued_input_without_formatting: String::new(),
            able_to_format: true,
            input_has_formatting: false,
            is_complete_number: false,
            is_expecting_country_code: false,
            default_country: region_code.to_owned(),
            default_metadata,
            current_metadata: default_metadata,
            last_match_position: 0,
            original_position: 0,
            position_to_remember: 0,
            prefix_before_national_number: String::new(),
            should_add_space_after_national_prefix: false,
            extracted_national_prefix: String::new(),
            national_number: String::new(),
            format_family: FormatFamily::National,
            possible_formats: Vec::new(),
        }
    }

    /// Formats a phone number on-the-fly as each digit is entered.
    ///
    /// `next_char` is the most recently entered character. Characters other
    /// than digits and a leading `+` stop the formatting: from then on the
    /// input is returned as typed.
    pub fn input_digit(&mut self, next_char: char) -> &str {
        self.input_digit_with_option_to_remember_position(next_char, false);
        &self.current_output
    }

    /// Same as [`Self::input_digit`], but remembers the position where
    /// `next_char` is inserted, so that it can be retrieved later with
    /// [`Self::get_remembered_position`]. The remembered position is kept
    /// until this method is called again.
    pub fn input_digit_and_remember_position(&mut self, next_char: char) -> &str {
        self.input_digit_with_option_to_remember_position(next_char, true);
        &self.current_output
    }

    /// Digits of the national prefix (or carrier selection code) recognized
    /// in the number typed so far.
    pub fn get_extracted_national_prefix(&self) -> &str {
        &self.extracted_national_prefix
    }

    /// Clears the internal state of the formatter, so it can be reused.
    pub fn clear(&mut self) {
        self.current_output.clear();
        self.accrued_input.clear();
        self.accrued_input_without_formatting.clear();
        self.formatting_template.clear();
        self.last_match_position = 0;
        self.current_formatting_pattern.clear();
        self.prefix_before_national_number.clear();
        self.extracted_national_prefix.clear();
        self.national_number.clear();
        self.able_to_format = true;
        self.input_has_formatting = false;
        self.position_to_remember = 0;
        self.original_position = 0;
        self.is_complete_number = false;
        self.is_expecting_country_code = false;
        self.format_family = FormatFamily::National;
        self.possible_formats.clear();
        self.should_add_space_after_national_prefix = false;
        self.current_metadata = self.default_metadata;
    }

    fn input_digit_with_option_to_remember_position(
        &mut self,
        next_char: char,
        remember_position: bool,
    ) {
        self.accrued_input.push(next_char);
        if remember_position {
            self.original_position = self.accrued_input.chars().count();
        }
        // Formatting happens on-the-fly only while every character is a digit,
        // or a plus sign at the very start.
        let normalized_char = if next_char == PLUS_SIGN && self.accrued_input.len() == 1 {
            self.accrue_digit_or_plus_sign(next_char, remember_position)
        } else if let Some(digit) = self.normalize_digit(next_char) {
            self.national_number.push(digit);
            self.accrue_digit_or_plus_sign(digit, remember_position)
        } else {
            if self.able_to_format {
                trace!("Formatting character {:?} typed, echoing input from now on", next_char);
            }
            self.able_to_format = false;
            self.input_has_formatting = true;
            next_char
        };

        self.current_output = self.format_next_char(normalized_char);
        debug_assert!(self.national_number.bytes().all(|b| b.is_ascii_digit()));
    }

    /// Returns the ASCII value of a decimal digit of any script.
    fn normalize_digit(&self, next_char: char) -> Option<char> {
        let mut buffer = [0; 4];
        let next_char = next_char.encode_utf8(&mut buffer);
        if !self.rules.contains_only_valid_digits(next_char) {
            return None;
        }
        let digits = self.rules.normalize_digits_only(next_char);
        let mut chars = digits.chars();
        match (chars.next(), chars.next()) {
            (Some(digit), None) => Some(digit),
            _ => None,
        }
    }

    fn accrue_digit_or_plus_sign(&mut self, normalized_char: char, remember_position: bool) -> char {
        self.accrued_input_without_formatting.push(normalized_char);
        if remember_position {
            self.position_to_remember = self.accrued_input_without_formatting.len();
        }
        normalized_char
    }

    fn format_next_char(&mut self, next_char: char) -> String {
        if !self.able_to_format {
            // Without formatting characters, formatting may have stopped because
            // of a really long IDD or NDD. Extracting it might make the number
            // formattable again.
            if self.input_has_formatting {
                return self.accrued_input.clone();
            } else if self.attempt_to_extract_idd() {
                if self.attempt_to_extract_country_code() {
                    return self.attempt_to_choose_pattern_with_prefix_extracted();
                }
            } else if self.able_to_extract_longer_ndd() {
                // A space separates the long NDD from the digits that follow.
                self.prefix_before_national_number
                    .push_str(SEPARATOR_BEFORE_NATIONAL_NUMBER);
                return self.attempt_to_choose_pattern_with_prefix_extracted();
            }
            return self.accrued_input.clone();
        }

        // The plus sign counts as a digit here.
        let digits_entered = self.accrued_input_without_formatting.len();
        if digits_entered < MIN_LEADING_DIGITS_LENGTH {
            return self.accrued_input.clone();
        }
        if digits_entered == MIN_LEADING_DIGITS_LENGTH {
            if self.attempt_to_extract_idd() {
                self.is_expecting_country_code = true;
            } else {
                // No IDD or plus sign, the number is probably typed in national
                // format.
                self.extracted_national_prefix = self.remove_national_prefix_from_national_number();
                return self.attempt_to_choose_formatting_pattern();
            }
        }

        if self.is_expecting_country_code {
            if self.attempt_to_extract_country_code() {
                self.is_expecting_country_code = false;
            }
            return fast_cat::concat_str!(&self.prefix_before_national_number, &self.national_number);
        }
        if self.possible_formats.is_empty() {
            return self.attempt_to_choose_formatting_pattern();
        }

        // A format is chosen already.
        let temp_national_number = self.input_digit_helper(next_char);
        // A format matching the whole number beats the template.
        if let Some(formatted_number) = self.attempt_to_format_accrued_digits() {
            return formatted_number;
        }
        self.narrow_down_possible_formats();
        if self.maybe_create_new_template() {
            return self.input_accrued_national_number();
        }
        if self.able_to_format {
            self.append_national_number(&temp_national_number)
        } else {
            self.accrued_input.clone()
        }
    }

    fn attempt_to_choose_pattern_with_prefix_extracted(&mut self) -> String {
        self.able_to_format = true;
        self.is_expecting_country_code = false;
        self.possible_formats.clear();
        self.last_match_position = 0;
        self.formatting_template.clear();
        self.current_formatting_pattern.clear();
        self.attempt_to_choose_formatting_pattern()
    }

    fn attempt_to_choose_formatting_pattern(&mut self) -> String {
        // Formats are only looked at once MIN_LEADING_DIGITS_LENGTH digits of the
        // national number (without national prefix) are known.
        if self.national_number.len() < MIN_LEADING_DIGITS_LENGTH {
            return self.append_national_number(&self.national_number);
        }
        self.get_available_formats();
        if let Some(formatted_number) = self.attempt_to_format_accrued_digits() {
            return formatted_number;
        }
        if self.maybe_create_new_template() {
            self.input_accrued_national_number()
        } else {
            self.accrued_input.clone()
        }
    }

    fn full_match(&self, pattern: &str, text: &str) -> bool {
        self.matcher.full_match(pattern, text).unwrap_or_else(|err| {
            error!("Invalid pattern {:?}: {}", pattern, err);
            false
        })
    }

    fn consume_prefix(&self, pattern: &str, text: &str) -> Option<usize> {
        self.matcher.consume_prefix(pattern, text).unwrap_or_else(|err| {
            error!("Invalid pattern {:?}: {}", pattern, err);
            None
        })
    }

    fn partial_match<'t>(&self, pattern: &str, text: &'t str) -> Option<&'t str> {
        self.matcher.partial_match(pattern, text).unwrap_or_else(|err| {
            error!("Invalid pattern {:?}: {}", pattern, err);
            None
        })
    }

    fn global_replace<'t>(&self, pattern: &str, text: &'t str, replacement: &str) -> Option<Cow<'t, str>> {
        self.matcher
            .global_replace(pattern, text, replacement)
            .inspect_err(|err| error!("Invalid pattern {:?}: {}", pattern, err))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::AsYouTypeFormatter;
    use crate::{phonenumberutil::phonenumberutil::PhoneNumberUtil, regex_based_matcher::RegexBasedMatcher};

    #[test]
    fn fresh_formatter_echoes_first_two_characters() {
        let phone_util = PhoneNumberUtil::new();
        let matcher = RegexBasedMatcher::new();
        let mut formatter = AsYouTypeFormatter::new("US", &phone_util, &phone_util, &matcher);
        assert_eq!("6", formatter.input_digit('6'));
        assert_eq!("65", formatter.input_digit('5'));
        assert_eq!("", formatter.get_extracted_national_prefix());
    }

    #[test]
    fn plus_sign_is_only_accepted_first() {
        let phone_util = PhoneNumberUtil::new();
        let mut formatter = phone_util.get_as_you_type_formatter("US");
        assert_eq!("6", formatter.input_digit('6'));
        assert_eq!("6+", formatter.input_digit('+'));
        assert_eq!("6+5", formatter.input_digit('5'));
        assert_eq!("6+50", formatter.input_digit('0'));
    }

    #[test]
    fn clear_restores_default_metadata() {
        let phone_util = PhoneNumberUtil::new();
        let mut formatter = phone_util.get_as_you_type_formatter("US");
        for c in "+4420".chars() {
            formatter.input_digit(c);
        }
        assert_eq!(44, formatter.current_metadata.country_code());
        formatter.clear();
        assert_eq!(1, formatter.current_metadata.country_code());
        assert!(formatter.possible_formats.is_empty());
        assert!(formatter.formatting_template.is_empty());
    }
}
