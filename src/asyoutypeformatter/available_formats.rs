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
use strum::Display;

use super::{AsYouTypeFormatter, MIN_LEADING_DIGITS_LENGTH, NATIONAL_PREFIX_SEPARATORS_PATTERN};
use crate::phonemetadata::NumberFormat;

/// The format list of a metadata record candidates are drawn from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    /// `number_format`, used for numbers typed in national form.
    #[strum(to_string = "national")]
    National,
    /// `intl_number_format`, used for numbers typed with an IDD or `+`.
    #[strum(to_string = "international")]
    International,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub(super) fn format_list(&self) -> &'a [NumberFormat] {
        match self.format_family {
            FormatFamily::National => self.current_metadata.number_format(),
            FormatFamily::International => self.current_metadata.intl_number_format(),
        }
    }

    /// The formats still consistent with the digits typed, in metadata order.
    pub(super) fn candidate_formats(&self) -> Vec<&'a NumberFormat> {
        let format_list = self.format_list();
        self.possible_formats
            .iter()
            .filter_map(|&index| format_list.get(index))
            .collect()
    }

    pub(super) fn get_available_formats(&mut self) {
        // International formats only apply to numbers typed with an IDD or a
        // country code, and only when the region has a separate list.
        let is_international_number =
            self.is_complete_number && self.extracted_national_prefix.is_empty();
        self.format_family =
            if is_international_number && !self.current_metadata.intl_number_format().is_empty() {
                FormatFamily::International
            } else {
                FormatFamily::National
            };

        let format_list = self.format_list();
        self.possible_formats = format_list
            .iter()
            .enumerate()
            .filter(|(_, format)| self.is_format_applicable(format))
            .map(|(index, _)| index)
            .collect();
        trace!(
            "{} of {} {} formats of {} apply before narrowing",
            self.possible_formats.len(),
            format_list.len(),
            self.format_family,
            self.current_metadata.id()
        );
        self.narrow_down_possible_formats();
    }

    fn is_format_applicable(&self, format: &NumberFormat) -> bool {
        let national_prefix_formatting_rule = format.national_prefix_formatting_rule();
        if !self.extracted_national_prefix.is_empty()
            && self.rules.formatting_rule_has_first_group_only(national_prefix_formatting_rule)
            && !format.national_prefix_optional_when_formatting()
            && !format.has_domestic_carrier_code_formatting_rule()
        {
            // A national prefix was typed but this format never shows one. A
            // format with a carrier code rule stays: what was extracted may
            // have been a carrier code.
            return false;
        } else if self.extracted_national_prefix.is_empty()
            && !self.is_complete_number
            && !self.rules.formatting_rule_has_first_group_only(national_prefix_formatting_rule)
            && !format.national_prefix_optional_when_formatting()
        {
            // No national prefix was typed but this format requires one.
            return false;
        }
        self.rules.is_format_eligible_for_as_you_type_formatter(format.format())
    }

    /// Drops the formats whose leading digits no longer match the national
    /// number. The most specific pattern available for the current length is
    /// used; numbers longer than every pattern use the last one.
    pub(super) fn narrow_down_possible_formats(&mut self) {
        let index_of_leading_digits_pattern = self
            .national_number
            .len()
            .saturating_sub(MIN_LEADING_DIGITS_LENGTH);
        let format_list = self.format_list();
        let mut possible_formats = std::mem::take(&mut self.possible_formats);
        possible_formats.retain(|&index| {
            let Some(format) = format_list.get(index) else {
                return false;
            };
            let leading_digits_patterns = format.leading_digits_pattern();
            let Some(last_leading_digits_pattern) = leading_digits_patterns.len().checked_sub(1) else {
                // Not restricted by leading digits.
                return true;
            };
            let pattern =
                &leading_digits_patterns[index_of_leading_digits_pattern.min(last_leading_digits_pattern)];
            self.consume_prefix(pattern, &self.national_number).is_some()
        });
        self.possible_formats = possible_formats;
    }

    pub(super) fn set_should_add_space_after_national_prefix(&mut self, format: &NumberFormat) {
        self.should_add_space_after_national_prefix = self
            .partial_match(
                NATIONAL_PREFIX_SEPARATORS_PATTERN,
                format.national_prefix_formatting_rule(),
            )
            .is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::FormatFamily;
    use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

    fn type_digits<'a>(phone_util: &'a PhoneNumberUtil, region: &str, digits: &str) -> super::AsYouTypeFormatter<'a> {
        let mut formatter = phone_util.get_as_you_type_formatter(region);
        for digit in digits.chars() {
            formatter.input_digit(digit);
        }
        formatter
    }

    #[test]
    fn national_prefix_filters_formats() {
        let phone_util = PhoneNumberUtil::new();
        // With the national prefix, the format without a prefix rule goes.
        let formatter = type_digits(&phone_util, "AU", "0298");
        assert_eq!(FormatFamily::National, formatter.format_family);
        assert_eq!(vec![0], formatter.possible_formats);

        // Without it, formats requiring the prefix go.
        let formatter = type_digits(&phone_util, "AU", "987");
        assert_eq!(vec![2], formatter.possible_formats);
    }

    #[test]
    fn international_numbers_use_international_list() {
        let phone_util = PhoneNumberUtil::new();
        let formatter = type_digits(&phone_util, "ZZ", "+61298");
        assert_eq!(FormatFamily::International, formatter.format_family);
        assert_eq!(vec![0], formatter.possible_formats);

        // Regions without a separate list fall back to the national one.
        let formatter = type_digits(&phone_util, "ZZ", "+44207");
        assert_eq!(FormatFamily::National, formatter.format_family);
        assert_eq!(vec![0], formatter.possible_formats);
    }

    #[test]
    fn carrier_code_rule_keeps_first_group_only_format() {
        let phone_util = PhoneNumberUtil::new();
        let formatter = type_digits(&phone_util, "BR", "0112");
        assert_eq!("0", formatter.get_extracted_national_prefix());
        assert_eq!(vec![0], formatter.possible_formats);
    }

    #[test]
    fn leading_digits_index_is_capped_at_last_pattern() {
        let phone_util = PhoneNumberUtil::new();
        let formatter = type_digits(&phone_util, "JP", "+81333225");
        // Only the second four-digit-area format survives "3332".
        assert_eq!(vec![3], formatter.possible_formats);
        let formatter = type_digits(&phone_util, "JP", "+8122212567");
        assert_eq!(vec![2], formatter.possible_formats);
    }

    #[test]
    fn family_names_display_in_lowercase() {
        assert_eq!("national", FormatFamily::National.to_string());
        assert_eq!("international", FormatFamily::International.to_string());
    }
}
