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

use super::{AsYouTypeFormatter, PLUS_SIGN, SEPARATOR_BEFORE_NATIONAL_NUMBER};
use crate::{
    interfaces::{MetadataSource, NumberRules},
    phonemetadata::PhoneMetadata,
    phonenumberutil::{NANPA_COUNTRY_CODE, REGION_CODE_FOR_NON_GEO_ENTITY},
};

impl<'a> AsYouTypeFormatter<'a> {
    /// Metadata of the main region of the calling code `region_code` belongs
    /// to, so that e.g. "BS" is formatted with the rules of "US".
    pub(super) fn metadata_for_region_of(
        metadata_source: &'a dyn MetadataSource,
        rules: &'a dyn NumberRules,
        region_code: &str,
    ) -> &'a PhoneMetadata {
        let country_calling_code = rules.country_code_for_region(region_code);
        let main_country = rules.region_code_for_country_code(country_calling_code);
        metadata_source.metadata_for_region(main_country)
    }

    fn get_metadata_for_region(&self, region_code: &str) -> &'a PhoneMetadata {
        Self::metadata_for_region_of(self.metadata_source, self.rules, region_code)
    }

    /// Recognizes a plus sign or the international prefix of the current
    /// region at the start of the input. Everything after it becomes the
    /// national number.
    pub(super) fn attempt_to_extract_idd(&mut self) -> bool {
        let international_prefix =
            fast_cat::concat_str!("\\+|", self.current_metadata.international_prefix());
        // An empty match does not count.
        let Some(start_of_country_code) = self
            .consume_prefix(&international_prefix, &self.accrued_input_without_formatting)
            .filter(|&consumed| consumed > 0)
        else {
            return false;
        };

        self.is_complete_number = true;
        self.national_number.clear();
        self.national_number
            .push_str(&self.accrued_input_without_formatting[start_of_country_code..]);
        self.prefix_before_national_number.clear();
        self.prefix_before_national_number
            .push_str(&self.accrued_input_without_formatting[..start_of_country_code]);
        if !self.accrued_input_without_formatting.starts_with(PLUS_SIGN) {
            self.prefix_before_national_number
                .push_str(SEPARATOR_BEFORE_NATIONAL_NUMBER);
        }
        trace!("Extracted IDD {:?}", self.prefix_before_national_number);
        true
    }

    /// Moves a leading country calling code from the national number into
    /// the prefix and switches to the metadata of that code.
    pub(super) fn attempt_to_extract_country_code(&mut self) -> bool {
        if self.national_number.is_empty() {
            return false;
        }
        let rules = self.rules;
        let mut number_without_country_code = self.national_number.clone();
        let country_code = rules.extract_country_code(&mut number_without_country_code);
        if country_code == 0 {
            return false;
        }
        self.national_number = number_without_country_code;

        let new_region_code = rules.region_code_for_country_code(country_code);
        self.current_metadata = if REGION_CODE_FOR_NON_GEO_ENTITY == new_region_code {
            self.metadata_source.metadata_for_calling_code(country_code)
        } else if new_region_code != self.default_country {
            self.get_metadata_for_region(new_region_code)
        } else {
            self.default_metadata
        };
        // Candidates index the format lists of the previous metadata.
        self.possible_formats.clear();

        let mut buffer = itoa::Buffer::new();
        self.prefix_before_national_number
            .push_str(buffer.format(country_code));
        self.prefix_before_national_number
            .push_str(SEPARATOR_BEFORE_NATIONAL_NUMBER);
        // A national prefix read before the country code is meaningless now.
        self.extracted_national_prefix.clear();
        trace!(
            "Extracted country code {} ({}), prefix is now {:?}",
            country_code,
            new_region_code,
            self.prefix_before_national_number
        );
        true
    }

    /// NANPA national numbers never start with 1, so a leading 1 followed
    /// by anything but 0 or 1 is the national prefix. Numbers starting with
    /// 10 or 11 are short numbers and take no prefix.
    fn is_nanpa_number_with_national_prefix(&self) -> bool {
        let mut digits = self.national_number.chars();
        self.current_metadata.country_code() == NANPA_COUNTRY_CODE
            && digits.next() == Some('1')
            && digits.next().is_some_and(|second| second != '0' && second != '1')
    }

    /// Removes the national prefix from the national number, adds it to the
    /// committed prefix and returns it. Returns an empty string when there is
    /// none.
    pub(super) fn remove_national_prefix_from_national_number(&mut self) -> String {
        let mut start_of_national_number = 0;
        if self.is_nanpa_number_with_national_prefix() {
            start_of_national_number = 1;
            self.prefix_before_national_number.push('1');
            self.prefix_before_national_number
                .push_str(SEPARATOR_BEFORE_NATIONAL_NUMBER);
            self.is_complete_number = true;
        } else if self.current_metadata.has_national_prefix_for_parsing() {
            // The pattern may be entirely optional, so only a non-empty match
            // is a national prefix.
            let consumed = self
                .consume_prefix(
                    self.current_metadata.national_prefix_for_parsing(),
                    &self.national_number,
                )
                .filter(|&consumed| consumed > 0);
            if let Some(consumed) = consumed {
                // With a national prefix typed, formats for local numbers
                // without area code no longer apply.
                self.is_complete_number = true;
                start_of_national_number = consumed;
                self.prefix_before_national_number
                    .push_str(&self.national_number[..consumed]);
            }
        }
        self.national_number.drain(..start_of_national_number).collect()
    }

    /// Some national prefixes are a prefix of a longer one (`0` and `08512`
    /// in Korea). Puts the extracted prefix back and extracts again, now that
    /// more digits are known. Returns `true` if a different prefix was found.
    pub(super) fn able_to_extract_longer_ndd(&mut self) -> bool {
        if !self.extracted_national_prefix.is_empty() {
            self.national_number
                .insert_str(0, &self.extracted_national_prefix);
            // Only the last occurrence goes: the prefix may legitimately repeat
            // earlier, as in "+44 (0)20".
            let index_of_previous_ndd = self
                .prefix_before_national_number
                .rfind(self.extracted_national_prefix.as_str())
                .unwrap_or(0);
            self.prefix_before_national_number
                .truncate(index_of_previous_ndd);
        }
        let new_national_prefix = self.remove_national_prefix_from_national_number();
        if self.extracted_national_prefix == new_national_prefix {
            return false;
        }
        trace!(
            "Extracted longer national prefix {:?} instead of {:?}",
            new_national_prefix,
            self.extracted_national_prefix
        );
        self.extracted_national_prefix = new_national_prefix;
        true
    }
}
