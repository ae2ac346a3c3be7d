// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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


use std::collections::HashMap;

use regex::Regex;

use crate::phonenumberutil::helper_constants::{
    DIGITS, HASH_SIGN, PLUS_SIGN, STAR_SIGN, VALID_PUNCTUATION
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// A map that contains characters that are essential when dialling. That means
    /// any of the characters in this map must not be removed from a number when
    /// dialing, otherwise the call will not reach the intended destination.
    pub diallable_char_mappings: HashMap<char, char>,

    pub digits_pattern: Regex,

    /// A pattern that is used to determine if a numberFormat under
    /// availableFormats is eligible to be used by the AYTF. It is eligible when
    /// the format element under numberFormat contains groups of the dollar sign
    /// followed by a single digit, separated by valid phone number punctuation.
    /// This prevents invalid punctuation (such as the star sign in Israeli star
    /// numbers) getting into the output of the AYTF.
    pub is_format_eligible_as_you_type_formatting_regex: Regex,

    /// A pattern that is used to determine if the national prefix formatting rule
    /// has the first group only, i.e., does not start with the national prefix.
    /// Note that the pattern explicitly allows for unbalanced parentheses.
    pub formatting_rule_has_first_group_only_regex: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        let mut dilatable_char_map = HashMap::with_capacity(13);
        for d in '0'..='9' {
            dilatable_char_map.insert(d, d);
        }
        for sign in PLUS_SIGN.chars() {
            dilatable_char_map.insert(sign, sign);
        }
        dilatable_char_map.insert(STAR_SIGN, STAR_SIGN);
        dilatable_char_map.insert(HASH_SIGN, HASH_SIGN);
        self.diallable_char_mappings = dilatable_char_map;
    }

    pub fn new() -> Self {
        let mut instance = Self {
            diallable_char_mappings: Default::default(),
            // constant patterns, compiled once per util
            digits_pattern: Regex::new(&format!("[{}]*", DIGITS)).unwrap(),
            is_format_eligible_as_you_type_formatting_regex: Regex::new(
                &format!("[{}]*\\$1[{}]*(\\$\\d[{}]*)*", VALID_PUNCTUATION, VALID_PUNCTUATION, VALID_PUNCTUATION)
            ).unwrap(),
            formatting_rule_has_first_group_only_regex: Regex::new("\\(?\\$1\\)?").unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}
