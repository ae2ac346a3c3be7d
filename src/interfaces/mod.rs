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

//! Collaborator seams of the as-you-type formatter.
//!
//! The formatter never reaches for global state: it is handed one
//! implementation of each trait below when it is constructed.
//! [`crate::PhoneNumberUtil`] implements [`MetadataSource`] and
//! [`NumberRules`], and [`crate::RegexBasedMatcher`] implements
//! [`PatternMatcher`].

use std::borrow::Cow;

use crate::{phonemetadata::PhoneMetadata, regexp_cache::InvalidRegexError};

/// Lookup of formatting metadata.
pub trait MetadataSource {
    /// Returns the metadata for `region_code`, or the empty sentinel record
    /// (see [`PhoneMetadata::empty`]) when the region is unknown.
    fn metadata_for_region(&self, region_code: &str) -> &PhoneMetadata;

    /// Returns the metadata of a non-geographical entity (e.g. 800), or the
    /// empty sentinel record when the calling code is unknown.
    fn metadata_for_calling_code(&self, country_calling_code: i32) -> &PhoneMetadata;
}

/// Thin rules over metadata and strings.
pub trait NumberRules {
    /// Returns 0 if the region is unknown.
    fn country_code_for_region(&self, region_code: &str) -> i32;

    /// Returns the main region for the calling code, `"001"` for
    /// non-geographical entities and `"ZZ"` if the code is unknown.
    fn region_code_for_country_code(&self, country_calling_code: i32) -> &str;

    /// Consumes a leading country calling code from `national_number` and
    /// returns it. Returns 0 and leaves the input untouched when no valid
    /// code is found.
    fn extract_country_code(&self, national_number: &mut String) -> i32;

    /// Keeps only the decimal digits of `text`, converted to ASCII.
    fn normalize_digits_only(&self, text: &str) -> String;

    /// Keeps only the characters that matter when dialling (digits, `+`, `*`
    /// and `#`).
    fn normalize_diallable_chars_only(&self, text: &str) -> String;

    fn contains_only_valid_digits(&self, text: &str) -> bool;

    /// Returns `true` if the rule only emits the first group (with optional
    /// parentheses) and never a national prefix. An empty rule counts too.
    fn formatting_rule_has_first_group_only(&self, national_prefix_formatting_rule: &str) -> bool;

    /// Returns `true` if the output template only contains group references
    /// separated by valid punctuation, starting with `$1`.
    fn is_format_eligible_for_as_you_type_formatter(&self, format: &str) -> bool;
}

/// Compiles and memoizes patterns on behalf of the formatter.
///
/// Patterns are matched as written; implementations handle any anchoring.
/// Every method reports a pattern that fails to compile as an error.
pub trait PatternMatcher {
    /// Whether `pattern` matches the whole of `text`.
    fn full_match(&self, pattern: &str, text: &str) -> Result<bool, InvalidRegexError>;

    /// Matches `pattern` at the start of `text` and returns the number of bytes
    /// consumed.
    fn consume_prefix(&self, pattern: &str, text: &str) -> Result<Option<usize>, InvalidRegexError>;

    /// Returns the leftmost match of `pattern` anywhere in `text`.
    fn partial_match<'t>(
        &self,
        pattern: &str,
        text: &'t str,
    ) -> Result<Option<&'t str>, InvalidRegexError>;

    /// Replaces every match of `pattern` in `text` with `replacement`, which
    /// may reference groups as `$1`, `$2`, and so on.
    fn global_replace<'t>(
        &self,
        pattern: &str,
        text: &'t str,
        replacement: &str,
    ) -> Result<Cow<'t, str>, InvalidRegexError>;
}
