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

//! Formatting metadata of a region or of a non-geographical entity.
//!
//! Field accessors follow the shape of the libphonenumber metadata messages:
//! optional strings read as `""` when unset and optional flags read as
//! `false`.

/// One way to punctuate a national number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormat {
    /// Regex matched against a complete national number, one group per block.
    pub pattern: String,
    /// Output template referencing the groups of `pattern`, e.g. `$1 $2`.
    pub format: String,
    /// Patterns matched against a growing prefix of the national number.
    /// Entry `i` is meant for a prefix of `3 + i` digits.
    pub leading_digits_pattern: Vec<String>,
    /// How the national prefix is written in front of the first group,
    /// e.g. `0$1` or `($1)`. `$NP` and `$FG` are resolved at load time.
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_optional_when_formatting: Option<bool>,
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn new(pattern: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn with_leading_digits<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_digits_pattern = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    pub fn with_national_prefix_optional_when_formatting(mut self, optional: bool) -> Self {
        self.national_prefix_optional_when_formatting = Some(optional);
        self
    }

    pub fn with_domestic_carrier_code_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.domestic_carrier_code_formatting_rule = Some(rule.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn leading_digits_pattern(&self) -> &[String] {
        &self.leading_digits_pattern
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or_default()
    }

    pub fn national_prefix_optional_when_formatting(&self) -> bool {
        self.national_prefix_optional_when_formatting.unwrap_or_default()
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule.as_deref().unwrap_or_default()
    }

    pub fn has_domestic_carrier_code_formatting_rule(&self) -> bool {
        self.domestic_carrier_code_formatting_rule.is_some()
    }
}

/// Metadata record of a region (`id` is its region code) or of a
/// non-geographical entity (`id` is `"001"`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneMetadata {
    pub id: String,
    pub country_code: i32,
    /// Pattern of the international dialling prefix, e.g. `011`.
    pub international_prefix: String,
    pub national_prefix: Option<String>,
    /// Pattern matching the national prefix (and possibly a carrier code) when
    /// reading a number. Defaults to `national_prefix` at load time.
    pub national_prefix_for_parsing: Option<String>,
    /// Set on the region that owns a calling code shared by several regions.
    pub main_country_for_code: bool,
    /// Territory-level values inherited by formats that declare none.
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_optional_when_formatting: Option<bool>,
    pub carrier_code_formatting_rule: Option<String>,
    pub number_format: Vec<NumberFormat>,
    /// Formats used for numbers written in international form. When empty,
    /// `number_format` is used for both.
    pub intl_number_format: Vec<NumberFormat>,
}

impl PhoneMetadata {
    pub fn new(id: impl Into<String>, country_code: i32, international_prefix: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            country_code,
            international_prefix: international_prefix.into(),
            ..Default::default()
        }
    }

    /// The record handed out for unknown regions. Its international prefix
    /// never matches a digit sequence, so only numbers typed with `+` can be
    /// formatted with it.
    pub fn empty() -> Self {
        Self::new("", 0, "NA")
    }

    pub fn with_national_prefix(mut self, national_prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(national_prefix.into());
        self
    }

    pub fn with_national_prefix_for_parsing(mut self, pattern: impl Into<String>) -> Self {
        self.national_prefix_for_parsing = Some(pattern.into());
        self
    }

    pub fn with_main_country_for_code(mut self, main_country_for_code: bool) -> Self {
        self.main_country_for_code = main_country_for_code;
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    pub fn with_national_prefix_optional_when_formatting(mut self, optional: bool) -> Self {
        self.national_prefix_optional_when_formatting = Some(optional);
        self
    }

    pub fn with_carrier_code_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.carrier_code_formatting_rule = Some(rule.into());
        self
    }

    pub fn with_number_formats(mut self, formats: Vec<NumberFormat>) -> Self {
        self.number_format = formats;
        self
    }

    pub fn with_intl_number_formats(mut self, formats: Vec<NumberFormat>) -> Self {
        self.intl_number_format = formats;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn international_prefix(&self) -> &str {
        &self.international_prefix
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or_default()
    }

    pub fn has_national_prefix_for_parsing(&self) -> bool {
        self.national_prefix_for_parsing.is_some()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing.as_deref().unwrap_or_default()
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn number_format(&self) -> &[NumberFormat] {
        &self.number_format
    }

    pub fn intl_number_format(&self) -> &[NumberFormat] {
        &self.intl_number_format
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberFormat, PhoneMetadata};

    #[test]
    fn unset_optionals_read_as_defaults() {
        let format = NumberFormat::new("(\\d{3})(\\d{4})", "$1 $2");
        assert_eq!("", format.national_prefix_formatting_rule());
        assert!(!format.national_prefix_optional_when_formatting());
        assert!(!format.has_domestic_carrier_code_formatting_rule());
        assert!(format.leading_digits_pattern().is_empty());

        let metadata = PhoneMetadata::new("PL", 48, "00");
        assert_eq!("", metadata.national_prefix());
        assert!(!metadata.has_national_prefix_for_parsing());
    }

    #[test]
    fn empty_record_has_unmatchable_international_prefix() {
        let metadata = PhoneMetadata::empty();
        assert_eq!("NA", metadata.international_prefix());
        assert_eq!(0, metadata.country_code());
        assert!(metadata.number_format().is_empty());
    }
}
