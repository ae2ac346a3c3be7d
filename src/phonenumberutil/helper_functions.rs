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

use std::collections::HashMap;

use crate::{
    generated::metadata,
    phonemetadata::{NumberFormat, PhoneMetadata},
    phonenumberutil::{
        errors::MetadataError,
        helper_constants::{FIRST_GROUP_PLACEHOLDER, FIRST_GROUP_REFERENCE, NATIONAL_PREFIX_PLACEHOLDER},
    },
    regex_based_matcher::RegexBasedMatcher,
};

/// Loads the metadata compiled into the library.
pub(super) fn load_compiled_metadata() -> Vec<PhoneMetadata> {
    metadata::metadata()
}

/// Replaces the `$NP` and `$FG` placeholders of a formatting rule.
fn resolve_rule(rule: &str, national_prefix: &str) -> String {
    rule.replacen(NATIONAL_PREFIX_PLACEHOLDER, national_prefix, 1)
        .replacen(FIRST_GROUP_PLACEHOLDER, FIRST_GROUP_REFERENCE, 1)
}

fn resolve_number_format(
    format: &mut NumberFormat,
    national_prefix: &str,
    territory: &PhoneMetadata,
) {
    if format.national_prefix_formatting_rule.is_none() {
        format.national_prefix_formatting_rule = territory.national_prefix_formatting_rule.clone();
    }
    if format.national_prefix_optional_when_formatting.is_none() {
        format.national_prefix_optional_when_formatting =
            territory.national_prefix_optional_when_formatting;
    }
    if format.domestic_carrier_code_formatting_rule.is_none() {
        format.domestic_carrier_code_formatting_rule = territory.carrier_code_formatting_rule.clone();
    }
    format.national_prefix_formatting_rule = format
        .national_prefix_formatting_rule
        .as_deref()
        .map(|rule| resolve_rule(rule, national_prefix));
    format.domestic_carrier_code_formatting_rule = format
        .domestic_carrier_code_formatting_rule
        .as_deref()
        .map(|rule| resolve_rule(rule, national_prefix));
}

/// Brings a metadata record into the shape the formatter expects: the
/// national prefix for parsing defaults to the national prefix, and every
/// format inherits the territory-level rules it does not override, with
/// placeholders resolved.
pub(super) fn resolve_formatting_rules(metadata: &mut PhoneMetadata) {
    if metadata.national_prefix_for_parsing.is_none() {
        metadata.national_prefix_for_parsing = metadata.national_prefix.clone();
    }
    let national_prefix = metadata.national_prefix().to_owned();

    let mut number_format = std::mem::take(&mut metadata.number_format);
    let mut intl_number_format = std::mem::take(&mut metadata.intl_number_format);
    for format in number_format.iter_mut().chain(intl_number_format.iter_mut()) {
        resolve_number_format(format, &national_prefix, metadata);
    }
    metadata.number_format = number_format;
    metadata.intl_number_format = intl_number_format;

    metadata.national_prefix_formatting_rule = metadata
        .national_prefix_formatting_rule
        .as_deref()
        .map(|rule| resolve_rule(rule, &national_prefix));
    metadata.carrier_code_formatting_rule = metadata
        .carrier_code_formatting_rule
        .as_deref()
        .map(|rule| resolve_rule(rule, &national_prefix));
}

/// Compiles every pattern of the record, so that a broken record is rejected
/// at load time instead of silently never formatting.
pub(super) fn validate_metadata(
    metadata: &PhoneMetadata,
    matcher: &RegexBasedMatcher,
) -> Result<(), MetadataError> {
    let invalid_pattern = |source| MetadataError::InvalidPattern {
        region: metadata.id().to_owned(),
        source,
    };
    if metadata.country_code() <= 0 {
        return Err(MetadataError::MissingCountryCode(metadata.id().to_owned()));
    }
    matcher.validate(metadata.international_prefix()).map_err(invalid_pattern)?;
    if let Some(pattern) = metadata.national_prefix_for_parsing.as_deref() {
        matcher.validate(pattern).map_err(invalid_pattern)?;
    }
    for format in metadata.number_format().iter().chain(metadata.intl_number_format()) {
        matcher.validate(format.pattern()).map_err(invalid_pattern)?;
        for leading_digits in format.leading_digits_pattern() {
            matcher.validate(leading_digits).map_err(invalid_pattern)?;
        }
    }
    Ok(())
}

/// Normalizes a string of characters representing a phone number by replacing
/// all characters found in the accompanying map with the values therein, and
/// stripping all other characters if remove_non_matches is true.
///
/// Parameters:
/// * `normalization_replacements` - a mapping of characters to what they should be
///   replaced by in the normalized version of the phone number
/// * `remove_non_matches` - indicates whether characters that are not able to be
///   replaced should be stripped from the number. If this is false, they will be
///   left unchanged in the number.
/// * `phone_number` - a string of characters representing a phone number to
///   be normalized.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    remove_non_matches: bool,
    phone_number: &str,
) -> String {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char) {
            normalized_number.push(*replacement);
        } else if !remove_non_matches {
            normalized_number.push(phone_char);
        }
        // If neither of the above are true, we remove this character.
    }
    normalized_number
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{normalize_helper, resolve_formatting_rules, validate_metadata};
    use crate::{
        phonemetadata::{NumberFormat, PhoneMetadata},
        phonenumberutil::errors::MetadataError,
        regex_based_matcher::RegexBasedMatcher,
    };

    #[test]
    fn formats_inherit_and_resolve_territory_rules() {
        let mut metadata = PhoneMetadata::new("GB", 44, "00")
            .with_national_prefix("0")
            .with_national_prefix_formatting_rule("$NP$FG")
            .with_number_formats(vec![
                NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3")
                    .with_national_prefix_formatting_rule("($NP$FG)"),
                NumberFormat::new("(\\d{4})(\\d{6})", "$1 $2"),
            ]);
        resolve_formatting_rules(&mut metadata);

        assert_eq!("0", metadata.national_prefix_for_parsing());
        assert_eq!("(0$1)", metadata.number_format()[0].national_prefix_formatting_rule());
        assert_eq!("0$1", metadata.number_format()[1].national_prefix_formatting_rule());
        assert!(!metadata.number_format()[1].national_prefix_optional_when_formatting());
    }

    #[test]
    fn carrier_rules_and_optional_flags_are_inherited() {
        let mut metadata = PhoneMetadata::new("BR", 55, "00")
            .with_national_prefix("0")
            .with_national_prefix_for_parsing("(?:0|90)")
            .with_national_prefix_optional_when_formatting(true)
            .with_carrier_code_formatting_rule("$NP $CC ($FG)")
            .with_number_formats(vec![
                NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3")
                    .with_national_prefix_formatting_rule("($FG)"),
            ]);
        resolve_formatting_rules(&mut metadata);

        let format = &metadata.number_format()[0];
        assert_eq!("(?:0|90)", metadata.national_prefix_for_parsing());
        assert_eq!("($1)", format.national_prefix_formatting_rule());
        assert_eq!("0 $CC ($1)", format.domestic_carrier_code_formatting_rule());
        assert!(format.national_prefix_optional_when_formatting());
    }

    #[test]
    fn regions_without_national_prefix_keep_no_rule() {
        let mut metadata = PhoneMetadata::new("PL", 48, "00")
            .with_number_formats(vec![NumberFormat::new("(\\d{3})(\\d{3})(\\d{3})", "$1 $2 $3")]);
        resolve_formatting_rules(&mut metadata);
        assert!(!metadata.has_national_prefix_for_parsing());
        assert_eq!("", metadata.number_format()[0].national_prefix_formatting_rule());
    }

    #[test]
    fn broken_patterns_are_rejected() {
        let matcher = RegexBasedMatcher::new();
        let metadata = PhoneMetadata::new("XX", 999, "00").with_number_formats(vec![
            NumberFormat::new("(\\d{3})(\\d{4})", "$1 $2").with_leading_digits(["[2-9"]),
        ]);
        let err = validate_metadata(&metadata, &matcher).unwrap_err();
        assert!(matches!(err, MetadataError::InvalidPattern { ref region, .. } if region == "XX"));

        let metadata = PhoneMetadata::new("XY", 0, "00");
        assert_eq!(
            MetadataError::MissingCountryCode("XY".to_owned()),
            validate_metadata(&metadata, &matcher).unwrap_err()
        );
    }

    #[test]
    fn normalize_helper_strips_unmapped_characters() {
        let mut mappings = HashMap::new();
        mappings.insert('1', '1');
        mappings.insert('+', '+');
        assert_eq!("+11", normalize_helper(&mappings, true, "+1 (1)"));
        assert_eq!("+1 (1)", normalize_helper(&mappings, false, "+1 (1)"));
    }
}
