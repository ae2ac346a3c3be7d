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

//! Built-in formatting metadata.
//!
//! Rules are written the way the libphonenumber territory files write them:
//! `$NP` stands for the national prefix and `$FG` for the first group. They
//! are resolved when the metadata is loaded.

use crate::phonemetadata::{NumberFormat, PhoneMetadata};

pub fn metadata() -> Vec<PhoneMetadata> {
    vec![
        united_states(),
        bahamas(),
        united_kingdom(),
        poland(),
        australia(),
        japan(),
        south_korea(),
        brazil(),
        international_freephone(),
    ]
}

fn united_states() -> PhoneMetadata {
    PhoneMetadata::new("US", 1, "011")
        .with_national_prefix("1")
        .with_main_country_for_code(true)
        .with_national_prefix_formatting_rule("$NP $FG")
        .with_national_prefix_optional_when_formatting(true)
        .with_number_formats(vec![
            // Local numbers are never written with the national prefix.
            NumberFormat::new("(\\d{3})(\\d{4})", "$1 $2")
                .with_national_prefix_formatting_rule("$FG")
                .with_national_prefix_optional_when_formatting(false),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3"),
        ])
}

/// Shares calling code 1 with the US and has no formats of its own.
fn bahamas() -> PhoneMetadata {
    PhoneMetadata::new("BS", 1, "011").with_national_prefix("1")
}

fn united_kingdom() -> PhoneMetadata {
    PhoneMetadata::new("GB", 44, "00")
        .with_national_prefix("0")
        .with_national_prefix_formatting_rule("$NP$FG")
        .with_number_formats(vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3")
                .with_leading_digits(["2"])
                .with_national_prefix_formatting_rule("($NP$FG)"),
            NumberFormat::new("(\\d{4})(\\d{6})", "$1 $2").with_leading_digits(["7"]),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{4})", "$1 $2 $3").with_leading_digits(["[18]"]),
        ])
}

fn poland() -> PhoneMetadata {
    PhoneMetadata::new("PL", 48, "00").with_number_formats(vec![
        NumberFormat::new("(\\d{2})(\\d{3})(\\d{2})(\\d{2})", "$1 $2 $3 $4").with_leading_digits([
            "[124]|3[2-4]|5[24-689]|6[1-3578]|7[14-7]|8[1-9]|9[145]",
        ]),
        NumberFormat::new("(\\d{3})(\\d{3})(\\d{3})", "$1 $2 $3")
            .with_leading_digits(["26|39|5[0137]|6[0469]|7[02389]"]),
    ])
}

/// Uses a separate list for numbers written in international form, and a
/// long international prefix (`0011`) that starts like the national one.
fn australia() -> PhoneMetadata {
    PhoneMetadata::new("AU", 61, "001[14-689]")
        .with_national_prefix("0")
        .with_number_formats(vec![
            NumberFormat::new("(\\d)(\\d{4})(\\d{4})", "$1 $2 $3")
                .with_leading_digits(["[2378]"])
                .with_national_prefix_formatting_rule("($NP$FG)"),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{3})", "$1 $2 $3")
                .with_leading_digits(["4"])
                .with_national_prefix_formatting_rule("$NP$FG"),
            NumberFormat::new("(\\d{4})(\\d{4})", "$1 $2").with_leading_digits(["[2-9]"]),
        ])
        .with_intl_number_formats(vec![
            NumberFormat::new("(\\d)(\\d{4})(\\d{4})", "$1 $2 $3").with_leading_digits(["[2378]"]),
            NumberFormat::new("(\\d{3})(\\d{3})(\\d{3})", "$1 $2 $3").with_leading_digits(["4"]),
        ])
}

/// Several leading-digits patterns per format, narrowing as digits arrive.
fn japan() -> PhoneMetadata {
    PhoneMetadata::new("JP", 81, "010")
        .with_national_prefix("0")
        .with_national_prefix_formatting_rule("$NP$FG")
        .with_number_formats(vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2 $3").with_leading_digits(["[57-9]0"]),
            NumberFormat::new("(\\d{2})(\\d{2})(\\d{3})(\\d{4})", "$1 $2 $3 $4")
                .with_leading_digits(["[57-9]0"]),
            NumberFormat::new("(\\d{3})(\\d{2})(\\d{4})", "$1 $2 $3").with_leading_digits([
                "222|333",
                "(?:222|333)1",
                "(?:222|333)1[0-9]",
            ]),
            NumberFormat::new("(\\d{4})(\\d)(\\d{4})", "$1 $2 $3").with_leading_digits([
                "222|333",
                "2221|3332",
                "3332",
            ]),
        ])
}

/// The national prefix may be followed by a carrier selection code
/// (e.g. `08512`), which makes for national prefixes of several lengths.
fn south_korea() -> PhoneMetadata {
    PhoneMetadata::new("KR", 82, "00(?:[124-68]|3\\d{2}|7(?:[0-8]\\d|9[0-79]))")
        .with_national_prefix("0")
        .with_national_prefix_for_parsing("0(8(?:[1-46-8]|5\\d\\d))?")
        .with_national_prefix_formatting_rule("$NP$FG")
        .with_number_formats(vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1-$2-$3").with_leading_digits(["1[016-9]"]),
            NumberFormat::new("(\\d)(\\d{3,4})(\\d{4})", "$1-$2-$3").with_leading_digits(["2"]),
            NumberFormat::new("(\\d{2})(\\d{3,4})(\\d{4})", "$1-$2-$3")
                .with_leading_digits(["[3-6][1-9]"]),
        ])
}

/// Formats carry a domestic carrier code rule.
fn brazil() -> PhoneMetadata {
    PhoneMetadata::new("BR", 55, "00(?:1[245]|2[1-35]|31|4[13]|[56]5|99)")
        .with_national_prefix("0")
        .with_national_prefix_for_parsing(
            "(?:0|90)(?:(1[245]|2[1-35]|31|4[13]|[56]5|99)(\\d{10,11}))?",
        )
        .with_number_formats(vec![
            NumberFormat::new("(\\d{2})(\\d{4})(\\d{4})", "$1 $2-$3")
                .with_leading_digits(["[1-9][1-9]"])
                .with_national_prefix_formatting_rule("($FG)")
                .with_domestic_carrier_code_formatting_rule("$NP $CC ($FG)"),
        ])
}

/// International Freephone Service.
fn international_freephone() -> PhoneMetadata {
    PhoneMetadata::new("001", 800, "")
        .with_number_formats(vec![NumberFormat::new("(\\d{4})(\\d{4})", "$1 $2")])
}
