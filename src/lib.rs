mod interfaces;
mod asyoutypeformatter;
mod phonenumberutil;
mod phonemetadata;
mod regexp_cache;
mod regex_based_matcher;
mod generated;
pub mod i18n;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use asyoutypeformatter::{AsYouTypeFormatter, FormatFamily};
pub use interfaces::{MetadataSource, NumberRules, PatternMatcher};
pub use phonemetadata::{NumberFormat, PhoneMetadata};
pub use phonenumberutil::{
    PHONE_NUMBER_UTIL,
    errors::MetadataError,
    phonenumberutil::PhoneNumberUtil,
};
pub use regex_based_matcher::RegexBasedMatcher;
pub use regexp_cache::{InvalidRegexError, RegexCache};
