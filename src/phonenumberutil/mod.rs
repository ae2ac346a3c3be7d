mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;

use std::sync::LazyLock;

pub(crate) use helper_constants::REGION_CODE_FOR_NON_GEO_ENTITY;
pub(crate) use helper_constants::NANPA_COUNTRY_CODE;
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

/// Util over the built-in metadata, created on first use.
pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
