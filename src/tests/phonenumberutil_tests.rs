use crate::{
    MetadataError, NumberFormat, NumberRules, PhoneMetadata, PhoneNumberUtil,
    generated::metadata,
};

use super::region_code::RegionCode;

fn get_phone_util() -> PhoneNumberUtil {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
    PhoneNumberUtil::new_for_metadata(metadata::metadata())
}

#[test]
fn get_supported_regions() {
    let phone_util = get_phone_util();
    let mut regions = phone_util.get_supported_regions();
    regions.sort_unstable();
    assert_eq!(vec!["AU", "BR", "BS", "GB", "JP", "KR", "PL", "US"], regions);
}

#[test]
fn get_supported_calling_codes() {
    let phone_util = get_phone_util();
    let calling_codes = phone_util.get_supported_calling_codes();
    for code in [1, 44, 48, 55, 61, 81, 82, 800] {
        assert!(calling_codes.contains(&code), "{code} should be supported");
    }
    assert!(!calling_codes.contains(&999));

    let global_network_codes = phone_util.get_supported_global_network_calling_codes();
    assert_eq!(1, global_network_codes.len());
    assert!(global_network_codes.contains(&800));
}

#[test]
fn get_region_code_for_country_code() {
    let phone_util = get_phone_util();
    // The main country comes first among regions sharing a code.
    assert_eq!(RegionCode::us(), phone_util.get_region_code_for_country_code(1));
    assert_eq!(
        Some([RegionCode::us().to_owned(), RegionCode::bs().to_owned()].as_slice()),
        phone_util.get_region_codes_for_country_calling_code(1)
    );
    assert_eq!(RegionCode::gb(), phone_util.get_region_code_for_country_code(44));
    assert_eq!(RegionCode::un001(), phone_util.get_region_code_for_country_code(800));
    assert_eq!(RegionCode::zz(), phone_util.get_region_code_for_country_code(999));
    assert_eq!(None, phone_util.get_region_codes_for_country_calling_code(999));
}

#[test]
fn get_country_code_for_region() {
    let phone_util = get_phone_util();
    assert_eq!(1, phone_util.get_country_code_for_region(RegionCode::us()));
    assert_eq!(1, phone_util.get_country_code_for_region(RegionCode::bs()));
    assert_eq!(82, phone_util.get_country_code_for_region(RegionCode::kr()));
    assert_eq!(0, phone_util.get_country_code_for_region(RegionCode::zz()));
    // Non-geographical entities have no region of their own.
    assert_eq!(0, phone_util.get_country_code_for_region(RegionCode::un001()));
}

#[test]
fn is_nanpa_country() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_nanpa_country(RegionCode::us()));
    assert!(phone_util.is_nanpa_country(RegionCode::bs()));
    assert!(!phone_util.is_nanpa_country(RegionCode::gb()));
    assert!(!phone_util.is_nanpa_country(RegionCode::zz()));
}

#[test]
fn get_metadata() {
    let phone_util = get_phone_util();
    let metadata = phone_util.get_metadata_for_region(RegionCode::gb()).unwrap();
    assert_eq!(44, metadata.country_code());
    assert_eq!("00", metadata.international_prefix());
    // Placeholders are resolved when loading.
    assert_eq!("(0$1)", metadata.number_format()[0].national_prefix_formatting_rule());
    // Formats without a rule of their own take the region's.
    assert_eq!("0$1", metadata.number_format()[1].national_prefix_formatting_rule());
    // The national prefix doubles as the pattern for parsing it.
    assert_eq!("0", metadata.national_prefix_for_parsing());

    let metadata = phone_util.get_metadata_for_non_geographical_region(800).unwrap();
    assert_eq!(RegionCode::un001(), metadata.id());
    assert!(phone_util.get_metadata_for_region(RegionCode::un001()).is_none());
    assert!(phone_util.get_metadata_for_non_geographical_region(1).is_none());
}

#[test]
fn unknown_regions_get_empty_metadata() {
    use crate::MetadataSource;

    let phone_util = get_phone_util();
    let metadata = phone_util.metadata_for_region(RegionCode::zz());
    assert_eq!(0, metadata.country_code());
    assert_eq!("NA", metadata.international_prefix());
    assert!(metadata.number_format().is_empty());
    assert_eq!(0, phone_util.metadata_for_calling_code(999).country_code());
}

#[test]
fn extract_country_code() {
    let phone_util = get_phone_util();
    let mut number = String::from("4420");
    assert_eq!(44, NumberRules::extract_country_code(&phone_util, &mut number));
    assert_eq!("20", number);

    let mut number = String::from("80012");
    assert_eq!(800, NumberRules::extract_country_code(&phone_util, &mut number));
    assert_eq!("12", number);

    // Unknown codes and leading zeros leave the number untouched.
    for unchanged in ["9991234", "0441234", ""] {
        let mut number = String::from(unchanged);
        assert_eq!(0, NumberRules::extract_country_code(&phone_util, &mut number));
        assert_eq!(unchanged, number);
    }
}

#[test]
fn normalize_digits_only() {
    let phone_util = get_phone_util();
    assert_eq!("03456234", phone_util.normalize_digits_only("034-56&+a#234"));
    assert_eq!("650", phone_util.normalize_digits_only("６５０"));
    assert_eq!("650", phone_util.normalize_digits_only("٦٥٠"));
}

#[test]
fn normalize_diallable_chars_only() {
    let phone_util = get_phone_util();
    assert_eq!(
        "03*456+1#234",
        phone_util.normalize_diallable_chars_only("03*4-56&+1a#234")
    );
}

#[test]
fn contains_only_valid_digits() {
    let phone_util = get_phone_util();
    assert!(NumberRules::contains_only_valid_digits(&phone_util, "6502532222"));
    assert!(NumberRules::contains_only_valid_digits(&phone_util, "６５０"));
    assert!(!NumberRules::contains_only_valid_digits(&phone_util, "650-253"));
}

#[test]
fn formatting_rule_has_first_group_only() {
    let phone_util = get_phone_util();
    for rule in ["", "$1", "($1)"] {
        assert!(NumberRules::formatting_rule_has_first_group_only(&phone_util, rule));
    }
    for rule in ["0$1", "1 $1", "(0$1)"] {
        assert!(!NumberRules::formatting_rule_has_first_group_only(&phone_util, rule));
    }
}

#[test]
fn is_format_eligible_for_as_you_type_formatter() {
    let phone_util = get_phone_util();
    for format in ["$1 $2 $3", "$1-$2", "$1 $2-$3", "($1) $2/$3"] {
        assert!(NumberRules::is_format_eligible_for_as_you_type_formatter(&phone_util, format));
    }
    // Reordered groups and literal digits or symbols would alter the input.
    for format in ["$2 $1", "0$1 $2", "*$1 $2"] {
        assert!(!NumberRules::is_format_eligible_for_as_you_type_formatter(&phone_util, format));
    }
}

#[test]
fn invalid_pattern_in_metadata_is_reported() {
    let broken = PhoneMetadata::new("XX", 999, "00")
        .with_number_formats(vec![NumberFormat::new("(\\d{3}", "$1")]);
    let err = PhoneNumberUtil::try_new_for_metadata(vec![broken]).err().unwrap();
    assert!(matches!(err, MetadataError::InvalidPattern { ref region, .. } if region == "XX"));

    let broken = PhoneMetadata::new("XX", 999, "00").with_number_formats(vec![
        NumberFormat::new("(\\d{3})", "$1").with_leading_digits(["[1-"]),
    ]);
    assert!(PhoneNumberUtil::try_new_for_metadata(vec![broken]).is_err());
}

#[test]
fn missing_country_code_is_reported() {
    let err = PhoneNumberUtil::try_new_for_metadata(vec![PhoneMetadata::new("XX", 0, "00")])
        .err()
        .unwrap();
    assert_eq!(MetadataError::MissingCountryCode("XX".to_owned()), err);
}

#[test]
fn unknown_region_record_is_skipped() {
    let phone_util =
        PhoneNumberUtil::try_new_for_metadata(vec![PhoneMetadata::new("ZZ", 0, "00")]).unwrap();
    assert!(phone_util.get_supported_regions().is_empty());
}

#[test]
#[should_panic]
fn new_for_metadata_panics_on_invalid_metadata() {
    PhoneNumberUtil::new_for_metadata(vec![PhoneMetadata::new("XX", 1, "0[")]);
}
