use std::collections::{HashMap, HashSet, VecDeque};

use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;
use crate::{
    asyoutypeformatter::AsYouTypeFormatter,
    i18n,
    interfaces::{MetadataSource, NumberRules},
    phonemetadata::PhoneMetadata,
    phonenumberutil::{
        errors::MetadataError,
        helper_constants::{MAX_LENGTH_COUNTRY_CODE, NANPA_COUNTRY_CODE, REGION_CODE_FOR_NON_GEO_ENTITY},
        helper_functions::{
            load_compiled_metadata, normalize_helper, resolve_formatting_rules, validate_metadata,
        },
    },
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexFullMatch,
};

use log::{trace, warn};

pub struct PhoneNumberUtil {
    /// Pattern service shared by every formatter created from this util.
    matcher_api: RegexBasedMatcher,

    /// Helper class holding useful regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// A mapping from a country calling code to a RegionCode object which denotes
    /// the region represented by that country calling code. Note regions under
    /// NANPA share the country calling code 1 and Russia and Kazakhstan share the
    /// country calling code 7. Under this map, 1 is mapped to region code "US" and
    /// 7 is mapped to region code "RU". This is implemented as a sorted vector to
    /// achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// The set of regions that share country calling code 1.
    nanpa_regions: HashSet<String>,

    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code for a non-geographical entity to the
    /// PhoneMetadata for that country calling code. Examples of the country
    /// calling codes include 800 (International Toll Free Service) and 808
    /// (International Shared Cost Service).
    country_code_to_non_geographical_metadata_map: HashMap<i32, PhoneMetadata>,

    /// Handed out for unknown regions and calling codes.
    empty_metadata: PhoneMetadata,
}

impl PhoneNumberUtil {
    /// Creates a util over the metadata compiled into the library.
    pub fn new() -> Self {
        Self::new_for_metadata(load_compiled_metadata())
    }

    /// Creates a util over `metadata_collection`.
    ///
    /// # Panics
    /// If the collection holds a record with an invalid pattern. Use
    /// [`Self::try_new_for_metadata`] to handle that case.
    pub fn new_for_metadata(metadata_collection: Vec<PhoneMetadata>) -> Self {
        match Self::try_new_for_metadata(metadata_collection) {
            Err(err) => {
                let err_message = format!("Could not load metadata: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(instance) => instance,
        }
    }

    pub fn try_new_for_metadata(
        metadata_collection: Vec<PhoneMetadata>,
    ) -> Result<Self, MetadataError> {
        let mut instance = Self {
            matcher_api: RegexBasedMatcher::new(),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            country_calling_code_to_region_code_map: Default::default(),
            nanpa_regions: Default::default(),
            region_to_metadata_map: Default::default(),
            country_code_to_non_geographical_metadata_map: Default::default(),
            empty_metadata: PhoneMetadata::empty(),
        };
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        for mut metadata in metadata_collection {
            let region_code = metadata.id().to_owned();
            if i18n::RegionCode::get_unknown() == region_code {
                continue;
            }
            resolve_formatting_rules(&mut metadata);
            validate_metadata(&metadata, &instance.matcher_api)?;

            let main_country_code = metadata.main_country_for_code();
            let country_calling_code = metadata.country_code();
            if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
                instance
                    .country_code_to_non_geographical_metadata_map
                    .insert(country_calling_code, metadata);
            } else {
                instance
                    .region_to_metadata_map
                    .insert(region_code.clone(), metadata);
            }

            let calling_code_in_map_o =
                country_calling_code_to_region_map.get_mut(&country_calling_code);
            if let Some(calling_code_in) = calling_code_in_map_o {
                if main_country_code {
                    calling_code_in.push_front(region_code.clone());
                } else {
                    calling_code_in.push_back(region_code.clone());
                }
            } else {
                // For most country calling codes, there will be only one region code.
                let mut list_with_region_code = VecDeque::new();
                list_with_region_code.push_back(region_code.clone());
                country_calling_code_to_region_map
                    .insert(country_calling_code, list_with_region_code);
            }
            if country_calling_code == NANPA_COUNTRY_CODE {
                instance.nanpa_regions.insert(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map.into_iter().map(| (k, v) | {
                (k, Vec::from(v))
            })
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(a, _)| *a);
        trace!(
            "Loaded metadata for {} regions and {} calling codes",
            instance.region_to_metadata_map.len(),
            instance.country_calling_code_to_region_code_map.len()
        );
        Ok(instance)
    }

    /// Creates a formatter bound to `region_code` that uses this util as its
    /// metadata source and number rules.
    pub fn get_as_you_type_formatter(&self, region_code: &str) -> AsYouTypeFormatter<'_> {
        AsYouTypeFormatter::new(region_code, self, self, &self.matcher_api)
    }

    /// The pattern service backing formatters created by
    /// [`Self::get_as_you_type_formatter`].
    pub fn matcher(&self) -> &RegexBasedMatcher {
        &self.matcher_api
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        let mut regions = Vec::new();
        for (k, _) in self.region_to_metadata_map.iter() {
            regions.push(k.as_str());
        }
        regions
    }

    pub fn get_supported_global_network_calling_codes(&self) -> HashSet<i32> {
        let mut codes = HashSet::new();
        for (k, _) in self.country_code_to_non_geographical_metadata_map.iter() {
            codes.insert(*k);
        }
        codes
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        let mut codes = HashSet::new();

        for (k, _) in self.country_calling_code_to_region_code_map.iter() {
            codes.insert(*k);
        }
        codes
    }

    /// Returns `true` if the region shares calling code 1.
    pub fn is_nanpa_country(&self, region_code: &str) -> bool {
        self.nanpa_regions.contains(region_code)
    }

    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    pub fn get_metadata_for_non_geographical_region(
        &self,
        country_calling_code: i32,
    ) -> Option<&PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
    }

    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        match self.get_metadata_for_region(region_code) {
            Some(metadata) => metadata.country_code(),
            None => {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                0
            }
        }
    }

    /// Returns the region code that matches the specific country calling code. In
    /// the case of no region code being found, the unknown region code will be
    /// returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .and_then(|regions| regions.first())
            .map(|region| region.as_str())
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Returns every region sharing the calling code, main region first.
    pub fn get_region_codes_for_country_calling_code(
        &self,
        country_calling_code: i32,
    ) -> Option<&[String]> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
    }

    /// Normalizes a string of characters representing a phone number. This
    /// converts wide-ascii and arabic-indic numerals to European numerals, and
    /// strips punctuation and alpha characters.
    pub fn normalize_digits_only(&self, phone_number: &str) -> String {
        dec_from_char::normalize_decimals(phone_number)
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    /// Normalizes a string of characters representing a phone number. This strips
    /// all characters which are not diallable on a mobile phone keypad (including
    /// all non-ASCII digits).
    pub fn normalize_diallable_chars_only(&self, phone_number: &str) -> String {
        normalize_helper(
            &self.reg_exps.diallable_char_mappings,
            true, phone_number
        )
    }

    fn contains_only_valid_digits(&self, s: &str) -> bool {
        self.reg_exps.digits_pattern.full_match(s)
    }

    fn is_format_eligible_for_as_you_type_formatter(&self, format: &str) -> bool {
        // We require that the first
        // group is present in the output pattern to ensure no data is lost while
        // formatting; when we format as you type, this should always be the case.
        return self
            .reg_exps
            .is_format_eligible_as_you_type_formatting_regex
            .full_match(format);
    }

    fn formatting_rule_has_first_group_only(&self, national_prefix_formatting_rule: &str) -> bool {
        return national_prefix_formatting_rule.is_empty()
            || self
                .reg_exps
                .formatting_rule_has_first_group_only_regex
                .full_match(national_prefix_formatting_rule);
    }

    /// Extracts country calling code from national_number, and returns it. It
    /// assumes that the leading plus sign or IDD has already been removed.
    /// Returns 0 if national_number doesn't start with a valid country calling
    /// code, and leaves national_number unmodified.
    fn extract_country_code(&self, national_number: &mut String) -> i32 {
        if national_number.is_empty() || national_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return 0;
        }
        for i in 1..=MAX_LENGTH_COUNTRY_CODE {
            let Some(potential_country_code) = national_number
                .get(..i)
                .and_then(|prefix| prefix.parse::<i32>().ok())
            else {
                break;
            };
            if self.get_region_codes_for_country_calling_code(potential_country_code).is_some() {
                national_number.drain(..i);
                return potential_country_code;
            }
        }
        0
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for PhoneNumberUtil {
    fn metadata_for_region(&self, region_code: &str) -> &PhoneMetadata {
        self.get_metadata_for_region(region_code)
            .unwrap_or(&self.empty_metadata)
    }

    fn metadata_for_calling_code(&self, country_calling_code: i32) -> &PhoneMetadata {
        self.get_metadata_for_non_geographical_region(country_calling_code)
            .unwrap_or_else(|| {
                warn!(
                    "Unknown country calling code for a non-geographical entity provided: {}",
                    country_calling_code
                );
                &self.empty_metadata
            })
    }
}

impl NumberRules for PhoneNumberUtil {
    fn country_code_for_region(&self, region_code: &str) -> i32 {
        self.get_country_code_for_region(region_code)
    }

    fn region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.get_region_code_for_country_code(country_calling_code)
    }

    fn extract_country_code(&self, national_number: &mut String) -> i32 {
        PhoneNumberUtil::extract_country_code(self, national_number)
    }

    fn normalize_digits_only(&self, text: &str) -> String {
        PhoneNumberUtil::normalize_digits_only(self, text)
    }

    fn normalize_diallable_chars_only(&self, text: &str) -> String {
        PhoneNumberUtil::normalize_diallable_chars_only(self, text)
    }

    fn contains_only_valid_digits(&self, text: &str) -> bool {
        PhoneNumberUtil::contains_only_valid_digits(self, text)
    }

    fn formatting_rule_has_first_group_only(&self, national_prefix_formatting_rule: &str) -> bool {
        PhoneNumberUtil::formatting_rule_has_first_group_only(self, national_prefix_formatting_rule)
    }

    fn is_format_eligible_for_as_you_type_formatter(&self, format: &str) -> bool {
        PhoneNumberUtil::is_format_eligible_for_as_you_type_formatter(self, format)
    }
}
