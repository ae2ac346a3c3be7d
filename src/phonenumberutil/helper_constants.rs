/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
pub const PLUS_SIGN: &'static str = "+";
pub const STAR_SIGN: char = '*';
pub const HASH_SIGN: char = '#';
// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. It also includes the letter 'x' as that
// is found as a placeholder for carrier information in some phone numbers.
// Full-width variants are also present.
// Meant to be used inside a character class, hence the escaped brackets.
pub const VALID_PUNCTUATION: &'static str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &'static str = "001";

pub const DIGITS: &'static str = r"\p{Nd}";

pub const NANPA_COUNTRY_CODE: i32 = 1;

// Placeholders in formatting rules.
pub const NATIONAL_PREFIX_PLACEHOLDER: &'static str = "$NP";
pub const FIRST_GROUP_PLACEHOLDER: &'static str = "$FG";
pub const FIRST_GROUP_REFERENCE: &'static str = "$1";
