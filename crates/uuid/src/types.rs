//! Value types for the two UUID encodings.

use crate::config::HexCase;
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Length of the canonical dashed form.
pub const CANONICAL_LEN: usize = 36;

/// Length of the undashed hex form.
pub const SIMPLE_LEN: usize = 32;

/// Length of the raw binary form.
pub const RAW_LEN: usize = 16;

/// Character offsets in the undashed form where the canonical form has a dash.
const GROUP_STARTS: [usize; 4] = [8, 12, 16, 20];

/// Byte offsets of the dashes in the canonical form.
const DASH_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A UUID in its canonical 36-character dashed text form.
///
/// Once constructed the value is guaranteed to be five hex groups of 8, 4, 4, 4 and 12
/// characters. Hex digits may be upper or lower case: [`CanonicalUuid::parse`] keeps the case
/// it was given, while values decoded from raw bytes use the codec's [`HexCase`].
///
/// # Errors
/// [`CanonicalUuid::parse`] returns [`UuidError::InvalidUuid`] if the input is not canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalUuid(String);

impl CanonicalUuid {
    /// Validates and wraps a dashed UUID string.
    ///
    /// Undashed input is rejected here; use the codec to encode it instead.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(UuidError::invalid(input))
    }

    /// Returns true if `input` is exactly 36 characters with dashes at offsets 8, 13, 18 and 23
    /// and hex digits (either case) everywhere else.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == CANONICAL_LEN
            && input.bytes().enumerate().all(|(i, b)| {
                if DASH_POSITIONS.contains(&i) {
                    b == b'-'
                } else {
                    b.is_ascii_hexdigit()
                }
            })
    }

    /// Renders raw bytes as a canonical UUID in the requested case.
    ///
    /// # Arguments
    ///
    /// * `raw` - The 16 stored bytes.
    /// * `case` - Case of the hex digits in the result.
    ///
    /// # Returns
    ///
    /// Returns the hyphenated form, for example `2b4a2331-5269-4c6e-9d1e-098804ab812b`.
    pub fn from_raw(raw: &RawUuid, case: HexCase) -> Self {
        let hyphenated = ::uuid::Uuid::from_bytes(raw.0).hyphenated();
        let mut buffer = ::uuid::Uuid::encode_buffer();
        let text = match case {
            HexCase::Lower => hyphenated.encode_lower(&mut buffer),
            HexCase::Upper => hyphenated.encode_upper(&mut buffer),
        };
        Self(text.to_owned())
    }

    /// Returns the dashed text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the dashed text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the 16 bytes this UUID stands for.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidUuid`] if the text does not parse as a UUID. A value built
    /// through [`CanonicalUuid::parse`] or [`CanonicalUuid::from_raw`] always parses.
    pub fn to_raw(&self) -> UuidResult<RawUuid> {
        ::uuid::Uuid::parse_str(&self.0)
            .map(RawUuid::from)
            .map_err(|_| UuidError::invalid(self.as_str()))
    }
}

impl fmt::Display for CanonicalUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CanonicalUuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalUuid::parse(s)
    }
}

impl AsRef<str> for CanonicalUuid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CanonicalUuid> for String {
    fn from(value: CanonicalUuid) -> Self {
        value.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CanonicalUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CanonicalUuid::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A UUID in its 16-byte binary storage form.
///
/// There is deliberately no `Display` impl: text is obtained through the codec, or through
/// [`RawUuid::hex`] when the store wants the undashed hex digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawUuid([u8; RAW_LEN]);

impl RawUuid {
    /// Wraps 16 bytes read from or written to the store.
    pub const fn from_bytes(bytes: [u8; RAW_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns `None` unless `bytes` is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; RAW_LEN]>::try_from(bytes).ok().map(Self)
    }

    /// Parses exactly 32 hex digits (either case, no dashes).
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidUuid`] carrying `digits` if they are not 32 hex digits.
    pub fn from_hex(digits: &str) -> UuidResult<Self> {
        parse_simple(digits)
            .map(Self)
            .map_err(|_| UuidError::invalid(digits))
    }

    /// Returns the 16 bytes to bind into a binary column.
    pub fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }

    /// Consumes the value and returns its bytes.
    pub fn into_bytes(self) -> [u8; RAW_LEN] {
        self.0
    }

    /// Lowercase undashed hex, the digest handed to the storage write path.
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for RawUuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; RAW_LEN]> for RawUuid {
    fn from(bytes: [u8; RAW_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<::uuid::Uuid> for RawUuid {
    fn from(uuid: ::uuid::Uuid) -> Self {
        Self(uuid.into_bytes())
    }
}

impl From<RawUuid> for ::uuid::Uuid {
    fn from(raw: RawUuid) -> Self {
        ::uuid::Uuid::from_bytes(raw.0)
    }
}

/// Inserts dashes before character offsets 8, 12, 16 and 20.
///
/// Only used for stored values that are not hexadecimal; valid UUIDs are rendered through
/// [`CanonicalUuid::from_raw`]. Works on characters, not bytes, so it never splits a
/// multi-byte character.
pub(crate) fn insert_dashes(simple: &str) -> String {
    let mut out = String::with_capacity(simple.len() + GROUP_STARTS.len());
    for (i, c) in simple.chars().enumerate() {
        if GROUP_STARTS.contains(&i) {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Returns the 16 bytes for exactly 32 hex digits (either case).
pub(crate) fn parse_simple(digits: &str) -> Result<[u8; RAW_LEN], hex::FromHexError> {
    let mut bytes = [0u8; RAW_LEN];
    hex::decode_to_slice(digits, &mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DASHED: &str = "2b4a2331-5269-4c6e-9d1e-098804ab812b";
    const SIMPLE: &str = "2b4a233152694c6e9d1e098804ab812b";

    #[test]
    fn test_is_canonical_valid() {
        assert!(CanonicalUuid::is_canonical(DASHED));
        assert!(CanonicalUuid::is_canonical(
            "00000000-0000-0000-0000-000000000000"
        ));
        assert!(CanonicalUuid::is_canonical(
            "3511F33F-3C93-4806-9846-52B4A7618298"
        ));
    }

    #[test]
    fn test_is_canonical_invalid() {
        // Undashed
        assert!(!CanonicalUuid::is_canonical(SIMPLE));

        // Dash in the wrong place
        assert!(!CanonicalUuid::is_canonical(
            "2b4a233-15269-4c6e-9d1e-098804ab812b"
        ));

        // Non-hex character
        assert!(!CanonicalUuid::is_canonical(
            "2b4a2331-5269-4c6e-9d1e-098804ab812g"
        ));

        // Too long
        assert!(!CanonicalUuid::is_canonical(
            "2b4a2331-5269-4c6e-9d1e-098804ab812b0"
        ));

        assert!(!CanonicalUuid::is_canonical(""));
    }

    #[test]
    fn test_parse_preserves_case() {
        let upper = "3511F33F-3C93-4806-9846-52B4A7618298";
        let parsed = CanonicalUuid::parse(upper).unwrap();

        assert_eq!(parsed.as_str(), upper);
    }

    #[test]
    fn test_parse_rejects_sql_fragment() {
        let result = CanonicalUuid::parse("' OR ''='");

        match result {
            Err(UuidError::InvalidUuid { input }) => assert_eq!(input, "' OR ''='"),
            other => panic!("Expected InvalidUuid, got {:?}", other),
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: CanonicalUuid = DASHED.parse().unwrap();
        assert_eq!(parsed, CanonicalUuid::parse(DASHED).unwrap());

        assert!("not-a-uuid".parse::<CanonicalUuid>().is_err());
    }

    #[test]
    fn test_to_raw_ignores_case() {
        let lower = CanonicalUuid::parse("3511f33f-3c93-4806-9846-52b4a7618298").unwrap();
        let upper = CanonicalUuid::parse("3511F33F-3C93-4806-9846-52B4A7618298").unwrap();

        assert_eq!(lower.to_raw().unwrap(), upper.to_raw().unwrap());
        assert_eq!(
            lower.to_raw().unwrap().hex(),
            "3511f33f3c934806984652b4a7618298"
        );
    }

    #[test]
    fn test_from_raw_inserts_dashes() {
        let raw = RawUuid::from_hex(SIMPLE).unwrap();

        assert_eq!(CanonicalUuid::from_raw(&raw, HexCase::Lower).as_str(), DASHED);
        assert_eq!(
            CanonicalUuid::from_raw(&raw, HexCase::Upper).as_str(),
            "2B4A2331-5269-4C6E-9D1E-098804AB812B"
        );
    }

    #[test]
    fn test_raw_from_slice_requires_sixteen_bytes() {
        assert!(RawUuid::from_slice(&[0u8; 16]).is_some());
        assert!(RawUuid::from_slice(&[0u8; 15]).is_none());
        assert!(RawUuid::from_slice(&[0u8; 17]).is_none());
        assert!(RawUuid::from_slice(&[]).is_none());
    }

    #[test]
    fn test_raw_from_hex_rejects_dashes_and_bad_length() {
        assert!(RawUuid::from_hex(DASHED).is_err());
        assert!(RawUuid::from_hex("2b4a2331").is_err());
        assert!(RawUuid::from_hex("zz4a233152694c6e9d1e098804ab812b").is_err());
    }

    #[test]
    fn test_raw_matches_uuid_crate() {
        let uuid = ::uuid::Uuid::parse_str(DASHED).unwrap();
        let raw = RawUuid::from(uuid);

        assert_eq!(raw.hex(), SIMPLE);
        assert_eq!(::uuid::Uuid::from(raw), uuid);
        assert_eq!(
            CanonicalUuid::from_raw(&raw, HexCase::Lower).as_str(),
            uuid.hyphenated().to_string()
        );
    }

    #[test]
    fn test_parse_simple_rejects_non_hex_digits() {
        for (index, bad) in [(0, 'z'), (17, 'g'), (31, ' ')] {
            let mut digits: Vec<char> = SIMPLE.chars().collect();
            digits[index] = bad;
            let digits: String = digits.into_iter().collect();

            assert!(parse_simple(&digits).is_err(), "accepted {:?}", digits);
            match RawUuid::from_hex(&digits) {
                Err(UuidError::InvalidUuid { input }) => assert_eq!(input, digits),
                other => panic!("Expected InvalidUuid, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_simple_rejects_multibyte_digits() {
        // 32 characters, but not 32 bytes of hex
        let odd = format!("é{}", &SIMPLE[1..]);

        assert!(parse_simple(&odd).is_err());
    }

    #[test]
    fn test_parse_simple_accepts_mixed_case() {
        assert_eq!(
            parse_simple("2B4A233152694c6e9d1e098804AB812B").unwrap(),
            parse_simple(SIMPLE).unwrap()
        );
    }

    #[test]
    fn test_insert_dashes_on_multibyte_input() {
        let odd = "é".repeat(SIMPLE_LEN);
        let dashed = insert_dashes(&odd);

        assert_eq!(dashed.chars().count(), CANONICAL_LEN);
        assert_eq!(dashed.matches('-').count(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let parsed = CanonicalUuid::parse(DASHED).unwrap();
        let json = serde_json::to_string(&parsed).unwrap();

        assert_eq!(json, format!("\"{}\"", DASHED));
        assert_eq!(
            serde_json::from_str::<CanonicalUuid>(&json).unwrap(),
            parsed
        );
        assert!(serde_json::from_str::<CanonicalUuid>("\"' OR 1=1 --\"").is_err());
    }
}
