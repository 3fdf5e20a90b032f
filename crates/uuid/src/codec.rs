//! Encode and decode between canonical text and raw bytes.
//!
//! The two directions have different failure policies and do not share a validator:
//! [`UuidCodec::decode`] never fails and hands back anything it does not recognise, while
//! [`UuidCodec::encode`] rejects anything that is not 32 hex digits once dashes are removed.

use crate::config::CodecConfig;
use crate::types::{insert_dashes, parse_simple, CanonicalUuid, RawUuid, SIMPLE_LEN};
use crate::{UuidError, UuidResult};

/// A value arriving at the read boundary.
///
/// `Other` carries whatever the caller uses for values that are not UUIDs at all, such as
/// numeric sentinels or nulls on an attribute that has not been set yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeInput<T> {
    /// Bytes as returned by the store.
    Raw(Vec<u8>),
    /// Text, either already canonical or the undashed 32-digit hex of the raw bytes.
    Text(String),
    /// Any value that is not a UUID candidate; always handed back untouched.
    Other(T),
}

impl<T> From<Vec<u8>> for DecodeInput<T> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(bytes)
    }
}

impl<T> From<&[u8]> for DecodeInput<T> {
    fn from(bytes: &[u8]) -> Self {
        Self::Raw(bytes.to_vec())
    }
}

impl<T> From<RawUuid> for DecodeInput<T> {
    fn from(raw: RawUuid) -> Self {
        Self::Raw(raw.as_bytes().to_vec())
    }
}

impl<T> From<String> for DecodeInput<T> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T> From<&str> for DecodeInput<T> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Result of decoding a [`DecodeInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded<T> {
    /// A well-formed canonical UUID.
    Uuid(CanonicalUuid),
    /// A 32-character value that is not hexadecimal, with dashes inserted anyway.
    Malformed(String),
    /// The input, untouched.
    PassThrough(DecodeInput<T>),
}

impl<T> Decoded<T> {
    /// Returns the canonical UUID, if decoding produced one.
    pub fn as_uuid(&self) -> Option<&CanonicalUuid> {
        match self {
            Self::Uuid(uuid) => Some(uuid),
            _ => None,
        }
    }

    /// Consumes the result and returns the canonical UUID, if decoding produced one.
    ///
    /// Malformed and passed-through values yield `None`.
    pub fn into_uuid(self) -> Option<CanonicalUuid> {
        match self {
            Self::Uuid(uuid) => Some(uuid),
            _ => None,
        }
    }

    /// Returns true if the input was handed back untouched.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough(_))
    }
}

/// The capability a column adapter needs from a UUID codec.
pub trait UuidCodec {
    /// Converts a stored value into canonical text. Never fails.
    fn decode<T>(&self, input: DecodeInput<T>) -> Decoded<T>;

    /// Converts text into raw bytes.
    ///
    /// `None` and the empty string encode to `Ok(None)`, meaning the column is left null.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidUuid`] carrying `input` if, after removing every dash, it
    /// is not exactly 32 hexadecimal digits.
    fn encode(&self, input: Option<&str>) -> UuidResult<Option<RawUuid>>;
}

/// Codec between canonical UUID text and 16-byte binary columns.
///
/// Stateless apart from its configuration, so a single instance can be shared freely across
/// threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryUuidCodec {
    config: CodecConfig,
}

impl BinaryUuidCodec {
    /// Creates a codec with the default configuration (lowercase output, malformed values
    /// logged).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec from a configuration resolved at startup.
    ///
    /// # Arguments
    ///
    /// * `config` - Output case and logging behaviour.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this codec was built with.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Renders 16 bytes as canonical text in the configured case.
    ///
    /// Unlike [`UuidCodec::decode`] this cannot pass anything through: every 16-byte value
    /// is a UUID.
    pub fn decode_raw(&self, raw: &RawUuid) -> CanonicalUuid {
        CanonicalUuid::from_raw(raw, self.config.hex_case())
    }

    /// Encodes a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidUuid`] for the empty string as well as for malformed input.
    pub fn encode_str(&self, input: &str) -> UuidResult<RawUuid> {
        self.encode(Some(input))?
            .ok_or_else(|| UuidError::invalid(input))
    }

    fn decode_text<T>(&self, text: String) -> Decoded<T> {
        // Already dashed: never re-processed.
        if text.contains('-') {
            if let Ok(uuid) = CanonicalUuid::parse(&text) {
                return Decoded::Uuid(uuid);
            }
            tracing::debug!(value = %text, "passing through dashed value that is not a UUID");
            return Decoded::PassThrough(DecodeInput::Text(text));
        }

        if text.chars().count() != SIMPLE_LEN {
            tracing::debug!(
                len = text.chars().count(),
                "passing through text that is not 32 characters"
            );
            return Decoded::PassThrough(DecodeInput::Text(text));
        }

        match parse_simple(&text) {
            Ok(bytes) => Decoded::Uuid(self.decode_raw(&RawUuid::from_bytes(bytes))),
            Err(_) => {
                let dashed = insert_dashes(&text);
                if self.config.warn_on_malformed() {
                    tracing::warn!(value = %dashed, "decoded a stored UUID that is not hexadecimal");
                }
                Decoded::Malformed(dashed)
            }
        }
    }
}

impl UuidCodec for BinaryUuidCodec {
    fn decode<T>(&self, input: DecodeInput<T>) -> Decoded<T> {
        match input {
            DecodeInput::Raw(bytes) => match RawUuid::from_slice(&bytes) {
                Some(raw) => Decoded::Uuid(self.decode_raw(&raw)),
                None => {
                    tracing::debug!(
                        len = bytes.len(),
                        "passing through raw value that is not 16 bytes"
                    );
                    Decoded::PassThrough(DecodeInput::Raw(bytes))
                }
            },
            DecodeInput::Text(text) => self.decode_text(text),
            DecodeInput::Other(value) => Decoded::PassThrough(DecodeInput::Other(value)),
        }
    }

    fn encode(&self, input: Option<&str>) -> UuidResult<Option<RawUuid>> {
        let input = match input {
            None | Some("") => return Ok(None),
            Some(input) => input,
        };

        let digest: String = input.chars().filter(|c| *c != '-').collect();
        match parse_simple(&digest) {
            Ok(bytes) => Ok(Some(RawUuid::from_bytes(bytes))),
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "rejected value that is not a UUID");
                Err(UuidError::invalid(input))
            }
        }
    }
}

/// Decodes with the default codec.
pub fn decode<T>(input: DecodeInput<T>) -> Decoded<T> {
    BinaryUuidCodec::default().decode(input)
}

/// Encodes with the default codec.
pub fn encode(input: Option<&str>) -> UuidResult<Option<RawUuid>> {
    BinaryUuidCodec::default().encode(input)
}
