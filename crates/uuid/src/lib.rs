//! Binary UUID codec.
//!
//! Application code works with the canonical dashed UUID text, while the database column holds
//! the same identifier as 16 raw bytes. This crate is the only mapping between the two.
//!
//! ## Forms
//! - Canonical: 36 characters, `8-4-4-4-12` hex groups, e.g.
//!   `2b4a2331-5269-4c6e-9d1e-098804ab812b`
//! - Raw: 16 bytes, written to the store as 32 hex digits without dashes, e.g.
//!   `2b4a233152694c6e9d1e098804ab812b`
//!
//! ## Directions
//! - **Decode** (raw → canonical) is permissive. Values that do not look like a stored UUID are
//!   handed back untouched, so half-initialised attributes (nulls, numeric sentinels) survive a
//!   read.
//! - **Encode** (canonical → raw) is strict. Anything that is not 32 hex digits once dashes are
//!   removed is rejected with [`UuidError::InvalidUuid`] before it can reach a statement.
//!
//! Nothing here generates UUIDs or talks to a database.

mod codec;
mod config;
mod types;

pub use codec::{decode, encode, BinaryUuidCodec, DecodeInput, Decoded, UuidCodec};
pub use config::{CodecConfig, HexCase};
pub use types::{CanonicalUuid, RawUuid, CANONICAL_LEN, RAW_LEN, SIMPLE_LEN};

/// Error type for UUID operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Input is not 32 hexadecimal digits once dashes are removed.
    #[error("invalid UUID: '{input}' is not 32 hexadecimal digits once dashes are removed")]
    InvalidUuid { input: String },
}

impl UuidError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidUuid {
            input: input.into(),
        }
    }

    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidUuid { input } => input,
        }
    }
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
