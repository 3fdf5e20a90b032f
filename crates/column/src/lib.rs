//! Column type adapter for UUIDs stored as 16-byte binary.
//!
//! An attribute-mapping layer calls into this crate at two points:
//! - **Read**: after the store returns a column value, [`ColumnType::cast`] turns it into the
//!   canonical dashed text application code expects.
//! - **Write and query**: before a value is persisted or used in a lookup,
//!   [`ColumnType::serialize`] (or [`BinUuidType::bind_eq`]) encodes it into [`Data`]. Quoting
//!   or binding that payload is the storage engine's job.
//!
//! The adapter holds a [`binuuid_uuid::UuidCodec`] rather than extending a base type, so the
//! codec can be swapped or configured independently.

mod uuid_type;
mod value;

pub use uuid_type::{BinUuidType, ColumnType, Predicate};
pub use value::{Data, Value};

use binuuid_uuid::UuidError;

/// Error type for column conversions.
#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
    /// The value could not be encoded for a statement. The [`UuidError`] is kept as the source
    /// so callers can inspect the rejected input.
    #[error("statement invalid: {0}")]
    StatementInvalid(#[from] UuidError),
    /// The value's kind cannot be stored in a 16-byte UUID column.
    #[error("unsupported value for a uuid column: {0}")]
    UnsupportedValue(String),
}

/// Result type for column conversions.
pub type ColumnResult<T> = std::result::Result<T, ColumnError>;
