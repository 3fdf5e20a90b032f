//! The column type for UUIDs stored in a 16-byte binary column.

use crate::value::{Data, Value};
use crate::{ColumnError, ColumnResult};
use binuuid_uuid::{BinaryUuidCodec, DecodeInput, Decoded, RawUuid, UuidCodec};

/// Conversion hooks a mapping layer calls for a column.
pub trait ColumnType {
    /// Logical type reported to the mapping layer.
    fn type_name(&self) -> &'static str;

    /// Turns a value read from the store into what application code sees. Never fails.
    fn cast(&self, value: Value) -> Value;

    /// Turns an application value into the payload to persist. `Ok(None)` leaves the column
    /// null.
    fn serialize(&self, value: &Value) -> ColumnResult<Option<Data>>;
}

/// Comparison a lookup should issue for a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Match rows where the column is null.
    IsNull,
    /// Match rows whose column holds exactly these bytes.
    Equals(Data),
}

/// [`ColumnType`] for a UUID held as 16 raw bytes.
#[derive(Clone, Debug, Default)]
pub struct BinUuidType<C = BinaryUuidCodec> {
    codec: C,
}

impl BinUuidType<BinaryUuidCodec> {
    /// Creates the column type with a default [`BinaryUuidCodec`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: UuidCodec> BinUuidType<C> {
    /// Creates the column type around a caller-supplied codec.
    ///
    /// # Arguments
    ///
    /// * `codec` - Codec used for both the read and the write boundary.
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Returns the codec this column converts through.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encodes a value for use in an equality or lookup predicate.
    ///
    /// Must be called before the value reaches a query. A value that is not a UUID is an error,
    /// never a predicate that silently matches nothing.
    pub fn bind_eq(&self, value: &Value) -> ColumnResult<Predicate> {
        Ok(match self.serialize(value)? {
            Some(data) => Predicate::Equals(data),
            None => Predicate::IsNull,
        })
    }

    fn decoded_into_value(decoded: Decoded<Value>) -> Value {
        match decoded {
            Decoded::Uuid(uuid) => Value::Text(uuid.into_string()),
            Decoded::Malformed(text) => Value::Text(text),
            Decoded::PassThrough(DecodeInput::Raw(bytes)) => Value::Binary(bytes),
            Decoded::PassThrough(DecodeInput::Text(text)) => Value::Text(text),
            Decoded::PassThrough(DecodeInput::Other(value)) => value,
        }
    }
}

impl<C: UuidCodec> ColumnType for BinUuidType<C> {
    fn type_name(&self) -> &'static str {
        "uuid"
    }

    fn cast(&self, value: Value) -> Value {
        let input = match value {
            Value::Data(data) => DecodeInput::Raw(data.as_bytes().to_vec()),
            Value::Binary(bytes) => DecodeInput::Raw(bytes),
            Value::Text(text) => DecodeInput::Text(text),
            other => DecodeInput::Other(other),
        };
        Self::decoded_into_value(self.codec.decode(input))
    }

    fn serialize(&self, value: &Value) -> ColumnResult<Option<Data>> {
        match value {
            Value::Null => Ok(None),
            Value::Text(text) => {
                let raw = self.codec.encode(Some(text.as_str()))?;
                Ok(raw.map(Data::new))
            }
            Value::Data(data) => Ok(Some(*data)),
            Value::Binary(bytes) => RawUuid::from_slice(bytes)
                .map(|raw| Some(Data::new(raw)))
                .ok_or_else(|| {
                    tracing::debug!(len = bytes.len(), "rejected binary value for uuid column");
                    ColumnError::UnsupportedValue(format!(
                        "binary value of {} bytes, expected 16",
                        bytes.len()
                    ))
                }),
            Value::Integer(n) => {
                tracing::debug!("rejected integer value for uuid column");
                Err(ColumnError::UnsupportedValue(format!("integer {}", n)))
            }
        }
    }
}
