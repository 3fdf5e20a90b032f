use binuuid_uuid::RawUuid;
use std::fmt;

/// A loosely typed column value as the mapping layer moves it around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
    Binary(Vec<u8>),
    Data(Data),
}

impl Value {
    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

impl From<Data> for Value {
    fn from(data: Data) -> Self {
        Self::Data(data)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Serialized payload for a binary UUID column.
///
/// Displays as the undashed hex digest, which is what the store quotes as a binary literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Data(RawUuid);

impl Data {
    /// Wraps encoded bytes as a column payload.
    pub fn new(raw: RawUuid) -> Self {
        Self(raw)
    }

    /// 32 lowercase hex digits, no dashes.
    pub fn hex(&self) -> String {
        self.0.hex()
    }

    /// The 16 bytes to bind.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the wrapped raw UUID.
    pub fn raw(&self) -> RawUuid {
        self.0
    }
}

impl From<RawUuid> for Data {
    fn from(raw: RawUuid) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
