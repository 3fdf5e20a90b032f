//! Codec configuration.
//!
//! Resolve this once at startup and hand it to [`crate::BinaryUuidCodec::with_config`]. The
//! codec never reads environment variables itself.

/// Case of hex digits in text the codec produces from raw bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HexCase {
    /// `2b4a2331-5269-...`
    #[default]
    Lower,
    /// `2B4A2331-5269-...`
    Upper,
}

/// Codec configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecConfig {
    hex_case: HexCase,
    warn_on_malformed: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Lower,
            warn_on_malformed: true,
        }
    }
}

impl CodecConfig {
    /// Create a new `CodecConfig`.
    ///
    /// # Arguments
    ///
    /// * `hex_case` - Case of text produced from raw bytes.
    /// * `warn_on_malformed` - Whether decode logs values that are not hexadecimal.
    pub fn new(hex_case: HexCase, warn_on_malformed: bool) -> Self {
        Self {
            hex_case,
            warn_on_malformed,
        }
    }

    /// Returns this configuration with a different output case.
    pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
        self.hex_case = hex_case;
        self
    }

    /// Returns this configuration with malformed-value logging switched on or off.
    pub fn with_warn_on_malformed(mut self, warn_on_malformed: bool) -> Self {
        self.warn_on_malformed = warn_on_malformed;
        self
    }

    /// Case of hex digits in text produced from raw bytes.
    pub fn hex_case(&self) -> HexCase {
        self.hex_case
    }

    /// Whether decode logs a warning when it dashes a value that is not hexadecimal.
    pub fn warn_on_malformed(&self) -> bool {
        self.warn_on_malformed
    }
}
