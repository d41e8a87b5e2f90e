//! Index configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViolaError};

/// Default signature width in bits.
pub const DEFAULT_BIT_LENGTH: usize = 1024;

/// Gram size used by the n-gram fallback tokenizer.
pub const DEFAULT_GRAM_SIZE: usize = 1;

/// Configuration for a [`SignatureIndex`](crate::SignatureIndex).
///
/// `bit_length` is fixed for the life of an index instance: changing it after
/// documents exist would invalidate every stored signature, so
/// [`SignatureIndex::reconfigure`](crate::SignatureIndex::reconfigure) rejects
/// it on a non-empty store. The tokenizer mode follows `locale`: present means
/// Unicode word segmentation bound to that locale tag, absent means character
/// n-grams of [`DEFAULT_GRAM_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Signature width in bits.
    pub bit_length: usize,

    /// Locale tag for word segmentation; `None` selects n-gram mode.
    #[serde(default)]
    pub locale: Option<String>,
}

impl IndexConfig {
    /// Create a configuration with the given bit length, in n-gram mode.
    pub fn new(bit_length: usize) -> Self {
        Self {
            bit_length,
            locale: None,
        }
    }

    /// Bind the configuration to a locale, selecting word segmentation mode.
    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.bit_length == 0 {
            return Err(ViolaError::invalid_config(
                "bit_length must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BIT_LENGTH)
    }
}
