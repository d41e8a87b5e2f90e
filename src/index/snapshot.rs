//! Snapshot value for index export and import.

use bit_vec::BitVec;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViolaError};

/// The full exported state of a [`SignatureIndex`](crate::SignatureIndex).
///
/// A snapshot is a plain data value: the ordered key list, the bit-sliced
/// signature matrix (one slice per bit position, one bit per document), the
/// signature width, and the locale tag (present means word segmentation mode,
/// absent means n-gram mode). It derives `Serialize`/`Deserialize` so callers
/// can persist or transport it in whatever format they choose; the crate
/// itself never touches storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Keys in document position order.
    pub keys: Vec<String>,

    /// Bit slices, `slices[i]` holding bit `i` of every document's signature.
    pub slices: Vec<BitVec>,

    /// Signature width in bits.
    pub bit_length: usize,

    /// Locale tag the index was configured with, if any.
    #[serde(default)]
    pub locale: Option<String>,
}

impl Snapshot {
    /// Number of documents recorded in this snapshot.
    pub fn document_count(&self) -> usize {
        self.keys.len()
    }

    /// Structural validation, run before a snapshot may replace live state.
    ///
    /// Checks that the slice count matches `bit_length` and that every slice
    /// carries exactly one bit per key.
    pub fn validate(&self) -> Result<()> {
        if self.bit_length == 0 {
            return Err(ViolaError::corrupt_snapshot(
                "snapshot has zero bit length",
            ));
        }
        if self.slices.len() != self.bit_length {
            return Err(ViolaError::corrupt_snapshot(format!(
                "expected {} slices, found {}",
                self.bit_length,
                self.slices.len()
            )));
        }
        let document_count = self.keys.len();
        for (i, slice) in self.slices.iter().enumerate() {
            if slice.len() != document_count {
                return Err(ViolaError::corrupt_snapshot(format!(
                    "slice {} has {} bits for {} documents",
                    i,
                    slice.len(),
                    document_count
                )));
            }
        }
        Ok(())
    }
}
