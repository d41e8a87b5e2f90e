//! Signature construction via superimposed coding.
//!
//! Every token contributes up to `k = 3` set bits to a fixed-width bit
//! vector: three independently seeded murmur3 32-bit hashes, each reduced
//! modulo the vector width. The per-token contributions are ORed together,
//! so a document's signature is a superset of the signature of any subset of
//! its tokens. That superset relation is what makes AND-based retrieval free
//! of false negatives; false positives from colliding bit positions are the
//! accepted trade-off of the signature file scheme.

use std::io::Cursor;

use bit_vec::BitVec;

use crate::error::Result;

/// Hash seeds for the k = 3 superimposed coding scheme.
const SEEDS: [u32; 3] = [1, 2, 3];

/// Builds fixed-width bit-vector signatures from token sequences.
///
/// Signatures are a pure function of token bytes, the seeds, and the
/// configured bit length, so the same text produces bit-identical signatures
/// on the add and the search path.
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    bit_length: usize,
}

impl SignatureBuilder {
    /// Create a builder producing signatures of `bit_length` bits.
    pub fn new(bit_length: usize) -> Self {
        Self { bit_length }
    }

    /// The signature width in bits.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Build the signature for a token sequence.
    ///
    /// An empty sequence yields an all-zero vector.
    pub fn build<S: AsRef<str>>(&self, tokens: &[S]) -> Result<BitVec> {
        let mut signature = BitVec::from_elem(self.bit_length, false);
        for token in tokens {
            for seed in SEEDS {
                let hash = murmur3::murmur3_32(&mut Cursor::new(token.as_ref().as_bytes()), seed)?;
                signature.set(hash as usize % self.bit_length, true);
            }
        }
        Ok(signature)
    }
}
