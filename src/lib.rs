//! # Viola
//!
//! A tiny in-memory approximate full-text search library for Rust, built on
//! the classical signature file (superimposed coding) technique.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Fixed-width document signatures via k = 3 seeded hashing
//! - Bit-sliced (transposed) storage for AND-based retrieval
//! - Pluggable tokenization (Unicode words, character n-grams, or your own)
//! - Snapshot export/import for external persistence
//! - Query-term highlighting
//!
//! Matching is approximate by design: a search returns every document whose
//! signature covers the query's bits, which admits false positives from hash
//! collisions but never false negatives. There is no ranking, phrase
//! matching, or deletion; the index is append-only.

// Core modules
pub mod analysis;
mod error;
pub mod highlight;
mod index;
mod signature;

// Re-exports for the public API
pub use analysis::tokenizer::{NGramTokenizer, Tokenizer, WordTokenizer};
pub use error::{Result, ViolaError};
pub use highlight::{DEFAULT_CLOSE_TAG, DEFAULT_OPEN_TAG};
pub use index::SignatureIndex;
pub use index::config::{DEFAULT_BIT_LENGTH, DEFAULT_GRAM_SIZE, IndexConfig};
pub use index::snapshot::Snapshot;
pub use signature::SignatureBuilder;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
