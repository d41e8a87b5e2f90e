//! Text analysis for Viola.
//!
//! Analysis is deliberately narrow: the index only needs an ordered sequence
//! of tokens, so the whole seam is the [`Tokenizer`] trait with a single
//! `segment` capability. Two implementations are provided:
//!
//! - [`WordTokenizer`]: Unicode word segmentation, used when the index is
//!   configured with a locale.
//! - [`NGramTokenizer`]: fixed-width character n-grams, the fallback when no
//!   locale is configured.
//!
//! Callers with their own linguistic backend can inject any `Tokenizer`
//! implementation via [`SignatureIndex::with_tokenizer`](crate::SignatureIndex::with_tokenizer).

pub mod tokenizer;

// Re-exports
pub use tokenizer::NGramTokenizer;
pub use tokenizer::Tokenizer;
pub use tokenizer::WordTokenizer;
