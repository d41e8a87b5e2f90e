//! Bit-sliced signature index.
//!
//! This module provides the core `SignatureIndex` implementation.

pub mod config;
pub mod snapshot;

use ahash::AHashSet;
use bit_vec::BitVec;
use log::debug;

use crate::analysis::tokenizer::{NGramTokenizer, Tokenizer, WordTokenizer};
use crate::error::{Result, ViolaError};
use crate::highlight;
use crate::index::config::{DEFAULT_GRAM_SIZE, IndexConfig};
use crate::index::snapshot::Snapshot;
use crate::signature::SignatureBuilder;

/// An in-memory approximate full-text index over document signatures.
///
/// The index stores one fixed-width signature per document, transposed:
/// instead of `document_count` vectors of `bit_length` bits, it keeps
/// `bit_length` slices of `document_count` bits, where `slices[i]` records
/// bit `i` of every document's signature. A query whose signature sets bit
/// positions `{i1, i2, ...}` is answered by ANDing just those slices, and
/// every surviving bit position is a candidate document. Candidates are a
/// superset of the true matches: hash collisions can produce false positives,
/// but a document indexed with a superset of the query's tokens is never
/// missed.
///
/// The index is append-only. Documents get consecutive positions in insertion
/// order and are never removed or reordered; keys are opaque, caller-supplied,
/// and not required to be unique.
///
/// All methods are synchronous and take `&self`/`&mut self` with no interior
/// locking. Hosts sharing an index across threads must wrap it in their own
/// lock (e.g. `RwLock`, writes exclusive).
///
/// # Usage Example
///
/// ```rust
/// use viola::{IndexConfig, SignatureIndex};
///
/// let mut index = SignatureIndex::new(IndexConfig::new(64)).unwrap();
/// index.add("hello world", "doc1").unwrap();
/// index.add("goodbye world", "doc2").unwrap();
///
/// let hits = index.search("world").unwrap();
/// assert!(hits.contains("doc1") && hits.contains("doc2"));
/// ```
pub struct SignatureIndex {
    config: IndexConfig,
    tokenizer: Box<dyn Tokenizer>,
    builder: SignatureBuilder,
    /// `slices[i]` holds bit `i` of every document's signature.
    slices: Vec<BitVec>,
    /// `keys[p]` is the key of the document at position `p`.
    keys: Vec<String>,
}

impl std::fmt::Debug for SignatureIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureIndex")
            .field("config", &self.config)
            .field("document_count", &self.keys.len())
            .finish()
    }
}

/// Derive the tokenizer from the configured mode.
fn tokenizer_for(config: &IndexConfig) -> Box<dyn Tokenizer> {
    match &config.locale {
        Some(locale) => Box::new(WordTokenizer::new(locale.clone())),
        None => Box::new(NGramTokenizer::new(DEFAULT_GRAM_SIZE)),
    }
}

impl SignatureIndex {
    /// Create an empty index from a configuration.
    ///
    /// A configured locale selects Unicode word segmentation; no locale
    /// selects the character n-gram fallback. Returns
    /// [`ViolaError::InvalidConfig`] if `bit_length` is zero.
    pub fn new(config: IndexConfig) -> Result<Self> {
        let tokenizer = tokenizer_for(&config);
        Self::with_tokenizer(config, tokenizer)
    }

    /// Create an empty index with a caller-supplied tokenizer.
    ///
    /// The tokenizer is consumed as a capability; the index only calls
    /// [`Tokenizer::segment`]. The mode is fixed for the instance's lifetime:
    /// adds and searches must tokenize consistently or results are undefined,
    /// so the same implementation serves both paths.
    pub fn with_tokenizer(config: IndexConfig, tokenizer: Box<dyn Tokenizer>) -> Result<Self> {
        config.validate()?;
        let builder = SignatureBuilder::new(config.bit_length);
        let slices = vec![BitVec::new(); config.bit_length];
        Ok(Self {
            config,
            tokenizer,
            builder,
            slices,
            keys: Vec::new(),
        })
    }

    /// The configured signature width in bits.
    pub fn bit_length(&self) -> usize {
        self.config.bit_length
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.keys.len()
    }

    /// Whether the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The active configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Replace the configuration of an empty index.
    ///
    /// `bit_length` determines every stored signature, so reconfiguration is
    /// rejected once documents exist; restore from a snapshot or build a new
    /// index instead.
    pub fn reconfigure(&mut self, config: IndexConfig) -> Result<()> {
        if !self.is_empty() {
            return Err(ViolaError::invalid_config(format!(
                "cannot reconfigure an index holding {} documents",
                self.keys.len()
            )));
        }
        config.validate()?;
        self.tokenizer = tokenizer_for(&config);
        self.builder = SignatureBuilder::new(config.bit_length);
        self.slices = vec![BitVec::new(); config.bit_length];
        self.config = config;
        Ok(())
    }

    /// Index one document.
    ///
    /// Tokenizes `text`, builds its signature, and appends one bit to every
    /// slice: O(`bit_length`) per add regardless of token count, the price of
    /// keeping slices dense for query-time ANDs. Duplicate keys and duplicate
    /// texts are accepted as-is.
    pub fn add(&mut self, text: &str, key: &str) -> Result<()> {
        let tokens = self.tokenizer.segment(text);
        let signature = self.builder.build(&tokens)?;
        for (i, slice) in self.slices.iter_mut().enumerate() {
            slice.push(signature.get(i).unwrap_or(false));
        }
        self.keys.push(key.to_string());
        Ok(())
    }

    /// Search for documents whose signatures cover the query's bits.
    ///
    /// Returns the deduplicated set of keys at candidate positions. Empty
    /// query text yields the empty set, as does a query whose tokens set no
    /// bits: the AND accumulator starts from the first selected slice, never
    /// from all-ones, so a degenerate query cannot match everything.
    ///
    /// Candidates may include false positives from hash collisions; they
    /// never omit a document indexed with a superset of the query's tokens.
    /// The result set has no defined iteration order.
    pub fn search(&self, text: &str) -> Result<AHashSet<String>> {
        let mut result = AHashSet::new();
        if text.is_empty() {
            return Ok(result);
        }

        let tokens = self.tokenizer.segment(text);
        let signature = self.builder.build(&tokens)?;

        let mut accumulator: Option<BitVec> = None;
        for (i, slice) in self.slices.iter().enumerate() {
            if signature.get(i) == Some(true) {
                match accumulator.as_mut() {
                    None => accumulator = Some(slice.clone()),
                    Some(acc) => {
                        acc.intersect(slice);
                    }
                }
            }
        }

        if let Some(matches) = accumulator {
            for (position, bit) in matches.iter().enumerate() {
                if bit {
                    result.insert(self.keys[position].clone());
                }
            }
        }
        Ok(result)
    }

    /// Export the full index state as a [`Snapshot`] value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            keys: self.keys.clone(),
            slices: self.slices.clone(),
            bit_length: self.config.bit_length,
            locale: self.config.locale.clone(),
        }
    }

    /// Replace the full index state from a snapshot.
    ///
    /// The snapshot is validated structurally before any live state changes;
    /// on [`ViolaError::CorruptSnapshot`] the index is left untouched. On
    /// success everything is replaced, including the bit length and the
    /// tokenizer mode re-derived from the snapshot's locale.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        snapshot.validate()?;
        self.config = IndexConfig {
            bit_length: snapshot.bit_length,
            locale: snapshot.locale,
        };
        self.tokenizer = tokenizer_for(&self.config);
        self.builder = SignatureBuilder::new(snapshot.bit_length);
        self.slices = snapshot.slices;
        self.keys = snapshot.keys;
        debug!(
            "restored index: {} documents, bit length {}",
            self.keys.len(),
            self.config.bit_length
        );
        Ok(())
    }

    /// Highlight query tokens in `text` with the default `<mark>` tags.
    ///
    /// See [`mark_with_tags`](Self::mark_with_tags).
    pub fn mark(&self, text: &str, query: &str) -> Result<String> {
        self.mark_with_tags(
            text,
            query,
            highlight::DEFAULT_OPEN_TAG,
            highlight::DEFAULT_CLOSE_TAG,
        )
    }

    /// Wrap every occurrence of each distinct query token in `open`/`close`.
    ///
    /// Purely textual: the query is tokenized with the index's tokenizer, but
    /// the index contents are never consulted, and matching is raw substring
    /// matching with no token-boundary awareness in `text`. Empty `text` or
    /// `query` returns `text` unchanged.
    pub fn mark_with_tags(
        &self,
        text: &str,
        query: &str,
        open: &str,
        close: &str,
    ) -> Result<String> {
        highlight::mark(text, query, self.tokenizer.as_ref(), open, close)
    }
}
