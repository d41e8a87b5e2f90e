//! Query-term highlighting.
//!
//! Highlighting is a post-processing helper, independent of the signature
//! index: it tokenizes the query and wraps every literal occurrence of each
//! distinct token in marker tags. All tokens are matched in a single
//! leftmost-longest automaton pass over the text, so inserted tags are never
//! re-scanned and overlapping tokens resolve to the longest match.

use ahash::AHashSet;
use aho_corasick::{AhoCorasick, MatchKind};

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, ViolaError};

/// Default opening marker.
pub const DEFAULT_OPEN_TAG: &str = "<mark>";

/// Default closing marker.
pub const DEFAULT_CLOSE_TAG: &str = "</mark>";

/// Wrap every occurrence of each distinct token of `query` in `open`/`close`.
///
/// Matching is raw substring matching: a short token may match inside
/// unrelated longer words in `text`. Empty `text` or `query` (or a query
/// producing no tokens) returns `text` unchanged.
pub fn mark(
    text: &str,
    query: &str,
    tokenizer: &dyn Tokenizer,
    open: &str,
    close: &str,
) -> Result<String> {
    if text.is_empty() || query.is_empty() {
        return Ok(text.to_string());
    }

    let mut seen = AHashSet::new();
    let patterns: Vec<String> = tokenizer
        .segment(query)
        .into_iter()
        .filter(|token| !token.is_empty() && seen.insert(token.clone()))
        .collect();
    if patterns.is_empty() {
        return Ok(text.to_string());
    }

    let replacements: Vec<String> = patterns
        .iter()
        .map(|token| format!("{open}{token}{close}"))
        .collect();
    let automaton = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&patterns)
        .map_err(|e| ViolaError::internal(format!("failed to build marker automaton: {e}")))?;

    Ok(automaton.replace_all(text, &replacements))
}
