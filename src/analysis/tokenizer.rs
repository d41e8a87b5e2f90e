//! Tokenization strategies.

use unicode_segmentation::UnicodeSegmentation;

/// A tokenizer converts raw text into an ordered sequence of tokens.
///
/// This is the only capability the index consumes; everything linguistic
/// lives behind it. Implementations must be deterministic: identical input
/// text must always produce the identical token sequence, since the same
/// tokenizer is used on both the add and the search path.
pub trait Tokenizer: Send + Sync {
    /// Segment `text` into tokens. Empty text yields an empty sequence.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Word tokenizer backed by Unicode word segmentation.
///
/// The locale tag is carried for configuration and snapshot round-tripping;
/// segmentation itself follows default Unicode word boundary rules. A
/// genuinely locale-aware segmenter can be supplied instead through the
/// [`Tokenizer`] trait.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    locale: String,
}

impl WordTokenizer {
    /// Create a word tokenizer bound to the given locale tag.
    pub fn new<S: Into<String>>(locale: S) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// The locale tag this tokenizer was configured with.
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Tokenizer for WordTokenizer {
    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|word| word.to_string()).collect()
    }
}

/// Character n-gram tokenizer.
///
/// Emits one gram per character position: the window at position `i` covers
/// the next `size` characters, clamped at the end of the text, so trailing
/// grams are shorter than `size`. With `size == 1` this degenerates to one
/// token per character, which keeps short queries matchable without any
/// language knowledge.
#[derive(Debug, Clone)]
pub struct NGramTokenizer {
    size: usize,
}

impl NGramTokenizer {
    /// Create an n-gram tokenizer with the given window size (minimum 1).
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    /// The configured gram size.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Tokenizer for NGramTokenizer {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len())
            .map(|i| chars[i..(i + self.size).min(chars.len())].iter().collect())
            .collect()
    }
}
