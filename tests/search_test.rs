use viola::{IndexConfig, NGramTokenizer, SignatureIndex, Tokenizer, ViolaError};

#[test]
fn test_ngram_mode_scenario() -> viola::Result<()> {
    // 1. Configure a 64-bit index in n-gram mode
    let mut index = SignatureIndex::new(IndexConfig::new(64))?;

    // 2. Index two documents
    index.add("hello world", "doc1")?;
    index.add("goodbye world", "doc2")?;

    // 3. A token both documents contain matches both
    let hits = index.search("world")?;
    assert!(hits.contains("doc1"), "doc1 should match 'world'");
    assert!(hits.contains("doc2"), "doc2 should match 'world'");

    // 4. A token only doc1 contains matches doc1 and, with these hash
    //    positions, not doc2
    let hits = index.search("hello")?;
    assert!(hits.contains("doc1"), "doc1 should match 'hello'");
    assert!(!hits.contains("doc2"), "'hello' should not match doc2");
    Ok(())
}

#[test]
fn test_word_mode_search() -> viola::Result<()> {
    let mut index = SignatureIndex::new(IndexConfig::new(256).with_locale("en"))?;
    index.add("Rust Programming", "doc1")?;
    index.add("Vector Search", "doc2")?;

    let hits = index.search("Rust")?;
    assert!(hits.contains("doc1"), "should find doc1 for 'Rust'");
    assert!(
        !hits.contains("doc2"),
        "'Rust' should not match doc2 at this bit length"
    );
    Ok(())
}

#[test]
fn test_no_false_negatives_on_token_subsets() -> viola::Result<()> {
    let mut index = SignatureIndex::new(IndexConfig::new(128).with_locale("en"))?;
    index.add("the quick brown fox jumps over the lazy dog", "doc1")?;

    // Every query built from a subset of the indexed tokens must match.
    for query in ["quick", "brown fox", "lazy dog jumps", "the quick brown"] {
        let hits = index.search(query)?;
        assert!(hits.contains("doc1"), "query {:?} missed doc1", query);
    }
    Ok(())
}

#[test]
fn test_empty_query_yields_empty_set() -> viola::Result<()> {
    let mut index = SignatureIndex::new(IndexConfig::new(64))?;
    index.add("hello world", "doc1")?;

    assert!(index.search("")?.is_empty());
    Ok(())
}

#[test]
fn test_search_on_empty_index() -> viola::Result<()> {
    let index = SignatureIndex::new(IndexConfig::new(64))?;
    assert!(index.search("anything")?.is_empty());
    Ok(())
}

#[test]
fn test_duplicate_keys_deduplicate_in_results() -> viola::Result<()> {
    let mut index = SignatureIndex::new(IndexConfig::new(64))?;
    index.add("shared token", "doc")?;
    index.add("shared token", "doc")?;

    let hits = index.search("shared")?;
    assert_eq!(hits.len(), 1, "two documents with one key yield one entry");
    assert!(hits.contains("doc"));
    Ok(())
}

#[test]
fn test_append_only_growth() -> viola::Result<()> {
    let mut index = SignatureIndex::new(IndexConfig::new(32))?;
    for i in 0..5 {
        index.add(&format!("document number {}", i), &format!("doc{}", i))?;
    }

    assert_eq!(index.document_count(), 5);
    let snapshot = index.snapshot();
    assert_eq!(snapshot.keys.len(), 5);
    assert_eq!(snapshot.slices.len(), 32);
    for slice in &snapshot.slices {
        assert_eq!(slice.len(), 5, "every slice grows by one bit per add");
    }
    Ok(())
}

#[test]
fn test_zero_bit_length_rejected() {
    let result = SignatureIndex::new(IndexConfig::new(0));
    assert!(matches!(result, Err(ViolaError::InvalidConfig(_))));
}

#[test]
fn test_reconfigure_only_on_empty_index() -> viola::Result<()> {
    let mut index = SignatureIndex::new(IndexConfig::new(64))?;
    index.reconfigure(IndexConfig::new(128).with_locale("en"))?;
    assert_eq!(index.bit_length(), 128);

    index.add("hello", "doc1")?;
    let result = index.reconfigure(IndexConfig::new(256));
    assert!(matches!(result, Err(ViolaError::InvalidConfig(_))));
    assert_eq!(index.bit_length(), 128, "failed reconfigure changes nothing");
    Ok(())
}

#[test]
fn test_independent_indexes_coexist() -> viola::Result<()> {
    let mut a = SignatureIndex::new(IndexConfig::new(64))?;
    let mut b = SignatureIndex::new(IndexConfig::new(64))?;
    a.add("alpha", "a1")?;
    b.add("omega", "b1")?;

    assert!(a.search("alpha")?.contains("a1"));
    assert!(!b.search("alpha")?.contains("a1"));
    Ok(())
}

#[test]
fn test_injected_tokenizer() -> viola::Result<()> {
    // A caller-supplied segmenter: whitespace split, lowercased.
    struct LowercaseTokenizer;

    impl Tokenizer for LowercaseTokenizer {
        fn segment(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(|w| w.to_lowercase()).collect()
        }
    }

    let mut index =
        SignatureIndex::with_tokenizer(IndexConfig::new(128), Box::new(LowercaseTokenizer))?;
    index.add("Hello World", "doc1")?;

    let hits = index.search("hello")?;
    assert!(hits.contains("doc1"), "case folds through the tokenizer");
    Ok(())
}

#[test]
fn test_ngram_tokenizer_matches_partial_words() -> viola::Result<()> {
    let tokenizer = NGramTokenizer::new(1);
    assert_eq!(tokenizer.segment("ab"), vec!["a", "b"]);

    // Unigram mode: any character subset of an indexed text matches it.
    let mut index = SignatureIndex::new(IndexConfig::new(512))?;
    index.add("hello", "doc1")?;
    assert!(index.search("ell")?.contains("doc1"));
    Ok(())
}
