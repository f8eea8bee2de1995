//! Integration tests for BERT bracket tokens and word-boundary checks.

use tokentrie::{
    from_pretrained, is_control, is_end_of_word, is_punctuation, is_start_of_word,
    is_whitespace, Segment, Trie,
};

fn create_bert_trie() -> Trie {
    from_pretrained("bert").expect("Failed to build BERT trie")
}

#[test]
fn test_bert_sentence_pair() {
    let trie = create_bert_trie();
    assert_eq!(
        trie.split("[CLS] the cat [MASK] on the mat [SEP] it was warm [SEP]"),
        vec![
            "[CLS]",
            " the cat ",
            "[MASK]",
            " on the mat ",
            "[SEP]",
            " it was warm ",
            "[SEP]",
        ]
    );
}

#[test]
fn test_bert_padding_run() {
    let trie = create_bert_trie();
    let text = "[CLS]hi[SEP][PAD][PAD][PAD]";
    let tokens = trie
        .split_segments(text)
        .into_iter()
        .filter(Segment::is_token)
        .count();
    assert_eq!(tokens, 5);
}

/// Test bracketed text that is not a vocabulary word.
#[test]
fn test_bert_lookalikes() {
    let trie = create_bert_trie();
    assert_eq!(trie.split("[CLS"), vec!["[CLS"]);
    assert_eq!(trie.split("[cls]"), vec!["[cls]"]);
    assert_eq!(trie.split("[[SEP]]"), vec!["[", "[SEP]", "]"]);
    assert_eq!(trie.split("[MASKED]"), vec!["[MASKED]"]);
}

/// Test deciding whether a token sits on word boundaries, the way added
/// tokens with `single_word` are checked.
#[test]
fn test_token_on_word_boundaries() {
    let trie = Trie::from_words(["ing"]);
    let text = "running ing.";
    let segments = trie.split_segments(text);
    assert_eq!(
        segments,
        vec![
            Segment::Text("runn"),
            Segment::Token("ing"),
            Segment::Text(" "),
            Segment::Token("ing"),
            Segment::Text("."),
        ]
    );

    // "runn" + "ing": the token is glued to the previous word
    assert!(!is_end_of_word("runn"));
    // " " + "ing" + ".": the token stands alone
    assert!(is_end_of_word(" "));
    assert!(is_start_of_word("."));
}

#[test]
fn test_character_classes() {
    assert!(is_whitespace('\u{3000}'));
    assert!(!is_control('\n'));
    assert!(is_control('\u{200B}'));
    assert!(is_punctuation('$'));
    assert!(is_punctuation('「'));
    assert!(!is_punctuation('a'));
    assert!(!is_start_of_word("word"));
    assert!(is_start_of_word("\u{0007}bell"));
}
