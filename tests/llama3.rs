//! Integration tests for the Llama 3/3.1/3.2/3.3 special token set.
//!
//! These tests verify that chat-template markers are isolated from the
//! surrounding text and that malformed markers pass through untouched.

use tokentrie::{from_pretrained, Segment, Trie};

fn create_llama3_trie() -> Trie {
    from_pretrained("llama3").expect("Failed to build Llama 3 trie")
}

/// Test that every alias builds the same token set.
#[test]
fn test_llama3_aliases() {
    let base = create_llama3_trie();
    for name in ["llama3.1", "llama3.2", "llama3.3"] {
        let trie = from_pretrained(name).unwrap();
        assert_eq!(trie.len(), base.len(), "Token count differs for {}", name);
    }
}

/// Test the number of special tokens (128000-128255).
#[test]
fn test_llama3_token_count() {
    let trie = create_llama3_trie();
    assert_eq!(trie.len(), 256);
    assert!(trie.contains("<|begin_of_text|>"));
    assert!(trie.contains("<|eot_id|>"));
    assert!(trie.contains("<|reserved_special_token_250|>"));
    assert!(!trie.contains("<|reserved_special_token_251|>"));
}

/// Test a full chat turn.
#[test]
fn test_llama3_chat_template() {
    let trie = create_llama3_trie();
    let text = "<|begin_of_text|><|start_header_id|>user<|end_header_id|>\n\nHi<|eot_id|>";

    assert_eq!(
        trie.split(text),
        vec![
            "<|begin_of_text|>",
            "<|start_header_id|>",
            "user",
            "<|end_header_id|>",
            "\n\nHi",
            "<|eot_id|>",
        ]
    );
}

/// Test a multi-turn conversation keeps message bodies intact.
#[test]
fn test_llama3_multi_turn() {
    let trie = create_llama3_trie();
    let text = "<|start_header_id|>system<|end_header_id|>\n\nBe brief.<|eot_id|>\
                <|start_header_id|>user<|end_header_id|>\n\nWhat is Rust?<|eot_id|>\
                <|start_header_id|>assistant<|end_header_id|>\n\n";

    let bodies: Vec<&str> = trie
        .split_segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(s) => Some(s),
            Segment::Token(_) => None,
        })
        .collect();
    assert_eq!(
        bodies,
        vec![
            "system",
            "\n\nBe brief.",
            "user",
            "\n\nWhat is Rust?",
            "assistant",
            "\n\n"
        ]
    );
}

/// Test reserved tokens whose names share a numeric prefix.
#[test]
fn test_llama3_reserved_tokens() {
    let trie = create_llama3_trie();
    assert_eq!(
        trie.split("<|reserved_special_token_1|><|reserved_special_token_10|><|reserved_special_token_100|>"),
        vec![
            "<|reserved_special_token_1|>",
            "<|reserved_special_token_10|>",
            "<|reserved_special_token_100|>",
        ]
    );
}

/// Test that incomplete markers are treated as text.
#[test]
fn test_llama3_malformed_markers() {
    let trie = create_llama3_trie();

    assert_eq!(trie.split("<|eot_id"), vec!["<|eot_id"]);
    assert_eq!(trie.split("<|eot_id|"), vec!["<|eot_id|"]);
    assert_eq!(
        trie.split("<|eot_id|<|eot_id|>"),
        vec!["<|eot_id|", "<|eot_id|>"]
    );
    assert_eq!(trie.split("<||eot_id|>"), vec!["<||eot_id|>"]);
}

/// Test that text without markers passes through.
#[test]
fn test_llama3_plain_text() {
    let trie = create_llama3_trie();
    let test_cases = [
        "Hello, world!",
        "a < b and c | d > e",
        "Unicode: こんにちは 世界 🦀",
        "<html><body>|pipes|</body></html>",
    ];

    for text in test_cases {
        assert_eq!(trie.split(text), vec![text], "Unexpected split for: {:?}", text);
    }
}

/// Test that unknown pretrained names are rejected with the supported list.
#[test]
fn test_unknown_pretrained_name() {
    let err = from_pretrained("llama2").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("llama2"));
    assert!(message.contains("llama3"));
}
