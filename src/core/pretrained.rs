//! Ready-made special token sets for common model families.
//!
//! - `llama3` - Meta Llama 3 family (256 special tokens)
//! - `bert` - BERT-style bracket tokens
//! - `t5` - T5 sentinel tokens (`<extra_id_0>` .. `<extra_id_99>`)
//!
//! # Example
//!
//! ```rust
//! use tokentrie::from_pretrained;
//!
//! let trie = from_pretrained("llama3").unwrap();
//! assert_eq!(
//!     trie.split("<|begin_of_text|>Hello<|eot_id|>"),
//!     ["<|begin_of_text|>", "Hello", "<|eot_id|>"]
//! );
//! ```

use tracing::debug;

use super::trie::{Trie, TrieError};

/// Number of T5 sentinel tokens in the stock vocabulary.
pub const T5_SENTINEL_COUNT: usize = 100;

/// Supported pretrained token sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PretrainedTokens {
    /// Meta Llama 3 family
    Llama3,
    /// BERT and its derivatives
    Bert,
    /// T5 / Flan-T5
    T5,
}

impl PretrainedTokens {
    /// Parse a token set name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "llama3" | "llama3.1" | "llama3.2" | "llama3.3" => Some(Self::Llama3),
            "bert" | "bert-base-cased" | "bert-base-uncased" => Some(Self::Bert),
            "t5" | "t5-base" | "flan-t5" => Some(Self::T5),
            _ => None,
        }
    }

    /// Get all supported token set names.
    pub fn supported_names() -> &'static [&'static str] {
        &[
            "llama3",
            "llama3.1",
            "llama3.2",
            "llama3.3",
            "bert",
            "bert-base-cased",
            "bert-base-uncased",
            "t5",
            "t5-base",
            "flan-t5",
        ]
    }

    pub fn tokens(self) -> Vec<String> {
        match self {
            Self::Llama3 => llama3_special_tokens(),
            Self::Bert => bert_special_tokens(),
            Self::T5 => {
                let mut tokens = vec!["</s>".to_string(), "<pad>".to_string(), "<unk>".to_string()];
                tokens.extend(t5_sentinel_tokens(T5_SENTINEL_COUNT));
                tokens
            }
        }
    }
}

/// Build a trie over a pretrained token set by name.
///
/// # Supported Names
/// - `llama3`, `llama3.1`, `llama3.2`, `llama3.3`
/// - `bert`, `bert-base-cased`, `bert-base-uncased`
/// - `t5`, `t5-base`, `flan-t5`
pub fn from_pretrained(name: &str) -> Result<Trie, TrieError> {
    let tokens = PretrainedTokens::from_name(name).ok_or_else(|| {
        TrieError::UnknownPretrained(format!(
            "{}. Supported: {}",
            name,
            PretrainedTokens::supported_names().join(", ")
        ))
    })?;

    let trie = Trie::from_words(tokens.tokens());
    debug!(name, tokens = trie.len(), "built pretrained trie");
    Ok(trie)
}

// =============================================================================
// Special token definitions
// =============================================================================

/// Llama 3 special tokens in id order (128000-128255).
pub fn llama3_special_tokens() -> Vec<String> {
    let mut tokens: Vec<String> = [
        "<|begin_of_text|>",
        "<|end_of_text|>",
        "<|reserved_special_token_0|>",
        "<|reserved_special_token_1|>",
        "<|reserved_special_token_2|>",
        "<|reserved_special_token_3|>",
        "<|start_header_id|>",
        "<|end_header_id|>",
        "<|reserved_special_token_4|>",
        "<|eot_id|>",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    // The remaining slots up to 256 are reserved
    tokens.extend((5..251).map(|i| format!("<|reserved_special_token_{}|>", i)));
    tokens
}

/// BERT bracket tokens.
pub fn bert_special_tokens() -> Vec<String> {
    ["[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// T5 sentinel tokens `<extra_id_0>` .. `<extra_id_{count - 1}>`.
pub fn t5_sentinel_tokens(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("<extra_id_{}>", i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llama3_token_count() {
        let tokens = llama3_special_tokens();
        assert_eq!(tokens.len(), 256);
        assert_eq!(tokens[9], "<|eot_id|>");
        assert_eq!(tokens[255], "<|reserved_special_token_250|>");
    }

    #[test]
    fn test_vocab_from_name() {
        assert_eq!(
            PretrainedTokens::from_name("llama3.2"),
            Some(PretrainedTokens::Llama3)
        );
        assert_eq!(
            PretrainedTokens::from_name("bert-base-cased"),
            Some(PretrainedTokens::Bert)
        );
        assert_eq!(PretrainedTokens::from_name("t5"), Some(PretrainedTokens::T5));
        assert_eq!(PretrainedTokens::from_name("gpt2"), None);
    }

    #[test]
    fn test_supported_names_parse() {
        for name in PretrainedTokens::supported_names() {
            assert!(PretrainedTokens::from_name(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn test_t5_tokens() {
        let tokens = PretrainedTokens::T5.tokens();
        assert_eq!(tokens.len(), 3 + T5_SENTINEL_COUNT);
        assert!(tokens.contains(&"<extra_id_99>".to_string()));
    }

    #[test]
    fn test_from_pretrained_unknown() {
        let err = from_pretrained("gpt2").unwrap_err();
        assert!(matches!(err, TrieError::UnknownPretrained(_)));
        assert!(err.to_string().contains("llama3"));
    }
}
