//! tokentrie - split text on added/special tokens in a single pass.
//!
//! A character trie over a fixed vocabulary of multi-character tokens
//! (`[CLS]`, `<|eot_id|>`, `<extra_id_0>`, ...) cuts input text so that every
//! occurrence of a vocabulary word becomes its own fragment, ready to be
//! passed on to a sub-word encoder:
//!
//! ```
//! use tokentrie::Trie;
//!
//! let trie = Trie::from_words(["extra_id_1", "extra_id_100"]);
//! assert_eq!(trie.split("a extra_id_100 b"), ["a ", "extra_id_100", " b"]);
//! ```
//!
//! Python bindings are available behind the `python` feature.

pub mod core;
#[cfg(feature = "python")]
mod python;

pub use self::core::{
    from_pretrained, insert_unique_sorted, is_control, is_end_of_word, is_punctuation,
    is_start_of_word, is_whitespace, ExtensionsTrie, Fragment, PretrainedTokens, Segment,
    StreamingSplitter, Trie, TrieError, VocabError,
};
