//! Core splitting engine for tokentrie.
//!
//! # Architecture
//!
//! - [`Trie`]: character trie over added/special tokens with the single-pass
//!   longest-match `split`, plus Rayon batch splitting
//! - [`ExtensionsTrie`]: a `Trie` that also enumerates every word sharing a
//!   prefix
//! - [`StreamingSplitter`]: incremental splitting for chunked input
//! - [`chars`]: word-boundary character classes
//! - [`vocab`]: loading token lists, tiktoken files and `added_tokens.json`
//! - [`pretrained`]: ready-made special token sets (Llama 3, BERT, T5)

pub mod chars;
mod extensions;
pub mod pretrained;
mod sorted;
mod streaming;
mod trie;
pub mod vocab;

pub use chars::{is_control, is_end_of_word, is_punctuation, is_start_of_word, is_whitespace};
pub use extensions::ExtensionsTrie;
pub use pretrained::{from_pretrained, PretrainedTokens};
pub use sorted::insert_unique_sorted;
pub use streaming::StreamingSplitter;
pub use trie::{Fragment, Segment, Trie, TrieError};
pub use vocab::{
    load_added_tokens_json, load_added_tokens_json_file, load_tiktoken_tokens,
    load_tiktoken_tokens_file, load_token_list, load_token_list_file, VocabError,
};
