//! Vocabulary loading for added/special token lists.
//!
//! Added tokens usually ship next to a model's tokenizer in one of three
//! shapes, all of which load into a plain `Vec<String>` ready for
//! [`Trie::from_words`](super::Trie::from_words):
//!
//! - A plain token list, one token per line (`\n` or `\r\n`):
//!
//!   ```text
//!   [CLS]
//!   [SEP]
//!   <mask>
//!   ```
//!
//! - The tiktoken format, a base64-encoded token and its rank per line. Tokens
//!   come back ordered by rank:
//!
//!   ```text
//!   W0NMU10= 0
//!   PGZvbz4= 1
//!   ```
//!
//! - An `added_tokens.json` object mapping token to id. Tokens come back
//!   ordered by id:
//!
//!   ```text
//!   {"<extra_id_0>": 32099, "<extra_id_1>": 32098}
//!   ```
//!
//! Leading and trailing spaces are part of a token and are kept.

use base64::{engine::general_purpose::STANDARD, Engine};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading vocabulary files.
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("Invalid base64 encoding: {0}")]
    Base64Error(#[from] base64::DecodeError),
    #[error("Invalid line format: {0}")]
    ParseError(String),
    #[error("Invalid UTF-8 in token on line {0}")]
    Utf8Error(usize),
    #[error("Invalid added tokens JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Iterate over non-empty lines with their 1-based line numbers, dropping a
/// trailing `\r`.
fn lines(data: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    data.split(|&b| b == b'\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.strip_suffix(b"\r").unwrap_or(line)))
        .filter(|(_, line)| !line.is_empty())
}

/// Load a token list with one token per line. Blank lines are skipped.
pub fn load_token_list(data: &[u8]) -> Result<Vec<String>, VocabError> {
    lines(data)
        .map(|(line_no, line)| {
            std::str::from_utf8(line)
                .map(str::to_string)
                .map_err(|_| VocabError::Utf8Error(line_no))
        })
        .collect()
}

/// Load a token list from a file path.
pub fn load_token_list_file(path: &str) -> Result<Vec<String>, VocabError> {
    let data = std::fs::read(path)?;
    let tokens = load_token_list(&data)?;
    debug!(path, count = tokens.len(), "loaded token list");
    Ok(tokens)
}

/// Load tiktoken-format tokens (`base64_token rank` per line), ordered by rank.
///
/// Every token must decode to valid UTF-8; byte-fallback fragments have no
/// place in a character trie.
pub fn load_tiktoken_tokens(data: &[u8]) -> Result<Vec<String>, VocabError> {
    let mut ranked = Vec::new();

    for (line_no, line) in lines(data) {
        // Find the space separator
        let space_pos = line
            .iter()
            .rposition(|&b| b == b' ')
            .ok_or_else(|| VocabError::ParseError("Missing space separator".to_string()))?;

        let token_b64 = &line[..space_pos];
        let rank_str = &line[space_pos + 1..];

        let token = STANDARD.decode(token_b64)?;
        let token = String::from_utf8(token).map_err(|_| VocabError::Utf8Error(line_no))?;

        let rank_str = std::str::from_utf8(rank_str)
            .map_err(|_| VocabError::ParseError("Invalid UTF-8 in rank".to_string()))?;
        let rank: u32 = rank_str
            .trim()
            .parse()
            .map_err(|_| VocabError::ParseError(format!("Invalid rank: {}", rank_str)))?;

        ranked.push((rank, token));
    }

    ranked.sort();
    Ok(ranked.into_iter().map(|(_, token)| token).collect())
}

/// Load tiktoken-format tokens from a file path.
pub fn load_tiktoken_tokens_file(path: &str) -> Result<Vec<String>, VocabError> {
    let data = std::fs::read(path)?;
    let tokens = load_tiktoken_tokens(&data)?;
    debug!(path, count = tokens.len(), "loaded tiktoken tokens");
    Ok(tokens)
}

/// Load an `added_tokens.json` object (`{"token": id, ...}`), ordered by id.
pub fn load_added_tokens_json(data: &[u8]) -> Result<Vec<String>, VocabError> {
    let added: FxHashMap<String, u32> = serde_json::from_slice(data)?;
    let mut ranked: Vec<(u32, String)> = added.into_iter().map(|(k, v)| (v, k)).collect();
    ranked.sort();
    Ok(ranked.into_iter().map(|(_, token)| token).collect())
}

/// Load an `added_tokens.json` file.
pub fn load_added_tokens_json_file(path: &str) -> Result<Vec<String>, VocabError> {
    let data = std::fs::read(path)?;
    let tokens = load_added_tokens_json(&data)?;
    debug!(path, count = tokens.len(), "loaded added tokens");
    Ok(tokens)
}
