//! Incremental splitting for text that arrives in chunks.
//!
//! When text is streamed (for example LLM output decoded token by token), a
//! vocabulary word may straddle two chunks. [`StreamingSplitter`] buffers the
//! tail of the input that a future chunk could still turn into a match and
//! only emits fragments whose split can no longer change.
//!
//! A match accepted by the scan depends on at most `max_token_chars`
//! characters past its start, so everything that starts more than that many
//! characters before the end of the buffer is final.

use super::trie::{Fragment, Trie};

/// A streaming splitter that holds back text that may still form a match.
///
/// Emitted vocabulary matches are always whole and identical to what
/// [`Trie::split`] produces on the full text. Plain text between matches may
/// arrive in several pieces.
///
/// # Example
///
/// ```
/// use tokentrie::{StreamingSplitter, Trie};
///
/// let trie = Trie::from_words(["<|eot_id|>"]);
/// let mut splitter = StreamingSplitter::new(&trie);
///
/// let mut fragments = Vec::new();
/// for chunk in ["Hello<|eo", "t_id|>", " bye"] {
///     fragments.extend(splitter.push(chunk));
/// }
/// fragments.extend(splitter.flush());
///
/// let tokens: Vec<_> = fragments.iter().filter(|f| f.is_token()).map(|f| f.as_str()).collect();
/// assert_eq!(tokens, ["<|eot_id|>"]);
/// ```
pub struct StreamingSplitter<'a> {
    trie: &'a Trie,
    buffer: String,
}

impl<'a> StreamingSplitter<'a> {
    /// Create a new streaming splitter over the given trie.
    pub fn new(trie: &'a Trie) -> Self {
        Self {
            trie,
            buffer: String::new(),
        }
    }

    /// Append a chunk and return every fragment that is now final.
    pub fn push(&mut self, chunk: &str) -> Vec<Fragment> {
        self.buffer.push_str(chunk);

        let chars: Vec<(usize, char)> = self.buffer.char_indices().collect();
        let horizon = self.trie.max_token_chars();
        if chars.len() <= horizon {
            return Vec::new();
        }
        // Fragments starting before `limit` are settled
        let limit = chars.len() - horizon;
        let byte_at = |i: usize| chars.get(i).map_or(self.buffer.len(), |&(b, _)| b);

        let mut fragments = Vec::new();
        let mut consumed = 0;
        for span in self.trie.split_spans(&chars) {
            if span.chars.start >= limit {
                break;
            }
            let end = if span.token {
                span.chars.end
            } else {
                span.chars.end.min(limit)
            };
            let text = self.buffer[byte_at(span.chars.start)..byte_at(end)].to_string();
            fragments.push(if span.token {
                Fragment::Token(text)
            } else {
                Fragment::Text(text)
            });
            consumed = end;
        }

        let consumed_bytes = byte_at(consumed);
        self.buffer.drain(..consumed_bytes);
        fragments
    }

    /// Split and return whatever is still buffered, treating it as the end of
    /// the input.
    pub fn flush(&mut self) -> Vec<Fragment> {
        let fragments = self
            .trie
            .split_segments(&self.buffer)
            .into_iter()
            .map(Fragment::from)
            .collect();
        self.buffer.clear();
        fragments
    }

    /// Reset the splitter state, discarding any buffered text.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Check if there is buffered text waiting for more input.
    pub fn has_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Get the number of pending bytes in the buffer.
    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }
}
