use std::ops::Range;

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::error;

use super::vocab::{load_token_list, load_token_list_file, VocabError};

#[derive(Error, Debug)]
pub enum TrieError {
    #[error("Vocabulary error: {0}")]
    VocabError(#[from] VocabError),
    #[error("Unknown pretrained token set: {0}")]
    UnknownPretrained(String),
}

/// Index of a node in the trie arena.
pub(crate) type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) children: FxHashMap<char, NodeId>,
    pub(crate) terminal: bool,
}

/// A fragment produced by [`Trie::split_segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// An accepted vocabulary match.
    Token(&'a str),
    /// Text between matches.
    Text(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Token(s) | Segment::Text(s) => s,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Segment::Token(_))
    }
}

/// An owned fragment, for output that outlives the text it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Token(String),
    Text(String),
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Token(s) | Fragment::Text(s) => s,
        }
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Fragment::Token(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Fragment::Token(s) | Fragment::Text(s) => s,
        }
    }
}

impl From<Segment<'_>> for Fragment {
    fn from(segment: Segment<'_>) -> Self {
        match segment {
            Segment::Token(s) => Fragment::Token(s.to_string()),
            Segment::Text(s) => Fragment::Text(s.to_string()),
        }
    }
}

/// A cut span over character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) chars: Range<usize>,
    pub(crate) token: bool,
}

/// Partial match in progress during a scan.
#[derive(Debug, Clone, Copy)]
struct MatchState {
    start: usize,
    node: NodeId,
    alive: bool,
}

/// Character trie over a vocabulary of added/special tokens.
///
/// The trie splits text in one left-to-right pass so that every occurrence of
/// a vocabulary word becomes its own fragment:
///
/// ```
/// use tokentrie::Trie;
///
/// let mut trie = Trie::new();
/// assert_eq!(trie.split("[CLS] This is a extra_id_100"), ["[CLS] This is a extra_id_100"]);
///
/// trie.insert("[CLS]");
/// trie.insert("extra_id_1");
/// trie.insert("extra_id_100");
/// assert_eq!(
///     trie.split("[CLS] This is a extra_id_100"),
///     ["[CLS]", " This is a ", "extra_id_100"]
/// );
/// ```
///
/// # Matching rules
///
/// - The first partial match to complete wins and drops every other partial
///   match (greedy).
/// - Before a completed match is accepted, a lookahead extends it, or an
///   earlier-starting partial match, to the longest vocabulary word available.
///   Earliest start wins, then longest end.
///
/// # Thread Safety
///
/// Insertion takes `&mut self`; splitting takes `&self` and keeps all scan
/// state local to the call, so a built trie can be shared across threads.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    tokens: FxHashSet<String>,
    max_token_chars: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            tokens: FxHashSet::default(),
            max_token_chars: 0,
        }
    }

    /// Create a trie seeded with `words`. Duplicates and empty strings are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.update(words);
        trie
    }

    /// Create a trie from a newline-delimited token list.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TrieError> {
        Ok(Self::from_words(load_token_list(data)?))
    }

    /// Create a trie from a newline-delimited token list file.
    pub fn from_file(path: &str) -> Result<Self, TrieError> {
        Ok(Self::from_words(load_token_list_file(path)?))
    }

    /// Add `word` to the vocabulary.
    ///
    /// Returns `true` if the word was not present before. Empty words are
    /// ignored, and inserting a word twice leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || self.tokens.contains(word) {
            return false;
        }

        let mut node = ROOT;
        let mut len = 0;
        for ch in word.chars() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
            len += 1;
        }
        self.nodes[node].terminal = true;
        self.max_token_chars = self.max_token_chars.max(len);
        self.tokens.insert(word.to_string());
        true
    }

    /// Add every word of `words`.
    pub fn update<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }

    /// Number of distinct words in the vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the vocabulary in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Length in characters of the longest vocabulary word.
    pub fn max_token_chars(&self) -> usize {
        self.max_token_chars
    }

    /// Split `text` along the boundaries of the vocabulary words found in it.
    ///
    /// Fragments are never empty and concatenate back to `text`.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_segments(text)
            .into_iter()
            .map(|segment| segment.as_str())
            .collect()
    }

    /// Like [`split`](Self::split), but tags each fragment as a vocabulary
    /// match or plain text.
    pub fn split_segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

        self.split_spans(&chars)
            .into_iter()
            .map(|span| {
                let fragment = &text[byte_at(span.chars.start)..byte_at(span.chars.end)];
                if span.token {
                    Segment::Token(fragment)
                } else {
                    Segment::Text(fragment)
                }
            })
            .collect()
    }

    /// Split many texts in parallel. Output order follows input order.
    pub fn split_batch<'a, S>(&self, texts: &'a [S]) -> Vec<Vec<&'a str>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.split(text.as_ref()))
            .collect()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Walk `prefix` from the root, stopping at the last reachable node.
    pub(crate) fn prefix_node(&self, prefix: &str) -> NodeId {
        let mut node = ROOT;
        for ch in prefix.chars() {
            match self.child(node, ch) {
                Some(child) => node = child,
                None => break,
            }
        }
        node
    }

    #[inline]
    fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node].children.get(&ch).copied()
    }

    #[inline]
    fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    pub(crate) fn split_spans(&self, chars: &[(usize, char)]) -> Vec<Span> {
        let offsets = self.cut_offsets(chars);
        cut_spans(&offsets, chars.len())
    }

    /// Scan `chars` once and return the cut points: `0`, then one
    /// `(start, end)` pair per accepted match, in character offsets.
    fn cut_offsets(&self, chars: &[(usize, char)]) -> Vec<usize> {
        let mut states: Vec<MatchState> = Vec::new();
        let mut offsets = vec![0];
        // Characters below `skip` were consumed by a lookahead.
        let mut skip = 0;

        for (current, &(_, ch)) in chars.iter().enumerate() {
            if current < skip {
                continue;
            }

            let mut accepted = None;
            for i in 0..states.len() {
                let state = states[i];
                if self.is_terminal(state.node) {
                    accepted = Some(self.resolve_longest_match(
                        &states,
                        state.start,
                        current,
                        chars,
                    ));
                    break;
                }
                match self.child(state.node, ch) {
                    Some(next) => states[i].node = next,
                    None => states[i].alive = false,
                }
            }

            match accepted {
                Some((start, end)) => {
                    offsets.push(start);
                    offsets.push(end);
                    skip = end;
                    states.clear();
                }
                None => states.retain(|state| state.alive),
            }

            if current >= skip {
                if let Some(node) = self.child(ROOT, ch) {
                    states.push(MatchState {
                        start: current,
                        node,
                        alive: true,
                    });
                }
            }
        }

        // Input exhausted: the earliest complete partial match wins.
        if let Some(state) = states.iter().find(|state| self.is_terminal(state.node)) {
            offsets.push(state.start);
            offsets.push(chars.len());
        }

        offsets
    }

    /// Resolve the match to accept once the state starting at `start` has
    /// completed a word right before `current`.
    ///
    /// Every live state starting at or before `start` is walked forward
    /// through the trie, in ascending start order. The first one that reaches
    /// a terminal node wins, with the longest end it reaches. States before
    /// `start` have already consumed `current`, so their walk resumes one
    /// character later.
    fn resolve_longest_match(
        &self,
        states: &[MatchState],
        start: usize,
        current: usize,
        chars: &[(usize, char)],
    ) -> (usize, usize) {
        for state in states.iter().take_while(|state| state.start <= start) {
            if !state.alive {
                continue;
            }

            let mut index = if state.start < start { current + 1 } else { current };
            let mut node = state.node;
            let mut end = self.is_terminal(node).then_some(index);

            while let Some(&(_, next)) = chars.get(index) {
                let Some(child) = self.child(node, next) else {
                    break;
                };
                node = child;
                index += 1;
                if self.is_terminal(node) {
                    end = Some(index);
                }
            }

            if let Some(end) = end {
                return (state.start, end);
            }
        }

        (start, current)
    }
}

/// Turn cut points into non-empty spans covering `0..len`.
///
/// Zero-width spans are dropped. An inverted span means the scan produced
/// inconsistent offsets; it is logged and skipped so callers still get a
/// best-effort split.
fn cut_spans(offsets: &[usize], len: usize) -> Vec<Span> {
    let mut spans = Vec::with_capacity(offsets.len());
    let mut start = 0;

    for (k, &end) in offsets.iter().chain(std::iter::once(&len)).enumerate() {
        if start > end {
            error!(
                start,
                end, "inverted span while cutting text along trie matches, skipping it"
            );
            continue;
        }
        if start == end {
            continue;
        }

        // offsets[2i - 1]..offsets[2i] is an accepted match
        let token = k >= 2 && k % 2 == 0 && offsets[k - 1] == start;
        spans.push(Span {
            chars: start..end,
            token,
        });
        start = end;
    }

    spans
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.update(iter);
    }
}
