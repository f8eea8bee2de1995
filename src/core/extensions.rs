use std::ops::{Deref, DerefMut};

use super::trie::{NodeId, Trie};

/// A [`Trie`] that can also enumerate every vocabulary word sharing a prefix.
///
/// Derefs to [`Trie`], so insertion and splitting work unchanged.
///
/// ```
/// use tokentrie::ExtensionsTrie;
///
/// let trie = ExtensionsTrie::from_words(["apple", "app", "application"]);
/// assert_eq!(trie.extensions("app"), ["app", "apple", "application"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtensionsTrie {
    trie: Trie,
}

impl ExtensionsTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            trie: Trie::from_words(words),
        }
    }

    /// All vocabulary words that start with `prefix`, including `prefix`
    /// itself when it is a word.
    ///
    /// Words are returned in depth-first order with children visited by code
    /// point, which yields them sorted. If `prefix` leaves the trie partway,
    /// enumeration continues from the last node it reached and each suffix is
    /// still appended to the full `prefix`.
    pub fn extensions(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut word = prefix.to_string();
        self.collect_words(self.trie.prefix_node(prefix), &mut word, &mut out);
        out
    }

    fn collect_words(&self, id: NodeId, word: &mut String, out: &mut Vec<String>) {
        let node = self.trie.node(id);
        if node.terminal {
            out.push(word.clone());
        }

        let mut children: Vec<(char, NodeId)> =
            node.children.iter().map(|(&ch, &child)| (ch, child)).collect();
        children.sort_unstable_by_key(|&(ch, _)| ch);

        for (ch, child) in children {
            word.push(ch);
            self.collect_words(child, word, out);
            word.pop();
        }
    }

    pub fn into_inner(self) -> Trie {
        self.trie
    }
}

impl Deref for ExtensionsTrie {
    type Target = Trie;

    fn deref(&self) -> &Trie {
        &self.trie
    }
}

impl DerefMut for ExtensionsTrie {
    fn deref_mut(&mut self) -> &mut Trie {
        &mut self.trie
    }
}

impl From<Trie> for ExtensionsTrie {
    fn from(trie: Trie) -> Self {
        Self { trie }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionsTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
