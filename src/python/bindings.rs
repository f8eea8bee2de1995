//! Python bindings for the tokentrie splitter.
//!
//! This module provides PyO3 wrappers around the core Rust trie, exposing the
//! same interface as the pure-Python added-token trie it replaces.
//!
//! # Example
//!
//! ```python
//! from tokentrie import Trie
//!
//! trie = Trie(["[CLS]", "extra_id_1", "extra_id_100"])
//! trie.split("[CLS] This is a extra_id_100")
//! # ['[CLS]', ' This is a ', 'extra_id_100']
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{chars, from_pretrained, ExtensionsTrie, Trie};

/// Python wrapper for the Rust Trie.
#[pyclass(name = "Trie")]
pub struct PyTrie {
    inner: Trie,
}

#[pymethods]
impl PyTrie {
    /// Create a trie, optionally seeded with words.
    ///
    /// Args:
    ///     words: Optional list of vocabulary words
    #[new]
    #[pyo3(signature = (words=None))]
    fn new(words: Option<Vec<String>>) -> Self {
        Self {
            inner: Trie::from_words(words.unwrap_or_default()),
        }
    }

    /// Create a trie from a pretrained token set name.
    ///
    /// Currently supported:
    /// - "llama3" / "llama3.1" / "llama3.2" / "llama3.3"
    /// - "bert" / "bert-base-cased" / "bert-base-uncased"
    /// - "t5" / "t5-base" / "flan-t5"
    #[staticmethod]
    fn from_pretrained(name: &str) -> PyResult<Self> {
        let inner = from_pretrained(name).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Add a word. Empty words are ignored.
    ///
    /// Returns:
    ///     True if the word was not present before
    fn add(&mut self, word: &str) -> bool {
        self.inner.insert(word)
    }

    /// Add every word of a list.
    fn update(&mut self, words: Vec<String>) {
        self.inner.update(words);
    }

    /// Split text along the boundaries of the vocabulary words found in it.
    ///
    /// Args:
    ///     text: Input text
    ///
    /// Returns:
    ///     List of non-empty fragments that concatenate back to `text`
    fn split(&self, text: &str) -> Vec<String> {
        self.inner.split(text).into_iter().map(str::to_string).collect()
    }

    /// Split multiple texts in parallel.
    fn split_batch(&self, texts: Vec<String>) -> Vec<Vec<String>> {
        self.inner
            .split_batch(&texts)
            .into_iter()
            .map(|fragments| fragments.into_iter().map(str::to_string).collect())
            .collect()
    }

    fn __contains__(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// Python wrapper for the Rust ExtensionsTrie.
#[pyclass(name = "ExtensionsTrie")]
pub struct PyExtensionsTrie {
    inner: ExtensionsTrie,
}

#[pymethods]
impl PyExtensionsTrie {
    #[new]
    #[pyo3(signature = (words=None))]
    fn new(words: Option<Vec<String>>) -> Self {
        Self {
            inner: ExtensionsTrie::from_words(words.unwrap_or_default()),
        }
    }

    fn add(&mut self, word: &str) -> bool {
        self.inner.insert(word)
    }

    fn update(&mut self, words: Vec<String>) {
        self.inner.update(words);
    }

    fn split(&self, text: &str) -> Vec<String> {
        self.inner.split(text).into_iter().map(str::to_string).collect()
    }

    /// All words starting with `prefix`, including `prefix` itself if it
    /// is a word.
    fn extensions(&self, prefix: &str) -> Vec<String> {
        self.inner.extensions(prefix)
    }

    fn __contains__(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

#[pyfunction]
pub fn is_whitespace(c: char) -> bool {
    chars::is_whitespace(c)
}

#[pyfunction]
pub fn is_control(c: char) -> bool {
    chars::is_control(c)
}

#[pyfunction]
pub fn is_punctuation(c: char) -> bool {
    chars::is_punctuation(c)
}

/// Raises:
///     ValueError: If `text` is empty
#[pyfunction]
pub fn is_start_of_word(text: &str) -> PyResult<bool> {
    if text.is_empty() {
        return Err(PyValueError::new_err("text must not be empty"));
    }
    Ok(chars::is_start_of_word(text))
}

/// Raises:
///     ValueError: If `text` is empty
#[pyfunction]
pub fn is_end_of_word(text: &str) -> PyResult<bool> {
    if text.is_empty() {
        return Err(PyValueError::new_err("text must not be empty"));
    }
    Ok(chars::is_end_of_word(text))
}
