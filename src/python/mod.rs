mod bindings;

pub use bindings::{
    is_control, is_end_of_word, is_punctuation, is_start_of_word, is_whitespace,
    PyExtensionsTrie, PyTrie,
};

use pyo3::prelude::*;

/// tokentrie - single-pass added/special token splitting for Python
///
/// - Character trie with longest-match lookahead
/// - Rayon parallelism for batch splitting
/// - Prefix enumeration via ExtensionsTrie
/// - BERT-style word-boundary character classes
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTrie>()?;
    m.add_class::<PyExtensionsTrie>()?;
    m.add_function(wrap_pyfunction!(is_whitespace, m)?)?;
    m.add_function(wrap_pyfunction!(is_control, m)?)?;
    m.add_function(wrap_pyfunction!(is_punctuation, m)?)?;
    m.add_function(wrap_pyfunction!(is_start_of_word, m)?)?;
    m.add_function(wrap_pyfunction!(is_end_of_word, m)?)?;
    Ok(())
}
