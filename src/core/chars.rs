//! Character classes used to decide whether a token boundary falls on a
//! word boundary.
//!
//! These follow the BERT-style definitions: `\t`, `\n` and `\r` count as
//! whitespace rather than control characters, and all non-alphanumeric
//! printable ASCII counts as punctuation even where Unicode files it under
//! symbols (`$`, `^`, `` ` ``, ...).

use unicode_general_category::{get_general_category, GeneralCategory};

/// `' '`, `\t`, `\n`, `\r`, or any Unicode space separator (Zs).
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
        || matches!(get_general_category(c), GeneralCategory::SpaceSeparator)
}

/// Any Unicode "other" (C*) character except `\t`, `\n` and `\r`.
pub fn is_control(c: char) -> bool {
    if matches!(c, '\t' | '\n' | '\r') {
        return false;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// ASCII punctuation and symbols, or any Unicode punctuation (P*).
pub fn is_punctuation(c: char) -> bool {
    let cp = c as u32;
    if (33..=47).contains(&cp)
        || (58..=64).contains(&cp)
        || (91..=96).contains(&cp)
        || (123..=126).contains(&cp)
    {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

#[inline]
fn is_boundary(c: char) -> bool {
    is_control(c) || is_punctuation(c) || is_whitespace(c)
}

/// Whether the first character of `text` is whitespace, control or
/// punctuation.
///
/// Callers are expected to pass a non-empty string; an empty one returns
/// `false`.
pub fn is_start_of_word(text: &str) -> bool {
    text.chars().next().is_some_and(is_boundary)
}

/// Whether the last character of `text` is whitespace, control or
/// punctuation.
///
/// Callers are expected to pass a non-empty string; an empty one returns
/// `false`.
pub fn is_end_of_word(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_boundary)
}
