//! plume-spell: dictionary-based spell checking for the plume editor.
//!
//! A [`SpellChecker`] owns a set of known words and answers three questions:
//! is this word spelled correctly, what might the writer have meant, and
//! where are the misspelled words in this snapshot (as char-offset spans the
//! squiggle renderer can underline).
//!
//! The checker is deliberately forgiving: a missing dictionary produces a
//! disabled checker that approves everything rather than an editor that
//! refuses to start, and words containing digits or other non-letters are
//! never flagged (identifiers and serial numbers are not prose).
//!
//! Tokenization is ASCII-alphabetic word runs; internationalized
//! tokenization is out of scope for this checker.

mod checker;

pub use checker::{MisspelledWord, SpellChecker};
