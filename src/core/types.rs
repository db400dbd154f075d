// src/core/types.rs
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One phonetic unit: a base code point, optionally followed by a single
/// diacritic fused onto it.
///
/// The derived ordering compares the base first and then the mark, with
/// `None` before `Some`, which is code-point-wise lexicographic order over
/// the underlying sequence ("a" < "aː" < "b").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    pub base: char,
    pub mark: Option<char>,
}

impl Symbol {
    pub fn new(base: char) -> Self {
        Self { base, mark: None }
    }

    pub fn fused(base: char, mark: char) -> Self {
        Self { base, mark: Some(mark) }
    }

    pub fn is_fused(&self) -> bool {
        self.mark.is_some()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(mark) = self.mark {
            write!(f, "{}", mark)?;
        }
        Ok(())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The category a symbol unit falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Syllabic,
    NonSyllabic,
    Diacritic,
    Tone,
    Junk,
}

impl Classification {
    /// Syllabic and non-syllabic units take part in bigrams; the rest are elided.
    pub fn is_significant(self) -> bool {
        matches!(self, Classification::Syllabic | Classification::NonSyllabic)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Syllabic => write!(f, "syllabic"),
            Classification::NonSyllabic => write!(f, "non-syllabic"),
            Classification::Diacritic => write!(f, "diacritic"),
            Classification::Tone => write!(f, "tone"),
            Classification::Junk => write!(f, "junk"),
        }
    }
}

/// One end of a bigram edge: either a vocabulary symbol or the stream boundary.
/// The boundary sorts before every symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    Boundary,
    Symbol(Symbol),
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Boundary => write!(f, "#"),
            Endpoint::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
