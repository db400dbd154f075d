// File: src/core/frequency.rs
use crate::core::classifier::SymbolClassifier;
use crate::core::types::Symbol;
use serde::Serialize;
use std::collections::HashMap;

/// Accumulates per-symbol occurrence counts, whatever the symbol's class.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    counts: HashMap<Symbol, u64>,
    total: u64,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of units seen so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Most frequent first, ties broken by symbol order.
    pub fn into_vocabulary(self) -> Vocabulary {
        let mut entries: Vec<VocabularyEntry> = self
            .counts
            .into_iter()
            .map(|(symbol, count)| VocabularyEntry { symbol, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.symbol.cmp(&b.symbol)));
        Vocabulary { entries }
    }
}

impl Extend<Symbol> for FrequencyCounter {
    fn extend<I: IntoIterator<Item = Symbol>>(&mut self, iter: I) {
        for symbol in iter {
            self.add(symbol);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub symbol: Symbol,
    pub count: u64,
}

/// Ranked symbol inventory of one stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|e| e.symbol)
    }

    pub fn count_of(&self, symbol: &Symbol) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| &e.symbol == symbol)
            .map(|e| e.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Drops diacritic, tone and junk units; rank order is preserved.
    pub fn significant_only(&self, classifier: &SymbolClassifier) -> Vocabulary {
        Vocabulary {
            entries: self
                .entries
                .iter()
                .filter(|e| classifier.is_significant(&e.symbol))
                .copied()
                .collect(),
        }
    }
}
