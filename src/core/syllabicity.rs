// File: src/core/syllabicity.rs
use crate::core::classifier::SymbolClassifier;
use crate::core::types::{Classification, Symbol};
use crate::error::{AnalysisError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct symbols seen in one class and how often the class occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub symbols: BTreeSet<Symbol>,
    pub occurrences: u64,
}

impl CategoryTally {
    fn record(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol);
        self.occurrences += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyllabicityReport {
    pub syllabic: CategoryTally,
    pub non_syllabic: CategoryTally,
    pub junk: CategoryTally,
    pub diacritic_occurrences: u64,
    pub tone_occurrences: u64,
    /// Code points found in no table, with the index of the first unit
    /// that carried them. They are counted as non-syllabic.
    pub unclassified: BTreeMap<char, usize>,
}

impl SyllabicityReport {
    /// Tallies a symbol sequence by class.
    pub fn from_symbols(symbols: &[Symbol], classifier: &SymbolClassifier) -> Self {
        let mut report = Self::default();
        for (position, &symbol) in symbols.iter().enumerate() {
            match classifier.classify_symbol(&symbol) {
                Classification::Syllabic => report.syllabic.record(symbol),
                Classification::NonSyllabic => {
                    if classifier.is_unclassified(symbol.base) {
                        report.unclassified.entry(symbol.base).or_insert(position);
                    }
                    report.non_syllabic.record(symbol);
                }
                Classification::Junk => report.junk.record(symbol),
                Classification::Diacritic => report.diacritic_occurrences += 1,
                Classification::Tone => report.tone_occurrences += 1,
            }
        }

        for (code_point, position) in &report.unclassified {
            log::warn!(
                "{}: unclassified code point {:?} (U+{:04X}) first seen at unit {}, counted as non-syllabic",
                classifier.label(),
                code_point,
                *code_point as u32,
                position
            );
        }
        report
    }

    /// Units that are either syllabic or non-syllabic.
    pub fn counted_units(&self) -> u64 {
        self.syllabic.occurrences + self.non_syllabic.occurrences
    }

    /// `100 * syllabic / (syllabic + non-syllabic)`; undefined when no unit
    /// was either.
    pub fn percentage(&self) -> Result<f64> {
        let total = self.counted_units();
        if total == 0 {
            return Err(AnalysisError::Degenerate {
                units: (self.junk.occurrences + self.diacritic_occurrences + self.tone_occurrences)
                    as usize,
            });
        }
        Ok(100.0 * self.syllabic.occurrences as f64 / total as f64)
    }
}
