// File: src/core/bigram.rs
use crate::core::classifier::SymbolClassifier;
use crate::core::frequency::Vocabulary;
use crate::core::types::{Endpoint, Symbol};
use serde::Serialize;
use std::collections::HashMap;

const BOUNDARY: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bigram {
    pub first: Endpoint,
    pub second: Endpoint,
    pub count: u64,
}

/// Dense adjacency counts over a fixed vocabulary.
///
/// Row/column 0 is the stream boundary; rows/columns `1..=n` follow the
/// vocabulary's rank order. Only the `n * n` symbol block is the table's
/// domain: boundary edges are counted but do not add to [`pair_count`] or
/// [`zero_count`].
///
/// [`pair_count`]: BigramTable::pair_count
/// [`zero_count`]: BigramTable::zero_count
#[derive(Debug, Clone)]
pub struct BigramTable {
    symbols: Vec<Symbol>,
    index: HashMap<Symbol, usize>,
    /// Maps (prev, current) -> frequency, row-major, `(n + 1)^2` cells
    counts: Vec<u64>,
}

impl BigramTable {
    /// Allocates every pair of the vocabulary with a zero count.
    pub fn with_domain(vocabulary: &Vocabulary) -> Self {
        let symbols: Vec<Symbol> = vocabulary.symbols().collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| (symbol, i + 1))
            .collect();
        let width = symbols.len() + 1;
        Self {
            symbols,
            index,
            counts: vec![0; width * width],
        }
    }

    /// Builds the domain from `vocabulary` and fills it from `sequence`.
    pub fn build(
        vocabulary: &Vocabulary,
        sequence: &[Symbol],
        classifier: &SymbolClassifier,
    ) -> Self {
        let mut table = Self::with_domain(vocabulary);
        table.fill(sequence, classifier);
        table
    }

    fn width(&self) -> usize {
        self.symbols.len() + 1
    }

    fn cell(&self, prev: usize, current: usize) -> usize {
        prev * self.width() + current
    }

    fn endpoint(&self, slot: usize) -> Endpoint {
        match slot {
            BOUNDARY => Endpoint::Boundary,
            i => Endpoint::Symbol(self.symbols[i - 1]),
        }
    }

    fn slot(&self, endpoint: &Endpoint) -> Option<usize> {
        match endpoint {
            Endpoint::Boundary => Some(BOUNDARY),
            Endpoint::Symbol(symbol) => self.index.get(symbol).copied(),
        }
    }

    /// Counts adjacent significant symbols. Diacritic, tone and junk units
    /// never move `prev`; they are only tallied when the domain holds them.
    /// The final symbol is closed against the boundary.
    fn fill(&mut self, sequence: &[Symbol], classifier: &SymbolClassifier) {
        let mut prev = BOUNDARY;
        for symbol in sequence {
            let slot = self.index.get(symbol).copied();
            if classifier.is_significant(symbol) {
                match slot {
                    Some(current) => {
                        let cell = self.cell(prev, current);
                        self.counts[cell] += 1;
                        prev = current;
                    }
                    None => log::warn!("symbol {} is missing from the bigram domain", symbol),
                }
            } else if let Some(current) = slot {
                let cell = self.cell(prev, current);
                self.counts[cell] += 1;
            }
        }
        let cell = self.cell(prev, BOUNDARY);
        self.counts[cell] += 1;
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Count for one pair, or `None` when either end is outside the table.
    pub fn count(&self, first: &Endpoint, second: &Endpoint) -> Option<u64> {
        let prev = self.slot(first)?;
        let current = self.slot(second)?;
        Some(self.counts[self.cell(prev, current)])
    }

    /// Size of the domain, |V|².
    pub fn pair_count(&self) -> usize {
        self.symbols.len() * self.symbols.len()
    }

    /// Domain pairs that were never observed.
    pub fn zero_count(&self) -> usize {
        self.domain_cells().filter(|&(_, _, c)| c == 0).count()
    }

    /// Sum of every count, boundary edges included.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn domain_cells(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        let n = self.symbols.len();
        (1..=n).flat_map(move |p| (1..=n).map(move |c| (p, c, self.counts[self.cell(p, c)])))
    }

    /// The `n` most frequent bigrams, highest count first, ties broken by
    /// pair order. Domain pairs are ranked even at zero; boundary edges only
    /// when they occurred.
    pub fn top(&self, n: usize) -> Vec<Bigram> {
        let width = self.width();
        let mut ranked: Vec<Bigram> = (0..width)
            .flat_map(|p| (0..width).map(move |c| (p, c)))
            .filter_map(|(p, c)| {
                let count = self.counts[self.cell(p, c)];
                let boundary_edge = p == BOUNDARY || c == BOUNDARY;
                if boundary_edge && count == 0 {
                    return None;
                }
                Some(Bigram {
                    first: self.endpoint(p),
                    second: self.endpoint(c),
                    count,
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| (a.first, a.second).cmp(&(b.first, b.second)))
        });
        ranked.truncate(n);
        ranked
    }
}
