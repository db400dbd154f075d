use crate::core::bigram::{Bigram, BigramTable};
use crate::core::classifier::SymbolClassifier;
use crate::core::frequency::{FrequencyCounter, Vocabulary};
use crate::core::syllabicity::SyllabicityReport;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::Symbol;
use crate::error::Result;
use serde::{Deserialize, Serialize};

const DEFAULT_TOP_BIGRAMS: usize = 10;

/// Which vocabulary sizes the bigram domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyPolicy {
    /// Only syllabic and non-syllabic symbols.
    #[default]
    SignificantOnly,
    /// Every observed unit, including standalone diacritics, tones and junk.
    AllSymbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    pub top_n: usize,
    pub vocabulary_policy: VocabularyPolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_BIGRAMS,
            vocabulary_policy: VocabularyPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BigramSummary {
    pub pairs: usize,
    pub zeros: usize,
    pub total: u64,
    pub top: Vec<Bigram>,
}

/// Everything one run produces, ready for formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub label: String,
    /// Non-whitespace code points in the stream.
    pub corpus_size: usize,
    pub units: usize,
    pub vocabulary: Vocabulary,
    pub syllabicity: SyllabicityReport,
    pub syllabic_percentage: f64,
    pub bigrams: BigramSummary,
}

/// Runs the full pipeline for one stream. Holds no state between runs.
pub struct Analyzer {
    classifier: SymbolClassifier,
    options: AnalysisOptions,
}

impl Analyzer {
    pub fn new(classifier: SymbolClassifier) -> Self {
        Self::with_options(classifier, AnalysisOptions::default())
    }

    pub fn with_options(classifier: SymbolClassifier, options: AnalysisOptions) -> Self {
        Self { classifier, options }
    }

    pub fn classifier(&self) -> &SymbolClassifier {
        &self.classifier
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn tokenize<'a>(&'a self, stream: &'a str) -> Tokenizer<'a> {
        Tokenizer::new(stream, &self.classifier)
    }

    /// Tokenizes, counts and tallies `stream`. Fails when no unit is
    /// syllabic or non-syllabic, since the percentage is then undefined.
    pub fn analyze(&self, stream: &str) -> Result<AnalysisReport> {
        let sequence: Vec<Symbol> = self.tokenize(stream).collect();
        log::debug!("{}: {} symbol units", self.classifier.label(), sequence.len());

        let mut counter = FrequencyCounter::new();
        counter.extend(sequence.iter().copied());
        let vocabulary = counter.into_vocabulary();

        let syllabicity = SyllabicityReport::from_symbols(&sequence, &self.classifier);
        let syllabic_percentage = syllabicity.percentage()?;

        let domain = match self.options.vocabulary_policy {
            VocabularyPolicy::SignificantOnly => vocabulary.significant_only(&self.classifier),
            VocabularyPolicy::AllSymbols => vocabulary.clone(),
        };
        let table = BigramTable::build(&domain, &sequence, &self.classifier);
        log::debug!(
            "{}: bigram domain of {} symbols, {} pairs",
            self.classifier.label(),
            domain.len(),
            table.pair_count()
        );

        Ok(AnalysisReport {
            label: self.classifier.label().to_string(),
            corpus_size: stream.chars().filter(|c| !c.is_whitespace()).count(),
            units: sequence.len(),
            vocabulary,
            syllabicity,
            syllabic_percentage,
            bigrams: BigramSummary {
                pairs: table.pair_count(),
                zeros: table.zero_count(),
                total: table.total(),
                top: table.top(self.options.top_n),
            },
        })
    }
}
