// src/lib.rs

pub mod core;
pub mod error;
pub mod language;
pub mod persistence;
pub mod report;

pub use crate::core::classifier::SymbolClassifier;
pub use crate::core::engine::{AnalysisOptions, AnalysisReport, Analyzer, VocabularyPolicy};
pub use crate::error::{AnalysisError, Result};
pub use crate::language::Language;
pub use crate::report::ReportFormatter;
