// File: src/error.rs
use crate::core::types::Classification;
use std::path::PathBuf;

/// Everything that can stop an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("unknown language identifier '{0}'")]
    UnknownLanguage(String),

    #[error("{script} inventory lists {code_point:?} as both {first} and {second}")]
    OverlappingClasses {
        script: String,
        code_point: char,
        first: Classification,
        second: Classification,
    },

    #[error("invalid inventory file {path}: {source}")]
    InvalidInventory {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read corpus {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syllabic percentage undefined: none of the {units} symbol units is syllabic or non-syllabic")]
    Degenerate { units: usize },

    #[error("cannot encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
