// File: src/language.rs
use crate::core::inventory::Script;
use crate::error::{AnalysisError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// A transcribed corpus the analyzer knows how to locate and classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Mandarin,
    English,
    EnglishEmma,
    French,
    Hindi,
    Polish,
    Russian,
    Spanish,
    Thai,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::Mandarin,
        Language::English,
        Language::EnglishEmma,
        Language::French,
        Language::Hindi,
        Language::Polish,
        Language::Russian,
        Language::Spanish,
        Language::Thai,
    ];

    /// Parses a corpus identifier such as `"eng"` or `"emma"`.
    ///
    /// Matching is case-insensitive.
    pub fn from_code(code: &str) -> Result<Language> {
        match code.to_ascii_lowercase().as_str() {
            "cmn" => Ok(Language::Mandarin),
            "eng" => Ok(Language::English),
            "emma" => Ok(Language::EnglishEmma),
            "fra" => Ok(Language::French),
            "hin" => Ok(Language::Hindi),
            "pol" => Ok(Language::Polish),
            "rus" => Ok(Language::Russian),
            "spa" => Ok(Language::Spanish),
            "tha" => Ok(Language::Thai),
            _ => Err(AnalysisError::UnknownLanguage(code.to_string())),
        }
    }

    /// Expands a list of identifiers; `all` selects every language.
    /// Any unknown identifier rejects the whole list.
    pub fn parse_list<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Language>> {
        let mut languages: Vec<Language> = Vec::new();
        for code in codes {
            let selected = if code.as_ref().eq_ignore_ascii_case("all") {
                Language::ALL.to_vec()
            } else {
                vec![Language::from_code(code.as_ref())?]
            };
            for language in selected {
                if !languages.contains(&language) {
                    languages.push(language);
                }
            }
        }
        Ok(languages)
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Mandarin => "cmn",
            Language::English => "eng",
            Language::EnglishEmma => "emma",
            Language::French => "fra",
            Language::Hindi => "hin",
            Language::Polish => "pol",
            Language::Russian => "rus",
            Language::Spanish => "spa",
            Language::Thai => "tha",
        }
    }

    /// Language-corpus prefix shared by the input and output files.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Language::Mandarin => "cmn-gsd",
            Language::English => "eng-ewt",
            Language::EnglishEmma => "eng-emma",
            Language::French => "fra-gsd",
            Language::Hindi => "hin-hdtb",
            Language::Polish => "pol-pdb",
            Language::Russian => "rus-syntagrus",
            Language::Spanish => "spa-ancora",
            Language::Thai => "tha-pud",
        }
    }

    /// Script of the source text the IPA was transliterated from.
    pub fn script(self) -> Script {
        match self {
            Language::Mandarin => Script::Han,
            Language::Hindi => Script::Devanagari,
            Language::Russian => Script::Cyrillic,
            Language::Thai => Script::Thai,
            Language::English
            | Language::EnglishEmma
            | Language::French
            | Language::Polish
            | Language::Spanish => Script::Latin,
        }
    }

    pub fn input_path(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}-ipa.txt", self.file_prefix()))
    }

    pub fn report_path(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}-stats.txt", self.file_prefix()))
    }

    pub fn summary_path(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}-stats.json", self.file_prefix()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Mandarin => write!(f, "Mandarin"),
            Language::English => write!(f, "English"),
            Language::EnglishEmma => write!(f, "English (Emma)"),
            Language::French => write!(f, "French"),
            Language::Hindi => write!(f, "Hindi"),
            Language::Polish => write!(f, "Polish"),
            Language::Russian => write!(f, "Russian"),
            Language::Spanish => write!(f, "Spanish"),
            Language::Thai => write!(f, "Thai"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(matches!(
            Language::from_code("xyz"),
            Err(AnalysisError::UnknownLanguage(code)) if code == "xyz"
        ));
    }

    #[test]
    fn file_names_follow_prefix() {
        let dir = Path::new("corpora");
        assert_eq!(
            Language::English.input_path(dir),
            PathBuf::from("corpora/eng-ewt-ipa.txt")
        );
        assert_eq!(
            Language::Russian.report_path(dir),
            PathBuf::from("corpora/rus-syntagrus-stats.txt")
        );
    }

    #[test]
    fn all_expands_to_every_language() {
        let languages = Language::parse_list(&["all"]).unwrap();
        assert_eq!(languages.len(), Language::ALL.len());
        assert_eq!(Language::parse_list(&["eng", "all"]).unwrap().len(), 9);
        assert!(Language::parse_list(&["eng", "nope"]).is_err());
    }
}
