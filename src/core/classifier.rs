// File: src/core/classifier.rs
use crate::core::inventory::{Inventory, Script};
use crate::core::types::{Classification, Symbol};
use crate::error::{AnalysisError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Immutable code point classifier for one script.
///
/// Built once per analysis and handed to every component by reference;
/// several classifiers can coexist in one process.
#[derive(Debug, Clone)]
pub struct SymbolClassifier {
    label: String,
    /// Every listed code point mapped to its single class. Known consonants
    /// are stored as `NonSyllabic`.
    classes: HashMap<char, Classification>,
}

impl SymbolClassifier {
    /// Builds the built-in classifier for a script.
    pub fn for_script(script: Script) -> Result<Self> {
        Self::from_inventory(script.to_string(), &script.inventory())
    }

    /// Builds a classifier from explicit tables, rejecting any code point
    /// listed under two different classes.
    pub fn from_inventory(label: impl Into<String>, inventory: &Inventory) -> Result<Self> {
        let label = label.into();
        let mut classes = HashMap::new();

        let tables = [
            (Classification::Junk, &inventory.junk),
            (Classification::Tone, &inventory.tones),
            (Classification::Diacritic, &inventory.diacritics),
            (Classification::Syllabic, &inventory.syllabic),
            (Classification::NonSyllabic, &inventory.non_syllabic),
        ];

        for (class, table) in tables {
            for &code_point in table.iter() {
                match classes.insert(code_point, class) {
                    Some(first) if first != class => {
                        return Err(AnalysisError::OverlappingClasses {
                            script: label,
                            code_point,
                            first,
                            second: class,
                        });
                    }
                    _ => {}
                }
            }
        }

        log::debug!("{} classifier loaded with {} code points", label, classes.len());
        Ok(Self { label, classes })
    }

    /// Loads a JSON inventory file and validates it like a built-in one.
    pub fn from_json_file(label: impl Into<String>, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AnalysisError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        let inventory: Inventory =
            serde_json::from_str(&text).map_err(|source| AnalysisError::InvalidInventory {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_inventory(label, &inventory)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_syllabic(&self, c: char) -> bool {
        self.classes.get(&c) == Some(&Classification::Syllabic)
    }

    pub fn is_diacritic(&self, c: char) -> bool {
        self.classes.get(&c) == Some(&Classification::Diacritic)
    }

    pub fn is_tone(&self, c: char) -> bool {
        self.classes.get(&c) == Some(&Classification::Tone)
    }

    pub fn is_junk(&self, c: char) -> bool {
        self.classes.get(&c) == Some(&Classification::Junk)
    }

    /// True when the code point appears in none of the tables.
    pub fn is_unclassified(&self, c: char) -> bool {
        !self.classes.contains_key(&c)
    }

    /// Junk, then tone, then diacritic, then syllabic; anything else is
    /// non-syllabic.
    pub fn classify(&self, c: char) -> Classification {
        if self.is_junk(c) {
            Classification::Junk
        } else if self.is_tone(c) {
            Classification::Tone
        } else if self.is_diacritic(c) {
            Classification::Diacritic
        } else if self.is_syllabic(c) {
            Classification::Syllabic
        } else {
            Classification::NonSyllabic
        }
    }

    /// A fused symbol takes the class of its base.
    pub fn classify_symbol(&self, symbol: &Symbol) -> Classification {
        self.classify(symbol.base)
    }

    pub fn is_significant(&self, symbol: &Symbol) -> bool {
        self.classify_symbol(symbol).is_significant()
    }
}
