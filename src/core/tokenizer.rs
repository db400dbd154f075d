// File: src/core/tokenizer.rs
use crate::core::classifier::SymbolClassifier;
use crate::core::types::Symbol;
use std::iter::Peekable;
use std::str::Chars;

/// Joins corpus lines with a single space so words never run together
/// across sentence boundaries.
pub fn join_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}

/// Lazily splits an IPA stream into symbol units with one code point of
/// diacritic lookahead.
///
/// Whitespace separates units and is never emitted. A diacritic with no base
/// in front of it is emitted as a unit of its own.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    classifier: &'a SymbolClassifier,
}

impl<'a> Tokenizer<'a> {
    pub fn new(stream: &'a str, classifier: &'a SymbolClassifier) -> Self {
        Self {
            chars: stream.chars().peekable(),
            classifier,
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        loop {
            let c = self.chars.next()?;
            if c.is_whitespace() {
                continue;
            }

            if !self.classifier.is_diacritic(c) {
                if let Some(&next_c) = self.chars.peek() {
                    if self.classifier.is_diacritic(next_c) {
                        self.chars.next();
                        return Some(Symbol::fused(c, next_c));
                    }
                }
            }
            return Some(Symbol::new(c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::Inventory;

    fn classifier() -> SymbolClassifier {
        SymbolClassifier::from_inventory(
            "test",
            &Inventory {
                syllabic: vec!['a'],
                non_syllabic: vec!['p', 'b'],
                diacritics: vec!['ʰ', 'ː'],
                ..Inventory::default()
            },
        )
        .unwrap()
    }

    fn render(stream: &str) -> Vec<String> {
        let classifier = classifier();
        Tokenizer::new(stream, &classifier)
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn fuses_following_diacritic() {
        assert_eq!(render("pʰa pʰa"), vec!["pʰ", "a", "pʰ", "a"]);
    }

    #[test]
    fn plain_stream_is_one_unit_per_code_point() {
        assert_eq!(render("ba ba"), vec!["b", "a", "b", "a"]);
    }

    #[test]
    fn leading_diacritic_is_kept_alone() {
        assert_eq!(render("ʰa"), vec!["ʰ", "a"]);
        assert_eq!(render("b ʰ"), vec!["b", "ʰ"]);
    }

    #[test]
    fn only_one_diacritic_is_fused() {
        assert_eq!(render("aːʰ"), vec!["aː", "ʰ"]);
        assert_eq!(render("ʰː"), vec!["ʰ", "ː"]);
    }

    #[test]
    fn whitespace_of_any_kind_is_skipped() {
        assert_eq!(render("\tb\n a  "), vec!["b", "a"]);
        assert!(render("   ").is_empty());
    }

    #[test]
    fn join_lines_uses_single_spaces() {
        assert_eq!(join_lines("ba\nba\n"), "ba ba");
        assert_eq!(join_lines("ba\r\nba"), "ba ba");
    }
}
