// File: src/report.rs
use crate::core::bigram::Bigram;
use crate::core::engine::AnalysisReport;
use crate::core::syllabicity::CategoryTally;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Renders an [`AnalysisReport`] as a fixed-order text block.
///
/// Output depends only on the report, so identical runs give identical bytes.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn render(report: &AnalysisReport) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_into(&mut out, report);
        out
    }

    /// Pretty JSON of the same report, for plotting tools.
    pub fn render_json(report: &AnalysisReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }

    fn write_into(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let syll = &report.syllabicity;
        writeln!(out, "ipa corpus size: {} characters", report.corpus_size)?;
        writeln!(out, "ipa vocabulary size: {}", report.vocabulary.len())?;
        let ranked: Vec<String> = report
            .vocabulary
            .entries()
            .iter()
            .map(|e| format!("{}={}", e.symbol, e.count))
            .collect();
        writeln!(out, "ipa vocabulary (most frequent first): [{}]", ranked.join(", "))?;
        writeln!(out, "ipa syllabic: {}", tally_set(&syll.syllabic))?;
        writeln!(out, "ipa non-syllabic: {}", tally_set(&syll.non_syllabic))?;
        writeln!(out, "junk: {}", tally_set(&syll.junk))?;
        writeln!(out, "unclassified: {}", unclassified_set(&syll.unclassified))?;
        writeln!(
            out,
            "occurrences: {} syllabic, {} non-syllabic, so {:.2}% syllabic",
            syll.syllabic.occurrences, syll.non_syllabic.occurrences, report.syllabic_percentage
        )?;
        writeln!(out, "bigram table size: {}", report.bigrams.pairs)?;
        writeln!(out, "zero-count bigrams: {}", report.bigrams.zeros)?;
        writeln!(
            out,
            "{} most common bigrams: [{}]",
            report.bigrams.top.len(),
            bigram_list(&report.bigrams.top)
        )
    }
}

fn tally_set(tally: &CategoryTally) -> String {
    let items: Vec<String> = tally.symbols.iter().map(|s| s.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

fn unclassified_set(unclassified: &BTreeMap<char, usize>) -> String {
    let items: Vec<String> = unclassified
        .keys()
        .map(|c| format!("{} (U+{:04X})", c, *c as u32))
        .collect();
    format!("{{{}}}", items.join(", "))
}

fn bigram_list(bigrams: &[Bigram]) -> String {
    bigrams
        .iter()
        .map(|b| format!("({},{})={}", b.first, b.second, b.count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::SymbolClassifier;
    use crate::core::engine::Analyzer;
    use crate::core::inventory::Inventory;

    fn analyzer() -> Analyzer {
        Analyzer::new(
            SymbolClassifier::from_inventory(
                "test",
                &Inventory {
                    syllabic: vec!['a'],
                    non_syllabic: vec!['b'],
                    junk: vec!['~'],
                    ..Inventory::default()
                },
            )
            .unwrap(),
        )
    }

    #[test]
    fn renders_fields_in_fixed_order() {
        let report = analyzer().analyze("ba ba~y").unwrap();
        let text = ReportFormatter::render(&report);
        let expected = "\
ipa corpus size: 6 characters
ipa vocabulary size: 4
ipa vocabulary (most frequent first): [a=2, b=2, y=1, ~=1]
ipa syllabic: {a}
ipa non-syllabic: {b, y}
junk: {~}
unclassified: {y (U+0079)}
occurrences: 2 syllabic, 3 non-syllabic, so 40.00% syllabic
bigram table size: 9
zero-count bigrams: 6
10 most common bigrams: [(b,a)=2, (#,b)=1, (a,b)=1, (a,y)=1, (y,#)=1, (a,a)=0, (b,b)=0, (b,y)=0, (y,a)=0, (y,b)=0]
";
        assert_eq!(text, expected);
    }

    #[test]
    fn json_carries_the_same_numbers() {
        let report = analyzer().analyze("ba ba").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&ReportFormatter::render_json(&report).unwrap()).unwrap();
        assert_eq!(json["bigrams"]["pairs"], 4);
        assert_eq!(json["vocabulary"][0]["symbol"], "a");
        assert_eq!(json["syllabic_percentage"], 50.0);
    }
}
