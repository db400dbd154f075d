use ipa_stats::core::bigram::BigramTable;
use ipa_stats::core::frequency::FrequencyCounter;
use ipa_stats::core::inventory::{Inventory, Script};
use ipa_stats::core::types::Symbol;
use ipa_stats::persistence::{read_corpus, write_report};
use ipa_stats::{
    AnalysisError, AnalysisOptions, Analyzer, Language, ReportFormatter, SymbolClassifier,
    VocabularyPolicy,
};
use std::fs;

fn latin() -> SymbolClassifier {
    SymbolClassifier::for_script(Script::Latin).unwrap()
}

const SAMPLE: &str = "ðə kʰæt sæt ɔn ðə mæt~ tʃʌmz, aːpʰɪl";

#[test]
fn test_ba_ba() {
    let report = Analyzer::new(latin()).analyze("ba ba").unwrap();
    let vocabulary: Vec<(String, u64)> = report
        .vocabulary
        .entries()
        .iter()
        .map(|e| (e.symbol.to_string(), e.count))
        .collect();
    assert_eq!(vocabulary, vec![("a".to_string(), 2), ("b".to_string(), 2)]);
    assert_eq!(report.syllabicity.syllabic.occurrences, 2);
    assert_eq!(report.syllabicity.non_syllabic.occurrences, 2);
    assert!(ReportFormatter::render(&report).contains("so 50.00% syllabic"));
}

#[test]
fn test_aspiration_is_fused() {
    let classifier = latin();
    let analyzer = Analyzer::new(classifier);
    let units: Vec<Symbol> = analyzer.tokenize("pʰa pʰa").collect();
    assert_eq!(units.len(), 4);
    assert_eq!(units[0], Symbol::fused('p', 'ʰ'));
    assert_eq!(units[2], Symbol::fused('p', 'ʰ'));
}

#[test]
fn test_frequencies_sum_to_unit_count() {
    let analyzer = Analyzer::new(latin());
    let report = analyzer.analyze(SAMPLE).unwrap();
    assert_eq!(report.vocabulary.total(), report.units as u64);
    assert_eq!(analyzer.tokenize(SAMPLE).count(), report.units);
}

#[test]
fn test_domain_is_vocabulary_squared() {
    for policy in [VocabularyPolicy::SignificantOnly, VocabularyPolicy::AllSymbols] {
        let classifier = latin();
        let analyzer = Analyzer::with_options(
            classifier.clone(),
            AnalysisOptions {
                top_n: 5,
                vocabulary_policy: policy,
            },
        );
        let report = analyzer.analyze(SAMPLE).unwrap();
        let domain = match policy {
            VocabularyPolicy::SignificantOnly => {
                report.vocabulary.significant_only(&classifier).len()
            }
            VocabularyPolicy::AllSymbols => report.vocabulary.len(),
        };
        assert_eq!(report.bigrams.pairs, domain * domain);
    }
}

#[test]
fn test_bigram_total_ignores_skipped_units() {
    let classifier = latin();
    let plain = "ba da";
    let noisy = "b~a, . d//a";
    for stream in [plain, noisy] {
        let sequence: Vec<Symbol> = ipa_stats::core::tokenizer::Tokenizer::new(stream, &classifier).collect();
        let significant = sequence.iter().filter(|s| classifier.is_significant(s)).count();
        let mut counter = FrequencyCounter::new();
        counter.extend(sequence.iter().copied());
        let vocabulary = counter.into_vocabulary().significant_only(&classifier);
        let table = BigramTable::build(&vocabulary, &sequence, &classifier);
        assert_eq!(table.total(), significant as u64 + 1);
    }
}

#[test]
fn test_reports_are_byte_identical() {
    let first = ReportFormatter::render(&Analyzer::new(latin()).analyze(SAMPLE).unwrap());
    let second = ReportFormatter::render(&Analyzer::new(latin()).analyze(SAMPLE).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_script_without_tones_still_reports() {
    let report = Analyzer::new(latin()).analyze("ta 「 ta").unwrap();
    assert_eq!(report.syllabicity.tone_occurrences, 0);
    // Not a Latin tone, so it lands in the default bucket and is flagged.
    assert!(report.syllabicity.unclassified.contains_key(&'「'));

    let han = SymbolClassifier::for_script(Script::Han).unwrap();
    let report = Analyzer::new(han).analyze("ta 「 ta").unwrap();
    assert_eq!(report.syllabicity.tone_occurrences, 1);
    assert!(report.syllabicity.unclassified.is_empty());
}

#[test]
fn test_junk_never_counts_as_syllabic() {
    let cyrillic = SymbolClassifier::for_script(Script::Cyrillic).unwrap();
    let report = Analyzer::new(cyrillic).analyze("о a O").unwrap();
    assert_eq!(report.syllabicity.syllabic.occurrences, 1);
    assert_eq!(report.syllabicity.junk.occurrences, 2);
}

#[test]
fn test_whitespace_only_stream_is_degenerate() {
    let err = Analyzer::new(latin()).analyze(" \t \n ").unwrap_err();
    assert!(matches!(err, AnalysisError::Degenerate { units: 0 }));
}

#[test]
fn test_injected_inventory_overlap_is_rejected() {
    let inventory = Inventory {
        syllabic: vec!['a', 'ɛ'],
        diacritics: vec!['ɛ'],
        ..Inventory::default()
    };
    assert!(matches!(
        SymbolClassifier::from_inventory("bad", &inventory),
        Err(AnalysisError::OverlappingClasses { code_point: 'ɛ', .. })
    ));
}

#[test]
fn test_corpus_file_to_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let language = Language::from_code("spa").unwrap();
    fs::write(language.input_path(dir.path()), "ba\nba\n").unwrap();

    let classifier = SymbolClassifier::for_script(language.script()).unwrap();
    let stream = read_corpus(&language.input_path(dir.path())).unwrap();
    let report = Analyzer::new(classifier).analyze(&stream).unwrap();
    let text = ReportFormatter::render(&report);
    write_report(&language.report_path(dir.path()), &text).unwrap();

    let written = fs::read_to_string(dir.path().join("spa-ancora-stats.txt")).unwrap();
    assert!(written.starts_with("ipa corpus size: 4 characters\n"));
    assert!(written.contains("bigram table size: 4\n"));
}
