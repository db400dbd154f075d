use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use ipa_stats::persistence::{read_corpus, write_report};
use ipa_stats::{
    AnalysisOptions, Analyzer, Language, ReportFormatter, Result, SymbolClassifier,
    VocabularyPolicy,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Only syllabic and non-syllabic symbols size the bigram table
    Significant,
    /// Every observed unit sizes the bigram table
    All,
}

impl From<PolicyArg> for VocabularyPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Significant => VocabularyPolicy::SignificantOnly,
            PolicyArg::All => VocabularyPolicy::AllSymbols,
        }
    }
}

/// Reports symbol frequencies, syllabicity and bigram statistics for
/// transcribed IPA corpora. Reads <prefix>-ipa.txt, writes <prefix>-stats.txt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Corpus identifiers: cmn eng emma fra hin pol rus spa tha, or all
    #[arg(required = true)]
    languages: Vec<String>,

    /// Directory holding the corpus files; reports are written here too
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Number of most frequent bigrams to list
    #[arg(short, long, default_value_t = 10)]
    top: usize,

    /// Which symbols size the bigram table
    #[arg(long, value_enum, default_value_t = PolicyArg::Significant)]
    vocabulary: PolicyArg,

    /// JSON inventory replacing the built-in tables for every language
    #[arg(long)]
    inventory: Option<PathBuf>,

    /// Also write <prefix>-stats.json
    #[arg(long)]
    json: bool,

    /// Do not mirror the report on the console
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Unknown identifiers stop everything before any file is touched.
    let languages = match Language::parse_list(&args.languages) {
        Ok(languages) => languages,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let options = AnalysisOptions {
        top_n: args.top,
        vocabulary_policy: args.vocabulary.into(),
    };

    let mut failed = 0;
    for language in &languages {
        if let Err(e) = run(*language, &args, options) {
            log::error!("{}: {}", language.code(), e);
            eprintln!("{} {}: {}", "error:".red().bold(), language, e);
            failed += 1;
        }
    }

    if failed > 0 {
        log::error!("{} of {} languages failed", failed, languages.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(language: Language, args: &Args, options: AnalysisOptions) -> Result<()> {
    let classifier = match &args.inventory {
        Some(path) => SymbolClassifier::from_json_file(language.to_string(), path)?,
        None => SymbolClassifier::for_script(language.script())?,
    };
    let analyzer = Analyzer::with_options(classifier, options);

    let stream = read_corpus(&language.input_path(&args.dir))?;
    let report = analyzer.analyze(&stream)?;
    let text = ReportFormatter::render(&report);

    write_report(&language.report_path(&args.dir), &text)?;
    if args.json {
        let json = ReportFormatter::render_json(&report)?;
        write_report(&language.summary_path(&args.dir), &json)?;
    }

    if !args.quiet {
        println!(
            "{}",
            format!("== {} ({})", language, language.file_prefix()).cyan().bold()
        );
        print!("{}", text);
    }
    Ok(())
}
