use advisor_scorer::KeywordTable;
use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use std::env;
use std::io;
use std::path::PathBuf;

mod runner;

pub use runner::{load_record, recommend_from_source, RecommendOutcome, RecordSource};

/// Env override for the keyword table path (the `--keywords` flag wins).
pub const KEYWORDS_ENV: &str = "TRACK_ADVISOR_KEYWORDS";

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "track-advisor")]
#[command(about = "Recommend an academic track from questionnaire answers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Keyword table TOML (overrides TRACK_ADVISOR_KEYWORDS)
    #[arg(long, global = true)]
    keywords: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a questionnaire response and print the recommendation as JSON
    Recommend(RecommendArgs),

    /// Print the effective keyword table as JSON
    Keywords(KeywordsArgs),
}

#[derive(Args)]
struct RecommendArgs {
    /// JSON file with the answers (reads stdin when neither FILE nor --json is given)
    #[arg(conflicts_with = "json")]
    file: Option<PathBuf>,

    /// Inline JSON answers
    #[arg(long)]
    json: Option<String>,

    /// Include per-category tallies and the policy branch in the output
    #[arg(long)]
    explain: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct KeywordsArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

impl RecommendArgs {
    fn source(&self) -> RecordSource {
        match (&self.file, &self.json) {
            (Some(path), _) => RecordSource::File(path.clone()),
            (None, Some(text)) => RecordSource::Inline(text.clone()),
            (None, None) => RecordSource::Stdin,
        }
    }
}

fn resolve_keyword_table(flag: Option<PathBuf>) -> Result<KeywordTable> {
    let path = flag.or_else(|| {
        env::var(KEYWORDS_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    });
    match path {
        Some(path) => {
            log::debug!("Loading keyword table from {}", path.display());
            KeywordTable::from_path(&path)
                .with_context(|| format!("Invalid keyword table {}", path.display()))
        }
        None => Ok(KeywordTable::default()),
    }
}

fn to_json_text<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let table = resolve_keyword_table(cli.keywords)?;

    match cli.command {
        Commands::Recommend(args) => run_recommend(&args, &table)?,
        Commands::Keywords(args) => print_stdout(&to_json_text(&table, args.pretty)?)?,
    }

    Ok(())
}

fn run_recommend(args: &RecommendArgs, table: &KeywordTable) -> Result<()> {
    let outcome = recommend_from_source(&args.source(), table);
    let decision = outcome.decision();
    log::info!(
        "Recommended {} ({})",
        decision.label,
        decision.specialization
    );
    let value = outcome.to_json(args.explain)?;
    print_stdout(&to_json_text(&value, args.pretty)?)
}
