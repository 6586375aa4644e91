// Ekko CLI entry point
// Reads lyrics from files or stdin and prints the interpretation.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

use ekko_core::{logging, Config, Interpretation, Interpreter, LockCheck, LockedResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Parser)]
#[command(
    name = "ekko",
    about = "Interpret lyrics into production intent",
    version
)]
struct Cli {
    /// Lyric files to interpret (reads stdin if none provided)
    files: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Print a locked result (result plus text fingerprint) instead
    #[arg(long, conflicts_with = "check")]
    lock: bool,

    /// Session identifier recorded with --lock (random when omitted)
    #[arg(long, requires = "lock")]
    session: Option<String>,

    /// Compare the input against a stored locked result
    #[arg(long, value_name = "SNAPSHOT")]
    check: Option<String>,
}

fn read_inputs(files: &[String]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return Ok(vec![("<stdin>".to_string(), input)]);
    }

    files
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("Error reading {path}"))
                .map(|text| (path.clone(), text))
        })
        .collect()
}

fn render_text(name: &str, it: &Interpretation) -> String {
    let x = &it.result.signals;
    let mut out = format!(
        "== {name} ({})\nwords {} / lines {} / stanzas {}\n\
         structure {}, pace {}, density {}, repetition {}, sentiment {}, volatility {}, narrative {}, register {}\n",
        it.fingerprint,
        it.counts.words,
        it.counts.lines,
        it.counts.stanzas,
        x.structure,
        x.pace,
        x.density,
        x.repetition,
        x.sentiment,
        x.volatility,
        x.narrative,
        x.register,
    );

    out.push_str(&format!("\nrules (ruleset {}):\n", it.result.version));
    for rule in &it.result.rules {
        out.push_str(&format!(
            "  [p{}] {:<8} {:<22} {}\n",
            rule.priority,
            rule.status.label(),
            rule.id,
            rule.because
        ));
    }

    out.push('\n');
    for (label, text) in it.exports.entries() {
        out.push_str(&format!("{label}: {text}\n"));
    }
    out
}

fn check(snapshot_path: &str, name: &str, text: &str) -> bool {
    let outcome = LockedResult::check(snapshot_path, text);
    match &outcome {
        LockCheck::Missing => println!("{name}: missing"),
        LockCheck::Unreadable(reason) => println!("{name}: unreadable ({reason})"),
        LockCheck::Fresh {
            version,
            current_ruleset,
        }
        | LockCheck::Stale {
            version,
            current_ruleset,
        } => println!(
            "{name}: {} (ruleset {}{})",
            if outcome.is_fresh() { "fresh" } else { "stale" },
            version,
            if *current_ruleset { "" } else { ", outdated" }
        ),
    }
    outcome.is_fresh()
}

fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let config = Config::from_env().context("Invalid configuration")?;
    logging::init(&config)?;

    let cli = Cli::parse();
    let inputs = read_inputs(&cli.files)?;

    if let Some(snapshot) = &cli.check {
        let mut all_fresh = true;
        for (name, text) in &inputs {
            all_fresh &= check(snapshot, name, text);
        }
        return Ok(if all_fresh {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut interpreter = Interpreter::new(config.cache_capacity());
    for (name, text) in &inputs {
        let interpretation = interpreter.interpret(text);
        if interpretation.normalized.is_empty() {
            warn!("{} is empty, interpreting as blank lyrics", name);
        }

        if cli.lock {
            let session = cli
                .session
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            info!("Locking {} for session {}", name, session);
            println!("{}", interpretation.lock(Some(session)).to_json()?);
            continue;
        }

        match cli.format {
            Format::Json => println!("{}", serde_json::to_string_pretty(&interpretation)?),
            Format::Text => print!("{}", render_text(name, &interpretation)),
        }
    }

    Ok(ExitCode::SUCCESS)
}
