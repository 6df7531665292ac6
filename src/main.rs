//! Passforge - organization-targeted password wordlist generator
//!
//! Builds a ranked candidate list for password-strength audits and writes it
//! to stdout or a file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use passforge::{PassForgeError, ScoredCandidate, WordlistConfig, YearForm};

#[derive(Parser)]
#[command(
    name = "passforge",
    version,
    about = "Generate custom password lists ranked by likelihood"
)]
struct Cli {
    /// Company name to include in passwords (prompted for when omitted)
    company: Option<String>,

    /// City name to include
    #[arg(short, long, env = "PASSFORGE_CITY")]
    city: Option<String>,

    /// Base year (default: last year)
    #[arg(short, long, env = "PASSFORGE_YEAR")]
    year: Option<i32>,

    /// Number of years after the base year to generate
    #[arg(short = 'r', long = "range", default_value_t = 2, env = "PASSFORGE_RANGE")]
    year_range: u32,

    /// Exclude season words
    #[arg(long)]
    no_seasons: bool,

    /// Also append two-digit years ("24" next to "2024")
    #[arg(long)]
    short_years: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit candidates with their scores as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = passforge::init() {
        eprintln!("❌ Failed to initialize: {}", e.user_message());
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<PassForgeError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let company = match cli.company {
        Some(company) => company,
        None => prompt_company()?,
    };

    let config = WordlistConfig {
        include_seasons: !cli.no_seasons,
        base_year: cli.year,
        year_range: cli.year_range,
        city: cli.city,
        year_form: if cli.short_years {
            YearForm::FullAndShort
        } else {
            YearForm::Full
        },
    };

    let ranked = passforge::generate_scored_list(&company, &config, passforge::ranker::current_year())?;

    let rendered = if cli.json {
        render_json(&ranked)?
    } else {
        ranked
            .iter()
            .map(|scored| scored.candidate.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    match cli.output {
        Some(path) => {
            write_output(&path, &rendered)?;
            println!("Generated {} passwords to {}", ranked.len(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Ask for the company interactively
fn prompt_company() -> passforge::Result<String> {
    let company = inquire::Text::new("Company name:")
        .with_help_message("Used as the main seed word")
        .prompt()?;
    Ok(company)
}

fn render_json(ranked: &[ScoredCandidate]) -> passforge::Result<String> {
    Ok(serde_json::to_string_pretty(ranked)?)
}

fn write_output(path: &Path, contents: &str) -> passforge::Result<()> {
    fs::write(path, contents)
        .map_err(|e| PassForgeError::io(e.to_string(), Some(path.display().to_string())))
}
