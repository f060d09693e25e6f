//! Meal fixtures CLI
//!
//! Writes the meal record fixture the database seeder loads:
//! - no arguments: built-in tables → `packages/database/fixtures/meal-records.json`
//! - `generate`: same, with destination / timestamp overrides
//! - `inspect`: per-plan record counts of an existing fixture file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use meal_fixtures_core::config::parse_created_at;
use meal_fixtures_core::{
    builtin_catalog, builtin_plans, day_name, generate, load, persist, plan_summary,
    GeneratorConfig,
};

#[derive(Parser)]
#[command(name = "meal-fixtures")]
#[command(author, version, about = "Generate meal record fixtures for the test database")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the fixture from the built-in sample meals and plans (default).
    Generate {
        /// Output fixture JSON
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// RFC 3339 timestamp stamped onto every record as `createdAt`.
        #[arg(long)]
        created_at: Option<String>,
    },

    /// Print record counts per plan for an existing fixture file.
    Inspect {
        /// Fixture JSON to read
        input: PathBuf,

        /// List every record with the weekday the seeder assigns to its day.
        #[arg(long)]
        days: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => cmd_generate(GeneratorConfig::default()),
        Some(Commands::Generate { out, created_at }) => {
            let mut config = GeneratorConfig::default();
            if let Some(out) = out {
                config = config.with_destination(out);
            }
            if let Some(created_at) = created_at {
                config = config.with_created_at(parse_created_at(&created_at)?);
            }
            cmd_generate(config)
        }
        Some(Commands::Inspect { input, days }) => cmd_inspect(&input, days),
    }
}

fn cmd_generate(config: GeneratorConfig) -> Result<()> {
    tracing::debug!(?config, "generating meal record fixture");
    let records = generate(
        &builtin_catalog(),
        &builtin_plans(),
        &config.created_at_string(),
    );
    let summary = persist(&records, &config.destination)
        .with_context(|| format!("writing {}", config.destination.display()))?;

    println!(
        "{} {} meal records",
        "Generated".green().bold(),
        summary.records
    );
    println!(
        "{} {}",
        "Written to".green().bold(),
        summary.path.display().to_string().bold()
    );
    Ok(())
}

fn cmd_inspect(input: &Path, days: bool) -> Result<()> {
    let records = load(input).with_context(|| format!("inspecting {}", input.display()))?;
    if days {
        for record in &records {
            println!(
                "{}\t{}\t{}\t{}",
                record.id,
                record.meal_plan_id,
                record.day_number,
                day_name(record.day_number)
            );
        }
    }
    for (plan_id, count) in plan_summary(&records) {
        println!("{plan_id}\t{count}");
    }
    println!("{} {} meal records", "total".bold(), records.len());
    Ok(())
}
