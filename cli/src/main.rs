//! Zendo CLI
//!
//! Draw secret rules, sample examples and judge grids from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zendo_cli::format::{format_challenge, format_examples, format_verdict, rule_json};
use zendo_cli::build_challenge;
use zendo_core::Grid;
use zendo_sampler::SamplerConfig;
use zendo_session::{Session, SessionConfig};

#[derive(Parser)]
#[command(name = "zendo")]
#[command(about = "Zendo - generate secret grid rules and examples")]
#[command(version)]
struct Cli {
    /// Seed for reproducible rules and grids
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum grids drawn per example request
    #[arg(long, global = true, default_value_t = zendo_sampler::DEFAULT_ATTEMPT_LIMIT)]
    attempts: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random rule
    Rule {
        /// Print the rule and its skeleton as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print grids that follow and break a random rule
    Examples {
        /// Number of grids following the rule
        #[arg(long, default_value_t = 3)]
        valid: usize,

        /// Number of grids breaking the rule
        #[arg(long, default_value_t = 3)]
        invalid: usize,

        /// Print the rule and examples as JSON
        #[arg(long)]
        json: bool,
    },

    /// Judge a grid against the seeded rule
    Judge {
        /// Nine cells in row order, e.g. "rC . bS  . yT .  . . ."
        grid: String,
    },

    /// Play a shuffled run of grids, printed with their answers
    Challenge {
        /// Number of grids in the run
        #[arg(long, default_value_t = 5)]
        stages: usize,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config =
        SessionConfig::new().with_sampler(SamplerConfig::new().with_attempt_limit(cli.attempts));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::new(config).context("failed to start session")?;

    match cli.command {
        Commands::Rule { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&rule_json(session.rule()))?);
            } else {
                println!("{}", session.description());
            }
        }
        Commands::Examples {
            valid,
            invalid,
            json,
        } => {
            let examples = session.generate_examples(valid, invalid);
            if json {
                let out = serde_json::json!({
                    "rule": rule_json(session.rule()),
                    "examples": examples,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Rule: {}\n", session.description());
                print!("{}", format_examples(&examples));
            }
        }
        Commands::Judge { grid } => {
            let grid: Grid = grid
                .parse()
                .with_context(|| format!("invalid grid '{}'", grid))?;
            println!("{}\n", grid);
            println!("Rule: {}", session.description());
            println!("This grid {}.", format_verdict(session.judge(&grid)));
        }
        Commands::Challenge { stages } => {
            let run = build_challenge(&mut session, stages);
            print!("{}", format_challenge(&run));
            println!("Rule: {}", session.description());
        }
    }

    Ok(())
}
