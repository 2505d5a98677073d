//! tendency CLI
//!
//! Validates the fuzzy learning-style system against the reference
//! questionnaire.
//!
//! # Commands
//!
//! - `run`: join both tables, compare every dimension, write the result table
//! - `classify`: show the membership breakdown for a single score
//! - `config`: print the effective configuration as TOML

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tendency_cli::classify::{classify_score, render_classification};
use tendency_cli::report::render_report;
use tendency_cli::{exit_code_for_error, run_pipeline, CliExitCode};
use tendency_core::config::CliOverrides;
use tendency_core::tracing_setup::{init_tracing, init_tracing_json};
use tendency_core::{Dimension, ErrorCode, PipelineError, TendencyConfig};

/// Fuzzy-vs-questionnaire learning-style agreement
#[derive(Parser)]
#[command(name = "tendency")]
#[command(version)]
#[command(about = "Measure agreement between fuzzy learning-style scores and a questionnaire")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Config file (defaults to ./tendency.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare both tables and write the comparison table
    Run(RunArgs),
    /// Classify a single score
    Classify(ClassifyArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
struct RunArgs {
    /// System results table (.csv or .json)
    #[arg(long)]
    system: Option<PathBuf>,
    /// Questionnaire results table (.csv or .json)
    #[arg(long)]
    reference: Option<PathBuf>,
    /// Comparison table destination (.csv or .json)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Crisp midpoint for the questionnaire scores
    #[arg(long)]
    midpoint: Option<f64>,
    /// Compare records in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    /// Score to classify
    #[arg(allow_negative_numbers = true)]
    score: f64,
    /// Use this dimension's configured bands, midpoint and pole names
    #[arg(long)]
    dimension: Option<Dimension>,
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        init_tracing_json(cli.verbose);
    } else {
        init_tracing(cli.verbose);
    }

    let exit_code = match dispatch(&cli) {
        Ok(()) => CliExitCode::Success,
        Err(err) => {
            report_error(&err);
            exit_code_for_error(&err)
        }
    };
    std::process::exit(exit_code.code());
}

fn dispatch(cli: &Cli) -> Result<(), PipelineError> {
    let overrides = match &cli.command {
        Commands::Run(args) => CliOverrides {
            system_path: args.system.clone(),
            reference_path: args.reference.clone(),
            output_path: args.output.clone(),
            midpoint: args.midpoint,
            parallel: args.parallel.then_some(true),
        },
        _ => CliOverrides::default(),
    };
    let root = std::env::current_dir().map_err(|e| {
        PipelineError::Unexpected(format!("cannot resolve the working directory: {e}"))
    })?;
    let config = TendencyConfig::load(&root, cli.config.as_deref(), Some(&overrides))?;

    match &cli.command {
        Commands::Run(_) => {
            let summary = run_pipeline(&config)?;
            println!("{} common students found for comparison.", summary.joined);
            println!();
            print!("{}", render_report(&summary.outcome.report));
            println!();
            println!(
                "Analysis completed successfully. Full results saved to '{}'.",
                summary.output_path.display()
            );
        }
        Commands::Classify(args) => {
            let classification = classify_score(&config, args.dimension, args.score)?;
            print!("{}", render_classification(&classification));
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

fn report_error(err: &PipelineError) {
    tracing::error!(code = err.error_code(), "{err}");
    match err {
        PipelineError::JoinEmpty { .. } => {
            eprintln!("Warning: No common students found between the two files.");
        }
        _ => eprintln!("Error: {err}"),
    }
}
