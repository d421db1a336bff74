use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use matchq::cmd::{check, diff, percent};
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "matchq",
    version,
    about = "Deterministic value validation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check an observed value against a validation.
    Check(CheckArgs),
    /// Report byte differences between two inputs.
    Diff(DiffArgs),
    /// Parse a percentage string such as `10%`.
    Percent(PercentArgs),
}

#[derive(Debug, clap::Args)]
struct CheckArgs {
    /// Operator tag: lt, lte, gt, gte, pd, re, rg, eq, neq, et, ne, ct.
    #[arg(long)]
    match_type: String,

    /// Operator parameter, e.g. `10-20` for rg or `10%` for pd.
    #[arg(long, allow_hyphen_values = true)]
    match_value: Option<String>,

    /// Expected value as JSON.
    #[arg(long, allow_hyphen_values = true)]
    expected: Option<String>,

    /// Observed value as JSON.
    #[arg(long, allow_hyphen_values = true)]
    value: String,
}

#[derive(Debug, clap::Args)]
struct DiffArgs {
    #[arg(long)]
    left: String,

    #[arg(long)]
    right: String,
}

#[derive(Debug, clap::Args)]
struct PercentArgs {
    #[arg(long)]
    value: String,
}

/// Exit code plus the JSON line written for it.
struct Outcome {
    exit_code: i32,
    payload: Value,
}

impl Outcome {
    fn internal_error(message: String) -> Self {
        Self {
            exit_code: 1,
            payload: json!({"error": "internal_error", "message": message}),
        }
    }
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let outcome = match Cli::try_parse() {
        Ok(cli) => match cli.command {
            Commands::Check(args) => run_check(args),
            Commands::Diff(args) => run_diff(args),
            Commands::Percent(args) => run_percent(args),
        },
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{error}");
                return 0;
            }
            _ => Outcome {
                exit_code: 3,
                payload: json!({
                    "error": "input_usage_error",
                    "kind": "cli_parse_error",
                    "message": error.to_string(),
                }),
            },
        },
    };
    emit(outcome)
}

fn run_check(args: CheckArgs) -> Outcome {
    let response = check::run(&check::CheckCommandArgs {
        match_type: args.match_type,
        match_value: args.match_value,
        expected: args.expected,
        value: args.value,
    });
    Outcome {
        exit_code: response.exit_code,
        payload: response.payload,
    }
}

fn run_diff(args: DiffArgs) -> Outcome {
    let report = match diff::execute(args.left.as_bytes(), args.right.as_bytes()) {
        Ok(report) => report,
        Err(error) => return Outcome::internal_error(error.to_string()),
    };
    match serde_json::to_value(&report) {
        Ok(payload) => Outcome {
            exit_code: 0,
            payload,
        },
        Err(error) => Outcome::internal_error(format!("failed to serialize diff report: {error}")),
    }
}

fn run_percent(args: PercentArgs) -> Outcome {
    let response = percent::run(&args.value);
    Outcome {
        exit_code: response.exit_code,
        payload: response.payload,
    }
}

/// Verdicts (0 matched, 2 not matched) go to stdout; failures go to stderr.
fn emit(outcome: Outcome) -> i32 {
    let serialized = match serde_json::to_string(&outcome.payload) {
        Ok(serialized) => serialized,
        Err(_) => {
            eprintln!(r#"{{"error":"internal_error","message":"failed to serialize response"}}"#);
            return 1;
        }
    };
    match outcome.exit_code {
        0 | 2 => println!("{serialized}"),
        _ => eprintln!("{serialized}"),
    }
    outcome.exit_code
}
