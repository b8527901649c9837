use std::{fmt, fs, process};

use clap::{ArgAction, Parser};
use rpncalc::{EvaluationError, calc, format_tokens, is_valid, postfix};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;

/// rpncalc evaluates arithmetic expressions built from numbers, `+ - * / ^`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells rpncalc to read a file with one expression per line instead of a
    /// single expression.
    #[arg(short, long)]
    file: bool,

    /// Rejects expressions that are not a flat `number (op number)*` chain
    /// before evaluating them.
    #[arg(short, long)]
    strict: bool,

    /// Prints the postfix form of every expression before its result.
    #[arg(short, long)]
    postfix: bool,

    /// Raises the log level on stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// Errors reported by the command line front end.
#[derive(Debug)]
enum CliError {
    /// The expression failed the `--strict` shape check.
    Rejected {
        expression: String,
    },
    /// The input file could not be read.
    Unreadable {
        path:   String,
        reason: String,
    },
    Evaluation(EvaluationError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { expression } => {
                write!(f, "Error: '{expression}' is not a valid expression.")
            },
            Self::Unreadable { path, reason } => {
                write!(f,
                       "Failed to read the input file '{path}': {reason}. Perhaps this \
                        file does not exist?")
            },
            Self::Evaluation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<EvaluationError> for CliError {
    fn from(value: EvaluationError) -> Self {
        Self::Evaluation(value)
    }
}

/// Installs a stderr subscriber. Each `-v` raises the level one step from
/// `WARN`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .with_target(true)
                             .init();
}

fn run_expression(expression: &str, args: &Args) -> Result<f64, CliError> {
    if args.strict && !is_valid(expression) {
        return Err(CliError::Rejected { expression: expression.to_string() });
    }
    if args.postfix {
        println!("{}", format_tokens(&postfix(expression)));
    }
    Ok(calc(expression)?)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|e| {
            eprintln!("{}",
                      CliError::Unreadable { path:   args.contents.clone(),
                                             reason: e.to_string(), });
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let expressions: Vec<&str> = if args.file {
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty())
              .collect()
    } else {
        vec![script.as_str()]
    };
    info!("evaluating {} expression(s)", expressions.len());

    let mut failures = 0_usize;
    for expression in expressions {
        match run_expression(expression, &args) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                failures += 1;
                eprintln!("{e}");
            },
        }
    }

    if failures > 0 {
        warn!("{failures} expression(s) failed");
        process::exit(1);
    }
}
