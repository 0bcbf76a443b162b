use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{Context, Result};
use calctk::{SENTINEL, calculate, history::History, keypad::Keypad};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// calctk evaluates arithmetic expressions the way a pocket calculator
/// displays them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read expressions from a file, one per line.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Treat each line as key presses (`0-9 . + - * / ^ r ( ) c < =`)
    /// instead of an expression.
    #[arg(short, long)]
    keypad: bool,

    /// Print the calculation history when done.
    #[arg(long)]
    history: bool,

    /// Increase logging verbosity (-v, -vv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expressions to evaluate. Without any, lines are read from stdin.
    expressions: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let lines = read_lines(&args)?;
    let mut session = Session::new(args.keypad);
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        println!("{}", session.run(line));
    }

    if args.history {
        for entry in session.history().iter() {
            println!("{entry}");
        }
    }

    info!(calculations = session.history().len(), "session finished");
    Ok(())
}

/// Installs the log subscriber on stderr, defaulting to `warn` and rising
/// with each `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Collects the input lines from arguments, a file or stdin, in that order
/// of preference.
fn read_lines(args: &Args) -> Result<Vec<String>> {
    if !args.expressions.is_empty() {
        return Ok(args.expressions.clone());
    }

    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path).with_context(|| {
                                                    format!("failed to read the input file '{}'",
                                                            path.display())
                                                })?;
        return Ok(contents.lines().map(str::to_string).collect());
    }

    io::stdin().lock()
               .lines()
               .collect::<io::Result<Vec<_>>>()
               .context("failed to read from stdin")
}

/// Evaluates input lines either directly or through a keypad, keeping one
/// history for the whole run.
enum Session {
    Expressions(History),
    Keys(Keypad),
}

impl Session {
    fn new(keypad: bool) -> Self {
        if keypad {
            Self::Keys(Keypad::new())
        } else {
            Self::Expressions(History::new())
        }
    }

    /// Processes one line and returns the text to show for it.
    fn run(&mut self, line: &str) -> String {
        match self {
            Self::Expressions(history) => {
                let result = calculate(line);
                if result == SENTINEL {
                    warn!(expression = line, "could not evaluate");
                } else {
                    debug!(expression = line, %result, "evaluated");
                    history.record(line, &result);
                }
                display(&result).to_string()
            },
            Self::Keys(keypad) => {
                if let Err(error) = keypad.press_all(line) {
                    warn!(keys = line, %error, "stopped reading keys");
                }
                display(keypad.entry()).to_string()
            },
        }
    }

    fn history(&self) -> &History {
        match self {
            Self::Expressions(history) => history,
            Self::Keys(keypad) => keypad.history(),
        }
    }
}

/// Shows the sentinel as a plain error message.
fn display(text: &str) -> &str {
    if text == SENTINEL { "Error" } else { text }
}
