use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rustyline::error::ReadlineError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Evaluate integer arithmetic through its RPN form
#[derive(Parser, Debug)]
#[command(name = "rpncalc", version, about)]
struct Config {
    /// Expression to evaluate once; starts a REPL when omitted
    #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    expr: Vec<String>,

    /// Also print the RPN form of each expression
    #[arg(long)]
    rpn: bool,

    /// REPL history file [default: ~/.rpncalc_history]
    #[arg(long, env = "RPNCALC_HISTORY")]
    history: Option<PathBuf>,

    /// Log each phase to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Config {
    fn history_path(&self) -> Option<PathBuf> {
        self.history
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".rpncalc_history")))
    }
}

mod repl {
    use rpncalc::{Error, ShuntingParser};

    pub fn evalexpr(input: &str, show_rpn: bool) -> Result<String, Error> {
        let rpn = ShuntingParser::parse_str(input)?;
        let result = rpn.eval()?;
        let infix = rpn.to_infix()?;
        if show_rpn {
            Ok(format!("{} = {}    [{}]", infix, result, rpn))
        } else {
            Ok(format!("{} = {}", infix, result))
        }
    }
}

fn run_repl(config: &Config) -> Result<(), ReadlineError> {
    let mut rl = rustyline::DefaultEditor::new()?;
    let histpath = config.history_path();
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match repl::evalexpr(&line, config.rpn) {
                    Err(e) => println!("Error: {}", e),
                    Ok(out) => println!("{}", out),
                }
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();

    let default_filter = if config.verbose { "rpncalc=debug" } else { "rpncalc=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !config.expr.is_empty() {
        let input = config.expr.join(" ");
        return match repl::evalexpr(&input, config.rpn) {
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
            Ok(out) => {
                println!("{}", out);
                ExitCode::SUCCESS
            }
        };
    }

    match run_repl(&config) {
        Err(e) => {
            eprintln!("Readline error: {}", e);
            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}
