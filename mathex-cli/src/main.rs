//! Mathex CLI - Command line interface
//!
//! Lexes an expression given as an argument, a file or stdin, and prints
//! the resulting tokens.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use mathex_api::{init_config, tokenize, LogLevel, MathexConfig, RunConfig};
use mathex_config::Phase;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::{load_config, LogConfig};
use crate::logging::LogFormat;
use crate::platform::{print_error_with_source, print_tokens, OutputFormat};

const TARGET: &str = Phase::Cli.target();

#[derive(Parser)]
#[command(name = "mathex", about = "Mathex expression lexer", version)]
struct Cli {
    /// Expression to lex (reads stdin when neither EXPR nor --file is given)
    #[arg(value_name = "EXPR", conflicts_with = "file")]
    expr: Option<String>,

    /// Read the expression from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Token output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Run the lexer on a worker thread
    #[arg(long)]
    threaded: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    let mut mathex_config = match cli.config.as_deref().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => fail(&e),
    };
    apply_overrides(&mut mathex_config, &cli);

    logging::init(&LogConfig::from(&mathex_config.logging), cli.log_format);

    let source = match read_source(&cli) {
        Ok(source) => source,
        Err(e) => fail(&e),
    };

    let run_config = RunConfig::from(&mathex_config);
    if init_config(run_config.clone()).is_err() {
        debug!(target: TARGET, "Global config already installed");
    }
    info!(target: TARGET, threaded = run_config.lexer.threaded, "Lexing input");

    match tokenize(source.as_str(), &run_config) {
        Ok(tokens) => {
            if let Err(e) = print_tokens(&tokens, cli.format) {
                fail(&format!("cannot serialize tokens: {e}"));
            }
        }
        Err(e) => {
            if cli.format == OutputFormat::Json {
                if let Ok(json) = e.to_report().to_json() {
                    println!("{json}");
                }
            }
            print_error_with_source(&e, &source);
            process::exit(1);
        }
    }
}

/// Command line flags take precedence over the config file
fn apply_overrides(config: &mut MathexConfig, cli: &Cli) {
    if cli.threaded {
        config.lexer.threaded = true;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
}

fn read_source(cli: &Cli) -> Result<String, String> {
    if let Some(expr) = &cli.expr {
        return Ok(expr.clone());
    }
    if let Some(path) = &cli.file {
        return read_file(path);
    }
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| format!("cannot read stdin: {e}"))?;
    Ok(source)
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}
