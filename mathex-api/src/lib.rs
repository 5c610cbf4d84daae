//! Mathex API - Lexing orchestration layer
//!
//! Provides unified lexing interface, including:
//! - Pull or threaded token production chosen by configuration
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (MathexError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `tokenize(source, &config)` API.

use std::sync::Arc;

use tracing::{debug, info};

use mathex_core::{Context, Expression, Lexer, Value};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from mathex_config
pub use mathex_config::{LexerConfig, LogLevel, LoggingConfig, MathexConfig, Phase};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ErrorReport, EvalError, LexerError, MathexError};
pub use types::TokenSource;

// Re-export core types
pub use mathex_config;
pub use mathex_core::{Token, TokenType};

const TARGET: &str = Phase::Lexer.target();

/// Start token production with explicit configuration
pub fn stream(source: impl Into<Arc<str>>, config: &RunConfig) -> TokenSource {
    let lexer = Lexer::new(source);
    if config.lexer.threaded {
        debug!(target: TARGET, capacity = config.token_buffer(), "Using threaded token stream");
        TokenSource::Threaded(lexer.spawn(config.token_buffer()))
    } else {
        TokenSource::Pull(lexer)
    }
}

/// Tokenize the whole source with explicit configuration
///
/// This is the recommended API for library users. The result ends with the
/// `EndOfInput` token; a lexical error is returned instead of its `Error` token.
pub fn tokenize(source: impl Into<Arc<str>>, config: &RunConfig) -> Result<Vec<Token>, MathexError> {
    let mut tokens = stream(source, config);
    info!(target: TARGET, bytes = tokens.input().len(), "Starting tokenization");

    let mut output = Vec::new();
    for token in tokens.by_ref() {
        if token.is_error() {
            break;
        }
        output.push(token);
    }
    tokens.finish()?;

    info!(target: TARGET, tokens = output.len(), "Tokenization completed");
    Ok(output)
}

/// Evaluate an expression, lifting failures into [`MathexError`]
pub fn evaluate(expression: &dyn Expression, context: &Context) -> Result<Value, MathexError> {
    Ok(expression.evaluate(context)?)
}

/// Tokenize with the global config (installs the default if needed)
pub fn quick_tokenize(source: &str) -> Result<Vec<Token>, MathexError> {
    tokenize(source, get_config())
}
