//! Mathex Core - lexer kit and evaluator boundary (pure logic, no IO)
//!
//! Contains the rune scanner, rule engine, lexer state machine and token
//! stream, plus the `Expression`/`Context` contract the evaluator builds on.
//! Only operates on in-memory data structures, no file IO or terminal output.

pub mod expression;
pub mod kit;

// Re-export common types
pub use expression::{Context, EvalError, Expression, Value};
pub use kit::lexer::{Lexer, LexerError, Token, TokenStream, TokenType};

// Re-export config types from mathex-config
pub use mathex_config::{LexerConfig, Phase};
