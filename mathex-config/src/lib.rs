//! Mathex Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Mathex crates.

use serde::{Deserialize, Serialize};

/// Default capacity of the threaded token channel.
///
/// Lookahead never exceeds one token, so two slots keep the producer one
/// step ahead of the consumer.
pub const DEFAULT_TOKEN_BUFFER: usize = 2;

/// Configuration for the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Capacity of the bounded token channel (threaded mode only)
    pub token_buffer: usize,
    /// Run the state machine on a worker thread
    pub threaded: bool,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Configuration for logging, with optional per-phase overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global level
    pub level: LogLevel,
    /// Override for the lexer phase
    pub lexer: Option<LogLevel>,
    /// Override for the evaluator phase
    pub eval: Option<LogLevel>,
}

/// Root configuration (the shape of `mathex.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathexConfig {
    pub lexer: LexerConfig,
    pub logging: LoggingConfig,
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Lexer,
    Eval,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Eval => "eval",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub const fn target(&self) -> &'static str {
        match *self {
            Phase::Lexer => "mathex::lexer",
            Phase::Eval => "mathex::eval",
            Phase::Cli => "mathex::cli",
        }
    }
}

impl LogLevel {
    /// Parse a level name; `silent` maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.level),
            Phase::Eval => self.eval.unwrap_or(self.level),
            Phase::Cli => self.level,
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            token_buffer: DEFAULT_TOKEN_BUFFER,
            threaded: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            lexer: None,
            eval: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexer_config() {
        let cfg = LexerConfig::default();
        assert_eq!(cfg.token_buffer, 2);
        assert!(!cfg.threaded);
    }

    #[test]
    fn test_phase_target() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Lexer.target(), "mathex::lexer");
        assert_eq!(Phase::Eval.target(), "mathex::eval");
    }

    #[test]
    fn test_level_for_override() {
        let cfg = LoggingConfig {
            level: LogLevel::Info,
            lexer: Some(LogLevel::Trace),
            eval: None,
        };
        assert_eq!(cfg.level_for(Phase::Lexer), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Eval), LogLevel::Info);
        assert_eq!(cfg.level_for(Phase::Cli), LogLevel::Info);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_deserialize_partial_json() {
        let cfg: MathexConfig =
            serde_json::from_str(r#"{ "lexer": { "threaded": true }, "logging": { "lexer": "trace" } }"#)
                .unwrap();
        assert!(cfg.lexer.threaded);
        assert_eq!(cfg.lexer.token_buffer, DEFAULT_TOKEN_BUFFER);
        assert_eq!(cfg.logging.level, LogLevel::Warn);
        assert_eq!(cfg.logging.lexer, Some(LogLevel::Trace));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let cfg: MathexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, MathexConfig::default());
    }
}
