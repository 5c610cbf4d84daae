//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use mathex_config::{LexerConfig, MathexConfig};
use once_cell::sync::OnceCell;

/// Execution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Lexer configuration
    pub lexer: LexerConfig,
}

impl RunConfig {
    /// Channel capacity used in threaded mode (never zero)
    pub fn token_buffer(&self) -> usize {
        self.lexer.token_buffer.max(1)
    }
}

impl From<&MathexConfig> for RunConfig {
    fn from(config: &MathexConfig) -> Self {
        Self {
            lexer: config.lexer.clone(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Install the global configuration
///
/// Returns the rejected config if one was already installed.
pub fn init(config: RunConfig) -> Result<(), RunConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Get the global config, installing the default on first use
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
