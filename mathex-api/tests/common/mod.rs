//! 测试辅助工具

#![allow(dead_code)]

use mathex_api::{LexerConfig, RunConfig};

/// 线程模式配置
pub fn threaded(token_buffer: usize) -> RunConfig {
    RunConfig {
        lexer: LexerConfig {
            token_buffer,
            threaded: true,
        },
    }
}

/// 两种模式的配置
pub fn all_modes() -> Vec<RunConfig> {
    vec![RunConfig::default(), threaded(1), threaded(16)]
}
