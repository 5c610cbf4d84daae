//! Mathex Lexer
//!
//! 手写的词法分析器，由下至上分为：
//! - 规则引擎：字符集 / 谓词 / 字符串集，最长匹配
//! - 字符扫描器：游标、多字节回退、位置保存与恢复
//! - Token 发射器：切出 `[start, pos)` 的文本
//! - 状态机：分发状态 + 数字 / 运算符 / 标点 / 名称状态
//! - Token 流：拉取式迭代器，或有界通道的工作线程

pub mod classes;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod position;
pub mod rule;
pub mod scanner;
pub mod state;
pub mod stream;
pub mod token;

/// 词法阶段的日志 target
pub(crate) const TARGET: &str = mathex_config::Phase::Lexer.target();

pub use emitter::TokenEmitter;
pub use error::{ErrorKind, LexerError};
pub use lexer::Lexer;
pub use position::SourcePosition;
pub use rule::{longest_match_len, match_rune, match_str, Predicate, Rule};
pub use scanner::{Mark, RuneScanner};
pub use state::LexState;
pub use stream::TokenStream;
pub use token::{Token, TokenType};
