//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

/// 求值错误（结构化）
pub use mathex_core::expression::EvalError;
/// 词法错误（结构化）
pub use mathex_core::kit::lexer::LexerError;

/// Mathex 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathexError {
    /// 词法分析错误（结构化）
    #[error("{0}")]
    Lexer(#[from] LexerError),

    /// 求值错误
    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),
}

impl MathexError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            MathexError::Lexer(e) => Some(e.line()),
            MathexError::Eval(_) => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            MathexError::Lexer(e) => Some(e.column()),
            MathexError::Eval(_) => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            MathexError::Lexer(_) => "lexer",
            MathexError::Eval(_) => "eval",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，也可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        let error_kind = match self {
            MathexError::Lexer(_) => "Expected",
            MathexError::Eval(EvalError::UnexpectedType { .. }) => "UnexpectedType",
            MathexError::Eval(EvalError::NameConflict { .. }) => "NameConflict",
            MathexError::Eval(EvalError::UndefinedName(_)) => "UndefinedName",
            MathexError::Eval(EvalError::InvalidNumber { .. }) => "InvalidNumber",
        };
        let message = match self {
            MathexError::Lexer(e) => e.message.clone(),
            MathexError::Eval(e) => e.to_string(),
        };
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: self.column(),
            error_kind,
            message,
        }
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、编辑器插件）可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: lexer, eval
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: &'static str,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            _ => write!(f, "[{}] {} error: {}", self.phase, self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
