//! Lexer 错误类型
//!
//! 错误 token 的文本就是 [`LexerError::message`]；结构化信息另外保留，
//! 供 [`Lexer::tokenize`](super::Lexer::tokenize) 与上层报告使用。

use super::position::SourcePosition;

/// 错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// 当前状态期望的语法无法匹配
    Expected {
        /// 期望的类别，如 "operator"、"number literal"
        category: &'static str,
        /// 实际遇到的字符，`None` 表示输入结束
        found: Option<char>,
    },
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{position}] {message}")]
pub struct LexerError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 错误发生的位置
    pub position: SourcePosition,
    /// 诊断消息（即错误 token 的文本）
    pub message: String,
}

impl LexerError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, position: SourcePosition) -> Self {
        let message = Self::format_message(&kind);
        Self {
            kind,
            position,
            message,
        }
    }

    /// 在 `input` 的字节偏移处创建"期望 X"错误
    pub fn expected(category: &'static str, found: Option<char>, input: &str, offset: usize) -> Self {
        Self::at(
            ErrorKind::Expected { category, found },
            SourcePosition::locate(input, offset),
        )
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 获取字节偏移
    pub fn offset(&self) -> usize {
        self.position.byte_offset
    }

    fn format_message(kind: &ErrorKind) -> String {
        match kind {
            ErrorKind::Expected {
                category,
                found: Some(c),
            } => format!("expected {category}, got {c:?}"),
            ErrorKind::Expected {
                category,
                found: None,
            } => format!("expected {category}, got end of input"),
        }
    }
}
