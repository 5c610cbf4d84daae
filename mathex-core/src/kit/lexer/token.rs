//! Token 定义

use std::fmt;

use serde::Serialize;

/// Token 类型（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// 词法错误，`text` 是诊断信息而不是源文本
    #[serde(rename = "ERROR")]
    Error,
    /// 输入结束
    #[serde(rename = "EOF")]
    EndOfInput,
    /// 换行（`\r` 或 `\n`，每个字符一个 token）
    #[serde(rename = "NEW_LINE")]
    NewLine,
    /// 标点：`(){},.[]`
    #[serde(rename = "PUNCTUATION")]
    Punctuation,
    /// 实数字面量（可带符号与指数）
    #[serde(rename = "NUMBER")]
    Number,
    /// 运算符
    #[serde(rename = "OPERATOR")]
    Operator,
    /// 名称：以字母或 `_` 开头，后接字母、数字或 `_`
    #[serde(rename = "NAME")]
    Name,
}

impl TokenType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenType::Error => "ERROR",
            TokenType::EndOfInput => "EOF",
            TokenType::NewLine => "NEW_LINE",
            TokenType::Punctuation => "PUNCTUATION",
            TokenType::Number => "NUMBER",
            TokenType::Operator => "OPERATOR",
            TokenType::Name => "NAME",
        }
    }

    /// 是否为终止 token（流在它之后关闭）
    pub const fn is_terminal(&self) -> bool {
        matches!(self, TokenType::Error | TokenType::EndOfInput)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 词法 token，发射后不可变
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub text: String,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>) -> Self {
        Self {
            token_type,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.token_type == TokenType::Error
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_type {
            TokenType::EndOfInput => f.write_str("<EOF>"),
            other => write!(f, "<{}, {:?}>", other, self.text),
        }
    }
}
