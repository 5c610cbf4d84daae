//! 测试辅助工具
//!
//! 提供把源码切成 (类型, 文本) 序列的辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use mathex_core::expression::Literal;
use mathex_core::{Expression, Lexer, Token, TokenType, Value};
use num_bigint::BigInt;
use num_rational::BigRational;

/// 拉取模式下的完整 token 序列（含终止 token）
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// 只保留类型，便于断言结构
pub fn types(source: &str) -> Vec<TokenType> {
    lex(source).into_iter().map(|t| t.token_type).collect()
}

/// 非终止 token 的 (类型, 文本)
pub fn pairs(source: &str) -> Vec<(TokenType, String)> {
    lex(source)
        .into_iter()
        .filter(|t| !t.token_type.is_terminal())
        .map(|t| (t.token_type, t.text))
        .collect()
}

/// 整数字面量表达式
pub fn int(n: i64) -> Arc<dyn Expression> {
    Arc::new(Literal(Value::Number(BigRational::from_integer(BigInt::from(n)))))
}

pub fn rational(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}
