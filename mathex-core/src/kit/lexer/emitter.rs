//! Token 发射器
//!
//! 状态提交时把扫描器中 `[start, pos)` 的文本切成 token，
//! 并记录最近一次发射的类型，供分发状态做回看判断。

use std::collections::VecDeque;

use tracing::{debug, warn};

use super::error::LexerError;
use super::scanner::RuneScanner;
use super::token::{Token, TokenType};
use super::TARGET;

/// Token 发射器
#[derive(Debug, Default)]
pub struct TokenEmitter {
    pending: VecDeque<Token>,
    last_type: Option<TokenType>,
    error: Option<LexerError>,
}

impl TokenEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把已接受的文本切成指定类型的 token
    pub fn commit(&mut self, scanner: &mut RuneScanner, token_type: TokenType) {
        let token = Token::new(token_type, scanner.cut());
        debug!(target: TARGET, token_type = %token.token_type, text = ?token.text, "Produced token");
        self.push(token);
    }

    /// 发射错误 token，诊断信息描述当前预读到的字符
    pub fn fail(&mut self, scanner: &RuneScanner, category: &'static str) {
        let error = LexerError::expected(category, scanner.peek(), scanner.input(), scanner.pos());
        warn!(target: TARGET, line = error.line(), column = error.column(), "Lex error: {}", error.message);
        self.push(Token::new(TokenType::Error, error.message.clone()));
        self.error = Some(error);
    }

    fn push(&mut self, token: Token) {
        self.last_type = Some(token.token_type);
        self.pending.push_back(token);
    }

    /// 最近一次发射的 token 类型
    pub fn last_type(&self) -> Option<TokenType> {
        self.last_type
    }

    /// 取出最早发射、尚未消费的 token
    pub fn pop(&mut self) -> Option<Token> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// 已发生的词法错误
    pub fn error(&self) -> Option<&LexerError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<LexerError> {
        self.error.take()
    }
}
