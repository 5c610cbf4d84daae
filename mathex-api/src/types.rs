//! API 类型定义

use mathex_core::{Lexer, Token, TokenStream};

use crate::error::MathexError;

/// 按配置选择的 token 来源
///
/// 两种模式产生完全相同的 token 序列。
#[derive(Debug)]
pub enum TokenSource {
    /// 在当前线程按需拉取
    Pull(Lexer),
    /// 工作线程经有界通道交付
    Threaded(TokenStream),
}

impl TokenSource {
    /// 原始输入
    pub fn input(&self) -> &str {
        match self {
            TokenSource::Pull(lexer) => lexer.input(),
            TokenSource::Threaded(stream) => stream.input(),
        }
    }

    /// 结束消费，返回过程中记录的词法错误
    pub fn finish(self) -> Result<(), MathexError> {
        match self {
            TokenSource::Pull(lexer) => match lexer.error() {
                Some(error) => Err(MathexError::Lexer(error.clone())),
                None => Ok(()),
            },
            TokenSource::Threaded(stream) => stream.finish().map_err(MathexError::from),
        }
    }
}

impl Iterator for TokenSource {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self {
            TokenSource::Pull(lexer) => lexer.next(),
            TokenSource::Threaded(stream) => stream.next(),
        }
    }
}
