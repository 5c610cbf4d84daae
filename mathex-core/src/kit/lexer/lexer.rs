//! Lexer 驱动
//!
//! 反复执行当前状态，直到发射出一个 token 或停机。
//! 拉取式：每次 [`Lexer::next_token`] 只运行到产生下一个 token 为止。

use std::sync::Arc;

use tracing::debug;

use super::emitter::TokenEmitter;
use super::error::LexerError;
use super::scanner::RuneScanner;
use super::state::LexState;
use super::token::{Token, TokenType};
use super::TARGET;

/// 词法分析器
#[derive(Debug)]
pub struct Lexer {
    scanner: RuneScanner,
    emitter: TokenEmitter,
    /// 当前状态，`None` 表示已停机
    state: Option<LexState>,
}

impl Lexer {
    /// 在不可变输入上创建词法分析器
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            scanner: RuneScanner::new(input),
            emitter: TokenEmitter::new(),
            state: Some(LexState::Dispatch),
        }
    }

    /// 原始输入
    pub fn input(&self) -> &str {
        self.scanner.input()
    }

    pub(crate) fn shared_input(&self) -> Arc<str> {
        self.scanner.shared_input()
    }

    /// 产生下一个 token；终止 token 之后返回 `None`
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.emitter.pop() {
                return Some(token);
            }
            let state = self.state?;
            self.state = state.step(&mut self.scanner, &mut self.emitter);
            if self.state.is_none() {
                debug!(target: TARGET, "Lexer halted");
            }
        }
    }

    /// 是否已停机且没有待取的 token
    pub fn is_finished(&self) -> bool {
        self.state.is_none() && !self.emitter.has_pending()
    }

    /// 已发生的词法错误
    pub fn error(&self) -> Option<&LexerError> {
        self.emitter.error()
    }

    pub(crate) fn take_error(&mut self) -> Option<LexerError> {
        self.emitter.take_error()
    }

    /// 一次性切分整个输入
    ///
    /// 成功时结果以 `EndOfInput` 结尾；遇到错误 token 时返回对应的 [`LexerError`]。
    pub fn tokenize(input: impl Into<Arc<str>>) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token() {
            if token.token_type == TokenType::Error {
                if let Some(error) = lexer.take_error() {
                    return Err(error);
                }
            }
            tokens.push(token);
        }
        Ok(tokens)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        Lexer::new(input).collect()
    }

    fn tok(token_type: TokenType, text: &str) -> Token {
        Token::new(token_type, text)
    }

    fn eof() -> Token {
        tok(TokenType::EndOfInput, "")
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(lex(""), vec![eof()]);
    }

    #[test]
    fn test_signed_digits() {
        for input in ["53", "-53", "+53", "  -53  ", "+  5"] {
            let tokens = lex(input);
            assert_eq!(tokens, vec![tok(TokenType::Number, input.trim()), eof()], "input {input:?}");
        }
    }

    #[test]
    fn test_simple_sum() {
        assert_eq!(
            lex("1+2"),
            vec![
                tok(TokenType::Number, "1"),
                tok(TokenType::Operator, "+"),
                tok(TokenType::Number, "2"),
                eof(),
            ]
        );
    }

    #[test]
    fn test_exponent_number() {
        assert_eq!(lex("  -2e+1 "), vec![tok(TokenType::Number, "-2e+1"), eof()]);
        assert_eq!(lex("-.9 "), vec![tok(TokenType::Number, "-.9"), eof()]);
    }

    #[test]
    fn test_sign_after_name_is_operator() {
        assert_eq!(
            lex("-1 +_abc / 7 "),
            vec![
                tok(TokenType::Number, "-1"),
                tok(TokenType::Operator, "+"),
                tok(TokenType::Name, "_abc"),
                tok(TokenType::Operator, "/"),
                tok(TokenType::Number, "7"),
                eof(),
            ]
        );
    }

    #[test]
    fn test_sign_after_operator_is_number() {
        assert_eq!(
            lex("2*-3"),
            vec![
                tok(TokenType::Number, "2"),
                tok(TokenType::Operator, "*"),
                tok(TokenType::Number, "-3"),
                eof(),
            ]
        );
    }

    #[test]
    fn test_bare_sign_falls_through_to_operator() {
        assert_eq!(
            lex("- x"),
            vec![tok(TokenType::Operator, "-"), tok(TokenType::Name, "x"), eof()]
        );
    }

    #[test]
    fn test_name_and_punctuation() {
        assert_eq!(lex("_ad5"), vec![tok(TokenType::Name, "_ad5"), eof()]);
        assert_eq!(lex("."), vec![tok(TokenType::Punctuation, "."), eof()]);
        assert_eq!(
            lex("f(x, y)"),
            vec![
                tok(TokenType::Name, "f"),
                tok(TokenType::Punctuation, "("),
                tok(TokenType::Name, "x"),
                tok(TokenType::Punctuation, ","),
                tok(TokenType::Name, "y"),
                tok(TokenType::Punctuation, ")"),
                eof(),
            ]
        );
    }

    #[test]
    fn test_point_after_name_is_punctuation() {
        assert_eq!(
            lex("a.5"),
            vec![
                tok(TokenType::Name, "a"),
                tok(TokenType::Punctuation, "."),
                tok(TokenType::Number, "5"),
                eof(),
            ]
        );
    }

    #[test]
    fn test_unicode_operators() {
        assert_eq!(
            lex("A∪B ∃!x"),
            vec![
                tok(TokenType::Name, "A"),
                tok(TokenType::Operator, "∪"),
                tok(TokenType::Name, "B"),
                tok(TokenType::Operator, "∃!"),
                tok(TokenType::Name, "x"),
                eof(),
            ]
        );
    }

    #[test]
    fn test_new_lines() {
        assert_eq!(
            lex("a\r\nb"),
            vec![
                tok(TokenType::Name, "a"),
                tok(TokenType::NewLine, "\r"),
                tok(TokenType::NewLine, "\n"),
                tok(TokenType::Name, "b"),
                eof(),
            ]
        );
    }

    #[test]
    fn test_error_halts_stream() {
        let mut lexer = Lexer::new("1 \u{7} 2");
        assert_eq!(lexer.next(), Some(tok(TokenType::Number, "1")));
        let error = lexer.next().unwrap();
        assert!(error.is_error());
        assert_eq!(error.text, r"expected operator, got '\u{7}'");
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
        assert!(lexer.is_finished());
        assert_eq!(lexer.error().map(|e| e.column()), Some(3));
    }

    #[test]
    fn test_nul_is_ordinary_rune() {
        let tokens = lex("1\u{0}");
        assert_eq!(tokens[0], tok(TokenType::Number, "1"));
        assert!(tokens[1].is_error());
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_tokenize() {
        let tokens = Lexer::tokenize("x ≥ 1").unwrap_err();
        assert_eq!(tokens.message, "expected operator, got '≥'");
        assert_eq!(tokens.offset(), 2);

        let tokens = Lexer::tokenize("x >= 1").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.last(), Some(&eof()));
    }

    #[test]
    fn test_relex_is_idempotent() {
        let source = "-1.5e3 * (x_1 ∪ y) != .25 ⊆ ∏";
        for token in Lexer::tokenize(source).unwrap() {
            if token.token_type == TokenType::EndOfInput {
                continue;
            }
            let again = Lexer::tokenize(token.text.as_str()).unwrap();
            assert_eq!(again, vec![token.clone(), eof()], "token {token}");
        }
    }

    #[test]
    fn test_name_accepts_alphabetic_marks() {
        // U+0345 属于 Other_Alphabetic，按字母处理
        assert_eq!(lex("x\u{345}"), vec![tok(TokenType::Name, "x\u{345}"), eof()]);
    }

    #[test]
    fn test_input_accessor() {
        let lexer = Lexer::new("a + b");
        assert_eq!(lexer.input(), "a + b");
    }
}
