//! 词法状态机
//!
//! 每个状态消费若干字符、可能发射一个 token，并返回后继状态；
//! 返回 `None` 表示停机（已发射 `EndOfInput` 或 `Error`）。

use tracing::trace;

use super::classes::{
    DECIMAL_POINT, DIGIT, EXPONENT, LETTER, NEW_LINE, OPERATOR, PUNCTUATION, SIGN, UNDERSCORE,
    WHITESPACE,
};
use super::emitter::TokenEmitter;
use super::rule::match_rune;
use super::scanner::RuneScanner;
use super::token::TokenType;
use super::TARGET;

/// 词法状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    /// 跳过空白并按预读字符选择下一个状态
    Dispatch,
    Number,
    Operator,
    Punctuation,
    Name,
}

impl LexState {
    /// 执行一步，返回后继状态
    pub fn step(self, scanner: &mut RuneScanner, emitter: &mut TokenEmitter) -> Option<LexState> {
        trace!(target: TARGET, state = ?self, pos = scanner.pos(), "Lexer step");
        match self {
            LexState::Dispatch => dispatch(scanner, emitter),
            LexState::Number => lex_number(scanner, emitter),
            LexState::Operator => lex_operator(scanner, emitter),
            LexState::Punctuation => lex_punctuation(scanner, emitter),
            LexState::Name => lex_name(scanner, emitter),
        }
    }
}

fn dispatch(scanner: &mut RuneScanner, emitter: &mut TokenEmitter) -> Option<LexState> {
    scanner.accept_runes(&[WHITESPACE]);
    scanner.skip();

    let Some(c) = scanner.peek() else {
        scanner.next_rune();
        emitter.commit(scanner, TokenType::EndOfInput);
        return None;
    };

    if match_rune(c, &[NEW_LINE]) {
        scanner.next_rune();
        emitter.commit(scanner, TokenType::NewLine);
        return Some(LexState::Dispatch);
    }

    let next = if starts_number(c, emitter.last_type()) {
        LexState::Number
    } else if match_rune(c, &[LETTER, UNDERSCORE]) {
        LexState::Name
    } else if match_rune(c, &[PUNCTUATION]) {
        LexState::Punctuation
    } else {
        LexState::Operator
    };
    Some(next)
}

/// 数字起始判断
///
/// 小数点紧跟名称时不是数字；符号紧跟数字或名称时是二元运算符。
fn starts_number(c: char, last: Option<TokenType>) -> bool {
    DIGIT.matches_char(c)
        || (DECIMAL_POINT.matches_char(c) && last != Some(TokenType::Name))
        || (SIGN.matches_char(c)
            && !matches!(last, Some(TokenType::Number) | Some(TokenType::Name)))
}

/// 可选符号、可选空白，再接 `digits [. digits]` 或 `. digits`
///
/// 失败时回滚到调用前的位置。
fn accept_decimal(scanner: &mut RuneScanner) -> bool {
    let start = scanner.mark();
    scanner.accept_rune(&[SIGN]);
    scanner.accept_runes(&[WHITESPACE]);

    if scanner.accept_runes(&[DIGIT]) {
        accept_fraction(scanner);
        return true;
    }
    if accept_fraction(scanner) {
        return true;
    }
    scanner.restore(start);
    false
}

fn accept_fraction(scanner: &mut RuneScanner) -> bool {
    let mark = scanner.mark();
    if scanner.accept_rune(&[DECIMAL_POINT]) && scanner.accept_runes(&[DIGIT]) {
        return true;
    }
    scanner.restore(mark);
    false
}

fn lex_number(scanner: &mut RuneScanner, emitter: &mut TokenEmitter) -> Option<LexState> {
    if !accept_decimal(scanner) {
        return match scanner.peek() {
            Some(c) if SIGN.matches_char(c) => Some(LexState::Operator),
            Some(c) if DECIMAL_POINT.matches_char(c) => Some(LexState::Punctuation),
            _ => {
                emitter.fail(scanner, "number literal");
                None
            }
        };
    }

    // 指数部分可选，不完整时整体回滚
    let mark = scanner.mark();
    scanner.accept_runes(&[WHITESPACE]);
    if !(scanner.accept_rune(&[EXPONENT]) && accept_decimal(scanner)) {
        scanner.restore(mark);
    }
    emitter.commit(scanner, TokenType::Number);
    Some(LexState::Dispatch)
}

fn lex_operator(scanner: &mut RuneScanner, emitter: &mut TokenEmitter) -> Option<LexState> {
    if scanner.accept_string(&[OPERATOR]) {
        emitter.commit(scanner, TokenType::Operator);
        return Some(LexState::Dispatch);
    }
    emitter.fail(scanner, "operator");
    None
}

fn lex_punctuation(scanner: &mut RuneScanner, emitter: &mut TokenEmitter) -> Option<LexState> {
    if scanner.accept_rune(&[PUNCTUATION]) {
        emitter.commit(scanner, TokenType::Punctuation);
        return Some(LexState::Dispatch);
    }
    emitter.fail(scanner, "punctuation");
    None
}

fn lex_name(scanner: &mut RuneScanner, emitter: &mut TokenEmitter) -> Option<LexState> {
    if scanner.accept_rune(&[UNDERSCORE, LETTER]) {
        scanner.accept_runes(&[UNDERSCORE, LETTER, DIGIT]);
        emitter.commit(scanner, TokenType::Name);
        return Some(LexState::Dispatch);
    }
    emitter.fail(scanner, "name");
    None
}
