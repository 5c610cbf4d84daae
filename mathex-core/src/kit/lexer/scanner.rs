//! 字符扫描器
//!
//! 持有不可变输入与游标，支持：
//! - 单字符预读 / 回退（按 UTF-8 宽度回退）
//! - 位置保存与恢复（用于可回溯的试探匹配）
//! - 基于 [`Rule`] 的单字符与最长字符串接受
//!
//! 不变量：`0 <= start <= pos <= input.len()`，且 `start`/`pos` 总在字符边界上。

use std::sync::Arc;

use tracing::trace;

use super::rule::{longest_match_len, match_rune, Rule};
use super::TARGET;

/// 保存的扫描位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pos: usize,
    eof_depth: usize,
}

/// 字符扫描器
#[derive(Debug, Clone)]
pub struct RuneScanner {
    input: Arc<str>,
    /// 当前 token 的起始偏移
    start: usize,
    /// 游标
    pos: usize,
    /// 在输入末尾连续读取的次数（回退时先抵消它）
    eof_depth: usize,
}

impl RuneScanner {
    pub fn new(input: impl Into<Arc<str>>) -> Self {
        Self {
            input: input.into(),
            start: 0,
            pos: 0,
            eof_depth: 0,
        }
    }

    /// 原始输入
    pub fn input(&self) -> &str {
        &self.input
    }

    /// 共享的原始输入
    pub fn shared_input(&self) -> Arc<str> {
        Arc::clone(&self.input)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn eof_depth(&self) -> usize {
        self.eof_depth
    }

    /// 读取一个字符并前进
    ///
    /// 到达末尾时返回 `None`，`pos` 不动，`eof_depth` 加一。
    pub fn next_rune(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                Some(c)
            }
            None => {
                self.eof_depth += 1;
                None
            }
        }
    }

    /// 撤销上一次 [`Self::next_rune`]
    pub fn backoff(&mut self) {
        if self.eof_depth > 0 {
            self.eof_depth -= 1;
            return;
        }
        if let Some(c) = self.input[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
        }
    }

    /// 预读一个字符（不改变扫描状态）
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// 下一个字符满足任一规则时消费它
    pub fn accept_rune(&mut self, rules: &[Rule]) -> bool {
        match self.next_rune() {
            Some(c) if match_rune(c, rules) => true,
            _ => {
                self.backoff();
                false
            }
        }
    }

    /// 贪婪地接受一个或多个字符，至少接受一个时返回 true
    pub fn accept_runes(&mut self, rules: &[Rule]) -> bool {
        let mut accepted = false;
        while self.accept_rune(rules) {
            accepted = true;
        }
        accepted
    }

    /// 按最长匹配接受一段字符串
    pub fn accept_string(&mut self, rules: &[Rule]) -> bool {
        let len = longest_match_len(&self.input, self.pos, rules);
        if len == 0 {
            return false;
        }
        trace!(target: TARGET, pos = self.pos, len, "Accepted string");
        self.pos += len;
        true
    }

    /// 贪婪地接受一段或多段字符串
    pub fn accept_strings(&mut self, rules: &[Rule]) -> bool {
        let mut accepted = false;
        while self.accept_string(rules) {
            accepted = true;
        }
        accepted
    }

    /// 保存当前位置
    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            eof_depth: self.eof_depth,
        }
    }

    /// 恢复到保存的位置
    ///
    /// 标记不能早于当前 token 的起点。
    pub fn restore(&mut self, mark: Mark) {
        debug_assert!(mark.pos >= self.start, "mark precedes token start");
        self.pos = mark.pos;
        self.eof_depth = mark.eof_depth;
    }

    /// 当前 token 已接受的文本 `[start, pos)`
    pub fn pending(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    /// 切出已接受的文本，并把 `start` 移到 `pos`
    pub fn cut(&mut self) -> String {
        let text = self.pending().to_owned();
        self.start = self.pos;
        text
    }

    /// 丢弃已接受的文本（如空白）
    pub fn skip(&mut self) {
        self.start = self.pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::classes::{DIGIT, OPERATOR, SIGN, WHITESPACE};

    #[test]
    fn test_next_and_backoff_multibyte() {
        let mut scanner = RuneScanner::new("a∪b");
        assert_eq!(scanner.next_rune(), Some('a'));
        assert_eq!(scanner.next_rune(), Some('∪'));
        assert_eq!(scanner.pos(), 4);

        scanner.backoff();
        assert_eq!(scanner.pos(), 1);
        assert_eq!(scanner.next_rune(), Some('∪'));
        assert_eq!(scanner.next_rune(), Some('b'));
        assert_eq!(scanner.next_rune(), None);
    }

    #[test]
    fn test_backoff_at_eof_never_underflows() {
        let mut scanner = RuneScanner::new("x");
        assert_eq!(scanner.next_rune(), Some('x'));
        assert_eq!(scanner.next_rune(), None);
        assert_eq!(scanner.next_rune(), None);
        assert_eq!(scanner.eof_depth(), 2);

        scanner.backoff();
        scanner.backoff();
        assert_eq!(scanner.pos(), 1);
        assert_eq!(scanner.eof_depth(), 0);

        // 再回退一次才真正退回到 'x' 之前
        scanner.backoff();
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_backoff_at_start_is_noop() {
        let mut scanner = RuneScanner::new("x");
        scanner.backoff();
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_peek_is_side_effect_free() {
        let mut scanner = RuneScanner::new("é");
        assert_eq!(scanner.peek(), Some('é'));
        assert_eq!(scanner.pos(), 0);
        scanner.next_rune();
        assert_eq!(scanner.peek(), None);
        assert_eq!(scanner.pos(), 2);
        assert_eq!(scanner.eof_depth(), 0);
    }

    #[test]
    fn test_accept_rune() {
        let mut scanner = RuneScanner::new("+7");
        assert!(!scanner.accept_rune(&[DIGIT]));
        assert_eq!(scanner.pos(), 0);
        assert!(scanner.accept_rune(&[SIGN]));
        assert!(scanner.accept_rune(&[DIGIT]));
        assert!(!scanner.accept_rune(&[DIGIT]));
        assert_eq!(scanner.eof_depth(), 0);
    }

    #[test]
    fn test_accept_runes() {
        let mut scanner = RuneScanner::new("123a");
        assert!(scanner.accept_runes(&[DIGIT]));
        assert_eq!(scanner.pending(), "123");
        assert!(!scanner.accept_runes(&[DIGIT]));
    }

    #[test]
    fn test_accept_string_longest() {
        let mut scanner = RuneScanner::new("!=!");
        assert!(scanner.accept_string(&[OPERATOR]));
        assert_eq!(scanner.pending(), "!=");
    }

    #[test]
    fn test_accept_strings_greedy() {
        let mut scanner = RuneScanner::new("∪∩x");
        assert!(scanner.accept_strings(&[OPERATOR]));
        assert_eq!(scanner.pending(), "∪∩");
        assert!(!scanner.accept_strings(&[OPERATOR]));
    }

    #[test]
    fn test_mark_and_restore() {
        let mut scanner = RuneScanner::new("12 e");
        scanner.accept_runes(&[DIGIT]);
        let mark = scanner.mark();
        scanner.accept_runes(&[WHITESPACE]);
        scanner.next_rune();
        scanner.next_rune();
        assert_eq!(scanner.eof_depth(), 1);

        scanner.restore(mark);
        assert_eq!(scanner.pending(), "12");
        assert_eq!(scanner.eof_depth(), 0);
    }

    #[test]
    fn test_cut_and_skip() {
        let mut scanner = RuneScanner::new("  ab");
        scanner.accept_runes(&[WHITESPACE]);
        scanner.skip();
        scanner.next_rune();
        scanner.next_rune();
        assert_eq!(scanner.cut(), "ab");
        assert_eq!(scanner.start(), scanner.pos());
        assert_eq!(scanner.pending(), "");
    }
}
