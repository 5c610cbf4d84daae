//! 源代码位置
//!
//! - line/column: 人类可读的错误显示（1-based，按 Unicode 码点计列）
//! - byte_offset: 输入中的字节偏移（0-based）

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 输入起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// 前进一个字符
    ///
    /// `\n` 换行；单独的 `\r` 只算普通字符。
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.byte_offset += c.len_utf8();
    }

    /// 计算 `input` 中字节偏移 `offset` 对应的位置
    ///
    /// 偏移超出输入时停在末尾。
    pub fn locate(input: &str, offset: usize) -> Self {
        let mut position = Self::start();
        for c in input.chars() {
            if position.byte_offset >= offset {
                break;
            }
            position.advance(c);
        }
        position
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
