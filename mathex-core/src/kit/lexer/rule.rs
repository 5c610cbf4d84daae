//! 规则引擎
//!
//! 三种规则形态统一为封闭的 [`Rule`] 枚举：
//! - `Chars`：字符集合（单个字符的成员判定）
//! - `Predicate`：命名谓词（如"是否为字母"）
//! - `Strings`：字符串集合（共享前缀的多字符运算符，如 `!` 与 `!=`）
//!
//! 长度一律按 UTF-8 字节计算，候选子串只在字符边界处切分。

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

/// 单个字符的最大 UTF-8 字节数
const MAX_CHAR_LEN: usize = 4;

/// 每个规则值的最大长度缓存（进程生命周期内只计算一次）
static MAX_LENGTHS: Lazy<Mutex<HashMap<Rule, usize>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// 命名谓词
///
/// 名称用作规则的身份（相等性与哈希），也用于诊断信息。
#[derive(Clone, Copy)]
pub struct Predicate {
    name: &'static str,
    test: fn(char) -> bool,
}

impl Predicate {
    pub const fn new(name: &'static str, test: fn(char) -> bool) -> Self {
        Self { name, test }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn test(&self, c: char) -> bool {
        (self.test)(c)
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Predicate {}

impl Hash for Predicate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self.name)
    }
}

/// 词法规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// 字符集合
    Chars(&'static str),
    /// 命名谓词（只对单个字符有意义）
    Predicate(Predicate),
    /// 字符串集合
    Strings(&'static [&'static str]),
}

impl Rule {
    /// 字符集规则；空集合在常量求值期直接报错
    pub const fn chars(set: &'static str) -> Self {
        assert!(!set.is_empty(), "character set rule must not be empty");
        Rule::Chars(set)
    }

    /// 谓词规则
    pub const fn predicate(name: &'static str, test: fn(char) -> bool) -> Self {
        Rule::Predicate(Predicate::new(name, test))
    }

    /// 字符串集规则；空集合或空成员在常量求值期直接报错
    pub const fn strings(values: &'static [&'static str]) -> Self {
        assert!(!values.is_empty(), "string set rule must not be empty");
        let mut i = 0;
        while i < values.len() {
            assert!(!values[i].is_empty(), "string set rule must not contain an empty string");
            i += 1;
        }
        Rule::Strings(values)
    }

    /// 单个字符是否满足规则
    ///
    /// 对字符串集而言，只要某个成员以该字符开头即视为满足。
    pub fn matches_char(&self, c: char) -> bool {
        match self {
            Rule::Chars(set) => set.contains(c),
            Rule::Predicate(predicate) => predicate.test(c),
            Rule::Strings(values) => values.iter().any(|value| value.starts_with(c)),
        }
    }

    /// 候选文本是否恰好满足规则
    pub fn matches_str(&self, text: &str) -> bool {
        match self {
            Rule::Chars(set) => single_char(text).is_some_and(|c| set.contains(c)),
            Rule::Predicate(predicate) => single_char(text).is_some_and(|c| predicate.test(c)),
            Rule::Strings(values) => values.contains(&text),
        }
    }

    /// 规则可能匹配的最大字节长度（带缓存）
    pub fn max_len(&self) -> usize {
        let mut cache = MAX_LENGTHS.lock().unwrap_or_else(PoisonError::into_inner);
        *cache.entry(*self).or_insert_with(|| self.compute_max_len())
    }

    fn compute_max_len(&self) -> usize {
        match self {
            Rule::Chars(set) => set.chars().map(char::len_utf8).max().unwrap_or(0),
            Rule::Predicate(_) => MAX_CHAR_LEN,
            Rule::Strings(values) => values.iter().map(|value| value.len()).max().unwrap_or(0),
        }
    }
}

/// 文本恰好是一个字符时返回该字符
fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// 字符是否满足任一规则
pub fn match_rune(c: char, rules: &[Rule]) -> bool {
    rules.iter().any(|rule| rule.matches_char(c))
}

/// 文本是否满足任一规则
pub fn match_str(text: &str, rules: &[Rule]) -> bool {
    rules.iter().any(|rule| rule.matches_str(text))
}

/// 从 `offset` 开始的最长匹配长度（字节），无匹配时为 0
///
/// 先取所有规则的最大长度（不超过剩余输入），再从长到短逐一尝试。
/// 必须从长到短：`!=` 要优先于 `!`。
pub fn longest_match_len(input: &str, offset: usize, rules: &[Rule]) -> usize {
    let remaining = input.len().saturating_sub(offset);
    let max_len = rules
        .iter()
        .map(Rule::max_len)
        .max()
        .unwrap_or(0)
        .min(remaining);

    (1..=max_len)
        .rev()
        .filter(|len| input.is_char_boundary(offset + len))
        .find(|len| match_str(&input[offset..offset + len], rules))
        .unwrap_or(0)
}
