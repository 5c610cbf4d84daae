//! 表达式语言的字符类别与运算符表

use super::rule::Rule;

/// 数字（Unicode 数值字符）
pub const DIGIT: Rule = Rule::predicate("digit", char::is_numeric);
/// 字母（Unicode 字母字符）
pub const LETTER: Rule = Rule::predicate("letter", char::is_alphabetic);
pub const UNDERSCORE: Rule = Rule::chars("_");
pub const SIGN: Rule = Rule::chars("+-");
/// 可跳过的空白（不含换行）
pub const WHITESPACE: Rule = Rule::chars(" \t");
pub const NEW_LINE: Rule = Rule::chars("\r\n");
pub const PUNCTUATION: Rule = Rule::chars("(){},.[]");
pub const EXPONENT: Rule = Rule::chars("eE");
pub const DECIMAL_POINT: Rule = Rule::chars(".");

/// 运算符（含多字节数学符号，按最长匹配识别）
pub const OPERATOR: Rule = Rule::strings(&[
    "+", "-", "*", "/", "%", "^", "!", "==", "!=", ">", ">=", "<", "<=", "&&", "||", "|", "=",
    "∑", "∏", "∪", "∩", "∁", "⊂", "⊄", "⊆", "⊈", "∈", "∉", "∀", "∃", "∄", "∃!", "∄!",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::rule::longest_match_len;

    #[test]
    fn test_digit_and_letter_are_unicode_aware() {
        assert!(DIGIT.matches_char('7'));
        assert!(DIGIT.matches_char('٣'));
        assert!(!DIGIT.matches_char('x'));
        assert!(LETTER.matches_char('λ'));
        assert!(!LETTER.matches_char('_'));
    }

    #[test]
    fn test_whitespace_excludes_newline() {
        assert!(WHITESPACE.matches_char(' '));
        assert!(WHITESPACE.matches_char('\t'));
        assert!(!WHITESPACE.matches_char('\n'));
        assert!(NEW_LINE.matches_char('\r'));
    }

    #[test]
    fn test_operator_longest_match() {
        // 每个 "S" 与 "S+c" 同时存在时，输入 "S+c..." 必须整体匹配
        for (input, expected) in [
            ("!=1", "!="),
            (">=1", ">="),
            ("<=1", "<="),
            ("==1", "=="),
            ("&&1", "&&"),
            ("||1", "||"),
            ("∃!x", "∃!"),
            ("∄!x", "∄!"),
        ] {
            let len = longest_match_len(input, 0, &[OPERATOR]);
            assert_eq!(&input[..len], expected, "input {input:?}");
        }
    }

    #[test]
    fn test_single_ampersand_is_not_operator() {
        assert_eq!(longest_match_len("&x", 0, &[OPERATOR]), 0);
    }
}
