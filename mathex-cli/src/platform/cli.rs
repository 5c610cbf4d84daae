//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示、源码上下文与 token 打印。

use clap::ValueEnum;
use mathex_api::{MathexError, Token};

/// token 输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 每行一个 `<TYPE, "text">`
    Text,
    /// JSON 数组
    Json,
}

/// 打印 token 序列到 stdout
pub fn print_tokens(tokens: &[Token], format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                println!("{token}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(tokens)?),
    }
    Ok(())
}

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &MathexError, source: &str) {
    eprintln!("error: {}", e.to_report());

    if let (Some(line), Some(col)) = (e.line(), e.column()) {
        if let Some(context) = format_source_context(source, line, col) {
            eprint!("{context}");
        }
    }
}

/// 源代码上下文（错误行及其前后几行，附列标记）
///
/// 行号超出源码范围时返回 `None`。
pub fn format_source_context(source: &str, error_line: usize, error_col: usize) -> Option<String> {
    const CONTEXT_LINES: usize = 2;

    let lines: Vec<&str> = source.lines().collect();
    if error_line == 0 || error_line > lines.len() {
        return None;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(lines.len());
    let width = end_line.to_string().len();

    let mut out = String::new();
    let separator = "-".repeat(width + 1);
    out.push_str(&format!("{separator}|--\n"));
    for line_idx in start_line..=end_line {
        out.push_str(&format!("{line_idx:>width$} | {}\n", lines[line_idx - 1]));
        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{:width$} | {marker}^\n", ""));
        }
    }
    out.push_str(&format!("{separator}|--\n"));
    Some(out)
}
