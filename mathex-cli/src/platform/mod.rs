//! 终端相关的输出

mod cli;

pub use cli::{print_error_with_source, print_tokens, OutputFormat};
