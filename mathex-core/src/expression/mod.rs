//! 求值边界
//!
//! 只定义表达式的求值能力、变量/常量存储，以及数字 token 到有理数的转换；
//! 语法分析不在此处。

pub mod context;
pub mod error;
pub mod number;
pub mod value;

use std::fmt;
use std::sync::Arc;

use num_rational::BigRational;
use tracing::trace;

pub use context::Context;
pub use error::{Conflict, EvalError};
pub use number::parse_number;
pub use value::Value;

/// 求值阶段的日志 target
pub(crate) const TARGET: &str = mathex_config::Phase::Eval.target();

/// 可在 [`Context`] 中求值的表达式
pub trait Expression: fmt::Debug + Send + Sync {
    fn evaluate(&self, context: &Context) -> Result<Value, EvalError>;
}

/// 求值并要求结果为数字
pub fn evaluate_number(
    expression: &dyn Expression,
    context: &Context,
) -> Result<BigRational, EvalError> {
    match expression.evaluate(context)? {
        Value::Number(n) => Ok(n),
        other => Err(unexpected("number", &other)),
    }
}

/// 求值并要求结果为布尔值
pub fn evaluate_boolean(expression: &dyn Expression, context: &Context) -> Result<bool, EvalError> {
    match expression.evaluate(context)? {
        Value::Boolean(b) => Ok(b),
        other => Err(unexpected("boolean", &other)),
    }
}

/// 求值并要求结果为集合
pub fn evaluate_set(
    expression: &dyn Expression,
    context: &Context,
) -> Result<Vec<Arc<dyn Expression>>, EvalError> {
    match expression.evaluate(context)? {
        Value::Set(items) => Ok(items),
        other => Err(unexpected("set", &other)),
    }
}

fn unexpected(expected: &'static str, actual: &Value) -> EvalError {
    trace!(target: TARGET, expected, actual = actual.type_name(), "Type mismatch");
    EvalError::UnexpectedType {
        expected,
        actual: actual.type_name(),
    }
}

/// 常量表达式
#[derive(Debug, Clone)]
pub struct Literal(pub Value);

impl Expression for Literal {
    fn evaluate(&self, _context: &Context) -> Result<Value, EvalError> {
        Ok(self.0.clone())
    }
}

/// 按名称引用上下文中的表达式
///
/// 每次求值都会重新查找并求值被引用的表达式。
/// 引用自身（直接或间接）的定义会无限递归，调用方需自行避免。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
}

impl Reference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Expression for Reference {
    fn evaluate(&self, context: &Context) -> Result<Value, EvalError> {
        context.get(&self.name)?.evaluate(context)
    }
}
