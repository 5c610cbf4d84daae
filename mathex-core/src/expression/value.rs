//! 求值结果

use std::fmt;
use std::sync::Arc;

use num_rational::BigRational;

use super::Expression;

/// 表达式的动态结果
#[derive(Debug, Clone)]
pub enum Value {
    /// 精确有理数
    Number(BigRational),
    Boolean(bool),
    /// 元素是未求值的表达式
    Set(Vec<Arc<dyn Expression>>),
}

impl Value {
    /// 类型名，用于类型错误信息
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Set(_) => "set",
        }
    }
}

impl From<BigRational> for Value {
    fn from(value: BigRational) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Set(items) => write!(f, "{{{} elements}}", items.len()),
        }
    }
}
