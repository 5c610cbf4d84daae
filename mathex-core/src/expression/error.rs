//! 求值错误类型

/// 名称冲突的具体原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// 给常量赋值
    ReassignConstant,
    /// 常量已存在
    DuplicateConstant,
    /// 变量不能转为常量
    VariableToConstant,
    /// 常量不能删除
    RemoveConstant,
    /// 要删除的变量不存在
    MissingVariable,
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Conflict::ReassignConstant => "cannot change the value of a constant",
            Conflict::DuplicateConstant => "a constant with this name already exists",
            Conflict::VariableToConstant => "is a variable and cannot be turned into a constant",
            Conflict::RemoveConstant => "is a constant and cannot be removed",
            Conflict::MissingVariable => "no such variable",
        };
        f.write_str(text)
    }
}

/// 求值错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// 表达式结果的动态类型不符合预期
    #[error("unexpected type: expected {expected}, got {actual}")]
    UnexpectedType {
        expected: &'static str,
        actual: &'static str,
    },

    /// 违反变量与常量的互斥约束
    #[error("name conflict on `{name}`: {conflict}")]
    NameConflict { name: String, conflict: Conflict },

    /// 既不是变量也不是常量
    #[error("no variable or constant named `{0}`")]
    UndefinedName(String),

    /// 数字字面量无法转换为有理数
    #[error("invalid number literal {text:?}: {reason}")]
    InvalidNumber { text: String, reason: &'static str },
}

impl EvalError {
    pub fn conflict(name: impl Into<String>, conflict: Conflict) -> Self {
        EvalError::NameConflict {
            name: name.into(),
            conflict,
        }
    }
}
