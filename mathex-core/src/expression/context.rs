//! 变量与常量存储
//!
//! 变量和常量放在两张独立的表里，同一名称至多出现在其中一张：
//! - 常量一旦定义便不可修改、不可删除
//! - 变量可以重新赋值或删除，但不能与常量重名

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::error::{Conflict, EvalError};
use super::{Expression, TARGET};

/// 求值上下文
#[derive(Debug, Clone, Default)]
pub struct Context {
    variables: HashMap<String, Arc<dyn Expression>>,
    constants: HashMap<String, Arc<dyn Expression>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置变量；与常量重名时失败
    pub fn set_variable(
        &mut self,
        name: impl Into<String>,
        value: Arc<dyn Expression>,
    ) -> Result<(), EvalError> {
        let name = name.into();
        if self.has_constant(&name) {
            return Err(EvalError::conflict(name, Conflict::ReassignConstant));
        }
        debug!(target: TARGET, name = %name, "Set variable");
        self.variables.insert(name, value);
        Ok(())
    }

    /// 定义常量；名称已被常量或变量占用时失败
    pub fn set_constant(
        &mut self,
        name: impl Into<String>,
        value: Arc<dyn Expression>,
    ) -> Result<(), EvalError> {
        let name = name.into();
        if self.has_constant(&name) {
            return Err(EvalError::conflict(name, Conflict::DuplicateConstant));
        }
        if self.has_variable(&name) {
            return Err(EvalError::conflict(name, Conflict::VariableToConstant));
        }
        debug!(target: TARGET, name = %name, "Set constant");
        self.constants.insert(name, value);
        Ok(())
    }

    /// 删除变量
    pub fn remove_variable(&mut self, name: &str) -> Result<Arc<dyn Expression>, EvalError> {
        if let Some(value) = self.variables.remove(name) {
            debug!(target: TARGET, name, "Removed variable");
            return Ok(value);
        }
        let conflict = if self.has_constant(name) {
            Conflict::RemoveConstant
        } else {
            Conflict::MissingVariable
        };
        Err(EvalError::conflict(name, conflict))
    }

    pub fn has(&self, name: &str) -> bool {
        self.has_variable(name) || self.has_constant(name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// 按名称查找，变量优先
    pub fn get(&self, name: &str) -> Result<&Arc<dyn Expression>, EvalError> {
        self.variables
            .get(name)
            .or_else(|| self.constants.get(name))
            .ok_or_else(|| EvalError::UndefinedName(name.to_owned()))
    }

    pub fn variables(&self) -> &HashMap<String, Arc<dyn Expression>> {
        &self.variables
    }

    pub fn constants(&self) -> &HashMap<String, Arc<dyn Expression>> {
        &self.constants
    }
}
