//! Arg：模板参数，以及按位置绑定参数的游标。

use crate::skip::SkipSignal;
use crate::value::SqlValue;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("builder not enough args for placeholder #{position} `{token}`")]
    InsufficientArguments { position: usize, token: &'static str },
    #[error(
        "builder placeholder #{position} `{token}` expects {expected}, got {found}"
    )]
    TypeMismatch {
        position: usize,
        token: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("builder unknown placeholder `{0}`")]
    UnknownPlaceholder(String),
}

/// 模板参数：普通值或 skip 信号。
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(SqlValue),
    Skip(SkipSignal),
}

impl Arg {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }

    /// 形状名，用于错误信息。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Value(v) => v.kind(),
            Self::Skip(_) => "skip signal",
        }
    }
}

impl From<SkipSignal> for Arg {
    fn from(v: SkipSignal) -> Self {
        Self::Skip(v)
    }
}

impl<T: Into<SqlValue>> From<T> for Arg {
    fn from(v: T) -> Self {
        Self::Value(v.into())
    }
}

/// 参数列表里是否出现过 skip 信号（按调用方传入的实例判断，不会新建信号来比较）。
pub fn contains_skip(args: &[Arg]) -> bool {
    args.iter().any(Arg::is_skip)
}

/// 只读参数游标：第 i 个占位符绑定第 i 个参数，不修改调用方的列表。
#[derive(Debug, Clone)]
pub struct ArgCursor<'a> {
    args: &'a [Arg],
    next: usize,
}

impl<'a> ArgCursor<'a> {
    pub fn new(args: &'a [Arg]) -> Self {
        Self { args, next: 0 }
    }

    /// 取出下一个未绑定的参数。
    pub fn take(&mut self, token: &'static str) -> Result<&'a Arg, CompileError> {
        let arg = self
            .args
            .get(self.next)
            .ok_or(CompileError::InsufficientArguments {
                position: self.next,
                token,
            })?;
        self.next += 1;
        Ok(arg)
    }

    /// 已绑定的参数个数。
    pub fn consumed(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> &'a [Arg] {
        &self.args[self.next..]
    }
}
