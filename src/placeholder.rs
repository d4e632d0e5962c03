//! 占位符：`?d` / `?f` / `?a` / `?#` / `?`。

use crate::args::CompileError;
use std::fmt;

/// 模板里的占位符种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `?d`：整数。
    Int,
    /// `?f`：浮点数。
    Float,
    /// `?a`：数组，逗号拼接。
    Array,
    /// `?#`：标识符或标识符列表。
    Ident,
    /// `?`：按值的实际类型格式化。
    Any,
}

impl Placeholder {
    /// 按 token 文本查找占位符种类。
    pub fn from_token(token: &str) -> Result<Self, CompileError> {
        match token {
            "?d" => Ok(Self::Int),
            "?f" => Ok(Self::Float),
            "?a" => Ok(Self::Array),
            "?#" => Ok(Self::Ident),
            "?" => Ok(Self::Any),
            other => Err(CompileError::UnknownPlaceholder(other.to_string())),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Int => "?d",
            Self::Float => "?f",
            Self::Array => "?a",
            Self::Ident => "?#",
            Self::Any => "?",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// `rest` 以 `?` 开头时，返回匹配到的 token 文本（优先匹配两字符的 token）。
pub(crate) fn match_token(rest: &str) -> Option<&str> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'?') {
        return None;
    }
    match bytes.get(1) {
        Some(b'd' | b'f' | b'a' | b'#') => Some(&rest[..2]),
        _ => Some(&rest[..1]),
    }
}
