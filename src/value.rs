//! SQL 参数值类型。

use std::borrow::Cow;

/// SQL 参数值（封闭的 tagged 变体，格式化时穷举匹配）。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    /// `?a` / `?#` 使用的序列值。
    List(Vec<SqlValue>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    /// 把任意可迭代集合收集为 `List`。
    pub fn list<T: Into<SqlValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 值的形状名，用于错误信息。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I64(_) | Self::U64(_) => "integer",
            Self::F64(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::DateTime(_) => "datetime",
        }
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for SqlValue {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for SqlValue {
    fn from(v: [T; N]) -> Self {
        Self::list(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

#[cfg(test)]
mod tests {
    use super::SqlValue;

    #[test]
    fn from_option_some() {
        assert_eq!(SqlValue::from_option(Some(123_i64)), SqlValue::I64(123));
    }

    #[test]
    fn from_option_none() {
        assert_eq!(SqlValue::from_option::<i64>(None), SqlValue::Null);
    }

    #[test]
    fn from_unit_is_null() {
        let v: SqlValue = ().into();
        assert!(v.is_null());
    }

    #[test]
    fn from_vec_is_list() {
        let v: SqlValue = vec!["a", "b"].into();
        assert_eq!(
            v,
            SqlValue::List(vec![SqlValue::from("a"), SqlValue::from("b")])
        );
    }

    #[test]
    fn from_mixed_list() {
        let v = SqlValue::List(vec![1_i64.into(), "x".into()]);
        assert_eq!(v.kind(), "list");
        if let SqlValue::List(items) = v {
            assert_eq!(items[0].kind(), "integer");
            assert_eq!(items[1].kind(), "string");
        }
    }
}
