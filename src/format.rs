//! 按占位符种类把参数值格式化为 SQL 字面量。

use crate::args::CompileError;
use crate::escape::Escaper;
use crate::flavor::Flavor;
use crate::placeholder::Placeholder;
use crate::value::SqlValue;

/// 单次编译期间使用的格式化器：持有 flavor 与转义原语。
#[derive(Clone, Copy)]
pub(crate) struct ValueFormatter<'a> {
    pub(crate) flavor: Flavor,
    pub(crate) escaper: &'a dyn Escaper,
}

impl ValueFormatter<'_> {
    /// 把第 `position` 个占位符绑定的值写入 `out`。
    pub(crate) fn write(
        &self,
        out: &mut String,
        placeholder: Placeholder,
        position: usize,
        value: &SqlValue,
    ) -> Result<(), CompileError> {
        let slot = Slot {
            placeholder,
            position,
        };
        match placeholder {
            Placeholder::Int => self.write_int(out, slot, value),
            Placeholder::Float => self.write_float(out, slot, value),
            Placeholder::Array => self.write_array(out, slot, value),
            Placeholder::Ident => self.write_ident(out, slot, value),
            Placeholder::Any => self.write_any(out, slot, value),
        }
    }

    fn write_int(&self, out: &mut String, slot: Slot, value: &SqlValue) -> Result<(), CompileError> {
        match value {
            SqlValue::Null => out.push_str("NULL"),
            SqlValue::Bool(b) => out.push_str(if *b { "1" } else { "0" }),
            SqlValue::I64(n) => out.push_str(&n.to_string()),
            SqlValue::U64(n) => out.push_str(&n.to_string()),
            SqlValue::F64(n) if n.is_finite() => out.push_str(&(n.trunc() as i64).to_string()),
            SqlValue::String(s) => out.push_str(&coerce_int(s).to_string()),
            other => return Err(slot.mismatch("integer", other)),
        }
        Ok(())
    }

    fn write_float(
        &self,
        out: &mut String,
        slot: Slot,
        value: &SqlValue,
    ) -> Result<(), CompileError> {
        let n = match value {
            SqlValue::Null => {
                out.push_str("NULL");
                return Ok(());
            }
            SqlValue::Bool(b) => f64::from(u8::from(*b)),
            SqlValue::I64(n) => *n as f64,
            SqlValue::U64(n) => *n as f64,
            SqlValue::F64(n) => *n,
            SqlValue::String(s) => float_prefix(s).0,
            other => return Err(slot.mismatch("float", other)),
        };
        if !n.is_finite() {
            return Err(slot.mismatch("finite float", value));
        }
        out.push_str(&n.to_string());
        Ok(())
    }

    fn write_array(
        &self,
        out: &mut String,
        slot: Slot,
        value: &SqlValue,
    ) -> Result<(), CompileError> {
        let SqlValue::List(items) = value else {
            return Err(slot.mismatch("list", value));
        };
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_any(out, slot, item)?;
        }
        Ok(())
    }

    fn write_ident(
        &self,
        out: &mut String,
        slot: Slot,
        value: &SqlValue,
    ) -> Result<(), CompileError> {
        match value {
            SqlValue::String(name) => out.push_str(&self.flavor.quote(&self.escaper.escape(name))),
            SqlValue::List(names) => {
                for (i, name) in names.iter().enumerate() {
                    let SqlValue::String(name) = name else {
                        return Err(slot.mismatch("list of strings", name));
                    };
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&self.flavor.quote(&self.escaper.escape(name)));
                }
            }
            other => return Err(slot.mismatch("string or list of strings", other)),
        }
        Ok(())
    }

    fn write_any(&self, out: &mut String, slot: Slot, value: &SqlValue) -> Result<(), CompileError> {
        match value {
            SqlValue::Null => out.push_str("NULL"),
            SqlValue::Bool(b) => out.push_str(if *b { "1" } else { "0" }),
            SqlValue::I64(n) => out.push_str(&n.to_string()),
            SqlValue::U64(n) => out.push_str(&n.to_string()),
            SqlValue::F64(n) if n.is_finite() => out.push_str(&n.to_string()),
            SqlValue::String(s) => {
                out.push('\'');
                out.push_str(&self.escaper.escape(s));
                out.push('\'');
            }
            SqlValue::DateTime(dt) => {
                let s = dt
                    .format(self.flavor.datetime_format())
                    .map_err(|_| slot.mismatch("formattable datetime", value))?;
                out.push('\'');
                out.push_str(&s);
                out.push('\'');
            }
            other => return Err(slot.mismatch("scalar", other)),
        }
        Ok(())
    }
}

/// 当前正在格式化的占位符，用于构造错误。
#[derive(Debug, Clone, Copy)]
struct Slot {
    placeholder: Placeholder,
    position: usize,
}

impl Slot {
    fn mismatch(self, expected: &'static str, found: &SqlValue) -> CompileError {
        CompileError::TypeMismatch {
            position: self.position,
            token: self.placeholder.token(),
            expected,
            found: found.kind(),
        }
    }
}

/// 字符串转整数：取开头的数字前缀（允许前导空白与正负号），没有数字时为 0。
/// 带小数或指数部分的前缀按浮点解析后向零截断。
pub(crate) fn coerce_int(s: &str) -> i64 {
    let (int, int_len) = int_prefix(s);
    let (float, float_len) = float_prefix(s);
    if float_len > int_len && float.is_finite() {
        float.trunc() as i64
    } else {
        int
    }
}

fn int_prefix(s: &str) -> (i64, usize) {
    let trimmed = s.trim_start();
    let lead = s.len() - trimmed.len();
    let bytes = trimmed.as_bytes();

    let mut i = 0usize;
    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let digits_start = i;
    let mut n = 0i64;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        let d = i64::from(b - b'0');
        n = if negative {
            n.saturating_mul(10).saturating_sub(d)
        } else {
            n.saturating_mul(10).saturating_add(d)
        };
        i += 1;
    }

    if i == digits_start {
        return (0, 0);
    }
    (n, lead + i)
}

/// 取开头的浮点数前缀，返回值与消耗的字节数；没有数字时为 `(0.0, 0)`。
pub(crate) fn float_prefix(s: &str) -> (f64, usize) {
    let trimmed = s.trim_start();
    let lead = s.len() - trimmed.len();
    let bytes = trimmed.as_bytes();

    let mut i = 0usize;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        i += 1;
    }

    let mut digits = 0usize;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
        digits += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        let mut j = i + 1;
        let mut frac = 0usize;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
            frac += 1;
        }
        if digits + frac > 0 {
            i = j;
            digits += frac;
        }
    }
    if digits == 0 {
        return (0.0, 0);
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'-' | b'+')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    match trimmed[..i].parse::<f64>() {
        Ok(n) => (n, lead + i),
        Err(_) => (0.0, 0),
    }
}
