//! Escaper：字符串转义原语。
//!
//! 真正的转义通常由数据库客户端提供，这里抽象成 trait，编译器只依赖它“把原始字符串变成可以安全放进引号里的文本”。
//! 实现必须是确定性的纯函数，且不能执行 SQL。

use crate::flavor::Flavor;
use dyn_clone::DynClone;

pub trait Escaper: DynClone + std::fmt::Debug + Send + Sync {
    fn escape(&self, raw: &str) -> String;
}

dyn_clone::clone_trait_object!(Escaper);

/// 按 Flavor 规则转义：MySQL 使用反斜杠转义，PostgreSQL/SQLite 双写单引号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlavorEscaper(pub Flavor);

impl Escaper for FlavorEscaper {
    fn escape(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        match self.0 {
            Flavor::MySQL => {
                for ch in raw.chars() {
                    match ch {
                        '\u{0000}' => out.push_str("\\0"),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\u{001a}' => out.push_str("\\Z"),
                        '\'' => out.push_str("\\'"),
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        _ => out.push(ch),
                    }
                }
            }
            Flavor::PostgreSQL | Flavor::SQLite => {
                for ch in raw.chars() {
                    match ch {
                        '\'' => out.push_str("''"),
                        // NUL 不能出现在文本字面量里
                        '\u{0000}' => {}
                        _ => out.push(ch),
                    }
                }
            }
        }
        out
    }
}

/// 原样返回，不做任何转义；只适用于可信输入或测试。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoEscape;

impl Escaper for NoEscape {
    fn escape(&self, raw: &str) -> String {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Escaper, FlavorEscaper, NoEscape};
    use crate::flavor::Flavor;
    use pretty_assertions::assert_eq;

    #[test]
    fn mysql_backslash_escapes() {
        let e = FlavorEscaper(Flavor::MySQL);
        assert_eq!(e.escape("I'm \"fine\"\n"), "I\\'m \\\"fine\\\"\\n");
        assert_eq!(e.escape("a\\b"), "a\\\\b");
    }

    #[test]
    fn postgres_doubles_single_quote() {
        let e = FlavorEscaper(Flavor::PostgreSQL);
        assert_eq!(e.escape("I'm \\ fine"), "I''m \\ fine");
    }

    #[test]
    fn no_escape_is_identity() {
        assert_eq!(NoEscape.escape("it's"), "it's");
    }
}
