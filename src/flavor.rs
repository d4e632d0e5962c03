//! SQL Flavor（方言）：控制标识符引号与默认的字符串转义规则。

use std::fmt;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// 方言只作为不可变配置随 [`Compiler`](crate::Compiler) 传递，默认 MySQL。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
        };
        f.write_str(s)
    }
}

impl Flavor {
    /// 标识符引号字符：MySQL 用反引号，其余用双引号。
    pub fn ident_quote(self) -> char {
        match self {
            Self::MySQL => '`',
            Self::PostgreSQL | Self::SQLite => '"',
        }
    }

    /// 为（已转义的）标识符加引号；名字里的引号字符会被双写。
    pub fn quote(self, name: &str) -> String {
        let q = self.ident_quote();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(q);
        for ch in name.chars() {
            if ch == q {
                out.push(q);
            }
            out.push(ch);
        }
        out.push(q);
        out
    }

    /// 时间字面量的格式描述（不含外层单引号）。
    pub(crate) fn datetime_format(self) -> &'static [BorrowedFormatItem<'static>] {
        match self {
            Self::MySQL => format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
            ),
            Self::PostgreSQL => format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory]:[offset_minute]"
            ),
            Self::SQLite => format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
            ),
        }
    }
}
