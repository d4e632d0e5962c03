//! 占位符插值：从左到右扫描模板，把每个占位符替换为按位置绑定的参数字面量。
//!
//! 安全警告：插值永远不如预编译参数安全；字符串的安全性完全取决于所用的 [`Escaper`]。
//!
//! [`Escaper`]: crate::escape::Escaper

use crate::args::{Arg, ArgCursor, CompileError};
use crate::conditional::{Block, find_blocks};
use crate::format::ValueFormatter;
use crate::placeholder::{Placeholder, match_token};

/// 第一阶段的结果：插值后的 SQL，以及模板中条件片段在其中的位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Substituted {
    pub(crate) sql: String,
    pub(crate) blocks: Vec<Block>,
}

/// 第一阶段：替换所有占位符。
///
/// - 第 i 个占位符绑定游标中第 i 个参数，参数不足时在第一个缺失处返回 `InsufficientArguments`；
/// - 多余的参数不参与格式化；
/// - 绑定到 skip 信号的占位符只允许出现在 `{ ... }` 片段内部，此时输出为空
///   （片段必然会被第二阶段整体删掉）。
pub(crate) fn scan_and_format(
    template: &str,
    cursor: &mut ArgCursor<'_>,
    formatter: &ValueFormatter<'_>,
) -> Result<Substituted, CompileError> {
    let template_blocks = find_blocks(template);
    let mut out = Output {
        sql: String::with_capacity(template.len() + cursor.remaining().len() * 16),
        braces: template_blocks
            .iter()
            .flat_map(|b| [b.open, b.close])
            .collect(),
        mapped: Vec::with_capacity(template_blocks.len() * 2),
    };

    let mut offset = 0usize;
    while let Some(pos) = template[offset..].find('?') {
        let start = offset + pos;
        out.copy_literal(template, offset, start);

        let tail = &template[start..];
        let Some(token) = match_token(tail) else {
            return Err(CompileError::UnknownPlaceholder(tail.chars().take(2).collect()));
        };
        let placeholder = Placeholder::from_token(token)?;
        let position = cursor.consumed();
        let arg = cursor.take(placeholder.token())?;

        match arg {
            Arg::Value(value) => {
                tracing::trace!(position, token, kind = value.kind(), "bind placeholder");
                formatter.write(&mut out.sql, placeholder, position, value)?;
            }
            Arg::Skip(_) if template_blocks.iter().any(|b| b.contains(start)) => {
                tracing::trace!(position, token, "skip signal bound inside conditional block");
            }
            Arg::Skip(_) => {
                return Err(CompileError::TypeMismatch {
                    position,
                    token: placeholder.token(),
                    expected: "value (skip signal outside conditional block)",
                    found: arg.kind(),
                });
            }
        }

        offset = start + token.len();
    }
    out.copy_literal(template, offset, template.len());

    let blocks = out
        .mapped
        .chunks_exact(2)
        .map(|pair| Block {
            open: pair[0],
            close: pair[1],
        })
        .collect();
    Ok(Substituted {
        sql: out.sql,
        blocks,
    })
}

/// 插值输出，同时把模板里片段花括号的偏移换算到输出上。
struct Output {
    sql: String,
    /// 模板中片段花括号的偏移（递增）。
    braces: Vec<usize>,
    /// 已换算到 `sql` 上的偏移。
    mapped: Vec<usize>,
}

impl Output {
    /// 原样复制模板 `template[from..to]`；占位符之外的文本才可能含有片段花括号。
    fn copy_literal(&mut self, template: &str, from: usize, to: usize) {
        let base = self.sql.len();
        while let Some(&b) = self.braces.get(self.mapped.len()) {
            if b >= to {
                break;
            }
            self.mapped.push(base + (b - from));
        }
        self.sql.push_str(&template[from..to]);
    }
}
