//! 条件片段：`{ ... }` 在参数列表里出现 skip 信号时整体删除，否则去掉花括号保留内容。
//!
//! 判断针对整个参数列表而不是某个位置：只要有一个 skip 信号，模板中所有片段都会被删除。
//! 片段只由模板自身的花括号决定：编译时第一阶段会把模板里片段的位置带到插值结果上，
//! 插值进来的值（不论是否转义、是否带引号）都不会开启或关闭片段。

use crate::args::{Arg, contains_skip};

/// 一个条件片段：`{` 与 `}` 的字节偏移。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub open: usize,
    pub close: usize,
}

impl Block {
    /// `offset` 是否落在花括号之间。
    pub fn contains(&self, offset: usize) -> bool {
        self.open < offset && offset < self.close
    }
}

/// 按非嵌套规则扫描花括号：`{` 之后先遇到 `}` 才构成片段，先遇到 `{` 时前一个 `{` 是普通字符；
/// 不成对的 `{`、`}` 都按普通字符处理。
pub fn find_blocks(text: &str) -> Vec<Block> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut open: Option<usize> = None;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'{' => open = Some(i),
            b'}' => {
                if let Some(o) = open.take() {
                    blocks.push(Block { open: o, close: i });
                }
            }
            _ => {}
        }
    }
    blocks
}

/// 对 `text` 应用片段：`drop` 为真时删除整个片段（含花括号），否则只去掉花括号。
///
/// `blocks` 必须按位置递增且互不重叠。
pub(crate) fn apply_blocks(text: &str, blocks: &[Block], drop: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0usize;
    for b in blocks {
        out.push_str(&text[last..b.open]);
        if !drop {
            out.push_str(&text[b.open + 1..b.close]);
        }
        last = b.close + 1;
    }
    out.push_str(&text[last..]);

    if !blocks.is_empty() {
        tracing::trace!(blocks = blocks.len(), dropped = drop, "conditional blocks evaluated");
    }
    out
}

/// 第二阶段的独立入口：直接在 `substituted` 里按非嵌套规则查找片段并处理。
///
/// 文本中所有花括号都参与判断；经由 [`Compiler`](crate::Compiler) 编译时，
/// 只有模板自身的花括号才会被当作片段。
pub fn evaluate_conditionals(substituted: &str, original_args: &[Arg]) -> String {
    let blocks = find_blocks(substituted);
    apply_blocks(substituted, &blocks, contains_skip(original_args))
}

#[cfg(test)]
mod tests {
    use super::{Block, find_blocks};

    #[test]
    fn find_blocks_pairs_nearest_braces() {
        assert_eq!(
            find_blocks("a{b}c"),
            vec![Block { open: 1, close: 3 }]
        );
        assert_eq!(
            find_blocks("{a{b}c}"),
            vec![Block { open: 2, close: 4 }]
        );
        assert!(find_blocks("a } { b").is_empty());
        assert!(find_blocks("").is_empty());
    }

    #[test]
    fn block_contains_is_exclusive() {
        let b = Block { open: 2, close: 6 };
        assert!(b.contains(3));
        assert!(!b.contains(2));
        assert!(!b.contains(6));
    }
}
