//! Compiler：把模板与参数编译成最终 SQL。
//!
//! 编译分两步，顺序固定：
//!
//! 1. 占位符插值；
//! 2. 条件片段处理（见 [`crate::conditional`]），片段位置来自模板本身，是否删除取决于调用方传入的原始参数列表。

use crate::args::{Arg, ArgCursor, CompileError, contains_skip};
use crate::conditional::apply_blocks;
use crate::escape::{Escaper, FlavorEscaper};
use crate::flavor::Flavor;
use crate::format::ValueFormatter;
use crate::interpolate::scan_and_format;

/// 编译配置：flavor 与转义原语，创建后不再变化。
#[derive(Debug, Clone)]
pub struct Compiler {
    flavor: Flavor,
    escaper: Box<dyn Escaper>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::with_flavor(Flavor::default())
    }
}

impl Compiler {
    /// 使用 `Flavor::default()`（MySQL）。
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定 flavor 及其默认转义规则。
    pub fn with_flavor(flavor: Flavor) -> Self {
        Self {
            flavor,
            escaper: Box::new(FlavorEscaper(flavor)),
        }
    }

    /// 替换转义原语（通常由数据库客户端提供）。
    pub fn escaper(mut self, escaper: impl Escaper + 'static) -> Self {
        self.escaper = Box::new(escaper);
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// 编译模板；任一占位符失败都会中止整个编译，不返回部分结果。
    pub fn compile(&self, template: &str, args: &[Arg]) -> Result<String, CompileError> {
        tracing::debug!(
            flavor = %self.flavor,
            template_len = template.len(),
            args = args.len(),
            "compile sql template"
        );

        let formatter = ValueFormatter {
            flavor: self.flavor,
            escaper: self.escaper.as_ref(),
        };
        let mut cursor = ArgCursor::new(args);
        let substituted = scan_and_format(template, &mut cursor, &formatter)?;
        Ok(apply_blocks(
            &substituted.sql,
            &substituted.blocks,
            contains_skip(args),
        ))
    }
}

/// 使用默认 [`Compiler`] 编译模板。
pub fn compile(template: &str, args: &[Arg]) -> Result<String, CompileError> {
    Compiler::default().compile(template, args)
}
