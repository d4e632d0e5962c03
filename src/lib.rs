//! halo-sql-template：带类型占位符与条件片段的 SQL 模板编译器。
//!
//! ```
//! use halo_template::{args, compile, skip};
//!
//! let sql = compile("SELECT * FROM users WHERE name = ? AND block = 0", &args!["Jack"]).unwrap();
//! assert_eq!(sql, "SELECT * FROM users WHERE name = 'Jack' AND block = 0");
//!
//! let sql = compile("SELECT name FROM users{ WHERE id = ?d}", &args![skip()]).unwrap();
//! assert_eq!(sql, "SELECT name FROM users");
//! ```

pub mod args;
#[cfg(test)]
mod args_tests;
pub mod compiler;
pub mod conditional;
pub mod escape;
pub mod flavor;
#[cfg(test)]
mod flavor_tests;
mod format;
mod interpolate;
pub mod macros;
pub mod placeholder;
pub mod skip;
pub mod value;

pub use crate::args::{Arg, ArgCursor, CompileError, contains_skip};
pub use crate::compiler::{Compiler, compile};
pub use crate::conditional::{Block, evaluate_conditionals, find_blocks};
pub use crate::escape::{Escaper, FlavorEscaper, NoEscape};
pub use crate::flavor::Flavor;
pub use crate::placeholder::Placeholder;
pub use crate::skip::{SkipSignal, new_skip_signal, skip};
pub use crate::value::SqlValue;
