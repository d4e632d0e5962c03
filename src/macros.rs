//! 宏集合：为编译器提供可变参数调用封装。
//! 通过 `args!` / `compile!`，可以直接传入不定长的参数而无需手动构造 `Vec<Arg>`。

/// 把任意个可转换为 [`Arg`](crate::Arg) 的表达式收集为 `Vec<Arg>`。
///
/// ```
/// use halo_template::{args, skip};
///
/// let list = args![1, "x", skip()];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Arg::from($value)),+]
    };
}

/// 使用默认编译器编译模板：`compile!(template, arg1, arg2, ...)`。
///
/// ```
/// use halo_template::compile;
///
/// let sql = compile!("SELECT * FROM t WHERE id = ?d", 42).unwrap();
/// assert_eq!(sql, "SELECT * FROM t WHERE id = 42");
/// ```
#[macro_export]
macro_rules! compile {
    ($template:expr $(,)?) => {
        $crate::compile($template, &[])
    };
    ($template:expr, $($value:expr),+ $(,)?) => {
        $crate::compile($template, &$crate::args![$($value),+])
    };
}
