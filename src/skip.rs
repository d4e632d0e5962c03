//! Skip 信号：放进参数列表里，表示丢弃模板中的 `{ ... }` 条件片段。
//!
//! 信号只按身份比较：每次调用 [`new_skip_signal`] 得到一个新的实例，
//! 两个不同的实例永远不相等；clone 出来的值与原值是同一个实例。

use crate::args::Arg;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SKIP_ID: AtomicU64 = AtomicU64::new(1);

/// 不携带数据的哨兵值。
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SkipSignal {
    id: u64,
}

impl fmt::Debug for SkipSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SkipSignal(#{})", self.id)
    }
}

/// 生成一个新的 skip 信号。
pub fn new_skip_signal() -> SkipSignal {
    SkipSignal {
        id: NEXT_SKIP_ID.fetch_add(1, Ordering::Relaxed),
    }
}

/// `Arg::Skip(new_skip_signal())` 的简写。
pub fn skip() -> Arg {
    Arg::Skip(new_skip_signal())
}
