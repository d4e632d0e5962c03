#[cfg(test)]
mod tests {
    use crate::args::{Arg, ArgCursor, CompileError, contains_skip};
    use crate::skip::{new_skip_signal, skip};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_binds_in_order_without_mutating_args() {
        let args: Vec<Arg> = vec![1_i64.into(), "a".into()];
        let mut cursor = ArgCursor::new(&args);

        assert_eq!(cursor.take("?d"), Ok(&Arg::Value(SqlValue::I64(1))));
        assert_eq!(cursor.take("?"), Ok(&Arg::Value(SqlValue::from("a"))));
        assert_eq!(
            cursor.take("?a"),
            Err(CompileError::InsufficientArguments {
                position: 2,
                token: "?a"
            })
        );
        assert_eq!(cursor.consumed(), 2);
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn contains_skip_checks_whole_list() {
        assert!(!contains_skip(&[]));
        assert!(!contains_skip(&[Arg::from(false), Arg::from(())]));
        assert!(contains_skip(&[Arg::from(1), skip()]));
        assert!(contains_skip(&[Arg::Skip(new_skip_signal()), Arg::from("x")]));
    }

    #[test]
    fn error_messages() {
        let err = CompileError::InsufficientArguments {
            position: 3,
            token: "?d",
        };
        assert_eq!(err.to_string(), "builder not enough args for placeholder #3 `?d`");

        let err = CompileError::TypeMismatch {
            position: 0,
            token: "?a",
            expected: "list",
            found: "integer",
        };
        assert_eq!(
            err.to_string(),
            "builder placeholder #0 `?a` expects list, got integer"
        );
    }
}
