#[cfg(test)]
mod tests {
    use crate::compiler::Compiler;
    use crate::flavor::Flavor;
    use pretty_assertions::assert_eq;

    #[test]
    fn flavor_display() {
        let cases = vec![
            (Flavor::MySQL, "MySQL"),
            (Flavor::PostgreSQL, "PostgreSQL"),
            (Flavor::SQLite, "SQLite"),
        ];

        for (f, expected) in cases {
            assert_eq!(f.to_string(), expected);
        }
    }

    #[test]
    fn quote_doubles_embedded_quote_char() {
        assert_eq!(Flavor::MySQL.quote("a"), "`a`");
        assert_eq!(Flavor::MySQL.quote("a`b"), "`a``b`");
        assert_eq!(Flavor::PostgreSQL.quote("a\"b"), "\"a\"\"b\"");
        assert_eq!(Flavor::SQLite.quote("a`b"), "\"a`b\"");
    }

    #[test]
    fn default_flavor_is_mysql() {
        assert_eq!(Flavor::default(), Flavor::MySQL);
        assert_eq!(Compiler::default().flavor(), Flavor::MySQL);
        assert_eq!(Compiler::with_flavor(Flavor::SQLite).flavor(), Flavor::SQLite);
    }
}
