/// Default composite type used when nothing else is configured.
pub const DEFAULT_TYPE_EXPRESSION: &str = "A+AAAA";

/// Split a composite type expression such as `A+AAAA` into its tokens.
///
/// Tokens keep their original case and are not validated; the query
/// executor normalizes them and maps unknown ones to `A`. An empty
/// expression yields a single empty token.
pub fn resolve_types(expr: &str) -> Vec<String> {
    expr.split('+').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expression() {
        assert_eq!(resolve_types(DEFAULT_TYPE_EXPRESSION), vec!["A", "AAAA"]);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(resolve_types("mx"), vec!["mx"]);
        assert_eq!(resolve_types("mx+Txt"), vec!["mx", "Txt"]);
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(resolve_types(""), vec![""]);
    }
}
