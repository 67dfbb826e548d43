/// Normalizes a resource name or user-supplied query.
///
/// Names are trimmed, lower-cased, and use hyphens in place of spaces, so `" Mr Mime "` becomes
/// `"mr-mime"`. Normalization is idempotent.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod name_test {
    use pretty_assertions::assert_eq;

    use crate::normalize_name;

    #[test]
    fn normalizes_case_whitespace_and_spaces() {
        assert_eq!(normalize_name("Bulbasaur"), "bulbasaur");
        assert_eq!(normalize_name("  tackle  "), "tackle");
        assert_eq!(normalize_name("Mr Mime"), "mr-mime");
        assert_eq!(normalize_name("vine-whip"), "vine-whip");
    }

    #[test]
    fn is_idempotent() {
        for name in ["Ho Oh", " PORYGON Z ", "farfetchd"] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }
}
