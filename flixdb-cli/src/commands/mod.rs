pub(crate) mod filter;
pub(crate) mod genres;
pub(crate) mod load;
pub(crate) mod rating;
pub(crate) mod settings;
pub(crate) mod stats;

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_str;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_str("Dark", 10), "Dark");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_str("Stranger Things", 10), "Strange...");
        assert_eq!(truncate_str("Stranger Things", 3), "Str");
    }
}
