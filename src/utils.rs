// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility functions for console output.

/// Simple English pluralization.
pub fn pluralize(word: &str) -> String {
    if word.ends_with('s') || word.ends_with("ch") || word.ends_with("sh") {
        format!("{word}es")
    } else if word.ends_with('y') && !word.ends_with("ey") && !word.ends_with("ay") {
        format!("{}ies", &word[..word.len() - 1])
    } else {
        format!("{word}s")
    }
}

/// Format a count with its noun, e.g. `1 body`, `3 bodies`.
pub fn count_label(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {}", pluralize(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("body"), "bodies");
        assert_eq!(pluralize("joint"), "joints");
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize("bus"), "buses");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "body"), "0 bodies");
        assert_eq!(count_label(1, "body"), "1 body");
        assert_eq!(count_label(31, "segment"), "31 segments");
    }
}
