//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// `max_len` counts bytes; the cut backs up to the nearest character boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_is_unchanged() {
        assert_eq!(truncate("denim", 10), "denim");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("linen shirt", 8), "linen...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes; a cut inside it backs up one byte
        assert_eq!(truncate("café noir", 7), "caf...");
        assert_eq!(truncate("café noir", 8), "café...");
    }
}
