// src/core/truncate.rs
// Byte-budget name truncation for the embedded table. The consumer stores
// names in fixed 64-byte slots, so the budget is bytes, not chars.

/// Truncate `s` to at most `max` bytes without splitting a code point.
/// Backs off over trailing continuation bytes (0b10xxxxxx); cutting at the
/// lead byte discards the whole incomplete sequence. Result is always valid
/// UTF-8, possibly empty.
pub fn truncate_name(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s!(s);
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s!(&s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::NAME_MAX;

    #[test]
    fn short_names_pass_through() {
        assert_eq!(truncate_name("Super Mario 3D Land", NAME_MAX), "Super Mario 3D Land");
        assert_eq!(truncate_name("", NAME_MAX), "");
    }

    #[test]
    fn ascii_cut_is_exact() {
        let long = "x".repeat(100);
        let t = truncate_name(&long, NAME_MAX);
        assert_eq!(t.len(), NAME_MAX);
    }

    #[test]
    fn multibyte_boundary_cut_keeps_whole_chars() {
        // 22 × 3-byte "世" = 66 bytes; a 63-byte budget fits exactly 21
        let name = "世".repeat(22);
        let t = truncate_name(&name, 63);
        assert_eq!(t.len(), 63);
        assert_eq!(t.chars().count(), 21);
    }

    #[test]
    fn multibyte_split_cut_drops_partial_char() {
        // Budget 64 lands mid-char; the dangling lead+continuation go too
        let name = "世".repeat(22);
        let t = truncate_name(&name, 64);
        assert_eq!(t.len(), 63);
        assert_eq!(t.chars().count(), 21);
    }

    #[test]
    fn budget_below_first_char_yields_empty() {
        assert_eq!(truncate_name("世", 2), "");
        assert_eq!(truncate_name("世", 1), "");
    }

    #[test]
    fn never_exceeds_budget_and_stays_valid() {
        let name = "abc世界déf🎮ghi".repeat(8);
        for max in 1..40 {
            let t = truncate_name(&name, max);
            assert!(t.len() <= max, "len {} > max {}", t.len(), max);
            assert!(name.starts_with(&t));
        }
    }
}
