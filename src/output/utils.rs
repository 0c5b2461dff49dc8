//! Shared formatting helpers for result output

const UNIT: u64 = 1024;
const UNIT_PREFIXES: &[u8] = b"KMGTPE";

/// Format a size in bytes to human-readable format.
///
/// Below 1 KiB sizes are shown as whole bytes (`"999 B"`); above that with
/// one decimal and the largest binary unit that keeps the value under 1024
/// (`"1.5 KB"`, `"8.0 EB"`). Negative sizes keep their sign.
pub fn format_size(size: i64) -> String {
    if size == 0 {
        return "0 B".to_string();
    }

    let sign = if size < 0 { "-" } else { "" };
    let bytes = size.unsigned_abs();

    if bytes < UNIT {
        return format!("{}{} B", sign, bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT && exp < UNIT_PREFIXES.len() - 1 {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!(
        "{}{:.1} {}B",
        sign,
        bytes as f64 / div as f64,
        UNIT_PREFIXES[exp] as char
    )
}

/// Shorten `name` to at most `max_len` characters, ending in `...` when cut.
///
/// Lengths are counted in chars, so multi-byte names are never split
/// mid-character.
pub fn truncate(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }
    if max_len <= 3 {
        return ".".repeat(max_len);
    }

    let mut truncated: String = name.chars().take(max_len - 3).collect();
    truncated.push_str("...");
    truncated
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Truncated names never exceed the requested width
        #[test]
        fn test_truncate_respects_width(name in "\\PC{0,80}", max_len in 0usize..60) {
            let out = truncate(&name, max_len);
            prop_assert!(out.chars().count() <= max_len || out == name);
            if name.chars().count() > max_len {
                prop_assert_eq!(out.chars().count(), max_len);
            }
        }

        /// Truncation keeps a prefix of the original name
        #[test]
        fn test_truncate_keeps_prefix(name in "\\PC{0,80}", max_len in 4usize..60) {
            let out = truncate(&name, max_len);
            let kept = out.strip_suffix("...").unwrap_or(&out);
            prop_assert!(name.starts_with(kept));
        }

        /// Sizes below one KiB are printed verbatim
        #[test]
        fn test_format_size_small(n in 1i64..1024) {
            prop_assert_eq!(format_size(n), format!("{} B", n));
            prop_assert_eq!(format_size(-n), format!("-{} B", n));
        }

        /// Larger sizes always carry a unit and a single decimal
        #[test]
        fn test_format_size_large(n in 1024i64..=i64::MAX) {
            let out = format_size(n);
            let (value, unit) = out.split_once(' ').unwrap();
            prop_assert!(["KB", "MB", "GB", "TB", "PB", "EB"].contains(&unit));
            let (_, decimals) = value.split_once('.').unwrap();
            prop_assert_eq!(decimals.len(), 1);
        }
    }
}
