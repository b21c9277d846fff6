use crate::models::Pattern;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort patterns into canonical display order
/// Ascending `sort_order`; the sort is stable so ties keep catalog order
pub fn sort_by_display_order(patterns: &mut [&Pattern]) {
    patterns.sort_by_key(|pattern| pattern.sort_order);
}

/// Normalize string for case-insensitive comparison
/// - Normalize unicode (NFD then lowercase)
/// - Collapse internal whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let normalized: String = s.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Primary collation key: normalized form with accents removed
pub fn collation_key(s: &str) -> String {
    normalize_for_sorting(s)
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Case-insensitive, accent-insensitive comparison of display labels
/// Ties are broken on the normalized form, then on the raw text, so the order is total
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| normalize_for_sorting(a).cmp(&normalize_for_sorting(b)))
        .then_with(|| a.cmp(b))
}

/// Compare article numbers (digit strings) by numeric value
/// Works for any length without overflow; `"9"` sorts before `"12"`
pub fn compare_article_numbers(a: &str, b: &str) -> Ordering {
    let a_digits = a.trim_start_matches('0');
    let b_digits = b.trim_start_matches('0');

    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.cmp(b))
}
