use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a holder name for comparison.
///
/// Lowercases, decomposes to NFD, drops the combining marks and trims, so
/// "José" and "jose " fold to the same key. Trims only once the marks are
/// gone, so the result is a fixed point.
pub fn normalize(name: &str) -> String {
    let folded: String = name
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    folded.trim().to_string()
}
