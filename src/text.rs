// ✂️ Text Helpers
// Locale-independent trimming, lowercasing and splitting used by every parser.

/// ASCII whitespace as classified by the C locale (includes vertical tab)
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Remove leading/trailing whitespace. All-whitespace input yields "".
pub fn trim(input: &str) -> &str {
    input.trim_matches(is_space)
}

/// Lowercase ASCII letters only; everything else is left as-is.
///
/// Byte offsets are preserved, so an index found in the lowered copy
/// can slice the original string.
pub fn to_lower(input: &str) -> String {
    input.to_ascii_lowercase()
}

/// Split on every non-overlapping occurrence of `delimiter`.
///
/// Interior empty segments are kept; a trailing empty segment after the
/// last delimiter is dropped. Empty input returns an empty Vec.
///
/// # Examples:
/// ```
/// use zoo_keeper::text::split;
/// assert_eq!(split("a, b, ", ", "), vec!["a", "b"]);
/// assert_eq!(split("a, , b", ", "), vec!["a", "", "b"]);
/// ```
pub fn split<'a>(value: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut tokens: Vec<&str> = value.split(delimiter).collect();
    if tokens.last().map_or(false, |last| last.is_empty()) {
        tokens.pop();
    }
    tokens
}
