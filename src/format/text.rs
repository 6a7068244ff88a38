//! Substring extraction between boundary tokens.

/// Return every substring strictly between a `lower` boundary and the next
/// `upper` boundary after it, scanning left to right without overlap.
///
/// A trailing `lower` with no matching `upper` ends the scan. An empty
/// boundary matches nothing.
///
/// ```
/// use textgraph::format::substrings_between;
///
/// assert_eq!(substrings_between("<a> and <b> and <c>", "<", ">"), ["a", "b", "c"]);
/// ```
pub fn substrings_between<'a>(source: &'a str, lower: &str, upper: &str) -> Vec<&'a str> {
    let mut substrings = Vec::new();
    if lower.is_empty() || upper.is_empty() {
        return substrings;
    }
    let mut rest = source;

    while let Some(start) = rest.find(lower) {
        let after_lower = &rest[start + lower.len()..];
        let Some(end) = after_lower.find(upper) else {
            break;
        };
        substrings.push(&after_lower[..end]);
        rest = &after_lower[end + upper.len()..];
    }

    substrings
}
