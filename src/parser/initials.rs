//! Grouping of consecutive single-letter initials into compound tokens.

/// Returns true if a token is an initial: exactly one ASCII letter once all
/// periods are removed (so "J", "J.", and "j" all qualify; "Jr" does not).
pub fn is_initial(token: &str) -> bool {
    let mut letters = token.chars().filter(|c| *c != '.');
    matches!(
        (letters.next(), letters.next()),
        (Some(c), None) if c.is_ascii_alphabetic()
    )
}

/// Merges every maximal run of consecutive initials into one compound token.
///
/// The initials in a run are joined with single spaces, keeping original
/// order, casing, and periods. Non-initial tokens pass through unchanged, and
/// sequences of length one or less are returned as-is.
///
/// # Examples
///
/// ```
/// use nameparse::parser::group_initials;
///
/// let tokens: Vec<String> = ["J.", "R.", "R.", "Tolkien"]
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// assert_eq!(group_initials(&tokens), vec!["J. R. R.", "Tolkien"]);
/// ```
pub fn group_initials(tokens: &[String]) -> Vec<String> {
    if tokens.len() <= 1 {
        return tokens.to_vec();
    }

    let mut result = Vec::with_capacity(tokens.len());
    let mut current_run: Vec<&str> = Vec::new();

    for token in tokens {
        if is_initial(token) {
            current_run.push(token);
        } else {
            if !current_run.is_empty() {
                result.push(current_run.join(" "));
                current_run.clear();
            }
            result.push(token.clone());
        }
    }

    if !current_run.is_empty() {
        result.push(current_run.join(" "));
    }

    result
}
