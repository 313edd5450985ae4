//! Tokenization, nickname stripping, and token normalization.

/// Splits a name string on runs of whitespace into word tokens.
///
/// Tokens keep their exact substring: no case folding, no punctuation
/// stripping. Empty input yields an empty vector.
pub fn tokenize(name: &str) -> Vec<String> {
    name.split_whitespace().map(str::to_string).collect()
}

/// Normalizes a token for word-list lookup: lowercase, periods removed.
///
/// The normalized form is only ever used for set membership; the original
/// token is what ends up in the output record.
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase().replace('.', "")
}

/// Strips nickname asides from a whole name string.
///
/// Removes single-quoted, double-quoted, and parenthesized spans, each style
/// handled independently and non-recursively, then collapses whitespace runs
/// to single spaces and trims the ends. An opening delimiter with no closing
/// counterpart is kept as-is.
///
/// # Examples
///
/// ```
/// use nameparse::parser::strip_nicknames;
///
/// assert_eq!(strip_nicknames("William 'Bill' Gates"), "William Gates");
/// assert_eq!(strip_nicknames(r#"Robert "Bob" Smith"#), "Robert Smith");
/// assert_eq!(strip_nicknames("John (Johnny) Doe"), "John Doe");
/// ```
pub fn strip_nicknames(name: &str) -> String {
    let stripped = remove_delimited(name, '\'', '\'');
    let stripped = remove_delimited(&stripped, '"', '"');
    let stripped = remove_delimited(&stripped, '(', ')');
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes every `open`..`close` span from `input`, non-recursively.
///
/// Spans never nest: the first `close` after an `open` terminates the span,
/// matching a `open[^close]*close` scan from the left.
fn remove_delimited(input: &str, open: char, close: char) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == open {
            let rest = &input[i + c.len_utf8()..];
            if let Some(end) = rest.find(close) {
                // Skip everything through the closing delimiter.
                let skip_to = i + c.len_utf8() + end;
                while let Some((j, _)) = chars.next() {
                    if j == skip_to {
                        break;
                    }
                }
                continue;
            }
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        assert_eq!(tokenize("John Smith"), vec!["John", "Smith"]);
        assert_eq!(tokenize("  John    Smith  "), vec!["John", "Smith"]);
        assert_eq!(tokenize("John\tDavid\nSmith"), vec!["John", "David", "Smith"]);
    }

    #[test]
    fn test_tokenize_preserves_punctuation_and_case() {
        assert_eq!(tokenize("Dr. O'Brien-Smith"), vec!["Dr.", "O'Brien-Smith"]);
        assert_eq!(tokenize("JOHN smith"), vec!["JOHN", "smith"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("Dr."), "dr");
        assert_eq!(normalize_token("PH.D."), "phd");
        assert_eq!(normalize_token("van"), "van");
        assert_eq!(normalize_token("Jr"), "jr");
    }

    #[test]
    fn test_strips_single_quoted_nickname() {
        assert_eq!(strip_nicknames("William 'Bill' Gates"), "William Gates");
    }

    #[test]
    fn test_strips_double_quoted_nickname() {
        assert_eq!(strip_nicknames(r#"Robert "Bob" Smith"#), "Robert Smith");
    }

    #[test]
    fn test_strips_parenthesized_nickname() {
        assert_eq!(strip_nicknames("John (Johnny) Doe"), "John Doe");
    }

    #[test]
    fn test_strips_multiple_styles_in_one_string() {
        assert_eq!(
            strip_nicknames(r#"William 'Bill' (Billy) "Will" Gates"#),
            "William Gates"
        );
    }

    #[test]
    fn test_unclosed_delimiter_is_kept() {
        assert_eq!(strip_nicknames("John (Johnny Doe"), "John (Johnny Doe");
        assert_eq!(strip_nicknames("O'Brien"), "O'Brien");
    }

    #[test]
    fn test_paired_apostrophes_pair_up_even_mid_word() {
        // The apostrophes in two adjacent Irish names pair into one span; the
        // text between them is treated as an aside and removed.
        assert_eq!(strip_nicknames("O'Brien O'Connor"), "OConnor");
    }

    #[test]
    fn test_collapses_leftover_whitespace() {
        assert_eq!(strip_nicknames("  John   'Jack'   Doe "), "John Doe");
    }

    #[test]
    fn test_strip_on_plain_string_is_identity() {
        assert_eq!(strip_nicknames("John Smith"), "John Smith");
    }
}
