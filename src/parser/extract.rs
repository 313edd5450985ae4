//! Prefix and suffix extraction from the ends of a token sequence.

use std::collections::HashSet;

use crate::constants::{PREFIX_SET, SUFFIX_SET};

use super::tokenize::normalize_token;

/// Result of an extraction pass: the matched text, if any, and the tokens
/// left over. The input sequence is never mutated; `remaining` is a fresh
/// vector either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The extracted component, in its original casing and punctuation.
    pub extracted: Option<String>,
    /// Tokens not consumed by the extraction, in original order.
    pub remaining: Vec<String>,
}

fn in_prefix_set(normalized: &str, custom: Option<&HashSet<String>>) -> bool {
    match custom {
        Some(set) => set.contains(normalized),
        None => PREFIX_SET.contains(normalized),
    }
}

fn in_suffix_set(normalized: &str, custom: Option<&HashSet<String>>) -> bool {
    match custom {
        Some(set) => set.contains(normalized),
        None => SUFFIX_SET.contains(normalized),
    }
}

/// Extracts a leading honorific prefix from a token sequence.
///
/// Only the first token is examined. Matching is case- and period-insensitive
/// against the prefix set (the default set, or `custom` when supplied); the
/// returned prefix keeps the token's original form.
pub fn extract_prefix(tokens: &[String], custom: Option<&HashSet<String>>) -> Extraction {
    if let Some(first) = tokens.first()
        && in_prefix_set(&normalize_token(first), custom)
    {
        return Extraction {
            extracted: Some(first.clone()),
            remaining: tokens[1..].to_vec(),
        };
    }

    Extraction {
        extracted: None,
        remaining: tokens.to_vec(),
    }
}

/// Extracts a trailing run of suffix tokens from a token sequence.
///
/// The last token is checked first: strip at most one trailing comma, then
/// normalize, then look up in the suffix set (default, or `custom`). On a
/// match the scan walks backward greedily, consuming every consecutive token
/// that also matches, and stops at the first that does not. Consumed tokens
/// are joined with single spaces in their original left-to-right order and
/// original form — commas stripped for matching stay in the output.
pub fn extract_suffix(tokens: &[String], custom: Option<&HashSet<String>>) -> Extraction {
    let matches = |token: &str| {
        let clean = token.strip_suffix(',').unwrap_or(token);
        in_suffix_set(&normalize_token(clean), custom)
    };

    if tokens.last().is_some_and(|last| matches(last)) {
        let mut start = tokens.len();
        while start > 0 && matches(&tokens[start - 1]) {
            start -= 1;
        }

        return Extraction {
            extracted: Some(tokens[start..].join(" ")),
            remaining: tokens[..start].to_vec(),
        };
    }

    Extraction {
        extracted: None,
        remaining: tokens.to_vec(),
    }
}
