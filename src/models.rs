//! Data types shared by the parsing pipeline and its callers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Structured result of parsing a personal name.
///
/// Every name component is optional: absent components are `None`, never an
/// empty string, and are omitted from serialized output. Components preserve
/// the casing and punctuation of the input. `confidence` is a heuristic
/// estimate of parse reliability in the closed interval [0, 1]; values at or
/// below 0.1 mean the parse is unreliable and should be inspected manually.
///
/// # Examples
///
/// ```
/// use nameparse::parse_name;
///
/// let parsed = parse_name(Some("Dr. Martin Luther King Jr"), None);
/// assert_eq!(parsed.prefix.as_deref(), Some("Dr."));
/// assert_eq!(parsed.first_name.as_deref(), Some("Martin"));
/// assert_eq!(parsed.middle_name.as_deref(), Some("Luther"));
/// assert_eq!(parsed.last_name.as_deref(), Some("King"));
/// assert_eq!(parsed.suffix.as_deref(), Some("Jr"));
/// assert_eq!(parsed.confidence, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedName {
    /// Honorific or rank preceding the name (e.g. "Dr.", "Captain").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Given name, or a grouped run of leading initials (e.g. "T. S.").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Middle name(s), joined with single spaces when there are several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Family name, including any joining particles (e.g. "van Beethoven").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Generational or post-nominal suffix(es) (e.g. "Jr", "PhD").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    /// Parse reliability estimate, always within [0, 1].
    pub confidence: f64,
}

impl ParsedName {
    /// Returns the record produced for unparseable input: no components,
    /// confidence 0.
    pub fn unparsed() -> Self {
        Self::default()
    }
}

/// Optional overrides for the built-in word lists consumed by the parser.
///
/// Each set, when supplied, replaces the corresponding default set entirely;
/// there is no merging. Entries must be the canonical lookup form: lowercase
/// with periods removed (e.g. "dr", not "Dr."). Matching against input
/// tokens is case- and period-insensitive, so a set containing "dr" matches
/// "Dr", "dr.", and "DR." alike.
///
/// # Examples
///
/// ```
/// use nameparse::{parse_name, ParseOptions};
/// use std::collections::HashSet;
///
/// let options = ParseOptions {
///     prefixes: Some(HashSet::from(["lordcommander".to_string()])),
///     ..Default::default()
/// };
/// let parsed = parse_name(Some("LordCommander Jon Snow"), Some(&options));
/// assert_eq!(parsed.prefix.as_deref(), Some("LordCommander"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Replacement set of honorific prefixes.
    pub prefixes: Option<HashSet<String>>,
    /// Replacement set of generational/post-nominal suffixes.
    pub suffixes: Option<HashSet<String>>,
    /// Replacement set of lowercase family-name joining particles.
    pub particles: Option<HashSet<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsed_record_has_zero_confidence_and_no_fields() {
        let parsed = ParsedName::unparsed();
        assert_eq!(parsed.confidence, 0.0);
        assert!(parsed.prefix.is_none());
        assert!(parsed.first_name.is_none());
        assert!(parsed.middle_name.is_none());
        assert!(parsed.last_name.is_none());
        assert!(parsed.suffix.is_none());
    }

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let parsed = ParsedName {
            first_name: Some("John".to_string()),
            last_name: Some("Smith".to_string()),
            confidence: 1.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(
            json,
            r#"{"firstName":"John","lastName":"Smith","confidence":1.0}"#
        );
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let parsed = ParsedName {
            prefix: Some("Dr.".to_string()),
            first_name: Some("Jane".to_string()),
            middle_name: Some("Q.".to_string()),
            last_name: Some("Doe".to_string()),
            suffix: Some("PhD".to_string()),
            confidence: 1.0,
        };
        let json = serde_json::to_string(&parsed).unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"middleName\""));
        assert!(json.contains("\"lastName\""));
        assert!(!json.contains("first_name"));
    }
}
