//! The name-parsing pipeline.
//!
//! A parse is a fixed sequence of pure stages: nickname stripping,
//! whitespace tokenization, prefix extraction, suffix extraction, initials
//! grouping, particle-aware first/middle/last assembly, and confidence
//! scoring. Inputs using the "Last, First" comma convention take a separate
//! branch that reuses the extraction stages on each side of the comma.
//!
//! Every stage is a total function: no input — including `None`, empty, or
//! whitespace-only strings — causes an error or panic. Unparseable input is
//! reported through the confidence score instead.

mod assembly;
mod confidence;
mod extract;
mod initials;
mod tokenize;

pub use assembly::{NameTokens, split_name_tokens};
pub use confidence::{ConfidenceFactors, calculate_confidence};
pub use extract::{Extraction, extract_prefix, extract_suffix};
pub use initials::{group_initials, is_initial};
pub use tokenize::{strip_nicknames, tokenize};

use crate::models::{ParsedName, ParseOptions};

/// Parses a free-form personal name into its structural components.
///
/// `input` of `None`, or a string that is empty after trimming, yields a
/// record with confidence 0 and no components. An interior comma routes the
/// input through "Last, First Middle" parsing; otherwise nicknames are
/// stripped and the token stream is decomposed front to back. `options`
/// replaces any of the built-in prefix/suffix/particle word lists wholesale.
///
/// The concatenation of the returned components, in prefix → first → middle
/// → last → suffix order, reproduces the (nickname-stripped) input tokens in
/// order, with initials and particles grouped into single fields.
///
/// # Examples
///
/// ```
/// use nameparse::parse_name;
///
/// let parsed = parse_name(Some("Ludwig van Beethoven"), None);
/// assert_eq!(parsed.first_name.as_deref(), Some("Ludwig"));
/// assert_eq!(parsed.last_name.as_deref(), Some("van Beethoven"));
///
/// let parsed = parse_name(Some("Smith, John"), None);
/// assert_eq!(parsed.first_name.as_deref(), Some("John"));
/// assert_eq!(parsed.last_name.as_deref(), Some("Smith"));
///
/// assert_eq!(parse_name(None, None).confidence, 0.0);
/// ```
pub fn parse_name(input: Option<&str>, options: Option<&ParseOptions>) -> ParsedName {
    let Some(raw) = input else {
        return ParsedName::unparsed();
    };
    let working = raw.trim();
    if working.is_empty() {
        return ParsedName::unparsed();
    }

    // An interior comma (not first or last character) signals "Last, First".
    // The comma is a single byte, so byte positions are safe here.
    if let Some(comma_index) = working.find(',')
        && comma_index > 0
        && comma_index < working.len() - 1
    {
        let mut parsed = parse_comma_format(working, options);
        let factors = ConfidenceFactors {
            has_comma_format: true,
            has_prefix: parsed.prefix.is_some(),
            has_suffix: parsed.suffix.is_some(),
            // Token count comes from the whole original input, nickname
            // spans included; stripping never runs on this branch.
            token_count: working.split_whitespace().count(),
        };
        parsed.confidence = calculate_confidence(&parsed, &factors);
        return parsed;
    }

    let stripped = strip_nicknames(working);
    let mut tokens = tokenize(&stripped);
    if tokens.is_empty() {
        return ParsedName::unparsed();
    }

    let mut parsed = ParsedName::default();
    let mut factors = ConfidenceFactors {
        token_count: tokens.len(),
        ..Default::default()
    };

    let prefix_result = extract_prefix(&tokens, options.and_then(|o| o.prefixes.as_ref()));
    if prefix_result.extracted.is_some() {
        parsed.prefix = prefix_result.extracted;
        tokens = prefix_result.remaining;
        factors.has_prefix = true;
    }

    let suffix_result = extract_suffix(&tokens, options.and_then(|o| o.suffixes.as_ref()));
    if suffix_result.extracted.is_some() {
        parsed.suffix = suffix_result.extracted;
        tokens = suffix_result.remaining;
        factors.has_suffix = true;
    }

    let names = split_name_tokens(&tokens, options.and_then(|o| o.particles.as_ref()));
    parsed.first_name = names.first_name;
    parsed.middle_name = names.middle_name;
    parsed.last_name = names.last_name;
    parsed.confidence = calculate_confidence(&parsed, &factors);
    parsed
}

/// Parses the "Last, First Middle" comma convention.
///
/// The string must split on commas into exactly two parts; anything else
/// yields an empty partial record rather than falling back to space-separated
/// parsing. Suffixes may trail either part (a suffix on the last-name side
/// comes first in the combined field), a prefix may lead the first-name side,
/// and particles are not folded: the last name is exactly the suffix-stripped
/// text before the comma. The caller fills in `confidence`.
fn parse_comma_format(name: &str, options: Option<&ParseOptions>) -> ParsedName {
    let parts: Vec<&str> = name.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return ParsedName::unparsed();
    }
    let (last_part, first_part) = (parts[0], parts[1]);

    let mut parsed = ParsedName::default();

    let last_tokens = tokenize(last_part);
    let last_suffix = extract_suffix(&last_tokens, options.and_then(|o| o.suffixes.as_ref()));
    parsed.suffix = last_suffix.extracted;
    if !last_suffix.remaining.is_empty() {
        parsed.last_name = Some(last_suffix.remaining.join(" "));
    }

    let mut first_tokens = tokenize(first_part);
    let prefix_result = extract_prefix(&first_tokens, options.and_then(|o| o.prefixes.as_ref()));
    if prefix_result.extracted.is_some() {
        parsed.prefix = prefix_result.extracted;
        first_tokens = prefix_result.remaining;
    }

    let suffix_result = extract_suffix(&first_tokens, options.and_then(|o| o.suffixes.as_ref()));
    if let Some(first_suffix) = suffix_result.extracted {
        parsed.suffix = match parsed.suffix.take() {
            Some(existing) => Some(format!("{existing} {first_suffix}")),
            None => Some(first_suffix),
        };
        first_tokens = suffix_result.remaining;
    }

    let grouped = group_initials(&first_tokens);
    if let Some(first) = grouped.first() {
        parsed.first_name = Some(first.clone());
        if grouped.len() > 1 {
            parsed.middle_name = Some(grouped[1..].join(" "));
        }
    }

    parsed
}
