//! Rule-based confidence scoring for parsed names.

use crate::constants::confidence::*;
use crate::models::ParsedName;

/// Structural signals observed during parsing, fed into the score alongside
/// the partial record itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceFactors {
    /// Input used the explicit "Last, First" comma convention.
    pub has_comma_format: bool,
    /// A recognized prefix was extracted.
    pub has_prefix: bool,
    /// A recognized suffix was extracted.
    pub has_suffix: bool,
    /// Whitespace token count of the scored input.
    pub token_count: usize,
}

/// Computes the [0, 1] confidence score for a parsed record.
///
/// Missing both first and last name short-circuits to a floor score with no
/// further adjustments. Otherwise the score starts at 1.0, loses weight for a
/// missing first or last name, gains it for comma format and recognized
/// prefix/suffix (each gain capped at 1.0 as it is applied), and loses weight
/// again for single-token or overly long input. The result is clamped to
/// [0, 1] and is never NaN.
pub fn calculate_confidence(parsed: &ParsedName, factors: &ConfidenceFactors) -> f64 {
    if parsed.first_name.is_none() && parsed.last_name.is_none() {
        return NO_CORE_NAME;
    }

    let mut confidence: f64 = 1.0;

    if parsed.first_name.is_none() || parsed.last_name.is_none() {
        confidence -= MISSING_COMPONENT_PENALTY;
    }

    if factors.has_comma_format {
        confidence = (confidence + COMMA_FORMAT_BONUS).min(1.0);
    }

    if factors.has_prefix {
        confidence = (confidence + PREFIX_BONUS).min(1.0);
    }

    if factors.has_suffix {
        confidence = (confidence + SUFFIX_BONUS).min(1.0);
    }

    if factors.token_count == 1 {
        confidence -= SINGLE_TOKEN_PENALTY;
    }

    if factors.token_count > LONG_NAME_TOKEN_THRESHOLD {
        confidence -= LONG_NAME_PENALTY;
    }

    confidence.clamp(0.0, 1.0)
}
