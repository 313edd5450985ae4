//! Built-in word lists and scoring weights consumed by the parser.
//!
//! The prefix/suffix/particle lists are configuration data, not algorithm:
//! the pipeline only ever asks "is this normalized token a member?". They are
//! initialized once into process-wide read-only hash sets and never mutated;
//! callers replace them per call via `ParseOptions` rather than editing them.
//!
//! All entries are stored in canonical lookup form: lowercase, no periods.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Honorific, professional, military, and religious prefixes.
pub const DEFAULT_PREFIXES: &[&str] = &[
    // Common honorifics
    "mr", "mrs", "ms", "miss", "mx", "master",
    // Academic / professional
    "dr", "prof", "professor",
    // Religious
    "rev", "reverend", "fr", "father", "pastor", "rabbi", "imam", "sister",
    "brother", "bishop", "elder",
    // Military and rank
    "capt", "captain", "cmdr", "commander", "col", "colonel", "gen",
    "general", "lt", "lieutenant", "maj", "major", "sgt", "sergeant",
    "adm", "admiral", "pvt", "private", "cpl", "corporal",
    // Civic and noble
    "hon", "honorable", "judge", "justice", "sir", "dame", "lord", "lady",
    "pres", "president", "gov", "governor", "sen", "senator", "rep",
];

/// Generational markers, roman numerals, and academic/professional
/// post-nominals.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    // Generational
    "jr", "junior", "sr", "senior",
    // Roman numerals as used generationally
    "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix",
    // Academic
    "phd", "md", "dds", "dvm", "jd", "edd", "mba", "msc", "bsc",
    // Professional / legal
    "esq", "esquire", "cpa", "rn", "do", "pe", "cfa",
];

/// Lowercase nobiliary/locative particles that join onto the family name.
pub const DEFAULT_PARTICLES: &[&str] = &[
    "van", "von", "der", "den", "ter", "ten", "de", "del", "della", "delle",
    "di", "da", "dos", "das", "do", "du", "des", "la", "le", "el", "al",
    "bin", "ibn", "ben", "st", "ste",
];

/// Default prefix lookup set, built once on first use.
pub static PREFIX_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_PREFIXES.iter().copied().collect());

/// Default suffix lookup set, built once on first use.
pub static SUFFIX_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_SUFFIXES.iter().copied().collect());

/// Default particle lookup set, built once on first use.
pub static PARTICLE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| DEFAULT_PARTICLES.iter().copied().collect());

/// Confidence scoring weights.
///
/// Each bonus is clamped to 1.0 immediately after it is applied, so the order
/// of application matters for values already at the cap.
pub mod confidence {
    /// Returned immediately when neither first nor last name was found.
    pub const NO_CORE_NAME: f64 = 0.1;

    /// Penalty when exactly one of first/last name is missing.
    pub const MISSING_COMPONENT_PENALTY: f64 = 0.3;

    /// Bonus for the explicit "Last, First" comma format.
    pub const COMMA_FORMAT_BONUS: f64 = 0.1;

    /// Bonus for a recognized honorific prefix.
    pub const PREFIX_BONUS: f64 = 0.05;

    /// Bonus for a recognized suffix.
    pub const SUFFIX_BONUS: f64 = 0.05;

    /// Penalty for single-token input (no way to tell first from last).
    pub const SINGLE_TOKEN_PENALTY: f64 = 0.2;

    /// Penalty applied above [`LONG_NAME_TOKEN_THRESHOLD`] tokens; very long
    /// inputs are often organizations or malformed data.
    pub const LONG_NAME_PENALTY: f64 = 0.1;

    /// Token count above which the long-name penalty applies.
    pub const LONG_NAME_TOKEN_THRESHOLD: usize = 5;
}

/// Environment variable names.
pub mod env_vars {
    /// Environment variable for log file path override.
    pub const LOG_FILE: &str = "NAMEPARSE_LOG_FILE";
}
