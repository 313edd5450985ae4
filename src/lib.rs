//! Personal Name Parsing Library
//!
//! This library decomposes free-form personal-name strings into structured
//! components (prefix, first, middle, last, suffix) together with a [0, 1]
//! confidence score. It is a best-effort structural guess for downstream
//! systems like contact databases and directory normalization, not a
//! validator: natural names are ambiguous, and low confidence is the signal
//! that a parse needs manual review.
//!
//! # Examples
//!
//! ```rust
//! use nameparse::parse_name;
//!
//! let parsed = parse_name(Some("Dr. Martin Luther King Jr"), None);
//! assert_eq!(parsed.prefix.as_deref(), Some("Dr."));
//! assert_eq!(parsed.first_name.as_deref(), Some("Martin"));
//! assert_eq!(parsed.middle_name.as_deref(), Some("Luther"));
//! assert_eq!(parsed.last_name.as_deref(), Some("King"));
//! assert_eq!(parsed.suffix.as_deref(), Some("Jr"));
//! assert_eq!(parsed.confidence, 1.0);
//!
//! // "Last, First" comma convention
//! let parsed = parse_name(Some("Beethoven, Ludwig"), None);
//! assert_eq!(parsed.last_name.as_deref(), Some("Beethoven"));
//! assert_eq!(parsed.first_name.as_deref(), Some("Ludwig"));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{ParseOptions, ParsedName};
pub use parser::parse_name;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
