//! Tagmatch Patterns - first-match pattern matching for the tagmatch library.
//!
//! This crate provides:
//! - Patterns in three shapes (predicate, extract, decode) normalised to a
//!   single extractor (`Pattern`)
//! - Ordered pattern tables and result mappings (`PatternTable`, `ResultMapping`)
//! - The combined first-match matcher (`patternmatch`, `PatternMatcher`)
//! - The `IntoOptional` adapter used to normalise decoder outcomes
//!
//! ```
//! use tagmatch_patterns::{patternmatch, Pattern, PatternTable, ResultMapping};
//!
//! let patterns = PatternTable::new()
//!     .with("isEven", Pattern::predicate(|x: &i64| x % 2 == 0))
//!     .with("isPositive", Pattern::predicate(|x: &i64| *x > 0));
//! let results = ResultMapping::new()
//!     .on("isEven", |_: i64| "even")
//!     .on("isPositive", |_| "positive");
//!
//! let run = patternmatch(patterns).results(results).unwrap();
//! assert_eq!(run.run(&-4), Some("even"));
//! assert_eq!(run.run(&3), Some("positive"));
//! assert_eq!(run.run(&-3), None);
//! ```

mod errors;
mod matcher;
mod optional;
mod pattern;

pub use errors::PatternError;
pub use matcher::{patternmatch, PatternMatch, PatternMatcher, ResultMapping};
pub use optional::IntoOptional;
pub use pattern::{Decoder, Pattern, PatternKind, PatternTable};

pub use errors::{incomplete_result_mapping, unknown_result_names};
