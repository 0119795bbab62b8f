//! Error types for combining pattern tables with result mappings.

use thiserror::Error;

/// Failure to combine a pattern table with a result mapping.
///
/// Both variants are raised when the mapping is supplied, never while
/// matching an input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Patterns with no result function, in pattern table order.
    #[error("incomplete result mapping: no result for {}", join_names(.missing))]
    IncompleteResultMapping { missing: Vec<String> },

    /// Result functions naming no pattern, in mapping order.
    #[error("result mapping names unknown patterns: {}", join_names(.unknown))]
    UnknownResultNames { unknown: Vec<String> },
}

fn join_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pattern names the result mapping does not cover.
#[cold]
pub fn incomplete_result_mapping<'a>(missing: impl IntoIterator<Item = &'a str>) -> PatternError {
    PatternError::IncompleteResultMapping {
        missing: missing.into_iter().map(str::to_string).collect(),
    }
}

/// Result names with no corresponding pattern.
#[cold]
pub fn unknown_result_names<'a>(unknown: impl IntoIterator<Item = &'a str>) -> PatternError {
    PatternError::UnknownResultNames {
        unknown: unknown.into_iter().map(str::to_string).collect(),
    }
}
