//! Error types for tagged-union dispatch and record construction.
//!
//! Factory functions (e.g. `unhandled_variant()`) are the intended way to
//! build these errors; they keep the conversion from borrowed names in one
//! place and stay out of the hot dispatch path.

use thiserror::Error;

/// Failure to dispatch a tagged value to a handler.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnionError {
    /// The value's discriminant has no entry in the handler table.
    #[error("unhandled variant `{tag}`")]
    UnhandledVariant { tag: String },

    /// A handler table was sealed against a tag set it does not cover.
    ///
    /// `missing` lists the uncovered tags in declaration order.
    #[error("non-exhaustive handler table: missing {}", join_names(.missing))]
    NonExhaustive { missing: Vec<String> },
}

/// Failure to build a tagged record from a shape.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record shape has an empty tag")]
    EmptyTag,

    #[error("`{tag}` is missing required field `{field}`")]
    MissingField { tag: String, field: String },

    #[error("`{tag}` has no field named `{field}`")]
    UnknownField { tag: String, field: String },

    #[error("`{tag}` declares field `{field}` more than once")]
    DuplicateField { tag: String, field: String },
}

pub(crate) fn join_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

// Dispatch Errors

/// Discriminant with no registered handler.
#[cold]
pub fn unhandled_variant(tag: &str) -> UnionError {
    UnionError::UnhandledVariant {
        tag: tag.to_string(),
    }
}

/// Handler table that does not cover every declared tag.
#[cold]
pub fn non_exhaustive<'a>(missing: impl IntoIterator<Item = &'a str>) -> UnionError {
    UnionError::NonExhaustive {
        missing: missing.into_iter().map(str::to_string).collect(),
    }
}

// Record Errors

#[cold]
pub fn empty_tag() -> RecordError {
    RecordError::EmptyTag
}

/// Required field absent from the builder arguments.
#[cold]
pub fn missing_field(tag: &str, field: &str) -> RecordError {
    RecordError::MissingField {
        tag: tag.to_string(),
        field: field.to_string(),
    }
}

/// Argument naming a field the shape does not declare.
#[cold]
pub fn unknown_field(tag: &str, field: &str) -> RecordError {
    RecordError::UnknownField {
        tag: tag.to_string(),
        field: field.to_string(),
    }
}

#[cold]
pub fn duplicate_field(tag: &str, field: &str) -> RecordError {
    RecordError::DuplicateField {
        tag: tag.to_string(),
        field: field.to_string(),
    }
}
