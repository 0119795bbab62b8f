//! Tagmatch Union - tagged-union matching for the tagmatch library.
//!
//! This crate provides:
//! - The `Tagged` / `TaggedUnion` discriminant traits
//! - Handler tables mapping each tag to a handler (`HandlerTable`)
//! - Construction-time exhaustiveness checks (`SealedTable`)
//! - Tagged records built from shapes with field defaults (`RecordShape`)
//!
//! # Dispatch
//!
//! Prefer a native `match` on a Rust enum wherever the variant set is known
//! at compile time. Handler tables cover the remaining cases: values that
//! only carry a string discriminant, such as records decoded from outside
//! the program. Dispatch never falls back silently; a tag with no handler is
//! reported as `UnionError::UnhandledVariant`.
//!
//! ```
//! use tagmatch_union::{match_tagged, HandlerTable, RecordShape, Value};
//!
//! let bar = RecordShape::new("Bar").required("label");
//! let record = bar.build([("label", Value::from("hello"))]).unwrap();
//!
//! let table = HandlerTable::new()
//!     .on("Bar", |r: &tagmatch_union::Record| r.get_str("label").map(str::len));
//! assert_eq!(match_tagged(&record, &table).unwrap(), Some(5));
//! ```

mod errors;
mod record;
mod table;
mod tagged;

pub use errors::{RecordError, UnionError};
pub use record::{Record, RecordShape, Value};
pub use table::{match_tagged, Dispatch, HandlerTable, SealedTable};
pub use tagged::{Tagged, TaggedUnion};

pub use errors::{
    duplicate_field, empty_tag, missing_field, non_exhaustive, unhandled_variant, unknown_field,
};
