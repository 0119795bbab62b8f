//! Tagmatch - tagged-union dispatch and first-match pattern matching.
//!
//! Re-exports the two independent matchers:
//! - [`tagmatch_union`]: dispatch a tagged value to the handler for its tag
//! - [`tagmatch_patterns`]: try named extractors in order, keep the first hit
//!
//! Neither matcher logs on its own behalf beyond `tracing` events; call
//! [`init_tracing`] from a binary to see them.

use std::sync::Once;

use thiserror::Error;

pub use tagmatch_patterns::{
    patternmatch, Decoder, IntoOptional, Pattern, PatternError, PatternKind, PatternMatch,
    PatternMatcher, PatternTable, ResultMapping,
};
pub use tagmatch_union::{
    match_tagged, Dispatch, HandlerTable, Record, RecordError, RecordShape, SealedTable, Tagged,
    TaggedUnion, UnionError, Value,
};

/// Any error raised while building or running a matcher.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Union(#[from] UnionError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tagmatch_union=trace` or `RUST_LOG=tagmatch_patterns=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
