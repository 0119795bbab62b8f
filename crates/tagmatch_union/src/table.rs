//! Handler tables and tag dispatch.
//!
//! A `HandlerTable` maps each tag of a variant set to one handler producing
//! a shared result type. Dispatch reads the value's tag, looks the handler
//! up and calls it with the value, returning the handler's result unchanged.
//!
//! # Exhaustiveness
//!
//! Tables are checked in two places:
//! - `seal()` / `seal_for()` verify at construction that every declared tag
//!   has a handler, returning `UnionError::NonExhaustive` otherwise.
//! - Dispatch still reports `UnionError::UnhandledVariant` for a tag outside
//!   the table, which is only reachable for values built outside the
//!   declared set (hand-constructed records, corrupted discriminants).

use rustc_hash::FxHashMap;

use crate::errors::{non_exhaustive, unhandled_variant};
use crate::{Tagged, TaggedUnion, UnionError};

type Handler<'h, V, R> = Box<dyn Fn(V) -> R + Send + Sync + 'h>;

/// Anything that can route a tagged value to its handler.
pub trait Dispatch<V, R> {
    /// Invoke the handler registered for `value`'s tag.
    fn dispatch(&self, value: V) -> Result<R, UnionError>;
}

/// Tag -> handler mapping for one variant set.
pub struct HandlerTable<'h, V, R> {
    handlers: FxHashMap<String, Handler<'h, V, R>>,
    // Registration order, for `tags()` and error reporting.
    order: Vec<String>,
}

impl<'h, V: Tagged, R> HandlerTable<'h, V, R> {
    /// Create an empty table.
    pub fn new() -> Self {
        HandlerTable {
            handlers: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Register `handler` for `tag`.
    ///
    /// Registering a tag twice replaces the earlier handler.
    #[must_use]
    pub fn on<F>(mut self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(V) -> R + Send + Sync + 'h,
    {
        let tag = tag.into();
        if self
            .handlers
            .insert(tag.clone(), Box::new(handler))
            .is_none()
        {
            self.order.push(tag);
        }
        self
    }

    /// Tags with a registered handler, in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Dispatch `value` to the handler registered under its tag.
    pub fn apply(&self, value: V) -> Result<R, UnionError> {
        let Some(handler) = self.handlers.get(value.tag()) else {
            tracing::trace!(tag = value.tag(), "no handler for tag");
            return Err(unhandled_variant(value.tag()));
        };
        tracing::trace!(tag = value.tag(), "dispatching tagged value");
        Ok(handler(value))
    }

    /// Turn the table into a reusable `value -> result` function.
    pub fn matcher(&self) -> impl Fn(V) -> Result<R, UnionError> + '_ {
        move |value| self.apply(value)
    }

    /// Check the table covers every tag of `V`'s declared variant set.
    pub fn seal(self) -> Result<SealedTable<'h, V, R>, UnionError>
    where
        V: TaggedUnion,
    {
        self.seal_for(V::TAGS)
    }

    /// Check the table covers every tag in `tags`.
    ///
    /// Used for variant sets that are only known at runtime, such as a
    /// group of record shapes.
    pub fn seal_for<S: AsRef<str>>(self, tags: &[S]) -> Result<SealedTable<'h, V, R>, UnionError> {
        let missing: Vec<&str> = tags
            .iter()
            .map(AsRef::as_ref)
            .filter(|tag| !self.contains(tag))
            .collect();
        if !missing.is_empty() {
            return Err(non_exhaustive(missing));
        }
        tracing::debug!(tags = tags.len(), "sealed handler table");
        Ok(SealedTable { table: self })
    }
}

impl<V: Tagged, R> Default for HandlerTable<'_, V, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Tagged, R> Dispatch<V, R> for HandlerTable<'_, V, R> {
    fn dispatch(&self, value: V) -> Result<R, UnionError> {
        self.apply(value)
    }
}

impl<V, R> std::fmt::Debug for HandlerTable<'_, V, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerTable")
            .field("tags", &self.order)
            .finish_non_exhaustive()
    }
}

/// A handler table known to cover its whole variant set.
pub struct SealedTable<'h, V, R> {
    table: HandlerTable<'h, V, R>,
}

impl<V: Tagged, R> SealedTable<'_, V, R> {
    /// Dispatch `value` to the handler registered under its tag.
    pub fn apply(&self, value: V) -> Result<R, UnionError> {
        self.table.apply(value)
    }

    pub fn matcher(&self) -> impl Fn(V) -> Result<R, UnionError> + '_ {
        move |value| self.apply(value)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.table.tags()
    }
}

impl<V: Tagged, R> Dispatch<V, R> for SealedTable<'_, V, R> {
    fn dispatch(&self, value: V) -> Result<R, UnionError> {
        self.apply(value)
    }
}

impl<V, R> std::fmt::Debug for SealedTable<'_, V, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedTable")
            .field("tags", &self.table.order)
            .finish_non_exhaustive()
    }
}

/// Match a tagged value against a handler table.
///
/// Returns whatever the selected handler returns. A tag with no handler is
/// reported as `UnionError::UnhandledVariant` carrying the tag.
#[tracing::instrument(level = "trace", skip_all)]
pub fn match_tagged<V, R, D>(value: V, handlers: &D) -> Result<R, UnionError>
where
    D: Dispatch<V, R> + ?Sized,
{
    handlers.dispatch(value)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
