//! Patterns and pattern tables.
//!
//! A pattern is a named, independent test over an input. Patterns come in
//! three shapes, all normalised once at construction into a single
//! extractor `&S -> Option<P>`:
//!
//! - predicate: `true` matches and extracts the input itself
//! - extract: returns `Option<P>` directly
//! - decode: a `Decoder` whose outcome is any `IntoOptional<P>`
//!   (`Option<P>`, `Result<P, E>`, or a caller type)

use std::fmt;

use crate::IntoOptional;

pub(crate) type Extractor<'a, S, P> = Box<dyn Fn(&S) -> Option<P> + Send + Sync + 'a>;

/// A decoding pattern.
///
/// The decoder does the actual validation; the matcher only looks at
/// whether the outcome is present.
pub trait Decoder<S: ?Sized> {
    /// Value extracted on success.
    type Output;
    /// Outcome of one decode attempt.
    type Decoded: IntoOptional<Self::Output>;

    fn decode(&self, input: &S) -> Self::Decoded;
}

/// Shape a pattern was declared with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Predicate,
    Extract,
    Decode,
}

/// A normalised test-and-extract operation over `S`.
pub struct Pattern<'a, S: ?Sized, P> {
    kind: PatternKind,
    extract: Extractor<'a, S, P>,
}

impl<'a, S: ?Sized, P> Pattern<'a, S, P> {
    /// Boolean predicate; a match extracts the input unchanged.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'a,
        S: Clone + Into<P>,
    {
        Pattern {
            kind: PatternKind::Predicate,
            extract: Box::new(move |input: &S| f(input).then(|| input.clone().into())),
        }
    }

    /// Extractor returning an optional value directly.
    pub fn extract<F>(f: F) -> Self
    where
        F: Fn(&S) -> Option<P> + Send + Sync + 'a,
    {
        Pattern {
            kind: PatternKind::Extract,
            extract: Box::new(f),
        }
    }

    /// Decoding pattern; the decoder's outcome is normalised to `Option<P>`.
    pub fn decode<D>(decoder: D) -> Self
    where
        D: Decoder<S, Output = P> + Send + Sync + 'a,
    {
        Pattern {
            kind: PatternKind::Decode,
            extract: Box::new(move |input: &S| decoder.decode(input).into_optional()),
        }
    }

    /// Decoding pattern from a bare function.
    pub fn decode_fn<F, O>(f: F) -> Self
    where
        F: Fn(&S) -> O + Send + Sync + 'a,
        O: IntoOptional<P>,
    {
        Pattern {
            kind: PatternKind::Decode,
            extract: Box::new(move |input: &S| f(input).into_optional()),
        }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Run the extractor against `input`.
    #[inline]
    pub fn test(&self, input: &S) -> Option<P> {
        (self.extract)(input)
    }

    pub(crate) fn into_extractor(self) -> Extractor<'a, S, P> {
        self.extract
    }
}

impl<S: ?Sized, P> fmt::Debug for Pattern<'_, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered name -> pattern mapping.
///
/// Order decides precedence: earlier patterns are tried first. Adding a
/// pattern under an existing name replaces it in place.
pub struct PatternTable<'a, S: ?Sized, P> {
    entries: Vec<(String, Pattern<'a, S, P>)>,
}

impl<'a, S: ?Sized, P> PatternTable<'a, S, P> {
    pub fn new() -> Self {
        PatternTable {
            entries: Vec::new(),
        }
    }

    /// Add `pattern` under `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, pattern: Pattern<'a, S, P>) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = pattern,
            None => self.entries.push((name, pattern)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Pattern<'a, S, P>> {
        self.entries
            .iter()
            .find_map(|(n, p)| (n == name).then_some(p))
    }

    /// Pattern names in precedence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_entries(self) -> Vec<(String, Pattern<'a, S, P>)> {
        self.entries
    }
}

impl<S: ?Sized, P> Default for PatternTable<'_, S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized, P> fmt::Debug for PatternTable<'_, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(n, p)| (n, p.kind)))
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
