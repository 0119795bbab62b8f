//! First-match pattern matching.
//!
//! `patternmatch(table)` pairs a pattern table with a result mapping keyed
//! by the same names. The combined `PatternMatcher` tries each pattern in
//! table order and returns the first match, transformed by that pattern's
//! result function:
//!
//! ```text
//! run(x) = Some(results[name](extracted))   for the first name that matches
//!        = None                             when nothing matches
//! ```
//!
//! Name mismatches between the two tables are rejected when the mapping is
//! supplied, so `run` itself cannot fail. Panics inside extractors or result
//! functions are not caught.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::{incomplete_result_mapping, unknown_result_names};
use crate::pattern::Extractor;
use crate::{PatternError, PatternTable};

type ResultFn<'a, P, R> = Box<dyn Fn(P) -> R + Send + Sync + 'a>;

/// Ordered name -> result function mapping.
pub struct ResultMapping<'a, P, R> {
    entries: Vec<(String, ResultFn<'a, P, R>)>,
}

impl<'a, P, R> ResultMapping<'a, P, R> {
    pub fn new() -> Self {
        ResultMapping {
            entries: Vec::new(),
        }
    }

    /// Register the result function for pattern `name`.
    ///
    /// Registering a name twice replaces the earlier function.
    #[must_use]
    pub fn on<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(P) -> R + Send + Sync + 'a,
    {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = Box::new(f),
            None => self.entries.push((name, Box::new(f))),
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P, R> Default for ResultMapping<'_, P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, R> fmt::Debug for ResultMapping<'_, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(n, _)| n))
            .finish()
    }
}

/// A pattern table waiting for its result mapping.
///
/// Produced by `patternmatch()`; complete it with `results()`.
pub struct PatternMatch<'a, S: ?Sized, P> {
    table: PatternTable<'a, S, P>,
}

/// Start a pattern match over `table`.
pub fn patternmatch<S: ?Sized, P>(table: PatternTable<'_, S, P>) -> PatternMatch<'_, S, P> {
    PatternMatch { table }
}

impl<'a, S: ?Sized, P> PatternMatch<'a, S, P> {
    /// Attach the result mapping, checking both tables name the same set.
    ///
    /// # Errors
    ///
    /// `IncompleteResultMapping` lists patterns without a result function;
    /// `UnknownResultNames` lists result functions without a pattern.
    pub fn results<R>(
        self,
        mapping: ResultMapping<'a, P, R>,
    ) -> Result<PatternMatcher<'a, S, P, R>, PatternError> {
        let mapping_order: Vec<String> = mapping.names().map(str::to_string).collect();
        let mut results: FxHashMap<String, ResultFn<'a, P, R>> =
            mapping.entries.into_iter().collect();

        {
            let missing: Vec<&str> = self
                .table
                .names()
                .filter(|name| !results.contains_key(*name))
                .collect();
            if !missing.is_empty() {
                return Err(incomplete_result_mapping(missing));
            }
        }
        {
            let unknown: Vec<&str> = mapping_order
                .iter()
                .map(String::as_str)
                .filter(|name| self.table.get(name).is_none())
                .collect();
            if !unknown.is_empty() {
                return Err(unknown_result_names(unknown));
            }
        }

        let mut arms = Vec::with_capacity(self.table.len());
        for (name, pattern) in self.table.into_entries() {
            if let Some(result) = results.remove(&name) {
                arms.push(Arm {
                    name,
                    extract: pattern.into_extractor(),
                    result,
                });
            }
        }
        tracing::debug!(patterns = arms.len(), "built pattern matcher");
        Ok(PatternMatcher { arms })
    }
}

struct Arm<'a, S: ?Sized, P, R> {
    name: String,
    extract: Extractor<'a, S, P>,
    result: ResultFn<'a, P, R>,
}

impl<S: ?Sized, P> fmt::Debug for PatternMatch<'_, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PatternMatch").field(&self.table).finish()
    }
}

/// A pattern table combined with its result mapping.
pub struct PatternMatcher<'a, S: ?Sized, P, R> {
    arms: Vec<Arm<'a, S, P, R>>,
}

impl<S: ?Sized, P, R> PatternMatcher<'_, S, P, R> {
    /// Match `input` against every pattern in table order.
    ///
    /// Stops at the first pattern that extracts a value; later extractors
    /// and result functions are not called.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn run(&self, input: &S) -> Option<R> {
        self.arms.iter().find_map(|arm| {
            tracing::trace!(pattern = %arm.name, "trying pattern");
            let extracted = (arm.extract)(input)?;
            tracing::trace!(pattern = %arm.name, "pattern matched");
            Some((arm.result)(extracted))
        })
    }

    /// Name of the pattern that would win for `input`, without calling its
    /// result function.
    pub fn matched(&self, input: &S) -> Option<&str> {
        self.arms
            .iter()
            .find(|arm| (arm.extract)(input).is_some())
            .map(|arm| arm.name.as_str())
    }

    /// Pattern names in precedence order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arms.iter().map(|arm| arm.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<S: ?Sized, P, R> fmt::Debug for PatternMatcher<'_, S, P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternMatcher")
            .field("patterns", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
