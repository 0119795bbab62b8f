//! Adapter from optional-like values to `Option`.
//!
//! Decoders may report their outcome maybe-style (`Option<T>`) or
//! either-style (`Result<T, E>`). Pattern construction normalises both
//! through `IntoOptional`, so the matcher only ever sees `Option<T>`.

/// Conversion of an optional-like outcome into `Option<T>`.
///
/// Implement this for a custom decoder result type to use it with
/// `Pattern::decode`.
pub trait IntoOptional<T> {
    fn into_optional(self) -> Option<T>;
}

impl<T> IntoOptional<T> for Option<T> {
    #[inline]
    fn into_optional(self) -> Option<T> {
        self
    }
}

/// Failure becomes empty; the error value is dropped.
impl<T, E> IntoOptional<T> for Result<T, E> {
    #[inline]
    fn into_optional(self) -> Option<T> {
        self.ok()
    }
}
