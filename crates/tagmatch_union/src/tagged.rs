//! Discriminant traits for tagged values.

/// A value carrying a string discriminant from a closed set of variants.
///
/// Two values reporting the same tag are treated as sharing one variant
/// shape; the matcher does not inspect anything beyond the tag.
pub trait Tagged {
    /// The discriminant naming this value's variant.
    fn tag(&self) -> &str;
}

/// A Rust sum type whose variants form a closed tag set.
///
/// Native `match` on the enum already gives compile-time exhaustiveness.
/// Implementing this trait additionally lets runtime handler tables be
/// checked against the full set when they are sealed, for the cases where a
/// value crosses a boundary and is dispatched by tag instead.
pub trait TaggedUnion: Tagged {
    /// Every tag a value of this type can report, in declaration order.
    const TAGS: &'static [&'static str];
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tag(&self) -> &str {
        (**self).tag()
    }
}

impl<T: TaggedUnion + ?Sized> TaggedUnion for &T {
    const TAGS: &'static [&'static str] = T::TAGS;
}

impl<T: Tagged + ?Sized> Tagged for Box<T> {
    fn tag(&self) -> &str {
        (**self).tag()
    }
}
