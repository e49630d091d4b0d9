//! Layering of configuration values.

/// Combine two layers of the same configuration.
///
/// `other` is the more specific layer: its explicit values win, and
/// anything it leaves unset falls through to `self`.
pub trait Merge {
    fn merge(self, other: Self) -> Self;
}

impl<T> Merge for Option<T> {
    fn merge(self, other: Self) -> Self {
        other.or(self)
    }
}
