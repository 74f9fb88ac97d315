//! Single-item container
//!
//! [`Container<T>`] holds exactly one value of any type. Its length is
//! always one and iterating it yields that value once.

use std::iter::{self, Once};

/// Label used when none is given
pub const DEFAULT_LABEL: &str = "item";

/// Container holding exactly one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T> {
    item: T,
    label: String,
}

impl<T> Container<T> {
    /// Create new container around `item`
    #[inline]
    #[must_use]
    pub fn new(item: T) -> Self {
        Self {
            item,
            label: DEFAULT_LABEL.to_string(),
        }
    }

    /// With display label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of items held; always `1`
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn len(&self) -> usize {
        1
    }

    /// Never empty
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrow the item
    #[inline]
    #[must_use]
    pub fn get(&self) -> &T {
        &self.item
    }

    /// Take the item back out
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Iterate over the single item
    #[inline]
    pub fn iter(&self) -> Once<&T> {
        iter::once(&self.item)
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = Once<T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.item)
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = Once<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
