//! Lazy countdown sequence

use std::iter::FusedIterator;

/// Iterator counting down from a start value to 1 inclusive.
///
/// Once exhausted it stays exhausted; build a new one with [`countdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    current: u64,
}

impl Countdown {
    /// Values not yet produced
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.current
    }

    /// True once every value has been produced
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.current == 0
    }
}

/// Count down from `start` to 1. `countdown(0)` is empty.
#[inline]
#[must_use]
pub fn countdown(start: u64) -> Countdown {
    Countdown { current: start }
}

impl Iterator for Countdown {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        let value = self.current;
        self.current -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.current).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Countdown {}

impl FusedIterator for Countdown {}
