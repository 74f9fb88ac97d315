//! Invocation tracing
//!
//! [`Traced`] wraps a callable at construction time. Every call logs the
//! operation name and then delegates, so the wrapped function keeps its own
//! signature and return value.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A callable wrapped with invocation logging
#[derive(Debug)]
pub struct Traced<F> {
    name: &'static str,
    inner: F,
    calls: AtomicUsize,
}

impl<F> Traced<F> {
    /// Wrap `inner` under the operation name `name`
    #[inline]
    #[must_use]
    pub fn new(name: &'static str, inner: F) -> Self {
        Self {
            name,
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Operation name used in the trace line
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of calls made through this wrapper
    #[inline]
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Log the call, then delegate to the wrapped callable
    pub fn call<A, R>(&self, arg: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.calls.fetch_add(1, Ordering::Relaxed);
        tracing::info!(operation = self.name, "Calling {}", self.name);
        (self.inner)(arg)
    }
}

/// Shorthand for [`Traced::new`]
#[inline]
#[must_use]
pub fn traced<F>(name: &'static str, inner: F) -> Traced<F> {
    Traced::new(name, inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_and_returns_result() {
        let double = traced("double", |x: i32| x * 2);
        assert_eq!(double.call(21), 42);
        assert_eq!(double.name(), "double");
    }

    #[test]
    fn counts_every_call() {
        let ident = Traced::new("ident", |s: &str| s.len());
        assert_eq!(ident.calls(), 0);
        ident.call("a");
        ident.call("bb");
        assert_eq!(ident.calls(), 2);
    }

    #[test]
    fn wraps_plain_fn_pointer() {
        fn square(x: u32) -> u32 {
            x * x
        }
        let wrapped = traced("square", square);
        assert_eq!(wrapped.call(9), 81);
    }
}
