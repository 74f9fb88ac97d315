//! Recursive counting helpers

/// `n!` by direct recursion. Inputs `0` and `1` both yield `1`.
///
/// Values above 20 overflow `u64`; use [`checked_factorial`] when the input
/// is not under your control.
#[must_use]
pub fn factorial(n: u64) -> u64 {
    if n <= 1 {
        1
    } else {
        n * factorial(n - 1)
    }
}

/// Same recursion as [`factorial`], returning `None` on overflow
#[must_use]
pub fn checked_factorial(n: u64) -> Option<u64> {
    if n <= 1 {
        Some(1)
    } else {
        checked_factorial(n - 1)?.checked_mul(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
    }

    #[test]
    fn factorial_of_five() {
        assert_eq!(factorial(5), 120);
    }

    #[test]
    fn largest_representable() {
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
        assert_eq!(checked_factorial(20), Some(factorial(20)));
    }

    #[test]
    fn checked_overflows_to_none() {
        assert_eq!(checked_factorial(21), None);
        assert_eq!(checked_factorial(0), Some(1));
    }

    #[test]
    fn recurrence_holds() {
        for n in 2..=20u64 {
            assert_eq!(factorial(n), n * factorial(n - 1));
        }
    }
}
