//! Geometry helpers: the circle constant, the traced area function and
//! the two-coordinate [`Point`].

use crate::trace::Traced;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Circle constant used by [`area`]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

/// Radius used when [`area`] is called without one
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Area of a circle, `PI * r^2`. Negative radii are accepted as-is.
#[inline]
#[must_use]
pub fn area(radius: Option<f64>) -> f64 {
    let r = radius.unwrap_or(DEFAULT_RADIUS);
    PI * r.powi(2)
}

/// [`area`] wrapped so that every call logs `Calling area`
#[must_use]
pub fn traced_area() -> Traced<fn(Option<f64>) -> f64> {
    Traced::new("area", area as fn(Option<f64>) -> f64)
}

/// Sum of two values of the same numeric type
#[inline]
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create new point
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Field-by-field representation, e.g. `Point(x=1.5, y=2.5)`
    #[must_use]
    pub fn repr(&self) -> String {
        format!("Point(x={}, y={})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}
