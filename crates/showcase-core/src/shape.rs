//! Named shapes and the async helpers that render them
//!
//! - [`Shape`] carries a display name and the category [`Shape::KIND`]
//!   shared by every instance
//! - [`Shape::render`] suspends before producing its message
//! - [`async_task`] yields to the scheduler, then doubles a small range

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name used when a shape is built without one
pub const UNKNOWN_NAME: &str = "unknown";

/// Named 2D shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    name: String,
}

impl Shape {
    /// Category shared by all shapes
    pub const KIND: &'static str = "2D";

    /// Create new shape; `None` or an empty name becomes `"unknown"`
    #[must_use]
    pub fn new(name: Option<&str>) -> Self {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => UNKNOWN_NAME.to_string(),
        };
        Self { name }
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<name> of kind 2D`
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} of kind {}", self.name, Self::KIND)
    }

    /// Simulate rendering: wait `delay`, then report what was drawn
    pub async fn render(&self, delay: Duration) -> String {
        tracing::debug!(shape = %self.name, delay_ms = delay.as_millis(), "Rendering shape");
        tokio::time::sleep(delay).await;
        format!("Rendering {}", self.description())
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Build `0..n` and return every element doubled
pub async fn async_task(n: u64) -> Vec<u64> {
    tokio::task::yield_now().await;
    let data: Vec<u64> = (0..n).collect();
    data.into_iter().map(|x| x * 2).collect()
}
