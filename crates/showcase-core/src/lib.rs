//! Showcase Core
//!
//! A small, fixed-order demonstration run built from independent helpers:
//! - Traced operations (explicit wrapping instead of implicit decoration)
//! - A single-item container and a lazy countdown iterator
//! - A closed colour enumeration with a total classifier
//! - Scoped acquisition for a temp file (sync) and a resource (async)
//!
//! # Example
//!
//! ```rust,ignore
//! use showcase_core::{Showcase, ShowcaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let showcase = Showcase::new(ShowcaseConfig::new());
//! let summary = showcase.run(&mut std::io::stdout()).await?;
//!
//! println!("Factorial was {}", summary.factorial);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod color;
pub mod config;
pub mod container;
pub mod countdown;
pub mod error;
pub mod geometry;
pub mod math;
pub mod runner;
pub mod scope;
pub mod shape;
pub mod trace;

// Re-exports for convenience
pub use color::{classify, describe_color, Color, UnknownColor};
pub use config::{ShowcaseConfig, MAX_FACTORIAL_INPUT};
pub use container::Container;
pub use countdown::{countdown, Countdown};
pub use error::{Result, ShowcaseError};
pub use geometry::{add, area, traced_area, Point, DEFAULT_RADIUS, PI};
pub use math::{checked_factorial, factorial};
pub use runner::{ColorClassification, RunSummary, Showcase};
pub use scope::{
    with_async_resource, with_temp_file, LoggedResource, ScopedResource, TempFile,
    PLACEHOLDER_CONTENTS,
};
pub use shape::{async_task, Shape};
pub use trace::{traced, Traced};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Showcase Core
    pub use crate::{
        countdown, describe_color, factorial, with_async_resource, with_temp_file, Color,
        Container, Point, ScopedResource, Shape, Showcase, ShowcaseConfig, ShowcaseError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
