//! Showcase runner
//!
//! Executes the demonstration steps in a fixed order, writing one or more
//! human-readable lines per step:
//! 1. Traced circle area
//! 2. Ordered key/value mapping
//! 3. Factorial
//! 4. Point inside a single-item container
//! 5. Async shape rendering and the async doubling task
//! 6. Scoped temp file
//! 7. Scoped async resource
//! 8. Countdown
//! 9. Colour classification

use crate::color::{describe_color, Color};
use crate::config::ShowcaseConfig;
use crate::container::Container;
use crate::countdown::countdown;
use crate::error::{Result, ShowcaseError};
use crate::geometry::{traced_area, Point};
use crate::math::factorial;
use crate::scope::{with_async_resource, with_temp_file, LoggedResource};
use crate::shape::{async_task, Shape};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Classification recorded for one colour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorClassification {
    /// The colour
    pub color: Color,
    /// Its classification
    pub classification: String,
}

/// Everything a run computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Traced area result
    pub area: f64,
    /// Mapping in the order it was printed
    pub numbers: IndexMap<String, i64>,
    /// Factorial input
    pub factorial_input: u64,
    /// Factorial result
    pub factorial: u64,
    /// Point stored in the container
    pub point: Point,
    /// Reported container length
    pub container_len: usize,
    /// Shape description
    pub shape: String,
    /// Message produced by the async render
    pub render_message: String,
    /// Output of the async doubling task
    pub task_result: Vec<u64>,
    /// Temp file path used for the scoped file
    pub temp_path: PathBuf,
    /// Temp file existed inside its scope
    pub temp_file_existed: bool,
    /// Temp file was gone after its scope
    pub temp_file_removed: bool,
    /// Scoped async resource name
    pub resource_name: String,
    /// Releases observed on the async resource
    pub resource_releases: usize,
    /// Countdown values in the order produced
    pub countdown: Vec<u64>,
    /// Colour classifications in enumeration order
    pub colors: Vec<ColorClassification>,
}

/// Fixed-order demonstration run
#[derive(Debug, Clone, Default)]
pub struct Showcase {
    config: ShowcaseConfig,
}

impl Showcase {
    /// Create new runner
    #[inline]
    #[must_use]
    pub fn new(config: ShowcaseConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Run every step, writing program output to `out`
    ///
    /// # Errors
    /// - `ShowcaseError::Config` if the configuration is invalid
    /// - `ShowcaseError::Io` if writing output fails
    /// - `ShowcaseError::TempFile` if the scoped file cannot be created
    /// - `ShowcaseError::Resource` if the scoped resource misbehaves
    pub async fn run<W>(&self, out: &mut W) -> Result<RunSummary>
    where
        W: Write + ?Sized,
    {
        let config = &self.config;
        config.validate()?;
        tracing::info!("Starting showcase run");

        let area_fn = traced_area();
        let area = area_fn.call(Some(config.radius));
        writeln!(out, "Area is {area}")?;

        for (key, value) in &config.numbers {
            writeln!(out, "{key} => {value}")?;
        }

        let factorial_result = factorial(config.factorial_input);
        writeln!(
            out,
            "Factorial of {} is {factorial_result}",
            config.factorial_input
        )?;

        let container = Container::new(config.point).with_label("point");
        writeln!(
            out,
            "Container [{}] holds {}",
            container.label(),
            container.get()
        )?;
        writeln!(out, "Container length: {}", container.len())?;

        let shape = Shape::new(Some(config.shape_name.as_str()));
        let render_message = shape.render(config.render_delay()).await;
        writeln!(out, "{render_message}")?;
        let task_result = async_task(config.task_size).await;
        writeln!(out, "Async task result: {task_result:?}")?;

        let temp_file_existed = with_temp_file(config.temp_path.clone(), |path| -> Result<bool> {
            let exists = path.exists();
            writeln!(out, "Temp file {} exists: {exists}", path.display())?;
            Ok(exists)
        })?;
        let temp_file_removed = !config.temp_path.exists();
        writeln!(
            out,
            "Temp file {} removed: {temp_file_removed}",
            config.temp_path.display()
        )?;

        let mut resource =
            LoggedResource::new(&config.resource_name).with_delay(config.resource_delay());
        {
            let out = &mut *out;
            let name = config.resource_name.clone();
            with_async_resource(&mut resource, move || async move {
                tokio::task::yield_now().await;
                writeln!(out, "Using resource {name}")?;
                Ok::<_, ShowcaseError>(())
            })
            .await?;
        }

        let mut countdown_values = Vec::new();
        for value in countdown(config.countdown_start) {
            writeln!(out, "Countdown: {value}")?;
            countdown_values.push(value);
        }

        let mut colors = Vec::with_capacity(Color::ALL.len());
        for color in Color::ALL {
            let classification = describe_color(color);
            writeln!(out, "{color} is {classification}")?;
            colors.push(ColorClassification {
                color,
                classification: classification.to_string(),
            });
        }

        tracing::info!("Showcase run complete");

        Ok(RunSummary {
            area,
            numbers: config.numbers.clone(),
            factorial_input: config.factorial_input,
            factorial: factorial_result,
            point: *container.get(),
            container_len: container.len(),
            shape: shape.description(),
            render_message,
            task_result,
            temp_path: config.temp_path.clone(),
            temp_file_existed,
            temp_file_removed,
            resource_name: config.resource_name.clone(),
            resource_releases: resource.releases(),
            countdown: countdown_values,
            colors,
        })
    }
}
