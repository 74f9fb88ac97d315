//! Scoped acquisition
//!
//! Two shapes of the same contract: acquire something, run a block of work,
//! release it no matter how the block ends.
//!
//! - [`TempFile`] / [`with_temp_file`]: synchronous, release happens in `Drop`
//! - [`ScopedResource`] / [`with_async_resource`]: asynchronous, acquire and
//!   release may suspend and the protected block may suspend too
//!
//! Errors raised by the block are returned unchanged after release. Panics
//! are resumed after release.

use crate::error::{Result, ShowcaseError};
use async_trait::async_trait;
use futures::FutureExt;
use std::fs;
use std::future::Future;
use std::io;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Text written into a freshly created temp file
pub const PLACEHOLDER_CONTENTS: &str = "temporary data\n";

/// File that is deleted when the guard is dropped
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    /// Create the file at `path` with [`PLACEHOLDER_CONTENTS`]
    ///
    /// # Errors
    /// - `ShowcaseError::TempFile` if the file cannot be written
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Err(source) = fs::write(&path, PLACEHOLDER_CONTENTS) {
            return Err(ShowcaseError::TempFile { path, source });
        }
        tracing::debug!(path = %path.display(), "Created temp file");
        Ok(Self { path })
    }

    /// Location of the file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Removed temp file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Temp file already gone");
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "Failed to remove temp file: {}", e);
            }
        }
    }
}

/// Create a temp file at `path`, hand its path to `work`, then delete it
///
/// # Errors
/// - whatever `work` returns, unchanged
/// - `ShowcaseError::TempFile` (converted into `E`) if creation fails
pub fn with_temp_file<T, E, F>(path: impl Into<PathBuf>, work: F) -> std::result::Result<T, E>
where
    F: FnOnce(&Path) -> std::result::Result<T, E>,
    E: From<ShowcaseError>,
{
    let file = TempFile::create(path)?;
    work(file.path())
}

/// Resource with asynchronous acquire/release steps
#[async_trait]
pub trait ScopedResource: Send {
    /// Resource name for logs
    fn name(&self) -> &str;

    /// Take the resource
    async fn acquire(&mut self) -> Result<()>;

    /// Give the resource back
    async fn release(&mut self) -> Result<()>;
}

/// Resource that logs each acquire and release and simulates latency
#[derive(Debug, Clone)]
pub struct LoggedResource {
    name: String,
    delay: Duration,
    held: bool,
    acquisitions: usize,
    releases: usize,
}

impl LoggedResource {
    /// Create new resource
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            delay: Duration::ZERO,
            held: false,
            acquisitions: 0,
            releases: 0,
        }
    }

    /// With simulated latency for each step
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Whether the resource is currently held
    #[inline]
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Completed acquisitions
    #[inline]
    #[must_use]
    pub fn acquisitions(&self) -> usize {
        self.acquisitions
    }

    /// Completed releases
    #[inline]
    #[must_use]
    pub fn releases(&self) -> usize {
        self.releases
    }
}

#[async_trait]
impl ScopedResource for LoggedResource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn acquire(&mut self) -> Result<()> {
        if self.held {
            return Err(ShowcaseError::resource(&self.name, "already held"));
        }
        tracing::info!(resource = %self.name, "Acquiring resource");
        tokio::time::sleep(self.delay).await;
        self.held = true;
        self.acquisitions += 1;
        Ok(())
    }

    async fn release(&mut self) -> Result<()> {
        if !self.held {
            return Err(ShowcaseError::resource(&self.name, "not held"));
        }
        tokio::time::sleep(self.delay).await;
        self.held = false;
        self.releases += 1;
        tracing::info!(resource = %self.name, "Releasing resource");
        Ok(())
    }
}

/// Acquire `resource`, await `work`, then release
///
/// Release runs after the block completes, fails or panics. If both the
/// block and the release fail, the block's error wins and the release error
/// is logged.
///
/// # Errors
/// - whatever `work` returns, unchanged
/// - acquire/release failures (converted into `E`)
pub async fn with_async_resource<R, F, Fut, T, E>(
    resource: &mut R,
    work: F,
) -> std::result::Result<T, E>
where
    R: ScopedResource + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: From<ShowcaseError>,
{
    resource.acquire().await?;

    let outcome = AssertUnwindSafe(async move { work().await })
        .catch_unwind()
        .await;

    let released = resource.release().await;

    match outcome {
        Ok(Ok(value)) => {
            released?;
            Ok(value)
        }
        Ok(Err(err)) => {
            if let Err(e) = released {
                tracing::warn!(resource = resource.name(), "Release failed after block error: {}", e);
            }
            Err(err)
        }
        Err(panic) => {
            if let Err(e) = released {
                tracing::warn!(resource = resource.name(), "Release failed after panic: {}", e);
            }
            std::panic::resume_unwind(panic)
        }
    }
}
