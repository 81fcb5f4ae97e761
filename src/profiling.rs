//! Wall-clock timing of code regions.
//!
//! A [`Region`] captures a monotonic start instant when created and reports
//! the elapsed time exactly once when dropped, so early returns and panics
//! still produce a report:
//!
//! ```
//! use lipsutils::profiling::Region;
//!
//! {
//!     let _region = Region::new("setup");
//!     // ... work ...
//! } // logs "Region [setup]: 1.2 milliseconds"
//! ```

use std::time::Instant;

use crate::fmt::human_duration;

/// Destination for the line produced by a finished [`Region`]
pub trait ReportSink {
    fn report(&self, line: &str);
}

impl<F> ReportSink for F
where
    F: Fn(&str),
{
    fn report(&self, line: &str) {
        self(line)
    }
}

/// Emits reports as INFO level `tracing` events targeting this module
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, line: &str) {
        tracing::info!("{}", line);
    }
}

/// A timed region; reports its duration when dropped
pub struct Region<S: ReportSink = TracingSink> {
    identifier: String,
    start: Instant,
    sink: S,
}

impl Region<TracingSink> {
    /// Starts a region reported via `tracing`
    pub fn new(identifier: impl Into<String>) -> Self {
        Self::with_sink(identifier, TracingSink)
    }
}

impl<S: ReportSink> Region<S> {
    /// Starts a region reported to `sink`
    pub fn with_sink(identifier: impl Into<String>, sink: S) -> Self {
        Self {
            identifier: identifier.into(),
            start: Instant::now(),
            sink,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl<S: ReportSink> Drop for Region<S> {
    fn drop(&mut self) {
        let elapsed = human_duration(self.start.elapsed());
        self.sink
            .report(&format!("Region [{}]: {}", self.identifier, elapsed));
    }
}

/// Starts a [`Region`] whose report uses the calling module as `tracing` target
#[macro_export]
macro_rules! region {
    ($identifier:expr) => {
        $crate::profiling::Region::with_sink($identifier, |line: &str| {
            $crate::__private::tracing::info!(target: module_path!(), "{}", line)
        })
    };
}

/// Runs `f` inside a region named `identifier`, returning its result
pub fn timed<T, F>(identifier: impl Into<String>, f: F) -> T
where
    F: FnOnce() -> T,
{
    let _region = Region::new(identifier);
    f()
}
