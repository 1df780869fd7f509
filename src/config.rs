//! Solver configuration.
//!
//! The defaults reproduce the reference behavior. A configuration can be
//! loaded from JSON and then overridden flag by flag at the CLI boundary:
//!
//! ```json
//! { "report": "strict-sink", "apex": "drain-remaining" }
//! ```

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PyramidError, Result};

/// Which vertex the resolver reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPolicy {
    /// Report the highest-indexed vertex other than the source with a finite
    /// distance. This is the sink whenever any bottom cell is reachable, and
    /// otherwise the deepest reachable cell.
    #[default]
    BestReachableSuffix,
    /// Report the sink only; a pyramid whose bottom row is cut off has no sum.
    StrictSink,
}

/// What happens to the remaining input when the apex cell is prime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ApexPolicy {
    /// Stop reading immediately; the remaining values stay unconsumed.
    #[default]
    StopReading,
    /// Keep reading and validating every remaining value without adding edges.
    DrainRemaining,
}

/// Policies applied by [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Result reporting policy.
    pub report: ReportPolicy,
    /// Prime-apex input policy.
    pub apex: ApexPolicy,
}

impl SolverConfig {
    /// Parses a JSON configuration; missing fields take their defaults.
    ///
    /// # Errors
    /// [`PyramidError::Config`] on malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a JSON configuration file.
    ///
    /// # Errors
    /// [`PyramidError::Open`] if the file cannot be read,
    /// [`PyramidError::Config`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PyramidError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Replaces the report policy.
    #[must_use]
    pub fn with_report(mut self, report: ReportPolicy) -> Self {
        self.report = report;
        self
    }

    /// Replaces the apex policy.
    #[must_use]
    pub fn with_apex(mut self, apex: ApexPolicy) -> Self {
        self.apex = apex;
        self
    }
}
