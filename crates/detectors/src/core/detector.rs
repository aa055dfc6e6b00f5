//! Detector trait and registration surface.
//!
//! Each detector is an independent, stateless pattern matcher registered
//! under a short argument name. The metadata methods feed the host's
//! reporting and documentation output; `detect` is the single entry point
//! and must be deterministic over an unchanged snapshot.

use crate::core::{AnalysisContext, Confidence, Finding, Severity};
use anyhow::Result;

pub trait Detector: Send + Sync {
    /// Short argument name the detector registers under, e.g.
    /// `erc20-transfer-limit`.
    fn id(&self) -> &'static str;

    /// Human-readable title.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    /// Remediation text surfaced alongside findings.
    fn recommendation(&self) -> &'static str {
        "No recommendation provided"
    }

    fn severity(&self) -> Severity;

    fn confidence(&self) -> Confidence;

    fn detect(&self, context: &AnalysisContext<'_>) -> Result<Vec<Finding>>;

    fn enabled_by_default(&self) -> bool {
        true
    }
}
