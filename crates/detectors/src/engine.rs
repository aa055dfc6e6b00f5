//! Sequential detection engine and the report it produces.
//!
//! Detectors run one after another over the same immutable snapshot; a
//! failing detector is logged and skipped rather than aborting the run.

use crate::core::{AnalysisContext, Confidence, Detector, Finding, Severity};
use anyhow::Result;
use chrono::{DateTime, Utc};
use kansa_model::ContractSet;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct DetectionEngine {
    detectors: Vec<Arc<dyn Detector>>,
}

impl DetectionEngine {
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// An engine running every built-in detector.
    pub fn with_defaults() -> Self {
        Self::new().with_detectors(crate::registry::DetectorRegistry::with_defaults().enabled())
    }

    pub fn add_detector<D: Detector + 'static>(mut self, detector: D) -> Self {
        self.detectors.push(Arc::new(detector));
        self
    }

    pub fn with_detectors(mut self, detectors: Vec<Arc<dyn Detector>>) -> Self {
        self.detectors.extend(detectors);
        self
    }

    pub fn run(&self, snapshot: &ContractSet) -> Result<AnalysisReport> {
        let context = AnalysisContext::new(snapshot);

        let mut findings = Vec::new();
        for detector in &self.detectors {
            debug!(detector = detector.id(), "running detector");
            match detector.detect(&context) {
                Ok(detected) => {
                    debug!(
                        detector = detector.id(),
                        findings = detected.len(),
                        "detector finished"
                    );
                    findings.extend(detected);
                }
                Err(e) => warn!(detector = detector.id(), error = %e, "detector failed"),
            }
        }

        Ok(AnalysisReport::new(findings))
    }

    pub fn run_detectors(&self, ids: &[&str], snapshot: &ContractSet) -> Result<AnalysisReport> {
        let selected = Self {
            detectors: self
                .detectors
                .iter()
                .filter(|d| ids.contains(&d.id()))
                .cloned()
                .collect(),
        };
        selected.run(snapshot)
    }

    pub fn list_detectors(&self) -> Vec<DetectorInfo> {
        self.detectors
            .iter()
            .map(|d| DetectorInfo {
                id: d.id().to_string(),
                name: d.name().to_string(),
                description: d.description().to_string(),
                recommendation: d.recommendation().to_string(),
                severity: d.severity(),
                confidence: d.confidence(),
            })
            .collect()
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Registration metadata of one detector, for listings and documentation.
#[derive(Debug, Clone)]
pub struct DetectorInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub recommendation: String,
    pub severity: Severity,
    pub confidence: Confidence,
}

/// Findings of one engine run, ordered by priority.
#[derive(Debug)]
pub struct AnalysisReport {
    findings: Vec<Finding>,
    generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(mut findings: Vec<Finding>) -> Self {
        findings.sort_by_key(|f| std::cmp::Reverse(f.priority_score()));
        Self {
            findings,
            generated_at: Utc::now(),
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn count_by_severity(&self) -> SeverityCount {
        let mut count = SeverityCount::default();
        for finding in &self.findings {
            match finding.severity {
                Severity::Critical => count.critical += 1,
                Severity::High => count.high += 1,
                Severity::Medium => count.medium += 1,
                Severity::Low => count.low += 1,
                Severity::Informational => count.informational += 1,
            }
        }
        count
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeverityCount {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
}
