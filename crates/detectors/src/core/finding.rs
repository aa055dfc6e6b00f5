use crate::core::severity::{Confidence, Severity};
use serde::{Deserialize, Serialize};

/// One detector result: which contract element matched, and why. Findings are
/// immutable records; detectors produce them and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub detector_id: String,

    pub severity: Severity,

    pub confidence: Confidence,

    pub title: String,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Numeric ceiling extracted by the transfer-limit detector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_limit: Option<u128>,
}

impl Finding {
    pub fn new(
        detector_id: &str,
        severity: Severity,
        confidence: Confidence,
        title: String,
        message: String,
    ) -> Self {
        Self {
            detector_id: detector_id.to_string(),
            severity,
            confidence,
            title,
            message,
            contract: None,
            function: None,
            transfer_limit: None,
        }
    }

    pub fn with_contract(mut self, contract: &str) -> Self {
        self.contract = Some(contract.to_string());
        self
    }

    pub fn with_function(mut self, function: &str) -> Self {
        self.function = Some(function.to_string());
        self
    }

    pub fn with_transfer_limit(mut self, limit: u128) -> Self {
        self.transfer_limit = Some(limit);
        self
    }

    /// Ordering key for reports: severity dominates, confidence breaks ties.
    pub fn priority_score(&self) -> u32 {
        let severity_score = match self.severity {
            Severity::Critical => 1000,
            Severity::High => 100,
            Severity::Medium => 10,
            Severity::Low => 1,
            Severity::Informational => 0,
        };

        let confidence_multiplier = match self.confidence {
            Confidence::High => 10,
            Confidence::Medium => 5,
            Confidence::Low => 1,
        };

        severity_score * confidence_multiplier
    }
}
