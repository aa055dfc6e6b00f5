//! Kansa Detectors - Heuristic ERC20 Pattern Detection
//!
//! This crate provides a trait-based detector framework over the host's
//! resolved contract snapshot, plus the two ERC20 heuristics built on it.
//! Detectors are independent, stateless pattern matchers: each receives the
//! full contract set and returns findings, never mutating the model or each
//! other's results. The engine runs them sequentially, so a run over an
//! unchanged snapshot is deterministic and idempotent.

pub mod core;
pub mod engine;
pub mod registry;

pub mod change_balance;
pub mod transfer_limit;

pub use crate::core::{AnalysisContext, Confidence, Detector, Finding, Severity};

pub use engine::{AnalysisReport, DetectionEngine, DetectorInfo, SeverityCount};
pub use registry::{DetectorRegistry, DetectorRegistryBuilder};

pub use change_balance::ChangeBalanceDetector;
pub use transfer_limit::TransferLimitDetector;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
