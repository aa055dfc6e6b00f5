//! Core abstractions of the detector framework: the `Detector` trait, the
//! read-only analysis context, finding records, and classification enums.

pub mod context;
pub mod detector;
pub mod finding;
pub mod severity;

pub use context::AnalysisContext;
pub use detector::Detector;
pub use finding::Finding;
pub use severity::{Confidence, Severity};
