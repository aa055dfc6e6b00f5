//! Detector listing command, fed from the same registration metadata the
//! reporting side uses.

use anyhow::Result;
use colored::Colorize;
use kansa_detectors::DetectionEngine;

pub fn execute() -> Result<()> {
    let engine = DetectionEngine::with_defaults();

    for info in engine.list_detectors() {
        println!(
            "{} {}",
            info.id.bold(),
            format!("({}, {} confidence)", info.severity, info.confidence).dimmed()
        );
        println!("   {}", info.name);
        println!("   {}", info.description);
        println!("   Recommendation: {}", info.recommendation);
        println!();
    }

    Ok(())
}
