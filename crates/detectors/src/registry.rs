use crate::change_balance::ChangeBalanceDetector;
use crate::core::Detector;
use crate::transfer_limit::TransferLimitDetector;
use std::collections::HashMap;
use std::sync::Arc;

/// Id-keyed detector registration. The host asks the registry what exists;
/// the engine takes whatever subset it should run.
pub struct DetectorRegistry {
    detectors: HashMap<String, Arc<dyn Detector>>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self {
            detectors: HashMap::new(),
        }
    }

    /// A registry preloaded with every built-in detector.
    pub fn with_defaults() -> Self {
        DetectorRegistryBuilder::new()
            .with_detector(ChangeBalanceDetector::new())
            .with_detector(TransferLimitDetector::new())
            .build()
    }

    pub fn register<D: Detector + 'static>(&mut self, detector: D) {
        let id = detector.id().to_string();
        self.detectors.insert(id, Arc::new(detector));
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Detector>> {
        self.detectors.get(id).cloned()
    }

    /// All registered detectors, ordered by id so downstream runs are
    /// deterministic.
    pub fn all(&self) -> Vec<Arc<dyn Detector>> {
        let mut detectors: Vec<_> = self.detectors.values().cloned().collect();
        detectors.sort_by_key(|d| d.id());
        detectors
    }

    pub fn enabled(&self) -> Vec<Arc<dyn Detector>> {
        self.all()
            .into_iter()
            .filter(|d| d.enabled_by_default())
            .collect()
    }

    pub fn list_ids(&self) -> Vec<String> {
        self.detectors.keys().cloned().collect()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DetectorRegistryBuilder {
    registry: DetectorRegistry,
}

impl DetectorRegistryBuilder {
    pub fn new() -> Self {
        Self {
            registry: DetectorRegistry::new(),
        }
    }

    pub fn with_detector<D: Detector + 'static>(mut self, detector: D) -> Self {
        self.registry.register(detector);
        self
    }

    pub fn build(self) -> DetectorRegistry {
        self.registry
    }
}

impl Default for DetectorRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
