use kansa_model::{Contract, ContractSet};

/// Read-only view of one analysis run's snapshot. Detectors query it and
/// nothing else; the borrow keeps the model immutable for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    snapshot: &'a ContractSet,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(snapshot: &'a ContractSet) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &'a ContractSet {
        self.snapshot
    }

    pub fn contracts(&self) -> &'a [Contract] {
        self.snapshot.contracts()
    }
}
