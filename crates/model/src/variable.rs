use crate::types::Type;
use serde::{Deserialize, Serialize};

/// Storage class of a resolved variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageClass {
    /// Contract storage variable.
    State,
    /// Function-local variable or parameter.
    Local,
    /// Environment value supplied by the execution context, e.g. `msg.value`.
    Builtin,
}

/// A variable an identifier resolves to. The host guarantees every identifier
/// in a snapshot points at one of these, fully typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
    pub storage: StorageClass,
}

impl Variable {
    pub fn new(name: &str, ty: Type, storage: StorageClass) -> Self {
        Self {
            name: name.to_string(),
            ty,
            storage,
        }
    }

    pub fn state(name: &str, ty: Type) -> Self {
        Self::new(name, ty, StorageClass::State)
    }

    pub fn local(name: &str, ty: Type) -> Self {
        Self::new(name, ty, StorageClass::Local)
    }

    pub fn builtin(name: &str, ty: Type) -> Self {
        Self::new(name, ty, StorageClass::Builtin)
    }

    /// The `msg.value` environment variable.
    pub fn msg_value() -> Self {
        Self::builtin("msg.value", Type::elementary("uint256"))
    }

    pub fn is_state(&self) -> bool {
        self.storage == StorageClass::State
    }
}
