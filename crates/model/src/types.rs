use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a variable, as resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Elementary(String),
    Mapping { key: Box<Type>, value: Box<Type> },
}

impl Type {
    pub fn elementary(name: &str) -> Self {
        Type::Elementary(name.to_string())
    }

    pub fn mapping(key: Type, value: Type) -> Self {
        Type::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Canonical textual form, e.g. `uint256` or `mapping(address => uint256)`.
    ///
    /// Heuristics compare this string directly, so a composite type is only
    /// recognized under exactly this rendering.
    pub fn canonical_name(&self) -> String {
        self.to_string()
    }

    pub fn is_elementary(&self, name: &str) -> bool {
        matches!(self, Type::Elementary(n) if n == name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Elementary(name) => f.write_str(name),
            Type::Mapping { key, value } => write!(f, "mapping({} => {})", key, value),
        }
    }
}
