use crate::function::Function;
use serde::{Deserialize, Serialize};

/// A contract descriptor: name, fungible-token classification, and its
/// functions in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub name: String,
    pub is_token: bool,
    pub functions: Vec<Function>,
}

impl Contract {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_token: false,
            functions: Vec::new(),
        }
    }

    /// A contract the host classified as fungible-token-like.
    pub fn token(name: &str) -> Self {
        Self {
            is_token: true,
            ..Self::new(name)
        }
    }

    pub fn with_function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    /// Exact-signature lookup, e.g. `transfer(address,uint256)`.
    pub fn function_by_signature(&self, signature: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.signature == signature)
    }
}
