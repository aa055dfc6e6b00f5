//! Kansa Model - Host Analysis Snapshot
//!
//! The read-only object model an analysis host materializes before the Kansa
//! detectors run: contracts, functions, CFG nodes and their expression trees,
//! with every identifier already resolved to a concrete variable. Detectors
//! only query this model; building it (parsing, type resolution, CFG
//! construction) is the host's job.

pub mod contract;
pub mod expression;
pub mod function;
pub mod node;
pub mod snapshot;
pub mod types;
pub mod variable;

pub use contract::Contract;
pub use expression::{
    Assignment, AssignmentOperator, BinaryOperation, BinaryOperator, Call, Expression, Identifier,
    Literal, LiteralValue, MemberAccess, UnaryOperation, UnaryOperator,
};
pub use function::{Function, Modifier};
pub use node::{Node, NodeType};
pub use snapshot::{ContractSet, SnapshotError};
pub use types::Type;
pub use variable::{StorageClass, Variable};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
