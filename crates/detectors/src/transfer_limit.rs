//! ERC20 transfer-limit detector.
//!
//! For token contracts, looks at the two canonical transfer entry points and
//! reports a numeric ceiling when the first guard-shaped expression in the
//! body pairs `msg.value` against an integer literal.

use crate::core::{AnalysisContext, Confidence, Detector, Finding, Severity};
use anyhow::Result;
use kansa_model::{BinaryOperation, BinaryOperator, Contract, Expression, Function, NodeType};

const TRANSFER_SIGNATURES: [&str; 2] = [
    "transfer(address,uint256)",
    "transferFrom(address,address,uint256)",
];

const MSG_VALUE: &str = "msg.value";
const LIMIT_VARIABLE_TYPE: &str = "uint256";

#[derive(Debug, Default)]
pub struct TransferLimitDetector;

impl TransferLimitDetector {
    pub fn new() -> Self {
        Self
    }

    /// The canonical transfer functions present on this contract. A missing
    /// signature is skipped, not an error.
    fn transfer_entry_points(contract: &Contract) -> impl Iterator<Item = &Function> {
        TRANSFER_SIGNATURES
            .iter()
            .filter_map(|signature| contract.function_by_signature(signature))
    }

    /// Scan the node sequence for the first guard-shaped expression node;
    /// extraction runs against that match only. First-match-wins: a guard
    /// without an extractable limit still ends the scan.
    fn transfer_limit(function: &Function) -> Option<u128> {
        for node in &function.nodes {
            if node.node_type != NodeType::Expression {
                continue;
            }
            let Some(expression) = &node.expression else {
                continue;
            };
            if let Some((left, right)) = Self::as_limit_guard(expression) {
                return Self::extract_limit(left).or_else(|| Self::extract_limit(right));
            }
        }
        None
    }

    /// Top-level `&&` of two ceiling comparisons.
    fn as_limit_guard(expression: &Expression) -> Option<(&BinaryOperation, &BinaryOperation)> {
        let Expression::BinaryOperation(op) = expression else {
            return None;
        };
        if op.operator != BinaryOperator::And {
            return None;
        }
        match (
            Self::as_limit_comparison(&op.left),
            Self::as_limit_comparison(&op.right),
        ) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// A strict `<` whose operands, in either order, are drawn from: a
    /// uint256 state variable, the `msg.value` builtin, or an integer
    /// literal. Two bare literals compare nothing and are rejected.
    fn as_limit_comparison(expression: &Expression) -> Option<&BinaryOperation> {
        let Expression::BinaryOperation(op) = expression else {
            return None;
        };
        if op.operator != BinaryOperator::Lt {
            return None;
        }
        if !Self::is_guard_operand(&op.left) || !Self::is_guard_operand(&op.right) {
            return None;
        }
        if op.left.as_uint_literal().is_some() && op.right.as_uint_literal().is_some() {
            return None;
        }
        Some(op)
    }

    fn is_guard_operand(expression: &Expression) -> bool {
        Self::is_limit_variable(expression) || expression.as_uint_literal().is_some()
    }

    fn is_limit_variable(expression: &Expression) -> bool {
        expression.as_variable().is_some_and(|v| {
            v.name == MSG_VALUE || (v.is_state() && v.ty.canonical_name() == LIMIT_VARIABLE_TYPE)
        })
    }

    /// The literal opposing a textual `msg.value` in this comparison, if any.
    fn extract_limit(comparison: &BinaryOperation) -> Option<u128> {
        if Self::is_msg_value(&comparison.left) {
            return comparison.right.as_uint_literal();
        }
        if Self::is_msg_value(&comparison.right) {
            return comparison.left.as_uint_literal();
        }
        None
    }

    fn is_msg_value(expression: &Expression) -> bool {
        expression.as_variable().is_some_and(|v| v.name == MSG_VALUE)
    }
}

impl Detector for TransferLimitDetector {
    fn id(&self) -> &'static str {
        "erc20-transfer-limit"
    }

    fn name(&self) -> &'static str {
        "ERC20 Transfer Limit Detector"
    }

    fn description(&self) -> &'static str {
        "Detect ERC20 contracts with transfer limits."
    }

    fn recommendation(&self) -> &'static str {
        "Ensure the token transfer limits are set appropriately to avoid potential issues."
    }

    fn severity(&self) -> Severity {
        Severity::Informational
    }

    fn confidence(&self) -> Confidence {
        Confidence::High
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for contract in context.contracts().iter().filter(|c| c.is_token) {
            for function in Self::transfer_entry_points(contract) {
                if let Some(limit) = Self::transfer_limit(function) {
                    findings.push(
                        Finding::new(
                            self.id(),
                            self.severity(),
                            self.confidence(),
                            format!("Transfer limit in '{}'", contract.name),
                            format!(
                                "Function '{}' in contract '{}' caps transfers at {}",
                                function.name, contract.name, limit
                            ),
                        )
                        .with_contract(&contract.name)
                        .with_function(&function.name)
                        .with_transfer_limit(limit),
                    );
                }
            }
        }

        Ok(findings)
    }
}
