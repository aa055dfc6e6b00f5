//! ERC20 change-balance detector.
//!
//! Flags owner-restricted functions that both make a transfer-style call and
//! adjust the `balanceOf` mapping, outside the function names where that is
//! expected. Purely heuristic: the modifier is matched by exact name and the
//! mapping by its stringified type, so aliased modifiers or renamed mappings
//! are out of reach.

use crate::core::{AnalysisContext, Confidence, Detector, Finding, Severity};
use anyhow::Result;
use kansa_model::{Contract, Expression, Function};

/// Functions expected to move balances; never reported.
const EXPECTED_MUTATORS: [&str; 4] = ["mint", "burn", "Transfer", "transferFrom"];

const OWNER_MODIFIER: &str = "onlyOwner";
const BALANCE_VARIABLE: &str = "balanceOf";
const BALANCE_MAPPING_TYPE: &str = "mapping(address => uint256)";

#[derive(Debug, Default)]
pub struct ChangeBalanceDetector;

impl ChangeBalanceDetector {
    pub fn new() -> Self {
        Self
    }

    /// Owner-restricted functions, off the expected-mutator list, whose body
    /// satisfies both scan predicates. The two scans are independent: the
    /// matched instructions need not be related or ordered.
    fn change_balance_functions<'a>(&self, contract: &'a Contract) -> Vec<&'a Function> {
        contract
            .functions
            .iter()
            .filter(|f| !EXPECTED_MUTATORS.contains(&f.name.as_str()))
            .filter(|f| f.has_modifier(OWNER_MODIFIER))
            .filter(|f| Self::has_transfer_call(f) && Self::has_balance_arithmetic(f))
            .collect()
    }

    fn has_transfer_call(function: &Function) -> bool {
        function.expressions().any(Self::is_transfer_call)
    }

    fn is_transfer_call(expression: &Expression) -> bool {
        match expression {
            Expression::Call(call) => call.callee.to_string().contains("transfer"),
            _ => false,
        }
    }

    fn has_balance_arithmetic(function: &Function) -> bool {
        function.expressions().any(Self::is_balance_arithmetic)
    }

    fn is_balance_arithmetic(expression: &Expression) -> bool {
        match expression {
            Expression::BinaryOperation(op) if op.operator.is_additive() => {
                Self::is_balance_variable(&op.left) || Self::is_balance_variable(&op.right)
            }
            _ => false,
        }
    }

    /// State variable named `balanceOf` of stringified type
    /// `mapping(address => uint256)`. Raw string comparison by design.
    fn is_balance_variable(expression: &Expression) -> bool {
        expression.as_variable().is_some_and(|v| {
            v.is_state()
                && v.name == BALANCE_VARIABLE
                && v.ty.canonical_name() == BALANCE_MAPPING_TYPE
        })
    }
}

impl Detector for ChangeBalanceDetector {
    fn id(&self) -> &'static str {
        "erc20-change-balance"
    }

    fn name(&self) -> &'static str {
        "ERC20 Change Balance Functionality"
    }

    fn description(&self) -> &'static str {
        "Detect ERC20 change balance functionality."
    }

    fn recommendation(&self) -> &'static str {
        "Make sure users are clear about how and when functionality can be paused."
    }

    fn severity(&self) -> Severity {
        Severity::Informational
    }

    fn confidence(&self) -> Confidence {
        Confidence::High
    }

    fn detect(&self, context: &AnalysisContext<'_>) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for contract in context.contracts() {
            for function in self.change_balance_functions(contract) {
                findings.push(
                    Finding::new(
                        self.id(),
                        self.severity(),
                        self.confidence(),
                        format!("Owner-restricted balance change in '{}'", function.name),
                        format!(
                            "Function '{}' in contract '{}' is restricted to the owner yet both \
                             performs a transfer-style call and adjusts the '{}' mapping",
                            function.name, contract.name, BALANCE_VARIABLE
                        ),
                    )
                    .with_contract(&contract.name)
                    .with_function(&function.name),
                );
            }
        }

        Ok(findings)
    }
}
