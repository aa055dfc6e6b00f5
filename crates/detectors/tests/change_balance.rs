use anyhow::Result;
use kansa_detectors::{AnalysisContext, ChangeBalanceDetector, Detector, Finding};
use kansa_model::{BinaryOperator, Contract, ContractSet, Expression, Function, Node, Type, Variable};

fn balance_of() -> Variable {
    Variable::state(
        "balanceOf",
        Type::mapping(Type::elementary("address"), Type::elementary("uint256")),
    )
}

/// `token.transfer(to, amount)`
fn transfer_call() -> Expression {
    let token = Variable::state("token", Type::elementary("address"));
    let to = Variable::local("to", Type::elementary("address"));
    let amount = Variable::local("amount", Type::elementary("uint256"));
    Expression::call(
        Expression::member_access(Expression::identifier(token), "transfer"),
        vec![Expression::identifier(to), Expression::identifier(amount)],
    )
}

/// `balanceOf + amount`
fn balance_increment() -> Expression {
    let amount = Variable::local("amount", Type::elementary("uint256"));
    Expression::binary(
        BinaryOperator::Add,
        Expression::identifier(balance_of()),
        Expression::identifier(amount),
    )
}

fn detect(contract: Contract) -> Result<Vec<Finding>> {
    let snapshot = ContractSet::new(vec![contract]);
    ChangeBalanceDetector::new().detect(&AnalysisContext::new(&snapshot))
}

#[test]
fn owner_function_with_both_behaviors_is_reported() -> Result<()> {
    let contract = Contract::new("Pausable").with_function(
        Function::new("drain")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(balance_increment())),
    );

    let findings = detect(contract)?;
    assert_eq!(findings.len(), 1, "expected exactly one finding");

    let finding = &findings[0];
    assert_eq!(finding.detector_id, "erc20-change-balance");
    assert_eq!(finding.contract.as_deref(), Some("Pausable"));
    assert_eq!(finding.function.as_deref(), Some("drain"));
    Ok(())
}

#[test]
fn function_without_owner_modifier_is_excluded() -> Result<()> {
    let contract = Contract::new("Open").with_function(
        Function::new("drain")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(balance_increment())),
    );

    assert!(
        detect(contract)?.is_empty(),
        "unmodified functions must be excluded regardless of body"
    );
    Ok(())
}

#[test]
fn modifier_match_is_case_sensitive() -> Result<()> {
    let contract = Contract::new("Cased").with_function(
        Function::new("drain")
            .with_modifier("OnlyOwner")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(balance_increment())),
    );

    assert!(detect(contract)?.is_empty());
    Ok(())
}

#[test]
fn expected_mutators_are_excluded_even_when_both_behaviors_hold() -> Result<()> {
    for name in ["mint", "burn", "Transfer", "transferFrom"] {
        let contract = Contract::new("Token").with_function(
            Function::new(name)
                .with_modifier("onlyOwner")
                .with_node(Node::expression(transfer_call()))
                .with_node(Node::expression(balance_increment())),
        );

        assert!(
            detect(contract)?.is_empty(),
            "expected mutator '{}' must never be reported",
            name
        );
    }
    Ok(())
}

#[test]
fn transfer_call_alone_does_not_match() -> Result<()> {
    let contract = Contract::new("CallOnly").with_function(
        Function::new("sweep")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(transfer_call())),
    );

    assert!(detect(contract)?.is_empty());
    Ok(())
}

#[test]
fn balance_arithmetic_alone_does_not_match() -> Result<()> {
    let contract = Contract::new("MathOnly").with_function(
        Function::new("rebase")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(balance_increment())),
    );

    assert!(detect(contract)?.is_empty());
    Ok(())
}

#[test]
fn behaviors_may_live_in_unrelated_instructions() -> Result<()> {
    // Arithmetic before the call, with noise in between; no ordering or
    // adjacency is required between the two matched instructions.
    let paused = Variable::state("paused", Type::elementary("bool"));
    let contract = Contract::new("Spread").with_function(
        Function::new("rebalance")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(balance_increment()))
            .with_node(Node::expression(Expression::identifier(paused)))
            .with_node(Node::expression(transfer_call())),
    );

    assert_eq!(detect(contract)?.len(), 1);
    Ok(())
}

#[test]
fn subtraction_counts_as_balance_arithmetic() -> Result<()> {
    let amount = Variable::local("amount", Type::elementary("uint256"));
    let decrement = Expression::binary(
        BinaryOperator::Sub,
        Expression::identifier(balance_of()),
        Expression::identifier(amount),
    );
    let contract = Contract::new("Deduct").with_function(
        Function::new("confiscate")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(decrement)),
    );

    assert_eq!(detect(contract)?.len(), 1);
    Ok(())
}

#[test]
fn renamed_balance_mapping_is_missed_by_design() -> Result<()> {
    let balances = Variable::state(
        "balances",
        Type::mapping(Type::elementary("address"), Type::elementary("uint256")),
    );
    let amount = Variable::local("amount", Type::elementary("uint256"));
    let contract = Contract::new("Renamed").with_function(
        Function::new("drain")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(Expression::binary(
                BinaryOperator::Add,
                Expression::identifier(balances),
                Expression::identifier(amount),
            ))),
    );

    assert!(detect(contract)?.is_empty());
    Ok(())
}

#[test]
fn differently_typed_balance_mapping_is_missed_by_design() -> Result<()> {
    let narrow = Variable::state(
        "balanceOf",
        Type::mapping(Type::elementary("address"), Type::elementary("uint128")),
    );
    let amount = Variable::local("amount", Type::elementary("uint256"));
    let contract = Contract::new("Narrow").with_function(
        Function::new("drain")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(Expression::binary(
                BinaryOperator::Add,
                Expression::identifier(narrow),
                Expression::identifier(amount),
            ))),
    );

    assert!(detect(contract)?.is_empty());
    Ok(())
}

#[test]
fn local_variable_named_balance_of_does_not_count() -> Result<()> {
    let shadow = Variable::local(
        "balanceOf",
        Type::mapping(Type::elementary("address"), Type::elementary("uint256")),
    );
    let amount = Variable::local("amount", Type::elementary("uint256"));
    let contract = Contract::new("Shadowed").with_function(
        Function::new("drain")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(Expression::binary(
                BinaryOperator::Add,
                Expression::identifier(shadow),
                Expression::identifier(amount),
            ))),
    );

    assert!(detect(contract)?.is_empty());
    Ok(())
}

#[test]
fn rerun_over_unchanged_snapshot_is_idempotent() -> Result<()> {
    let contract = Contract::new("Stable").with_function(
        Function::new("drain")
            .with_modifier("onlyOwner")
            .with_node(Node::expression(transfer_call()))
            .with_node(Node::expression(balance_increment())),
    );
    let snapshot = ContractSet::new(vec![contract]);
    let detector = ChangeBalanceDetector::new();

    let first = detector.detect(&AnalysisContext::new(&snapshot))?;
    let second = detector.detect(&AnalysisContext::new(&snapshot))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn contract_without_functions_yields_nothing() -> Result<()> {
    assert!(detect(Contract::new("Empty"))?.is_empty());
    Ok(())
}

#[test]
fn empty_contract_set_yields_nothing() -> Result<()> {
    let snapshot = ContractSet::empty();
    let findings = ChangeBalanceDetector::new().detect(&AnalysisContext::new(&snapshot))?;
    assert!(findings.is_empty());
    Ok(())
}
