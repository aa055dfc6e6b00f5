//! Expression trees as resolved by the host.
//!
//! A closed sum type rather than an open hierarchy: shape predicates in the
//! detectors are single `match` expressions, and a new variant is a compile
//! error at every match site instead of a silently unhandled runtime case.
//! `Display` renders the Solidity-like textual form that the substring
//! heuristics operate on.

use crate::variable::Variable;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    Call(Call),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    Assignment(Assignment),
    MemberAccess(MemberAccess),
    Identifier(Identifier),
    Literal(Literal),
    Tuple(Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryOperation {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryOperation {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub operator: AssignmentOperator,
    pub target: Box<Expression>,
    pub value: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAccess {
    pub base: Box<Expression>,
    pub member: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub variable: Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    pub value: LiteralValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralValue {
    Uint(u128),
    Bool(bool),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::Le => "<=",
            BinaryOperator::Ge => ">=",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, BinaryOperator::Add | BinaryOperator::Sub)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOperator {
    Not,
    Neg,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::Neg => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubAssign,
}

impl AssignmentOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubAssign => "-=",
        }
    }
}

impl Expression {
    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call(Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOperation(BinaryOperation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::UnaryOperation(UnaryOperation {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn assign(target: Expression, value: Expression) -> Self {
        Expression::Assignment(Assignment {
            operator: AssignmentOperator::Assign,
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    pub fn compound_assign(
        operator: AssignmentOperator,
        target: Expression,
        value: Expression,
    ) -> Self {
        Expression::Assignment(Assignment {
            operator,
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    pub fn member_access(base: Expression, member: &str) -> Self {
        Expression::MemberAccess(MemberAccess {
            base: Box::new(base),
            member: member.to_string(),
        })
    }

    pub fn identifier(variable: Variable) -> Self {
        Expression::Identifier(Identifier { variable })
    }

    pub fn uint(value: u128) -> Self {
        Expression::Literal(Literal {
            value: LiteralValue::Uint(value),
        })
    }

    /// The variable behind this expression, when it is a bare identifier.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Expression::Identifier(id) => Some(&id.variable),
            _ => None,
        }
    }

    pub fn as_uint_literal(&self) -> Option<u128> {
        match self {
            Expression::Literal(Literal {
                value: LiteralValue::Uint(n),
            }) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Call(call) => {
                write!(f, "{}(", call.callee)?;
                for (i, arg) in call.arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expression::BinaryOperation(op) => {
                write!(f, "{} {} {}", op.left, op.operator.symbol(), op.right)
            }
            Expression::UnaryOperation(op) => {
                write!(f, "{}{}", op.operator.symbol(), op.operand)
            }
            Expression::Assignment(assign) => write!(
                f,
                "{} {} {}",
                assign.target,
                assign.operator.symbol(),
                assign.value
            ),
            Expression::MemberAccess(access) => write!(f, "{}.{}", access.base, access.member),
            Expression::Identifier(id) => f.write_str(&id.variable.name),
            Expression::Literal(lit) => match &lit.value {
                LiteralValue::Uint(n) => write!(f, "{}", n),
                LiteralValue::Bool(b) => write!(f, "{}", b),
                LiteralValue::Str(s) => write!(f, "\"{}\"", s),
            },
            Expression::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
