//! Predicate and group types for condition expressions

use crate::property::PropertyKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Greater than (>)
    Greater,
    /// Less than (<)
    Less,
    /// Greater than or equal (>=)
    GreaterEqual,
    /// Less than or equal (<=)
    LessEqual,
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Greater => ">",
            Operator::Less => "<",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
        }
    }
}

/// Membership test against a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Includes any (?)
    IncludesAny,
    /// Excludes all (!)
    ExcludesAll,
}

/// Which ledger a membership predicate reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerKind {
    /// Active talents (TLT)
    Talent,
    /// Triggered events (EVT)
    Event,
}

impl LedgerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerKind::Talent => "TLT",
            LedgerKind::Event => "EVT",
        }
    }
}

/// Single predicate.
///
/// Serialized as compact text, e.g. `"CHR>=5"`, `"TLT?[1001,1002]"`,
/// `"EVT![10001]"` or `"TRUE"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Predicate {
    Always,
    Compare {
        property: PropertyKey,
        operator: Operator,
        threshold: i32,
    },
    Contains {
        ledger: LedgerKind,
        membership: Membership,
        ids: Vec<i32>,
    },
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Always => f.write_str("TRUE"),
            Predicate::Compare {
                property,
                operator,
                threshold,
            } => write!(f, "{}{}{}", property.as_str(), operator.as_str(), threshold),
            Predicate::Contains {
                ledger,
                membership,
                ids,
            } => {
                let op = match membership {
                    Membership::IncludesAny => '?',
                    Membership::ExcludesAll => '!',
                };
                let list = ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{}{}[{}]", ledger.as_str(), op, list)
            }
        }
    }
}

impl From<Predicate> for String {
    fn from(predicate: Predicate) -> String {
        predicate.to_string()
    }
}

/// ALL list plus ANY list. Empty groups pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionGroup {
    #[serde(default)]
    pub all: Vec<Predicate>,
    /// Checked only when non-empty
    #[serde(default)]
    pub any: Vec<Predicate>,
}

impl ConditionGroup {
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Self {
            all: predicates,
            any: Vec::new(),
        }
    }

    pub fn any(predicates: Vec<Predicate>) -> Self {
        Self {
            all: Vec::new(),
            any: predicates,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.any.is_empty()
    }
}
