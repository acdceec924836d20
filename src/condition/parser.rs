//! Predicate text parser

use crate::condition::ast::{LedgerKind, Membership, Operator, Predicate};
use crate::error::{LifeSimError, Result};
use crate::property::PropertyKey;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// `<NAME><op><value>`; two-character operators are tried first
static PREDICATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_]+)\s*(>=|<=|!=|>|<|=|\?|!)\s*(.+)$")
        .expect("predicate pattern is valid")
});

/// Parse a single predicate like `CHR>5`, `TLT?[1,2]` or `TRUE`
pub fn parse(text: &str) -> Result<Predicate> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LifeSimError::InvalidCondition(
            "Empty condition".to_string(),
        ));
    }
    if text.eq_ignore_ascii_case("TRUE") {
        return Ok(Predicate::Always);
    }

    let caps = PREDICATE_RE.captures(text).ok_or_else(|| {
        LifeSimError::InvalidCondition(format!("No operator found in: {}", text))
    })?;
    let name = caps[1].to_ascii_uppercase();
    let op = &caps[2];
    let value = caps[3].trim();

    let ledger = match name.as_str() {
        "TLT" => Some(LedgerKind::Talent),
        "EVT" => Some(LedgerKind::Event),
        _ => None,
    };

    match ledger {
        Some(ledger) => parse_membership(ledger, op, value, text),
        None => parse_compare(PropertyKey::from_name(&name), op, value, text),
    }
}

fn parse_compare(property: PropertyKey, op: &str, value: &str, text: &str) -> Result<Predicate> {
    let operator = match op {
        ">" => Operator::Greater,
        "<" => Operator::Less,
        ">=" => Operator::GreaterEqual,
        "<=" => Operator::LessEqual,
        "=" => Operator::Equal,
        "!=" => Operator::NotEqual,
        _ => {
            return Err(LifeSimError::InvalidCondition(format!(
                "Membership operator on attribute: {}",
                text
            )))
        }
    };
    let threshold = value.parse::<i32>().map_err(|_| {
        LifeSimError::InvalidCondition(format!("Invalid threshold in: {}", text))
    })?;

    Ok(Predicate::Compare {
        property,
        operator,
        threshold,
    })
}

fn parse_membership(ledger: LedgerKind, op: &str, value: &str, text: &str) -> Result<Predicate> {
    // `TLT=1001` reads as "has 1001", `TLT!=1001` as "does not have 1001"
    let membership = match op {
        "?" | "=" => Membership::IncludesAny,
        "!" | "!=" => Membership::ExcludesAll,
        _ => {
            return Err(LifeSimError::InvalidCondition(format!(
                "Comparison operator on ledger: {}",
                text
            )))
        }
    };

    Ok(Predicate::Contains {
        ledger,
        membership,
        ids: parse_ids(value, text)?,
    })
}

fn parse_ids(value: &str, text: &str) -> Result<Vec<i32>> {
    let invalid = || LifeSimError::InvalidCondition(format!("Invalid id list in: {}", text));

    let inner = match value.strip_prefix('[') {
        Some(rest) => rest.strip_suffix(']').ok_or_else(invalid)?,
        None => value,
    };
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|s| s.trim().parse::<i32>().map_err(|_| invalid()))
        .collect()
}

impl FromStr for Predicate {
    type Err = LifeSimError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<String> for Predicate {
    type Error = LifeSimError;

    fn try_from(value: String) -> Result<Self> {
        parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_condition() {
        let predicate = parse("CHR>5").unwrap();
        assert_eq!(
            predicate,
            Predicate::Compare {
                property: PropertyKey::Chr,
                operator: Operator::Greater,
                threshold: 5,
            }
        );
    }

    #[test]
    fn test_parse_all_operators() {
        let operators = [
            ("CHR>5", Operator::Greater),
            ("CHR<5", Operator::Less),
            ("CHR>=5", Operator::GreaterEqual),
            ("CHR<=5", Operator::LessEqual),
            ("CHR=5", Operator::Equal),
            ("CHR!=5", Operator::NotEqual),
        ];

        for (text, expected) in operators {
            match parse(text).unwrap() {
                Predicate::Compare { operator, .. } => {
                    assert_eq!(operator, expected, "Failed for: {}", text)
                }
                other => panic!("Expected compare for {}: {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_parse_membership() {
        assert_eq!(
            parse("TLT?[1,2,3]").unwrap(),
            Predicate::Contains {
                ledger: LedgerKind::Talent,
                membership: Membership::IncludesAny,
                ids: vec![1, 2, 3],
            }
        );
        assert_eq!(
            parse("EVT![10001, 10002]").unwrap(),
            Predicate::Contains {
                ledger: LedgerKind::Event,
                membership: Membership::ExcludesAll,
                ids: vec![10001, 10002],
            }
        );
    }

    #[test]
    fn test_parse_ledger_equality_shorthand() {
        assert_eq!(
            parse("TLT=1001").unwrap(),
            Predicate::Contains {
                ledger: LedgerKind::Talent,
                membership: Membership::IncludesAny,
                ids: vec![1001],
            }
        );
        assert_eq!(
            parse("EVT!=7").unwrap(),
            Predicate::Contains {
                ledger: LedgerKind::Event,
                membership: Membership::ExcludesAll,
                ids: vec![7],
            }
        );
    }

    #[test]
    fn test_parse_unknown_property_and_always() {
        assert_eq!(
            parse("FOO>=1").unwrap(),
            Predicate::Compare {
                property: PropertyKey::Unknown,
                operator: Operator::GreaterEqual,
                threshold: 1,
            }
        );
        assert_eq!(parse("true").unwrap(), Predicate::Always);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "CHR", "CHR>x", "CHR?[1]", "TLT>3", "TLT?[1,x]", "TLT?[1"] {
            assert!(
                matches!(parse(bad), Err(LifeSimError::InvalidCondition(_))),
                "expected error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["CHR>=5", "LIF<1", "TLT?[1,2]", "EVT![3]", "TRUE", "TMS!=2"] {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
    }
}
