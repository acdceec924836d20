//! Condition evaluator
//!
//! One predicate language with three call sites: talent eligibility data,
//! event include/exclude filtering, and branch selection. Evaluation is pure
//! and total.

use crate::condition::ast::{ConditionGroup, LedgerKind, Membership, Operator, Predicate};
use crate::property::{Ledger, LifeContext, PropertyState};

/// Evaluate a group against an attribute vector and both ledgers.
///
/// ALL is checked first and stops at the first failure; ANY is checked only
/// when ALL passed and ANY is non-empty.
pub fn evaluate(
    group: &ConditionGroup,
    state: &PropertyState,
    talents: &Ledger,
    events: &Ledger,
) -> bool {
    if !group
        .all
        .iter()
        .all(|p| check_predicate(p, state, talents, events))
    {
        return false;
    }

    if group.any.is_empty() {
        return true;
    }

    group
        .any
        .iter()
        .any(|p| check_predicate(p, state, talents, events))
}

/// Evaluate an optional group against a life context. `None` passes.
#[inline]
pub fn check(group: Option<&ConditionGroup>, ctx: &LifeContext) -> bool {
    match group {
        Some(group) => evaluate(group, &ctx.state, &ctx.talents, &ctx.events),
        None => true,
    }
}

/// Evaluate one predicate
pub fn check_predicate(
    predicate: &Predicate,
    state: &PropertyState,
    talents: &Ledger,
    events: &Ledger,
) -> bool {
    match predicate {
        Predicate::Always => true,
        Predicate::Compare {
            property,
            operator,
            threshold,
        } => {
            let value = state.get(*property);
            match operator {
                Operator::Greater => value > *threshold,
                Operator::Less => value < *threshold,
                Operator::GreaterEqual => value >= *threshold,
                Operator::LessEqual => value <= *threshold,
                Operator::Equal => value == *threshold,
                Operator::NotEqual => value != *threshold,
            }
        }
        Predicate::Contains {
            ledger,
            membership,
            ids,
        } => {
            let ledger = match ledger {
                LedgerKind::Talent => talents,
                LedgerKind::Event => events,
            };
            let found = ledger.contains_any(ids);
            match membership {
                Membership::IncludesAny => found,
                Membership::ExcludesAll => !found,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::parser::parse;

    fn group_all(items: &[&str]) -> ConditionGroup {
        ConditionGroup::all(items.iter().map(|s| parse(s).unwrap()).collect())
    }

    fn group_any(items: &[&str]) -> ConditionGroup {
        ConditionGroup::any(items.iter().map(|s| parse(s).unwrap()).collect())
    }

    #[test]
    fn test_simple_comparison() {
        let mut ctx = LifeContext::new();
        ctx.state.chr = 10;

        assert!(check(Some(&group_all(&["CHR>5"])), &ctx));
        assert!(!check(Some(&group_all(&["CHR<5"])), &ctx));
    }

    #[test]
    fn test_all_requires_every_predicate() {
        let mut ctx = LifeContext::new();
        ctx.state.chr = 10;
        ctx.state.int = 5;

        assert!(check(Some(&group_all(&["CHR>5", "INT>=5"])), &ctx));
        assert!(!check(Some(&group_all(&["CHR>5", "INT>5"])), &ctx));
    }

    #[test]
    fn test_any_requires_one_predicate() {
        let mut ctx = LifeContext::new();
        ctx.state.chr = 3;
        ctx.state.int = 10;

        assert!(check(Some(&group_any(&["CHR>5", "INT>5"])), &ctx));
        assert!(!check(Some(&group_any(&["CHR>5", "INT>15"])), &ctx));
    }

    #[test]
    fn test_all_gates_any() {
        let mut ctx = LifeContext::new();
        ctx.state.chr = 3;

        let group = ConditionGroup {
            all: vec![parse("CHR>5").unwrap()],
            any: vec![parse("TRUE").unwrap()],
        };
        assert!(!check(Some(&group), &ctx));
    }

    #[test]
    fn test_empty_and_missing_groups_pass() {
        let ctx = LifeContext::new();
        assert!(check(None, &ctx));
        assert!(check(Some(&ConditionGroup::default()), &ctx));
    }

    #[test]
    fn test_ledger_membership() {
        let mut ctx = LifeContext::new();
        ctx.talents.insert(1);
        ctx.events.insert(100);

        assert!(check(Some(&group_all(&["TLT?[1,4,5]"])), &ctx));
        assert!(!check(Some(&group_all(&["TLT?[4,5,6]"])), &ctx));
        assert!(!check(Some(&group_all(&["TLT![1,4]"])), &ctx));
        assert!(check(Some(&group_all(&["TLT![4,5]"])), &ctx));

        // Ledgers are not interchangeable
        assert!(!check(Some(&group_all(&["EVT?[1]"])), &ctx));
        assert!(check(Some(&group_all(&["EVT?[100]"])), &ctx));
    }

    #[test]
    fn test_empty_id_list() {
        let mut ctx = LifeContext::new();
        ctx.talents.insert(1);

        assert!(!check(Some(&group_all(&["TLT?[]"])), &ctx));
        assert!(check(Some(&group_all(&["TLT![]"])), &ctx));
    }

    #[test]
    fn test_unknown_property_reads_zero() {
        let ctx = LifeContext::new();
        assert!(check(Some(&group_all(&["HCHR=0"])), &ctx));
        assert!(!check(Some(&group_all(&["HCHR>0"])), &ctx));
    }

    #[test]
    fn test_generation_and_total_readable() {
        let mut ctx = LifeContext::new();
        ctx.state.tms = 2;
        assert!(check(Some(&group_all(&["TMS=2", "TOTAL>=20"])), &ctx));
    }
}
