//! Property tests for condition module
//!
//! Covers: comparison semantics, membership negation, ALL/ANY combination,
//! text round-trip of predicates.

use proptest::prelude::*;

use crate::condition::ast::{ConditionGroup, LedgerKind, Membership, Operator, Predicate};
use crate::condition::evaluator::{check_predicate, evaluate};
use crate::condition::parser::parse;
use crate::property::{Ledger, PropertyKey, PropertyState};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn property_key_strategy() -> impl Strategy<Value = PropertyKey> {
    prop_oneof![
        Just(PropertyKey::Chr),
        Just(PropertyKey::Int),
        Just(PropertyKey::Str),
        Just(PropertyKey::Mny),
        Just(PropertyKey::Spr),
        Just(PropertyKey::Age),
        Just(PropertyKey::Lif),
        Just(PropertyKey::Total),
        Just(PropertyKey::Tms),
    ]
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Greater),
        Just(Operator::Less),
        Just(Operator::GreaterEqual),
        Just(Operator::LessEqual),
        Just(Operator::Equal),
        Just(Operator::NotEqual),
    ]
}

fn compare_strategy() -> impl Strategy<Value = Predicate> {
    (property_key_strategy(), operator_strategy(), -100..=100i32).prop_map(
        |(property, operator, threshold)| Predicate::Compare {
            property,
            operator,
            threshold,
        },
    )
}

fn contains_strategy() -> impl Strategy<Value = Predicate> {
    (
        prop_oneof![Just(LedgerKind::Talent), Just(LedgerKind::Event)],
        prop_oneof![Just(Membership::IncludesAny), Just(Membership::ExcludesAll)],
        prop::collection::vec(1..=50i32, 0..=5),
    )
        .prop_map(|(ledger, membership, ids)| Predicate::Contains {
            ledger,
            membership,
            ids,
        })
}

fn predicate_strategy() -> impl Strategy<Value = Predicate> {
    prop_oneof![Just(Predicate::Always), compare_strategy(), contains_strategy()]
}

fn state_strategy() -> impl Strategy<Value = PropertyState> {
    (
        -10..=100i32,
        -10..=20i32,
        -10..=20i32,
        -10..=20i32,
        -10..=20i32,
        -10..=20i32,
        -3..=10i32,
    )
        .prop_map(|(age, chr, int, str_, mny, spr, lif)| PropertyState {
            age,
            chr,
            int,
            str_,
            mny,
            spr,
            lif,
            ..Default::default()
        })
}

fn ledger_strategy() -> impl Strategy<Value = Ledger> {
    prop::collection::vec(1..=50i32, 0..=10).prop_map(|ids| {
        let mut ledger = Ledger::new();
        for id in ids {
            ledger.insert(id);
        }
        ledger
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Printing a predicate and parsing it back yields the same predicate
    #[test]
    fn prop_text_round_trip(predicate in predicate_strategy()) {
        let text = predicate.to_string();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed, predicate);
    }

    /// `>` and `<=` are complements, as are `=` and `!=`
    #[test]
    fn prop_comparison_complements(
        state in state_strategy(),
        key in property_key_strategy(),
        threshold in -100..=100i32
    ) {
        let empty = Ledger::new();
        let pred = |operator| Predicate::Compare { property: key, operator, threshold };

        prop_assert_ne!(
            check_predicate(&pred(Operator::Greater), &state, &empty, &empty),
            check_predicate(&pred(Operator::LessEqual), &state, &empty, &empty)
        );
        prop_assert_ne!(
            check_predicate(&pred(Operator::Equal), &state, &empty, &empty),
            check_predicate(&pred(Operator::NotEqual), &state, &empty, &empty)
        );
    }

    /// Excludes-all is the negation of includes-any over the same ids
    #[test]
    fn prop_membership_negation(
        talents in ledger_strategy(),
        ids in prop::collection::vec(1..=50i32, 0..=5)
    ) {
        let state = PropertyState::default();
        let events = Ledger::new();
        let includes = Predicate::Contains {
            ledger: LedgerKind::Talent,
            membership: Membership::IncludesAny,
            ids: ids.clone(),
        };
        let excludes = Predicate::Contains {
            ledger: LedgerKind::Talent,
            membership: Membership::ExcludesAll,
            ids,
        };

        prop_assert_ne!(
            check_predicate(&includes, &state, &talents, &events),
            check_predicate(&excludes, &state, &talents, &events)
        );
    }

    /// A group equals `all(ALL) && (ANY empty || any(ANY))`
    #[test]
    fn prop_group_semantics(
        state in state_strategy(),
        talents in ledger_strategy(),
        events in ledger_strategy(),
        all in prop::collection::vec(predicate_strategy(), 0..=4),
        any in prop::collection::vec(predicate_strategy(), 0..=4)
    ) {
        let expected_all = all.iter().all(|p| check_predicate(p, &state, &talents, &events));
        let expected_any = any.is_empty()
            || any.iter().any(|p| check_predicate(p, &state, &talents, &events));
        let group = ConditionGroup { all, any };

        prop_assert_eq!(
            evaluate(&group, &state, &talents, &events),
            expected_all && expected_any
        );
    }
}
