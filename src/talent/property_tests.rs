//! Property tests for talent module
//!
//! Covers: exclusivity blocking, inherited-talent exclusivity during the
//! candidate phase, determinism of the talent phase.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalogue::Catalogue;
use crate::config::TalentConfig;
use crate::property::LifeContext;
use crate::talent::{add_talent, inherit_talent, select_talents};

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

/// A and B exclude each other; fillers make the pool large enough to draw 10
fn exclusive_pair_catalogue(a: i32, b: i32, fillers: i32) -> Catalogue {
    let mut talents = vec![
        TalentConfig {
            exclude: vec![b],
            status: 2,
            ..TalentConfig::new(a, 3)
        },
        TalentConfig {
            exclude: vec![a],
            status: 2,
            ..TalentConfig::new(b, 3)
        },
    ];
    talents.extend((1..=fillers).map(|id| TalentConfig::new(1000 + id, 3)));
    Catalogue::build(talents, vec![], vec![]).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// A talent whose exclusive list hits the ledger changes nothing
    #[test]
    fn prop_exclusivity_blocks_acquisition(
        held in prop::collection::vec(1..=20i32, 1..=5),
        pick in 0usize..5,
        status in -5..=5i32
    ) {
        let mut ctx = LifeContext::new();
        for id in &held {
            ctx.talents.insert(*id);
        }
        let blocker = held[pick % held.len()];
        let talent = TalentConfig {
            exclude: vec![blocker],
            status,
            ..TalentConfig::new(500, 2)
        };
        let before_ids = ctx.talents.ids().to_vec();
        let before_total = ctx.state.total;

        prop_assert!(!add_talent(&talent, &mut ctx));
        prop_assert_eq!(ctx.talents.ids(), before_ids.as_slice());
        prop_assert_eq!(ctx.state.total, before_total);
    }

    /// With A inherited, B is never added during the candidate phase
    #[test]
    fn prop_inherited_excludes_partner(seed in any::<u64>(), fillers in 0..=12i32) {
        let catalogue = exclusive_pair_catalogue(1, 2, fillers);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut ctx = LifeContext::new();

        inherit_talent(1, &mut ctx);
        let selection = select_talents(&catalogue, 1, &mut ctx, &mut rng);

        prop_assert!(ctx.talents.contains(1));
        prop_assert!(!ctx.talents.contains(2));
        prop_assert!(!selection.chosen.contains(&2));
        // Already active through inheritance, so no status bonus for A either
        prop_assert!(!selection.chosen.contains(&1));
    }

    /// Same seed, same catalogue: same candidates and same ledger
    #[test]
    fn prop_talent_phase_deterministic(seed in any::<u64>()) {
        let catalogue = exclusive_pair_catalogue(1, 2, 20);

        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = LifeContext::new();
            let selection = select_talents(&catalogue, -1, &mut ctx, &mut rng);
            (selection, ctx.talents.ids().to_vec(), ctx.state.total)
        };

        prop_assert_eq!(run(seed), run(seed));
    }
}
