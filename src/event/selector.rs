//! Event selection logic

use crate::catalogue::Catalogue;
use crate::condition::check;
use crate::config::EventConfig;
use crate::property::LifeContext;
use rand::Rng;
use smallvec::SmallVec;

/// Whether an event may be drawn from an age pool right now.
///
/// `no_random` events skip the include check but still honour exclude.
#[inline]
pub fn is_selectable(event: &EventConfig, ctx: &LifeContext) -> bool {
    if !event.no_random && !check(event.include.as_ref(), ctx) {
        return false;
    }
    match event.exclude.as_ref() {
        Some(exclude) => !check(Some(exclude), ctx),
        None => true,
    }
}

/// Event used when the weighted walk does not land anywhere
#[inline]
pub fn unmatched_roll_fallback<'a>(
    event_pool: &[(i32, f64)],
    catalogue: &'a Catalogue,
) -> Option<&'a EventConfig> {
    event_pool
        .first()
        .and_then(|(event_id, _)| catalogue.event(*event_id))
}

/// Select an event from an age pool based on conditions and weights.
///
/// Unknown ids and filtered events are dropped, negative weights count as
/// zero. Returns `None` without drawing when nothing carries weight;
/// otherwise exactly one uniform draw is consumed.
pub fn choose_event<'a>(
    event_pool: &[(i32, f64)],
    catalogue: &'a Catalogue,
    ctx: &LifeContext,
    rng: &mut impl Rng,
) -> Option<&'a EventConfig> {
    let mut available: SmallVec<[(&EventConfig, f64); 16]> = SmallVec::new();
    let mut total_weight: f64 = 0.0;

    for (event_id, weight) in event_pool {
        let Some(event) = catalogue.event(*event_id) else {
            continue;
        };
        if !is_selectable(event, ctx) {
            continue;
        }

        let weight = weight.max(0.0);
        available.push((event, weight));
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return None;
    }

    let mut random_value = rng.gen::<f64>() * total_weight;

    for (event, weight) in &available {
        random_value -= weight;
        if random_value <= 0.0 {
            return Some(*event);
        }
    }

    unmatched_roll_fallback(event_pool, catalogue)
}
