//! Event execution and branch following

use crate::catalogue::Catalogue;
use crate::condition::check;
use crate::config::EventConfig;
use crate::property::LifeContext;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{trace, warn};

/// Longest branch chain followed from one drawn event
pub const MAX_BRANCH_DEPTH: usize = 256;

/// Ids run for one drawn event, in order
pub type EventChain = SmallVec<[i32; 4]>;

/// Run an event and follow its branches.
///
/// For each event in the chain: mark it triggered, apply its effect, log its
/// text, then follow the first branch whose condition holds. Only when no
/// branch fires is the trailing `post_event` text logged. A branch whose
/// target is unknown still counts as fired and ends the chain.
///
/// The chain also stops, with a warning, on revisiting an event or exceeding
/// [`MAX_BRANCH_DEPTH`]; validated catalogues never hit either.
pub fn run_event(
    event: &EventConfig,
    catalogue: &Catalogue,
    ctx: &mut LifeContext,
    rng: &mut impl Rng,
) -> EventChain {
    let mut chain = EventChain::new();
    let mut current = event;

    loop {
        ctx.events.insert(current.id);
        if let Some(ref effect) = current.effect {
            ctx.state.apply(effect, rng);
        }
        ctx.log.append(&current.event);
        chain.push(current.id);

        let fired = current
            .branch
            .iter()
            .find(|branch| check(branch.condition.as_ref(), ctx));

        let Some(branch) = fired else {
            if let Some(ref post) = current.post_event {
                ctx.log.append(post);
            }
            break;
        };

        let Some(next) = catalogue.event(branch.event_id) else {
            trace!(
                event = current.id,
                target = branch.event_id,
                "branch target missing"
            );
            break;
        };
        if chain.contains(&next.id) {
            warn!(?chain, target = next.id, "branch revisits an event, chain stopped");
            break;
        }
        if chain.len() >= MAX_BRANCH_DEPTH {
            warn!(depth = chain.len(), "branch chain too deep, stopped");
            break;
        }
        current = next;
    }

    chain
}
