//! Talent acquisition rules

use crate::catalogue::Catalogue;
use crate::config::TalentConfig;
use crate::property::LifeContext;
use tracing::trace;

/// Acquire a talent through the normal path.
///
/// Skipped when the talent is already active or any of its exclusive
/// talents is. The talent's own `condition` is not consulted. Returns true
/// when the talent was added and its status bonus credited to `total`.
pub fn add_talent(talent: &TalentConfig, ctx: &mut LifeContext) -> bool {
    if ctx.talents.contains(talent.id) || ctx.talents.contains_any(&talent.exclude) {
        trace!(talent = talent.id, "talent skipped");
        return false;
    }

    ctx.talents.insert(talent.id);
    ctx.state.total = ctx.state.total.saturating_add(talent.status);
    true
}

/// Seed the ledger with a talent carried over from a previous life.
///
/// Inserts the raw id without exclusivity checks or status bonus.
pub fn inherit_talent(talent_id: i32, ctx: &mut LifeContext) {
    if talent_id >= 0 {
        ctx.talents.insert(talent_id);
    }
}

/// Grant age-gated talents in listed order. Unknown ids are skipped.
pub fn grant_talents(talent_ids: &[i32], catalogue: &Catalogue, ctx: &mut LifeContext) {
    for id in talent_ids {
        if let Some(talent) = catalogue.talent(*id) {
            add_talent(talent, ctx);
        }
    }
}
