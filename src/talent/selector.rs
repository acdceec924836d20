//! Grade-weighted talent drawing

use crate::catalogue::{Catalogue, GRADE_COUNT};
use crate::config::TalentConfig;
use crate::property::LifeContext;
use crate::talent::acquire::add_talent;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, warn};

/// Size of the distinct candidate pool
pub const TALENT_CANDIDATES: usize = 10;

/// Candidates acquired from the front of the pool
pub const TALENT_CHOICES: usize = 3;

/// Probability of each grade, indexed by grade
pub const GRADE_PROBABILITIES: [f64; GRADE_COUNT] = [0.001, 0.01, 0.1, 0.889];

/// Grade used when the roll outlasts every probability
pub const FALLBACK_GRADE: usize = 0;

/// Ceiling on draws while collecting distinct candidates
pub const MAX_CANDIDATE_DRAWS: usize = 100_000;

pub type CandidatePool<'a> = SmallVec<[&'a TalentConfig; TALENT_CANDIDATES]>;

/// Outcome of the start-of-life talent phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalentSelection {
    /// Distinct candidates in draw order
    pub candidates: Vec<i32>,
    /// Talents newly acquired in this phase
    pub chosen: Vec<i32>,
}

/// Map a uniform [0,1) roll onto a grade.
///
/// Subtracts the probabilities from grade 3 down to grade 0 and stops at the
/// first grade where the remainder reaches zero.
pub fn grade_for_roll(mut roll: f64) -> usize {
    for grade in (0..GRADE_COUNT).rev() {
        roll -= GRADE_PROBABILITIES[grade];
        if roll <= 0.0 {
            return grade;
        }
    }
    FALLBACK_GRADE
}

/// Talent used when a rolled grade has no talents
#[inline]
pub fn empty_grade_fallback(catalogue: &Catalogue) -> Option<&TalentConfig> {
    catalogue.first_talent()
}

/// Draw one talent: a grade roll, then an index roll inside that grade.
///
/// An empty grade consumes no index roll and falls back to the first talent.
pub fn pick_random_talent<'a>(
    catalogue: &'a Catalogue,
    rng: &mut impl Rng,
) -> Option<&'a TalentConfig> {
    let grade = grade_for_roll(rng.gen::<f64>());
    let len = catalogue.grade_len(grade);
    if len == 0 {
        return empty_grade_fallback(catalogue);
    }

    let index = rng.gen_range(0..len);
    catalogue.grade_talent(grade, index)
}

/// Collect up to `TALENT_CANDIDATES` distinct talents, redrawing duplicates
pub fn draw_candidates<'a>(catalogue: &'a Catalogue, rng: &mut impl Rng) -> CandidatePool<'a> {
    let target = TALENT_CANDIDATES.min(catalogue.talents().len());
    let mut pool = CandidatePool::new();
    let mut draws = 0;

    while pool.len() < target {
        if draws == MAX_CANDIDATE_DRAWS {
            warn!(
                collected = pool.len(),
                target, "candidate draw ceiling reached"
            );
            break;
        }
        draws += 1;

        let Some(talent) = pick_random_talent(catalogue, rng) else {
            break;
        };
        if !pool.iter().any(|c| c.id == talent.id) {
            pool.push(talent);
        }
    }

    pool
}

/// Run the start-of-life talent phase.
///
/// Draws the candidate pool first, then acquires the inherited talent (if
/// any) followed by the first `TALENT_CHOICES` candidates, each through
/// [`add_talent`].
pub fn select_talents(
    catalogue: &Catalogue,
    inherit_talent_id: i32,
    ctx: &mut LifeContext,
    rng: &mut impl Rng,
) -> TalentSelection {
    let pool = draw_candidates(catalogue, rng);
    let mut chosen = Vec::with_capacity(TALENT_CHOICES + 1);

    if inherit_talent_id >= 0 {
        if let Some(inherited) = catalogue.talent(inherit_talent_id) {
            if add_talent(inherited, ctx) {
                chosen.push(inherited.id);
            }
        }
    }

    for talent in pool.iter().take(TALENT_CHOICES) {
        if add_talent(talent, ctx) {
            chosen.push(talent.id);
        }
    }

    let candidates: Vec<i32> = pool.iter().map(|t| t.id).collect();
    debug!(?candidates, ?chosen, "talents selected");

    TalentSelection { candidates, chosen }
}
