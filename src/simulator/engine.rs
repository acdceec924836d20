//! Main simulation engine

use crate::catalogue::Catalogue;
use crate::config::{AgeConfig, EventConfig, LifeConfig, TalentConfig};
use crate::error::{LifeSimError, Result};
use crate::event::{choose_event, run_event};
use crate::property::LifeContext;
use crate::random::{resolve_seed, seeded_rng, LifeRng};
use crate::simulator::LifeOutcome;
use crate::talent::{grant_talents, inherit_talent, select_talents, TalentSelection};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

/// Largest value a single sampled attribute can receive
pub const ATTRIBUTE_CAP: i32 = 10;

/// Attributes sampled before money takes the remainder
pub const SAMPLED_ATTRIBUTES: usize = 3;

/// Life loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifePhase {
    /// No catalogue yet
    Uninitialized,
    /// Catalogue ready, no life started
    Initialized,
    Running,
    Complete,
}

/// Split the starting budget over CHR, INT, STR and MNY.
///
/// CHR, INT and STR each draw from `[0, min(10, remaining)]` in that order
/// (no draw once the budget is spent); MNY takes what is left. The four
/// values always sum to `max(total, 0)`.
pub fn allocate_initial_properties(total: i32, rng: &mut impl Rng) -> [i32; 4] {
    let mut remaining = total.max(0);
    let mut values = [0; 4];

    for slot in values.iter_mut().take(SAMPLED_ATTRIBUTES) {
        let value = if remaining > 0 {
            rng.gen_range(0..=ATTRIBUTE_CAP.min(remaining))
        } else {
            0
        };
        *slot = value;
        remaining = (remaining - value).max(0);
    }

    values[SAMPLED_ATTRIBUTES] = remaining;
    values
}

/// Drives lives over a shared catalogue.
///
/// The random source is created on the first life and reused by the lives
/// that follow, so a seed fixes the whole sequence of lives.
#[derive(Debug, Clone)]
pub struct LifeSimulator {
    catalogue: Option<Arc<Catalogue>>,
    config: LifeConfig,
    rng: Option<LifeRng>,
    seed: u64,
    lives: u32,
    phase: LifePhase,
    ctx: LifeContext,
    years: u32,
}

impl Default for LifeSimulator {
    fn default() -> Self {
        Self {
            catalogue: None,
            config: LifeConfig::default(),
            rng: None,
            seed: 0,
            lives: 0,
            phase: LifePhase::Uninitialized,
            ctx: LifeContext::new(),
            years: 0,
        }
    }
}

impl LifeSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalogue(catalogue: Arc<Catalogue>, config: LifeConfig) -> Self {
        let mut simulator = Self {
            config,
            ..Self::default()
        };
        simulator.set_catalogue(catalogue);
        simulator
    }

    /// Validate and install a catalogue
    pub fn build_catalogue(
        &mut self,
        talents: Vec<TalentConfig>,
        ages: Vec<AgeConfig>,
        events: Vec<EventConfig>,
    ) -> Result<()> {
        let catalogue = Catalogue::build(talents, ages, events)?;
        self.set_catalogue(Arc::new(catalogue));
        Ok(())
    }

    pub fn set_catalogue(&mut self, catalogue: Arc<Catalogue>) {
        self.catalogue = Some(catalogue);
        self.phase = LifePhase::Initialized;
    }

    /// Replace the run configuration. A different seed restarts the random stream.
    pub fn set_config(&mut self, config: LifeConfig) {
        if config.seed != self.config.seed {
            self.rng = None;
        }
        self.config = config;
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn phase(&self) -> LifePhase {
        self.phase
    }

    pub fn context(&self) -> &LifeContext {
        &self.ctx
    }

    pub fn catalogue(&self) -> Option<&Arc<Catalogue>> {
        self.catalogue.as_ref()
    }

    /// Years advanced in the current life
    pub fn years(&self) -> u32 {
        self.years
    }

    fn ensure_random(&mut self) {
        if self.rng.is_none() {
            self.seed = resolve_seed(self.config.seed);
            self.lives = 0;
            self.rng = Some(seeded_rng(self.seed));
        }
    }

    /// Reset the context and run the start-of-life phase: inheritance,
    /// attribute allocation and talent selection. Leaves the life running
    /// with no year advanced.
    pub fn start_life(&mut self) -> Result<TalentSelection> {
        let catalogue = self.catalogue.clone().ok_or(LifeSimError::NotInitialized)?;
        self.ensure_random();

        self.ctx.reset();
        self.years = 0;
        self.lives += 1;

        let inherit = self.config.inherit_talent_id;
        if inherit > 0 {
            self.ctx.state.tms += 1;
        }
        inherit_talent(inherit, &mut self.ctx);

        let Some(rng) = self.rng.as_mut() else {
            return Err(LifeSimError::NotInitialized);
        };
        let [chr, int, str_, mny] = allocate_initial_properties(self.ctx.state.total, rng);
        self.ctx.state.chr = chr;
        self.ctx.state.int = int;
        self.ctx.state.str_ = str_;
        self.ctx.state.mny = mny;

        let selection = select_talents(&catalogue, inherit, &mut self.ctx, rng);
        self.phase = LifePhase::Running;

        debug!(
            seed = self.seed,
            life = self.lives,
            inherit,
            talents = ?self.ctx.talents.ids(),
            "life started"
        );
        Ok(selection)
    }

    /// Optional year ceiling hit, or age can no longer advance
    fn year_limit_reached(&self) -> bool {
        self.config.max_years.is_some_and(|max| self.years >= max)
            || self.ctx.state.age == i32::MAX
    }

    /// Advance one year: age +1, grant the age's talents, then draw and run
    /// at most one event from the age's pool.
    ///
    /// Returns false, and completes the life, once lifespan is exhausted
    /// before the advance. The optional year ceiling and the largest
    /// representable age end a life the same way; a catalogue that never
    /// lowers lifespan otherwise runs until age reaches `i32::MAX`, so hosts
    /// loading untrusted data should set `max_years`.
    pub fn advance_year(&mut self) -> bool {
        if self.phase != LifePhase::Running {
            return false;
        }
        if self.ctx.state.is_end() || self.year_limit_reached() {
            self.phase = LifePhase::Complete;
            debug!(years = self.years, age = self.ctx.state.age, "life complete");
            return false;
        }
        let (Some(catalogue), Some(rng)) = (self.catalogue.as_deref(), self.rng.as_mut()) else {
            self.phase = LifePhase::Complete;
            return false;
        };

        self.ctx.state.age += 1;
        self.years += 1;
        let age = self.ctx.state.age;

        if let Some(age_config) = catalogue.age(age) {
            grant_talents(&age_config.talents, catalogue, &mut self.ctx);

            if let Some(event) = choose_event(&age_config.events, catalogue, &self.ctx, rng) {
                let chain = run_event(event, catalogue, &mut self.ctx, rng);
                trace!(age, ?chain, "events run");
            }
        }

        true
    }

    /// Advance until the life completes. Returns the number of years lived.
    pub fn run_to_end(&mut self) -> u32 {
        while self.advance_year() {}
        self.years
    }

    /// Run one full life and return its outcome
    pub fn begin_life(&mut self) -> Result<LifeOutcome> {
        self.start_life()?;
        self.run_to_end();
        Ok(self.outcome())
    }

    /// Snapshot of the current (or last) life
    pub fn outcome(&self) -> LifeOutcome {
        LifeOutcome {
            seed: self.seed,
            life: self.lives,
            years: self.years,
            state: self.ctx.state.clone(),
            talents: self.ctx.talents.ids().to_vec(),
            events: self.ctx.events.ids().to_vec(),
            log: self.ctx.log.as_str().to_string(),
        }
    }
}
