//! Per-life run configuration

use serde::{Deserialize, Serialize};

/// Inherited-talent sentinel meaning "nothing inherited"
pub const NO_INHERITED_TALENT: i32 = -1;

/// Host-supplied settings for a life
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Explicit seed. `None` derives one from the clock.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Talent carried over from a previous life, -1 for none
    #[serde(default = "default_inherit_talent_id")]
    pub inherit_talent_id: i32,
    /// Hard ceiling on simulated years, unbounded when `None`
    #[serde(default)]
    pub max_years: Option<u32>,
}

fn default_inherit_talent_id() -> i32 {
    NO_INHERITED_TALENT
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            inherit_talent_id: NO_INHERITED_TALENT,
            max_years: None,
        }
    }
}

impl LifeConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn with_inherited_talent(mut self, talent_id: i32) -> Self {
        self.inherit_talent_id = talent_id;
        self
    }
}
