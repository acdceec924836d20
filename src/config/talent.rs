//! Talent configuration structures

use crate::condition::ConditionGroup;
use crate::config::Effect;
use serde::{Deserialize, Serialize};

/// Talent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentConfig {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Rarity: 3 = common .. 0 = rarest
    #[serde(default)]
    pub grade: i32,
    /// Added to the attribute budget when the talent is acquired
    #[serde(default)]
    pub status: i32,
    /// Talents that cannot be held together with this one
    #[serde(default)]
    pub exclude: Vec<i32>,
    pub effect: Option<Effect>,
    /// Acquisition condition. Carried as data, never checked by the engine.
    pub condition: Option<ConditionGroup>,
}

impl TalentConfig {
    pub fn new(id: i32, grade: i32) -> Self {
        Self {
            id,
            name: format!("Talent {}", id),
            description: String::new(),
            grade,
            status: 0,
            exclude: Vec::new(),
            effect: None,
            condition: None,
        }
    }
}
