//! Event configuration structures

use crate::condition::ConditionGroup;
use crate::config::Effect;
use serde::{Deserialize, Serialize};

/// Event configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub id: i32,
    pub event: String,
    /// Skip the include check during random selection
    #[serde(default, alias = "NoRandom")]
    pub no_random: bool,
    pub include: Option<ConditionGroup>,
    pub exclude: Option<ConditionGroup>,
    pub effect: Option<Effect>,
    #[serde(default)]
    pub branch: Vec<EventBranch>,
    /// Appended to the log only when no branch fires
    #[serde(default, alias = "postEvent")]
    pub post_event: Option<String>,
}

impl EventConfig {
    pub fn new(id: i32, event: impl Into<String>) -> Self {
        Self {
            id,
            event: event.into(),
            no_random: false,
            include: None,
            exclude: None,
            effect: None,
            branch: Vec::new(),
            post_event: None,
        }
    }
}

/// Event branch for conditional branching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBranch {
    /// `None` always matches
    pub condition: Option<ConditionGroup>,
    #[serde(alias = "eventId")]
    pub event_id: i32,
}
