//! Age configuration structures

use serde::{Deserialize, Serialize};

/// Age configuration for each year
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgeConfig {
    pub age: i32,
    /// Talents granted on reaching this age
    #[serde(default)]
    pub talents: Vec<i32>,
    /// Event pool for this age: [(event_id, weight), ...]
    #[serde(default)]
    pub events: Vec<(i32, f64)>,
}
