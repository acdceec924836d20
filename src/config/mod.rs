//! Configuration module for game data structures
//!
//! Talent, event and age definitions arrive already authored; this module only
//! describes their in-memory shape and offers a JSON adapter for hosts.

mod age;
mod effect;
mod event;
mod life;
mod talent;

pub use age::*;
pub use effect::*;
pub use event::*;
pub use life::*;
pub use talent::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The three raw catalogues, before indexing and validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueData {
    #[serde(default)]
    pub talents: Vec<TalentConfig>,
    #[serde(default)]
    pub ages: Vec<AgeConfig>,
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

impl CatalogueData {
    /// Parse `{"talents": [...], "ages": [...], "events": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
