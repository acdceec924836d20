//! Effect payload shared by talents and events

use serde::{Deserialize, Serialize};

/// Sparse attribute delta. Zero fields mean "no change".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(default, rename = "CHR")]
    pub chr: i32,
    #[serde(default, rename = "INT")]
    pub int: i32,
    #[serde(default, rename = "STR")]
    pub str_: i32,
    #[serde(default, rename = "MNY")]
    pub mny: i32,
    #[serde(default, rename = "SPR")]
    pub spr: i32,
    #[serde(default, rename = "LIF")]
    pub lif: i32,
    #[serde(default, rename = "AGE")]
    pub age: i32,
    #[serde(default, rename = "TOTAL")]
    pub total: i32,
    /// Bonus applied to one of CHR/INT/STR/MNY/SPR picked at random
    #[serde(default, rename = "RDM")]
    pub rdm: i32,
}

impl Effect {
    /// True when applying this effect would change anything
    #[inline]
    pub fn has_any_effect(&self) -> bool {
        self.chr != 0
            || self.int != 0
            || self.str_ != 0
            || self.mny != 0
            || self.spr != 0
            || self.lif != 0
            || self.age != 0
            || self.total != 0
            || self.rdm != 0
    }
}
