//! Property state structure and operations

use crate::config::Effect;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Attributes a random bonus may land on, in roll order
pub const RDM_PROPERTIES: [PropertyKey; 5] = [
    PropertyKey::Chr,
    PropertyKey::Int,
    PropertyKey::Str,
    PropertyKey::Mny,
    PropertyKey::Spr,
];

/// Named numeric attribute readable by conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Chr,
    Int,
    Str,
    Mny,
    Spr,
    Age,
    Lif,
    Total,
    Tms,
    /// Any name the engine does not track; always reads 0
    Unknown,
}

impl PropertyKey {
    pub fn from_name(name: &str) -> Self {
        match name.as_bytes() {
            b"CHR" => PropertyKey::Chr,
            b"INT" => PropertyKey::Int,
            b"STR" => PropertyKey::Str,
            b"MNY" => PropertyKey::Mny,
            b"SPR" => PropertyKey::Spr,
            b"AGE" => PropertyKey::Age,
            b"LIF" => PropertyKey::Lif,
            b"TOTAL" => PropertyKey::Total,
            b"TMS" => PropertyKey::Tms,
            _ => PropertyKey::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::Chr => "CHR",
            PropertyKey::Int => "INT",
            PropertyKey::Str => "STR",
            PropertyKey::Mny => "MNY",
            PropertyKey::Spr => "SPR",
            PropertyKey::Age => "AGE",
            PropertyKey::Lif => "LIF",
            PropertyKey::Total => "TOTAL",
            PropertyKey::Tms => "TMS",
            PropertyKey::Unknown => "UNKNOWN",
        }
    }
}

/// Mutable attribute vector for one life. No clamping anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyState {
    pub chr: i32,  // Charisma
    pub int: i32,  // Intelligence
    pub str_: i32, // Strength
    pub mny: i32,  // Money
    pub spr: i32,  // Spirit
    pub lif: i32,  // Remaining lifespan
    pub age: i32,
    /// Allocation budget, then running talent bonus accumulator
    pub total: i32,
    /// Generation counter
    pub tms: i32,
}

impl Default for PropertyState {
    fn default() -> Self {
        Self {
            chr: 0,
            int: 0,
            str_: 0,
            mny: 0,
            spr: 5,
            lif: 1,
            age: -1,
            total: 20,
            tms: 1,
        }
    }
}

impl PropertyState {
    /// Restore the birth values
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read an attribute. Total over all keys.
    #[inline]
    pub fn get(&self, key: PropertyKey) -> i32 {
        match key {
            PropertyKey::Chr => self.chr,
            PropertyKey::Int => self.int,
            PropertyKey::Str => self.str_,
            PropertyKey::Mny => self.mny,
            PropertyKey::Spr => self.spr,
            PropertyKey::Age => self.age,
            PropertyKey::Lif => self.lif,
            PropertyKey::Total => self.total,
            PropertyKey::Tms => self.tms,
            PropertyKey::Unknown => 0,
        }
    }

    /// Change a property value by delta, saturating at the i32 bounds
    #[inline]
    pub fn change(&mut self, key: PropertyKey, delta: i32) {
        match key {
            PropertyKey::Chr => self.chr = self.chr.saturating_add(delta),
            PropertyKey::Int => self.int = self.int.saturating_add(delta),
            PropertyKey::Str => self.str_ = self.str_.saturating_add(delta),
            PropertyKey::Mny => self.mny = self.mny.saturating_add(delta),
            PropertyKey::Spr => self.spr = self.spr.saturating_add(delta),
            PropertyKey::Age => self.age = self.age.saturating_add(delta),
            PropertyKey::Lif => self.lif = self.lif.saturating_add(delta),
            PropertyKey::Total => self.total = self.total.saturating_add(delta),
            PropertyKey::Tms => self.tms = self.tms.saturating_add(delta),
            PropertyKey::Unknown => {}
        }
    }

    /// Apply an effect payload.
    ///
    /// A no-op payload returns before touching `rng`. Otherwise exactly one
    /// integer draw is consumed, and only when `effect.rdm` is non-zero.
    /// Every addition saturates at the i32 bounds.
    pub fn apply(&mut self, effect: &Effect, rng: &mut impl Rng) {
        if !effect.has_any_effect() {
            return;
        }

        self.chr = self.chr.saturating_add(effect.chr);
        self.int = self.int.saturating_add(effect.int);
        self.str_ = self.str_.saturating_add(effect.str_);
        self.mny = self.mny.saturating_add(effect.mny);
        self.spr = self.spr.saturating_add(effect.spr);
        self.lif = self.lif.saturating_add(effect.lif);
        self.age = self.age.saturating_add(effect.age);
        self.total = self.total.saturating_add(effect.total);

        if effect.rdm != 0 {
            let roll = rng.gen_range(0..RDM_PROPERTIES.len());
            self.change(RDM_PROPERTIES[roll], effect.rdm);
        }
    }

    /// Lifespan exhausted
    #[inline]
    pub fn is_end(&self) -> bool {
        self.lif <= 0
    }
}
