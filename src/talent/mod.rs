//! Talent drawing and acquisition

mod acquire;
mod selector;

#[cfg(test)]
mod property_tests;

pub use acquire::*;
pub use selector::*;
