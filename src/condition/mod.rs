//! Condition parsing and evaluation module
//!
//! Conditions are ALL/ANY groups of predicates over the property state and
//! the talent and event ledgers. Predicates are authored as short strings like
//! `CHR>5` or `TLT?[1001]`.

mod ast;
mod evaluator;
pub mod parser;

#[cfg(test)]
mod property_tests;

pub use ast::*;
pub use evaluator::*;
pub use parser::parse;
