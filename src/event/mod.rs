//! Event selection and execution

mod runner;
pub mod selector;


pub use runner::*;
pub use selector::*;
