#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod error;
pub mod hands;
pub mod index;
pub mod moves;
pub mod rules;
pub mod types;

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::error::SolveError;
pub use crate::hands::HandSet;
pub use crate::index::StateIndexer;
pub use crate::moves::{attack_states, successors, switch_states};
pub use crate::rules::Rules;
pub use crate::solver::{solve, Graph, Solved};
pub use crate::types::{Classification, HandPair, State};
