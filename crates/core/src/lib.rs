//! Core types and pure algorithms for leetlog
//!
//! This crate contains the domain types and deterministic logic shared by
//! the llm and service crates: goal and problem-log models, slug derivation,
//! topic parsing, roadmap schedule math with its template fallback, and the
//! weekly statistics behind recaps. Nothing here performs I/O.

mod error;
mod goal;
mod plan;
mod problem;
mod stats;
mod text;
mod topic;

pub use error::*;
pub use goal::*;
pub use plan::*;
pub use problem::*;
pub use stats::*;
pub use text::*;
pub use topic::*;
