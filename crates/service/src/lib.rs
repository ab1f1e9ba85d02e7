//! Service layer for leetlog
//!
//! Centralizes business logic between the (external) web handlers and the
//! core/llm crates: goal creation with per-topic roadmaps, weekly recaps,
//! and problem help. Roadmap and recap generation absorb AI failures into
//! deterministic fallbacks; only input validation surfaces as an error.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod goal_service;
mod help_service;
mod recap_service;

pub use error::ServiceError;
pub use goal_service::GoalService;
pub use help_service::HelpService;
pub use recap_service::{NO_ACTIVITY_RECAP, RecapService};
