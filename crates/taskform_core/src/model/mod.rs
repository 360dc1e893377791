//! Domain model for the task-assignment form.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep form, roster and comment shapes independent of storage/UI.
//!
//! # Invariants
//! - A candidate with an empty name is the "nobody selected" sentinel.
//! - Every comment is identified by a stable `CommentId`.

pub mod candidate;
pub mod comment;
pub mod form;
