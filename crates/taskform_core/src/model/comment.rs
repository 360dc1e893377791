//! Comment domain model.
//!
//! # Responsibility
//! - Define the comment record attributed to a roster candidate.
//!
//! # Invariants
//! - `id` is stable for the comment's lifetime and never reused; all
//!   targeting (edit/delete) keys on it, never on list position.
//! - `author` is fixed at creation; only `text` ever changes.

use crate::model::candidate::Candidate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a comment.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CommentId = Uuid;

/// One entry in the comment board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable id generated at creation.
    pub id: CommentId,
    /// Comment body; non-empty after trimming.
    pub text: String,
    /// Fixed author attribution.
    pub author: Candidate,
}

impl Comment {
    /// Creates a comment with a generated stable id.
    pub fn new(text: impl Into<String>, author: Candidate) -> Self {
        Self::with_id(Uuid::new_v4(), text, author)
    }

    /// Creates a comment with a caller-provided stable id.
    ///
    /// Used by tests and by callers replaying an existing board.
    pub fn with_id(id: CommentId, text: impl Into<String>, author: Candidate) -> Self {
        Self {
            id,
            text: text.into(),
            author,
        }
    }
}
