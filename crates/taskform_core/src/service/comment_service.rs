//! Comment board use-case service.
//!
//! # Responsibility
//! - Maintain the ordered comment sequence with author-scoped mutation.
//! - Track the shared draft text and the comment currently being edited.
//!
//! # Invariants
//! - Display order is insertion order; nothing re-sorts the sequence.
//! - Edit and delete target comments by stable id, never by position.
//! - A denied or failed operation leaves the sequence unchanged.

use crate::model::candidate::Candidate;
use crate::model::comment::{Comment, CommentId};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure modes of author-scoped comment operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    /// The current candidate is not the comment's author.
    PermissionDenied {
        id: CommentId,
        author: String,
        user: String,
    },
    /// No comment with this id exists on the board.
    NotFound(CommentId),
}

impl Display for CommentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied { author, user, .. } => write!(
                f,
                "only the comment author can modify it (author `{author}`, current `{user}`)"
            ),
            Self::NotFound(id) => write!(f, "comment not found: {id}"),
        }
    }
}

impl Error for CommentError {}

/// Ordered comment sequence with a single shared composer.
///
/// Authorship is "whoever is currently selected as assignee": callers
/// pass the current candidate explicitly and the board compares names.
/// There is no authentication concept.
#[derive(Debug, Default)]
pub struct CommentBoard {
    comments: Vec<Comment>,
    draft: String,
    editing: Option<CommentId>,
}

impl CommentBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a comment attributed to `author`.
    ///
    /// Silently does nothing when the trimmed text is empty or no
    /// candidate is selected, mirroring a composer whose send button is
    /// simply inert in those states. Clears the draft on success.
    pub fn add_comment(&mut self, text: &str, author: &Candidate) -> Option<CommentId> {
        if text.trim().is_empty() || author.is_empty() {
            return None;
        }
        let comment = Comment::new(text, author.clone());
        let id = comment.id;
        self.comments.push(comment);
        self.draft.clear();
        Some(id)
    }

    /// Starts editing the comment `id` as `current_user`.
    ///
    /// On success the draft is loaded with the comment text. Authorship
    /// mismatch and unknown ids leave all state unchanged.
    pub fn begin_edit(&mut self, id: CommentId, current_user: &Candidate) -> Result<(), CommentError> {
        let text = self.authorized(id, current_user, "comment_edit")?.text.clone();
        self.draft = text;
        self.editing = Some(id);
        Ok(())
    }

    /// Replaces the edited comment's text in place.
    ///
    /// Author, id and position are unchanged. Silently does nothing when
    /// no edit is in progress or the trimmed text is empty; the edit
    /// stays open in that case.
    pub fn commit_edit(&mut self, text: &str) -> Option<CommentId> {
        let id = self.editing?;
        if text.trim().is_empty() {
            return None;
        }
        let comment = self
            .comments
            .iter_mut()
            .find(|comment| comment.id == id)?;
        comment.text = text.to_string();
        self.draft.clear();
        self.editing = None;
        Some(id)
    }

    /// Abandons an in-progress edit without changing the comment.
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
        self.editing = None;
    }

    /// Removes the comment `id` as `current_user`.
    ///
    /// Remaining comments keep their relative order. Authorship mismatch
    /// removes nothing.
    pub fn delete_comment(
        &mut self,
        id: CommentId,
        current_user: &Candidate,
    ) -> Result<(), CommentError> {
        self.authorized(id, current_user, "comment_delete")?;
        self.comments.retain(|comment| comment.id != id);
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        Ok(())
    }

    /// Drops all comments, the draft and any in-progress edit.
    pub fn reset(&mut self) {
        self.comments.clear();
        self.cancel_edit();
    }

    /// Comments in insertion order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Looks up one comment by stable id.
    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    /// Current composer text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the composer text as the user types.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Id of the comment being edited, if any.
    pub fn editing(&self) -> Option<CommentId> {
        self.editing
    }

    fn authorized(
        &self,
        id: CommentId,
        current_user: &Candidate,
        event: &str,
    ) -> Result<&Comment, CommentError> {
        let comment = self.get(id).ok_or(CommentError::NotFound(id))?;
        if comment.author.name != current_user.name {
            warn!(
                "event={event} module=comments status=denied id={id} author={} user={}",
                comment.author.name, current_user.name
            );
            return Err(CommentError::PermissionDenied {
                id,
                author: comment.author.name.clone(),
                user: current_user.name.clone(),
            });
        }
        Ok(comment)
    }
}
