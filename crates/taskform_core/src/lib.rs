//! Core domain logic for the task-assignment form.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod timeslot;

pub use logging::{default_log_level, init_logging};
pub use model::candidate::{Candidate, Roster, RosterError};
pub use model::comment::{Comment, CommentId};
pub use model::form::{FormData, FormField, ValidationErrors};
pub use repo::form_repo::{
    FormRepository, RepoError, RepoResult, SqliteFormRepository, SAVED_FORM_SLOT,
};
pub use service::comment_service::{CommentBoard, CommentError};
pub use service::form_service::{FormService, SubmitError};
pub use timeslot::{TimeSlot, TimeSlotPicker};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
