//! Form use-case service.
//!
//! # Responsibility
//! - Own the single live form record and its validation state.
//! - Persist and restore the saved snapshot through the repository.
//!
//! # Invariants
//! - Field setters never validate; errors change only on submit or reset.
//! - A failed submit leaves both the live form and the store untouched.
//! - `last_saved` mirrors the persisted record exactly.

use crate::model::candidate::Candidate;
use crate::model::form::{FormData, ValidationErrors};
use crate::repo::form_repo::{FormRepository, RepoError, RepoResult};
use crate::timeslot::TimeSlot;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure modes of [`FormService::submit`].
#[derive(Debug)]
pub enum SubmitError {
    /// Required fields are missing; the store was not touched.
    Invalid(ValidationErrors),
    /// Persistence failed after validation passed.
    Repo(RepoError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "{errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for SubmitError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Owns the in-progress form, its validation errors and the saved
/// snapshot.
///
/// The repository is injected so UI layers and tests can run against
/// file-backed or in-memory storage interchangeably.
pub struct FormService<R: FormRepository> {
    repo: R,
    form: FormData,
    errors: ValidationErrors,
    last_saved: Option<FormData>,
}

impl<R: FormRepository> FormService<R> {
    /// Creates a service with an empty live form and no saved snapshot.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            form: FormData::empty(),
            errors: ValidationErrors::none(),
            last_saved: None,
        }
    }

    /// Reads the persisted record into the read-only saved snapshot.
    ///
    /// Called once at startup; the live form is not overwritten.
    pub fn load_saved(&mut self) -> RepoResult<Option<&FormData>> {
        self.last_saved = self.repo.load_form()?;
        info!(
            "event=form_load module=form status=ok present={}",
            self.last_saved.is_some()
        );
        Ok(self.last_saved.as_ref())
    }

    /// Sets the task name. No validation side effect.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
    }

    /// Sets the note. No validation side effect.
    pub fn set_note(&mut self, value: impl Into<String>) {
        self.form.note = value.into();
    }

    /// Sets the assignee, or the empty sentinel for `None`.
    pub fn set_candidate(&mut self, candidate: Option<Candidate>) {
        self.form.candidate = candidate.unwrap_or_else(Candidate::empty);
    }

    /// Stores the display string of a committed date/time range.
    pub fn set_date_time_range(&mut self, slot: &TimeSlot) {
        self.form.date_time_range = slot.display();
    }

    /// The live editable form.
    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Errors from the most recent submit attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The read-only saved snapshot, if any.
    pub fn last_saved(&self) -> Option<&FormData> {
        self.last_saved.as_ref()
    }

    /// Validates the live form without storing the result.
    pub fn validate(&self) -> ValidationErrors {
        self.form.validate()
    }

    /// Validates and, when valid, persists the live form verbatim.
    ///
    /// On validation failure the errors are recorded for inline display
    /// and returned; neither the live form nor the store changes.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            warn!(
                "event=form_submit module=form status=error error_code=validation_failed fields={}",
                errors.len()
            );
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        self.repo.save_form(&self.form)?;
        self.last_saved = Some(self.form.clone());
        self.errors = ValidationErrors::none();
        info!("event=form_submit module=form status=ok");
        Ok(())
    }

    /// Resets the live form and errors to the initial empty state.
    ///
    /// Comments are a separate concern; callers wanting the full
    /// "clear everything" action also call `CommentBoard::reset`.
    pub fn reset_form(&mut self) {
        self.form = FormData::empty();
        self.errors = ValidationErrors::none();
    }

    /// Removes the persisted record and resets the live form and errors.
    ///
    /// Returns whether a persisted record existed.
    pub fn delete_saved(&mut self) -> RepoResult<bool> {
        let existed = self.repo.delete_form()?;
        self.last_saved = None;
        self.reset_form();
        info!("event=form_delete module=form status=ok existed={existed}");
        Ok(existed)
    }
}
