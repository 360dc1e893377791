//! Task form domain model and validation.
//!
//! # Responsibility
//! - Define the single in-progress form record.
//! - Provide wholesale required-field validation.
//!
//! # Invariants
//! - `candidate.name == ""` means no candidate is selected.
//! - `ValidationErrors` is recomputed as a whole, never merged.
//! - Serialized field names match the persisted record schema
//!   (`name`, `dateTimeRange`, `candidate`, `note`).

use crate::model::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The four user-editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    DateTimeRange,
    Candidate,
    Note,
}

impl FormField {
    /// Stable lowercase key, matching the persisted record naming.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateTimeRange => "dateTimeRange",
            Self::Candidate => "candidate",
            Self::Note => "note",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single in-progress task record.
///
/// Lifecycle: starts empty, mutated field-by-field as the user types,
/// persisted wholesale on submit, reset wholesale on clear/delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    /// Task title.
    pub name: String,
    /// Human-readable committed range, e.g. "May 1, 2024 at 10:00 AM - 10:30 AM".
    pub date_time_range: String,
    /// Selected assignee, or the empty sentinel.
    pub candidate: Candidate,
    /// Free-form note attached to the task.
    pub note: String,
}

impl FormData {
    /// Returns the empty form every session starts from.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            date_time_range: String::new(),
            candidate: Candidate::empty(),
            note: String::new(),
        }
    }

    /// Checks all required fields and returns only the failing ones.
    ///
    /// Pure over the current record; an empty result means the form can
    /// be submitted.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::none();
        if self.name.is_empty() {
            errors.add(FormField::Name, "Task is required");
        }
        if self.date_time_range.is_empty() {
            errors.add(FormField::DateTimeRange, "Date and time range is required");
        }
        if self.candidate.is_empty() {
            errors.add(FormField::Candidate, "Candidate selection is required");
        }
        if self.note.is_empty() {
            errors.add(FormField::Note, "Note is required");
        }
        errors
    }
}

impl Default for FormData {
    fn default() -> Self {
        Self::empty()
    }
}

/// Per-field validation messages; absence of a field means it is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    /// Returns the "all fields valid" value.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, or `None` when that field is valid.
    pub fn message(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Failing fields with their messages, in stable field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "form is valid");
        }
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}
