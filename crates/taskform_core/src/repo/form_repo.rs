//! Saved-form repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the one logical saved-form record under a fixed slot.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - At most one saved record exists (`SAVED_FORM_SLOT`).
//! - `save_form` replaces the whole record; fields are never merged.

use crate::db::DbError;
use crate::model::candidate::Candidate;
use crate::model::form::FormData;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed logical key of the single saved record.
pub const SAVED_FORM_SLOT: &str = "formData";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for saved-form persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted form data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the saved form record.
pub trait FormRepository {
    /// Writes the record verbatim, replacing any previous one.
    fn save_form(&self, form: &FormData) -> RepoResult<()>;
    /// Reads the record, or `None` when nothing was ever saved.
    fn load_form(&self) -> RepoResult<Option<FormData>>;
    /// Removes the record; returns whether one existed.
    fn delete_form(&self) -> RepoResult<bool>;
}

/// SQLite-backed saved-form repository.
pub struct SqliteFormRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFormRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FormRepository for SqliteFormRepository<'_> {
    fn save_form(&self, form: &FormData) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO saved_form (
                slot,
                task_name,
                date_time_range,
                candidate_name,
                candidate_picture,
                note
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(slot) DO UPDATE SET
                task_name = excluded.task_name,
                date_time_range = excluded.date_time_range,
                candidate_name = excluded.candidate_name,
                candidate_picture = excluded.candidate_picture,
                note = excluded.note,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                SAVED_FORM_SLOT,
                form.name.as_str(),
                form.date_time_range.as_str(),
                form.candidate.name.as_str(),
                form.candidate.profile_picture.as_str(),
                form.note.as_str(),
            ],
        )?;

        Ok(())
    }

    fn load_form(&self) -> RepoResult<Option<FormData>> {
        let form = self
            .conn
            .query_row(
                "SELECT task_name, date_time_range, candidate_name, candidate_picture, note
                 FROM saved_form
                 WHERE slot = ?1;",
                [SAVED_FORM_SLOT],
                read_form,
            )
            .optional()?;

        // A persisted record with an empty candidate name would violate
        // the submit-time invariant; reject it instead of masking it.
        if let Some(form) = &form {
            if form.candidate.is_empty() {
                return Err(RepoError::InvalidData(
                    "saved form has no candidate".to_string(),
                ));
            }
        }

        Ok(form)
    }

    fn delete_form(&self) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM saved_form WHERE slot = ?1;", [SAVED_FORM_SLOT])?;
        Ok(changed > 0)
    }
}

fn read_form(row: &Row<'_>) -> rusqlite::Result<FormData> {
    Ok(FormData {
        name: row.get(0)?,
        date_time_range: row.get(1)?,
        candidate: Candidate {
            name: row.get(2)?,
            profile_picture: row.get(3)?,
        },
        note: row.get(4)?,
    })
}
