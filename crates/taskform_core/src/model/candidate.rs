//! Candidate and roster domain model.
//!
//! # Responsibility
//! - Define the immutable candidate record shared by form and comments.
//! - Provide the fixed, ordered roster with lookup-by-name.
//!
//! # Invariants
//! - Roster names are non-empty and unique.
//! - `Candidate::empty()` is the only candidate with an empty name, and
//!   it never appears inside a roster.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// An assignable person: roster entry, form assignee and comment author.
///
/// `profile_picture` is an opaque image reference resolved by whatever
/// surface renders it; core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub profile_picture: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, profile_picture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_picture: profile_picture.into(),
        }
    }

    /// Returns the "nobody selected" sentinel.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            profile_picture: String::new(),
        }
    }

    /// True when this candidate is the empty sentinel.
    ///
    /// The name alone decides: an empty name means no selection.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Construction error for [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    Empty,
    BlankName { position: usize },
    DuplicateName(String),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "roster must contain at least one candidate"),
            Self::BlankName { position } => {
                write!(f, "roster candidate at position {position} has a blank name")
            }
            Self::DuplicateName(name) => write!(f, "duplicate roster name: {name}"),
        }
    }
}

impl Error for RosterError {}

/// The fixed, ordered list of candidates supplied at startup.
///
/// Core only needs enumeration and lookup-by-name; entries never change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Builds a roster, rejecting blank and duplicate names.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, RosterError> {
        if candidates.is_empty() {
            return Err(RosterError::Empty);
        }
        for (position, candidate) in candidates.iter().enumerate() {
            if candidate.name.is_empty() {
                return Err(RosterError::BlankName { position });
            }
            let earlier = &candidates[..position];
            if earlier.iter().any(|other| other.name == candidate.name) {
                return Err(RosterError::DuplicateName(candidate.name.clone()));
            }
        }
        Ok(Self { candidates })
    }

    /// The seven-person roster the original prototype ships with.
    pub fn default_roster() -> Self {
        let seed = [
            ("Jane Smith", "janesmith.png"),
            ("Preetha", "preetha.png"),
            ("Dharani", "dharani.png"),
            ("Siva", "siva.png"),
            ("Guna", "guna.png"),
            ("Krish", "krish.png"),
            ("Sonu", "sonu.png"),
        ];
        let candidates = seed
            .iter()
            .map(|(name, picture)| Candidate::new(*name, *picture))
            .collect();
        // The seed list is statically unique and non-blank.
        Self { candidates }
    }

    /// Looks up a candidate by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.name == name)
    }

    /// True when `name` belongs to a roster entry.
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Candidates in their fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
