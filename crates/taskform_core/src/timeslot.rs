//! Date/time range selection and display formatting.
//!
//! # Responsibility
//! - Track the two-stage start/end selection coming from an opaque
//!   date-time picker collaborator.
//! - Format a committed range into the form's display string.
//!
//! # Invariants
//! - A range is committed only when both endpoints are present.
//! - Re-picking either endpoint while the other is present re-commits
//!   immediately.

use chrono::NaiveDateTime;

const START_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";
const END_FORMAT: &str = "%-I:%M %p";

/// A committed start/end pair.
///
/// Construction does not order-check the endpoints; the picker surface
/// decides what selections it offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Human-readable range, e.g. `May 1, 2024 at 10:00 AM - 10:30 AM`.
    ///
    /// The start carries the full date, the end only the clock time.
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(START_FORMAT),
            self.end.format(END_FORMAT)
        )
    }
}

/// Two-stage start/end selection state.
///
/// State machine: `{no dates} -> {start set} -> {start+end set}`; each
/// pick that completes the pair returns the committed [`TimeSlot`] so
/// the caller can close the picker and update the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeSlotPicker {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl TimeSlotPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start endpoint.
    ///
    /// Returns the committed slot when an end is already present,
    /// `None` while the pair is still incomplete.
    pub fn pick_start(&mut self, start: NaiveDateTime) -> Option<TimeSlot> {
        self.start = Some(start);
        self.committed()
    }

    /// Records the end endpoint; commit semantics as [`pick_start`].
    ///
    /// [`pick_start`]: Self::pick_start
    pub fn pick_end(&mut self, end: NaiveDateTime) -> Option<TimeSlot> {
        self.end = Some(end);
        self.committed()
    }

    /// Drops both endpoints, returning to the `{no dates}` state.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    fn committed(&self) -> Option<TimeSlot> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(TimeSlot::new(start, end)),
            _ => None,
        }
    }
}
