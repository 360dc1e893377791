//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskform_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use std::error::Error;
use taskform_core::db::open_db_in_memory;
use taskform_core::{
    CommentBoard, FormService, Roster, SqliteFormRepository, TimeSlotPicker,
};

fn main() -> Result<(), Box<dyn Error>> {
    println!("taskform_core version={}", taskform_core::core_version());

    // Scripted submit/load round trip against in-memory storage.
    let conn = open_db_in_memory()?;
    let repo = SqliteFormRepository::new(&conn);
    let mut form = FormService::new(repo);
    let mut board = CommentBoard::new();

    let roster = Roster::default_roster();
    let jane = roster
        .find_by_name("Jane Smith")
        .ok_or("roster is missing Jane Smith")?
        .clone();
    let preetha = roster
        .find_by_name("Preetha")
        .ok_or("roster is missing Preetha")?
        .clone();

    form.set_name("Review release checklist");
    form.set_note("Walk through the checklist before Friday.");
    form.set_candidate(Some(jane.clone()));

    let day = NaiveDate::from_ymd_opt(2024, 5, 1).ok_or("bad probe date")?;
    let mut picker = TimeSlotPicker::new();
    picker.pick_start(day.and_hms_opt(10, 0, 0).ok_or("bad probe time")?);
    let slot = picker
        .pick_end(day.and_hms_opt(10, 30, 0).ok_or("bad probe time")?)
        .ok_or("range did not commit")?;
    form.set_date_time_range(&slot);

    form.submit()?;
    println!("submit=ok range={}", form.form().date_time_range);

    let first = board
        .add_comment("Checklist looks stale", &jane)
        .ok_or("comment rejected")?;
    board.add_comment("I refreshed it last week", &preetha);
    match board.delete_comment(first, &preetha) {
        Err(err) => println!("delete_as_other=denied ({err})"),
        Ok(()) => println!("delete_as_other=allowed"),
    }
    println!("comments={}", board.comments().len());

    let saved = form.load_saved()?.cloned();
    match saved {
        Some(saved) => println!("saved_task={}", saved.name),
        None => println!("saved_task=none"),
    }

    // The original prototype's single "clear" is this explicit pair.
    form.reset_form();
    board.reset();
    println!("after_reset_comments={}", board.comments().len());

    Ok(())
}
