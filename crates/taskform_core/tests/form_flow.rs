use taskform_core::db::open_db_in_memory;
use taskform_core::{
    Candidate, FormField, FormService, Roster, SqliteFormRepository, SubmitError, TimeSlot,
};

use chrono::NaiveDate;

fn slot_may_first() -> TimeSlot {
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    TimeSlot::new(
        day.and_hms_opt(10, 0, 0).unwrap(),
        day.and_hms_opt(10, 30, 0).unwrap(),
    )
}

fn jane() -> Candidate {
    Roster::default_roster()
        .find_by_name("Jane Smith")
        .unwrap()
        .clone()
}

#[test]
fn submitting_empty_form_reports_all_fields_and_persists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));

    let err = service.submit().unwrap_err();
    let errors = match err {
        SubmitError::Invalid(errors) => errors,
        other => panic!("unexpected error: {other}"),
    };

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.message(FormField::Name), Some("Task is required"));
    assert_eq!(
        errors.message(FormField::DateTimeRange),
        Some("Date and time range is required")
    );
    assert_eq!(
        errors.message(FormField::Candidate),
        Some("Candidate selection is required")
    );
    assert_eq!(errors.message(FormField::Note), Some("Note is required"));

    // Errors are recorded for inline display.
    assert_eq!(service.errors().len(), 4);

    // Nothing reached the store.
    assert!(service.load_saved().unwrap().is_none());
}

#[test]
fn partial_form_reports_exactly_the_missing_fields() {
    let conn = open_db_in_memory().unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));

    service.set_name("Prepare demo");
    service.set_candidate(Some(jane()));

    let err = service.submit().unwrap_err();
    let errors = match err {
        SubmitError::Invalid(errors) => errors,
        other => panic!("unexpected error: {other}"),
    };

    assert_eq!(errors.len(), 2);
    assert!(errors.message(FormField::Name).is_none());
    assert!(errors.message(FormField::Candidate).is_none());
    assert!(errors.message(FormField::DateTimeRange).is_some());
    assert!(errors.message(FormField::Note).is_some());

    // The live form keeps what the user typed.
    assert_eq!(service.form().name, "Prepare demo");
}

#[test]
fn full_submit_persists_verbatim_and_loads_back() {
    let conn = open_db_in_memory().unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));

    service.set_name("Prepare demo");
    service.set_note("Dry run on staging first");
    service.set_candidate(Some(jane()));
    service.set_date_time_range(&slot_may_first());

    service.submit().unwrap();
    assert!(service.errors().is_empty());

    let expected = service.form().clone();
    assert_eq!(service.last_saved(), Some(&expected));

    let loaded = service.load_saved().unwrap().cloned().unwrap();
    assert_eq!(loaded, expected);
    assert_eq!(
        loaded.date_time_range,
        "May 1, 2024 at 10:00 AM - 10:30 AM"
    );
}

#[test]
fn saved_snapshot_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskform.db");

    {
        let conn = taskform_core::db::open_db(&path).unwrap();
        let mut service = FormService::new(SqliteFormRepository::new(&conn));
        service.set_name("Prepare demo");
        service.set_note("Dry run on staging first");
        service.set_candidate(Some(jane()));
        service.set_date_time_range(&slot_may_first());
        service.submit().unwrap();
    }

    let conn = taskform_core::db::open_db(&path).unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));
    let loaded = service.load_saved().unwrap().cloned().unwrap();
    assert_eq!(loaded.name, "Prepare demo");
    assert_eq!(loaded.candidate.name, "Jane Smith");
    // The live form stays empty; only the snapshot is populated.
    assert!(service.form().name.is_empty());
}

#[test]
fn resubmit_replaces_the_single_saved_record() {
    let conn = open_db_in_memory().unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));

    service.set_name("First title");
    service.set_note("note");
    service.set_candidate(Some(jane()));
    service.set_date_time_range(&slot_may_first());
    service.submit().unwrap();

    service.set_name("Second title");
    service.submit().unwrap();

    let loaded = service.load_saved().unwrap().cloned().unwrap();
    assert_eq!(loaded.name, "Second title");
}

#[test]
fn reset_form_reproduces_the_initial_error_set() {
    let conn = open_db_in_memory().unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));

    let initial_errors = service.validate();

    service.set_name("Prepare demo");
    service.set_note("Dry run");
    service.set_candidate(Some(jane()));
    service.set_date_time_range(&slot_may_first());
    service.reset_form();

    assert_eq!(service.validate(), initial_errors);
    assert!(service.errors().is_empty());
    assert!(service.form().candidate.is_empty());
}

#[test]
fn delete_saved_removes_record_and_resets_live_state() {
    let conn = open_db_in_memory().unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));

    service.set_name("Prepare demo");
    service.set_note("Dry run");
    service.set_candidate(Some(jane()));
    service.set_date_time_range(&slot_may_first());
    service.submit().unwrap();

    let existed = service.delete_saved().unwrap();
    assert!(existed);
    assert!(service.last_saved().is_none());
    assert!(service.form().name.is_empty());
    assert!(service.errors().is_empty());
    assert!(service.load_saved().unwrap().is_none());
}

#[test]
fn delete_saved_without_prior_submit_reports_nothing_existed() {
    let conn = open_db_in_memory().unwrap();
    let mut service = FormService::new(SqliteFormRepository::new(&conn));

    let existed = service.delete_saved().unwrap();
    assert!(!existed);
    assert!(service.load_saved().unwrap().is_none());
}
