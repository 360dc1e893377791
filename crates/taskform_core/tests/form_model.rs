use serde_json::json;
use taskform_core::{Candidate, FormData, FormField, Roster, RosterError};

#[test]
fn empty_form_fails_every_required_field() {
    let errors = FormData::empty().validate();
    assert_eq!(errors.len(), 4);
    let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        vec![
            FormField::Name,
            FormField::DateTimeRange,
            FormField::Candidate,
            FormField::Note
        ]
    );
}

#[test]
fn candidate_with_empty_name_counts_as_unselected() {
    let mut form = FormData::empty();
    form.name = "Task".to_string();
    form.date_time_range = "May 1, 2024 at 10:00 AM - 10:30 AM".to_string();
    form.note = "Note".to_string();
    form.candidate = Candidate::new("", "ghost.png");

    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(FormField::Candidate),
        Some("Candidate selection is required")
    );
}

#[test]
fn serialized_form_matches_the_stored_record_schema() {
    let form = FormData {
        name: "Prepare demo".to_string(),
        date_time_range: "May 1, 2024 at 10:00 AM - 10:30 AM".to_string(),
        candidate: Candidate::new("Jane Smith", "janesmith.png"),
        note: "Dry run".to_string(),
    };

    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Prepare demo",
            "dateTimeRange": "May 1, 2024 at 10:00 AM - 10:30 AM",
            "candidate": {
                "name": "Jane Smith",
                "profilePicture": "janesmith.png"
            },
            "note": "Dry run"
        })
    );

    let back: FormData = serde_json::from_value(value).unwrap();
    assert_eq!(back, form);
}

#[test]
fn default_roster_has_seven_unique_members() {
    let roster = Roster::default_roster();
    assert_eq!(roster.len(), 7);
    assert!(roster.contains_name("Jane Smith"));
    assert!(roster.contains_name("Sonu"));
    assert!(!roster.contains_name("Nobody"));
    assert!(roster.find_by_name("Preetha").is_some());
}

#[test]
fn roster_rejects_blank_and_duplicate_names() {
    let blank = Roster::new(vec![Candidate::new("", "x.png")]);
    assert_eq!(blank.unwrap_err(), RosterError::BlankName { position: 0 });

    let duplicate = Roster::new(vec![
        Candidate::new("Jane Smith", "a.png"),
        Candidate::new("Jane Smith", "b.png"),
    ]);
    assert_eq!(
        duplicate.unwrap_err(),
        RosterError::DuplicateName("Jane Smith".to_string())
    );

    assert_eq!(Roster::new(Vec::new()).unwrap_err(), RosterError::Empty);
}
