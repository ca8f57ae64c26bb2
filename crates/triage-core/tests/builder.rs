use triage_core::builder;
use triage_core::models::flag::YesNo;
use triage_core::models::payload::PhasePayload;
use triage_core::models::phase::Phase;
use triage_core::models::priority::Priority;
use triage_core::models::snapshot::RowSnapshot;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Full A–V header row matching the documented column contract.
fn headers() -> Vec<String> {
    strings(&[
        // A–K: demographics
        "HN", "Name", "Age", "Sex", "Phone", "Address", "District", "Province", "Allergy",
        "Insurance", "Contact",
        // L–Q: treatment flags
        "Oxygen", "IV Fluids", "Antibiotics", "Analgesia", "Monitoring", "Isolation",
        // R–U: upstream fields
        "Ward", "Bed", "Physician", "Admitted",
        // V: classification
        "Triage Priority",
    ])
}

fn row_values() -> Vec<String> {
    strings(&[
        "1001", "Somsak", "61", "M", "0812345678", "12/3 Moo 4", "Muang", "Chiang Mai", "-",
        "UC", "Wife", "Yes", "No", "No", "Yes", "No", "No", "Ward 5", "B12", "Dr. Anan",
        "2024-11-02", "",
    ])
}

#[test]
fn edit1_carries_demographics_and_flags_in_header_order() {
    let snapshot = RowSnapshot::new(headers(), row_values());
    let payload = builder::edit1(&snapshot).unwrap();

    assert_eq!(payload.identity.len(), 11);
    assert_eq!(payload.identity.get("Name"), Some("Somsak"));
    assert_eq!(payload.identity.get("Contact"), Some("Wife"));

    assert_eq!(
        payload.flag_labels,
        strings(&[
            "Oxygen", "IV Fluids", "Antibiotics", "Analgesia", "Monitoring", "Isolation"
        ])
    );
    assert_eq!(
        payload.flags,
        vec![
            YesNo::Yes,
            YesNo::No,
            YesNo::No,
            YesNo::Yes,
            YesNo::No,
            YesNo::No
        ]
    );
}

#[test]
fn edit1_normalizes_flag_casing() {
    let mut values = row_values();
    values[11] = "YES".to_string();
    values[12] = "yes".to_string();
    values[13] = "maybe".to_string();

    let snapshot = RowSnapshot::new(headers(), values);
    let payload = builder::edit1(&snapshot).unwrap();

    assert_eq!(payload.flags[0], YesNo::Yes);
    assert_eq!(payload.flags[1], YesNo::Yes);
    assert_eq!(payload.flags[2], YesNo::No);
}

#[test]
fn edit1_header_drift_falls_back_to_letters_and_no() {
    // Only the A–K headers exist; the flag columns are missing entirely.
    let headers = strings(&[
        "HN", "Name", "Age", "Sex", "Phone", "Address", "District", "Province", "Allergy",
        "Insurance", "Contact",
    ]);
    let snapshot = RowSnapshot::new(headers, strings(&["1001", "Somsak"]));
    let payload = builder::edit1(&snapshot).unwrap();

    assert_eq!(payload.flag_labels, strings(&["L", "M", "N", "O", "P", "Q"]));
    assert_eq!(payload.flags, vec![YesNo::No; 6]);
}

#[test]
fn edit2_merges_brief_identity_with_upstream() {
    let snapshot = RowSnapshot::new(headers(), row_values());
    let payload = builder::edit2(&snapshot).unwrap();

    assert_eq!(payload.summary.len(), 7);
    assert_eq!(payload.summary.get("HN"), Some("1001"));
    assert_eq!(payload.summary.get("Ward"), Some("Ward 5"));
    assert_eq!(payload.summary.get("Admitted"), Some("2024-11-02"));
    // The flag columns and the classification stay out of the summary.
    assert_eq!(payload.summary.get("Oxygen"), None);
    assert_eq!(payload.summary.get("Triage Priority"), None);
}

#[test]
fn edit2_empty_classification_defaults_selector_to_first_priority() {
    let snapshot = RowSnapshot::new(headers(), row_values());
    let payload = builder::edit2(&snapshot).unwrap();

    assert_eq!(payload.classification, "");
    assert_eq!(payload.selector_default(), Priority::One);
}

#[test]
fn edit2_stored_classification_preselects() {
    let mut values = row_values();
    values[21] = "Priority 2".to_string();

    let snapshot = RowSnapshot::new(headers(), values);
    let payload = builder::edit2(&snapshot).unwrap();

    assert_eq!(payload.selector_default(), Priority::Two);
}

#[test]
fn edit2_unrecognized_classification_defaults_selector() {
    let mut values = row_values();
    values[21] = "Priority 9".to_string();

    let snapshot = RowSnapshot::new(headers(), values);
    let payload = builder::edit2(&snapshot).unwrap();

    assert_eq!(payload.classification, "Priority 9");
    assert_eq!(payload.selector_default(), Priority::One);
}

#[test]
fn view_includes_classification_column() {
    let mut values = row_values();
    values[21] = "Priority 3".to_string();

    let snapshot = RowSnapshot::new(headers(), values);
    let payload = builder::view(&snapshot).unwrap();

    assert_eq!(payload.summary.len(), 8);
    assert_eq!(payload.summary.get("Triage Priority"), Some("Priority 3"));
}

#[test]
fn out_of_range_row_builds_empty_payloads() {
    // An out-of-range row reads as an all-empty value row, padded.
    let snapshot = RowSnapshot::new(headers(), Vec::new());

    let edit1 = builder::edit1(&snapshot).unwrap();
    assert_eq!(edit1.identity.get("Name"), Some(""));
    assert_eq!(edit1.flags, vec![YesNo::No; 6]);

    let edit2 = builder::edit2(&snapshot).unwrap();
    assert_eq!(edit2.classification, "");
}

#[test]
fn build_dispatches_by_phase() {
    let snapshot = RowSnapshot::new(headers(), row_values());

    assert_eq!(
        builder::build(&snapshot, Phase::Edit1).unwrap().phase(),
        Phase::Edit1
    );
    assert_eq!(
        builder::build(&snapshot, Phase::Edit2).unwrap().phase(),
        Phase::Edit2
    );
    assert!(matches!(
        builder::build(&snapshot, Phase::View).unwrap(),
        PhasePayload::View(_)
    ));
}
