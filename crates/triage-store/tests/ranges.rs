use triage_store::sheets::{cell_range, quote_sheet, row_range};

#[test]
fn cell_ranges() {
    assert_eq!(cell_range("Intake", "V", 3), "'Intake'!V3");
    assert_eq!(cell_range("Intake", "L", 42), "'Intake'!L42");
}

#[test]
fn row_ranges() {
    assert_eq!(row_range("Intake", 1), "'Intake'!1:1");
    assert_eq!(row_range("Intake", 7), "'Intake'!7:7");
}

#[test]
fn sheet_titles_with_spaces_and_quotes() {
    assert_eq!(quote_sheet("Ward 5"), "'Ward 5'");
    assert_eq!(quote_sheet("O'Brien"), "'O''Brien'");
    assert_eq!(row_range("Ward 5", 2), "'Ward 5'!2:2");
}
