use triage_core::models::nav::NavParams;
use triage_core::models::phase::Phase;

#[test]
fn defaults_when_absent() {
    let nav = NavParams::from_query(None, None);
    assert_eq!(nav.row, 1);
    assert_eq!(nav.mode, Phase::Edit1);
}

#[test]
fn bad_rows_collapse_to_one() {
    for bad in ["0", "-5", "abc", "", "1.5", "99999999999999999999"] {
        let nav = NavParams::from_query(Some(bad), None);
        assert_eq!(nav.row, 1, "row {bad:?} should collapse to 1");
    }
}

#[test]
fn valid_row_parses() {
    assert_eq!(NavParams::from_query(Some("42"), None).row, 42);
    assert_eq!(NavParams::from_query(Some(" 7 "), None).row, 7);
}

#[test]
fn modes_parse_with_default() {
    assert_eq!(
        NavParams::from_query(None, Some("edit2")).mode,
        Phase::Edit2
    );
    assert_eq!(NavParams::from_query(None, Some("view")).mode, Phase::View);
    assert_eq!(
        NavParams::from_query(None, Some("bogus")).mode,
        Phase::Edit1
    );
    assert_eq!(NavParams::from_query(None, None).mode, Phase::Edit1);
}
