use serde_json::json;

use triage_core::models::flag::YesNo;
use triage_core::models::payload::PhasePayload;
use triage_core::models::phase::Phase;
use triage_core::models::priority::Priority;
use triage_store::error::StoreError;
use triage_store::wire;

#[test]
fn non_success_status_is_unavailable() {
    let err = wire::decode("GET action=get", 502, "text/html", "Bad Gateway").unwrap_err();
    match err {
        StoreError::Unavailable { context, detail } => {
            assert_eq!(context, "GET action=get");
            assert!(detail.contains("HTTP 502"));
            assert!(detail.contains("Bad Gateway"));
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn non_json_body_is_malformed_with_preview() {
    let body = "<html><body>Sign in required</body></html>";
    let err = wire::decode("GET action=get", 200, "text/html", body).unwrap_err();
    match err {
        StoreError::MalformedResponse {
            status,
            content_type,
            preview,
            ..
        } => {
            assert_eq!(status, 200);
            assert_eq!(content_type, "text/html");
            assert!(preview.contains("Sign in required"));
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn preview_truncates_long_bodies() {
    let body = "x".repeat(5000);
    assert_eq!(wire::preview(&body).len(), wire::BODY_PREVIEW_LIMIT);

    let short = "short";
    assert_eq!(wire::preview(short), "short");
}

#[test]
fn preview_respects_char_boundaries() {
    // A multi-byte char straddling the limit must not split.
    let mut body = "a".repeat(wire::BODY_PREVIEW_LIMIT - 1);
    body.push('ß');
    body.push_str("tail");

    let p = wire::preview(&body);
    assert!(p.len() <= wire::BODY_PREVIEW_LIMIT);
    assert!(body.starts_with(p));
}

#[test]
fn non_ok_status_field_is_rejected_verbatim() {
    let body = r#"{"status":"error","message":"worksheet not found"}"#;
    let err = wire::decode_ok("GET action=get", 200, "application/json", body).unwrap_err();
    match err {
        StoreError::Rejected { response } => {
            assert!(response.contains("worksheet not found"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[test]
fn ok_envelope_passes_through() {
    let body = r#"{"status":"ok","current_V":"Priority 1"}"#;
    let value = wire::decode_ok("GET action=get", 200, "application/json", body).unwrap();
    assert_eq!(value["current_V"], "Priority 1");
}

#[test]
fn edit1_get_payload_parses() {
    let body = json!({
        "status": "ok",
        "A_K": {"HN": "1001", "Name": "Somsak", "Age": 61},
        "headers_LQ": ["Oxygen", "IV Fluids", "Antibiotics", "Analgesia", "Monitoring", "Isolation"],
        "current_LQ": ["Yes", "no", "", "YES", "No", "No"]
    });

    let payload = wire::get_payload(body, Phase::Edit1).unwrap();
    let PhasePayload::Edit1(edit1) = payload else {
        panic!("expected edit1 payload");
    };

    assert_eq!(edit1.identity.get("HN"), Some("1001"));
    // Numeric cells stringify.
    assert_eq!(edit1.identity.get("Age"), Some("61"));
    assert_eq!(edit1.flag_labels[0], "Oxygen");
    assert_eq!(
        edit1.flags,
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
fn edit1_missing_sections_default() {
    let payload = wire::get_payload(json!({"status": "ok"}), Phase::Edit1).unwrap();
    let PhasePayload::Edit1(edit1) = payload else {
        panic!("expected edit1 payload");
    };

    assert!(edit1.identity.is_empty());
    assert_eq!(edit1.flag_labels, vec!["L", "M", "N", "O", "P", "Q"]);
    assert_eq!(edit1.flags, vec![YesNo::No; 6]);
}

#[test]
fn edit1_wrong_length_flags_default_to_no() {
    let body = json!({
        "status": "ok",
        "headers_LQ": ["Oxygen", "IV Fluids"],
        "current_LQ": ["Yes"]
    });

    let payload = wire::get_payload(body, Phase::Edit1).unwrap();
    let PhasePayload::Edit1(edit1) = payload else {
        panic!("expected edit1 payload");
    };

    assert_eq!(edit1.flag_labels.len(), 6);
    assert_eq!(edit1.flags, vec![YesNo::No; 6]);
}

#[test]
fn edit2_get_payload_parses() {
    let body = json!({
        "status": "ok",
        "A_C_R_U": {"HN": "1001", "Name": "Somsak", "Ward": "Ward 5"},
        "current_V": ""
    });

    let payload = wire::get_payload(body, Phase::Edit2).unwrap();
    let PhasePayload::Edit2(edit2) = payload else {
        panic!("expected edit2 payload");
    };

    assert_eq!(edit2.summary.get("Ward"), Some("Ward 5"));
    assert_eq!(edit2.classification, "");
    assert_eq!(edit2.selector_default(), Priority::One);
}

#[test]
fn view_get_payload_parses() {
    let body = json!({
        "status": "ok",
        "A_C_R_V": {"HN": "1001", "Triage Priority": "Priority 2"}
    });

    let payload = wire::get_payload(body, Phase::View).unwrap();
    let PhasePayload::View(view) = payload else {
        panic!("expected view payload");
    };

    assert_eq!(view.summary.get("Triage Priority"), Some("Priority 2"));
}

#[test]
fn flags_response_carries_next_payload() {
    let body = json!({
        "status": "ok",
        "next": {
            "A_C_R_U": {"HN": "1001"},
            "current_V": "Priority 3"
        }
    });

    let next = wire::flags_payload(body).unwrap();
    assert_eq!(next.summary.get("HN"), Some("1001"));
    assert_eq!(next.selector_default(), Priority::Three);
}

#[test]
fn flags_response_missing_next_defaults_empty() {
    let next = wire::flags_payload(json!({"status": "ok"})).unwrap();
    assert!(next.summary.is_empty());
    assert_eq!(next.classification, "");
}

#[test]
fn classification_response_carries_final_payload() {
    let body = json!({
        "status": "ok",
        "final": {
            "A_C_R_V": {"HN": "1001", "Triage Priority": "Priority 2"}
        }
    });

    let view = wire::classification_payload(body).unwrap();
    assert_eq!(view.summary.get("Triage Priority"), Some("Priority 2"));
}

#[test]
fn null_cells_read_as_empty() {
    let body = json!({
        "status": "ok",
        "A_C_R_U": {"HN": null},
        "current_V": null
    });

    let payload = wire::get_payload(body, Phase::Edit2).unwrap();
    let PhasePayload::Edit2(edit2) = payload else {
        panic!("expected edit2 payload");
    };

    assert_eq!(edit2.summary.get("HN"), Some(""));
    assert_eq!(edit2.classification, "");
}
