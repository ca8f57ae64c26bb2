//! Wire protocol of the script endpoint, decoded into typed payloads.
//!
//! Pure functions over already-fetched response parts, so the decode rules
//! are testable without a network. The endpoint computes the phase payloads
//! server-side; these converters validate the envelope and re-normalize
//! flag counts and casing on the way in.

use serde::Deserialize;
use serde_json::Value;

use triage_core::builder;
use triage_core::models::field::FieldSet;
use triage_core::models::payload::{Edit1Payload, Edit2Payload, PhasePayload, ViewPayload};
use triage_core::models::phase::Phase;

use crate::error::StoreError;

/// How much of an uninterpretable body to keep for diagnosis.
pub const BODY_PREVIEW_LIMIT: usize = 800;

/// Decode fetched response parts into JSON.
///
/// A non-success HTTP status is `Unavailable`; a body that doesn't parse as
/// JSON is `MalformedResponse` carrying a truncated preview.
pub fn decode(
    context: &'static str,
    status: u16,
    content_type: &str,
    body: &str,
) -> Result<Value, StoreError> {
    if !(200..300).contains(&status) {
        return Err(StoreError::Unavailable {
            context,
            detail: format!("HTTP {status}: {}", preview(body)),
        });
    }

    serde_json::from_str(body).map_err(|_| StoreError::MalformedResponse {
        context,
        status,
        content_type: content_type.to_string(),
        preview: preview(body).to_string(),
    })
}

/// [`decode`] plus the script endpoint's `status: "ok"` envelope check.
/// Anything else in the `status` field is surfaced verbatim as `Rejected`.
pub fn decode_ok(
    context: &'static str,
    status: u16,
    content_type: &str,
    body: &str,
) -> Result<Value, StoreError> {
    let value = decode(context, status, content_type, body)?;

    if value.get("status").and_then(Value::as_str) != Some("ok") {
        return Err(StoreError::Rejected {
            response: value.to_string(),
        });
    }

    Ok(value)
}

/// Truncate a body for error messages, staying on a char boundary.
pub fn preview(body: &str) -> &str {
    let mut end = BODY_PREVIEW_LIMIT.min(body.len());
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Stringify a JSON cell value the way the table renders it: null reads as
/// empty, strings verbatim, numbers and booleans via their JSON form.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn field_set(map: serde_json::Map<String, Value>) -> FieldSet {
    FieldSet::from_pairs(
        map.into_iter()
            .map(|(label, value)| {
                let text = cell_text(&value);
                (label, text)
            })
            .collect(),
    )
}

// ── Response shapes ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
struct Edit1Dto {
    #[serde(rename = "A_K", default)]
    a_k: serde_json::Map<String, Value>,
    #[serde(rename = "headers_LQ", default)]
    headers_lq: Vec<String>,
    #[serde(rename = "current_LQ", default)]
    current_lq: Vec<Value>,
}

impl Edit1Dto {
    fn into_payload(self) -> Result<Edit1Payload, StoreError> {
        let current: Vec<String> = self.current_lq.iter().map(cell_text).collect();
        let (flag_labels, flags) = builder::normalize_flags(self.headers_lq, &current)?;

        Ok(Edit1Payload {
            identity: field_set(self.a_k),
            flag_labels,
            flags,
        })
    }
}

#[derive(Deserialize, Default)]
struct Edit2Dto {
    #[serde(rename = "A_C_R_U", default)]
    a_c_r_u: serde_json::Map<String, Value>,
    #[serde(rename = "current_V", default)]
    current_v: Value,
}

impl Edit2Dto {
    fn into_payload(self) -> Edit2Payload {
        Edit2Payload {
            classification: cell_text(&self.current_v),
            summary: field_set(self.a_c_r_u),
        }
    }
}

#[derive(Deserialize, Default)]
struct ViewDto {
    #[serde(rename = "A_C_R_V", default)]
    a_c_r_v: serde_json::Map<String, Value>,
}

impl ViewDto {
    fn into_payload(self) -> ViewPayload {
        ViewPayload {
            summary: field_set(self.a_c_r_v),
        }
    }
}

// ── Payload extraction ───────────────────────────────────────────────────────

/// Convert an `action=get` response body into the payload for `phase`.
/// Missing sections read as empty, matching how the endpoint omits them.
pub fn get_payload(body: Value, phase: Phase) -> Result<PhasePayload, StoreError> {
    Ok(match phase {
        Phase::Edit1 => {
            let dto: Edit1Dto = serde_json::from_value(body)?;
            PhasePayload::Edit1(dto.into_payload()?)
        }
        Phase::Edit2 => {
            let dto: Edit2Dto = serde_json::from_value(body)?;
            PhasePayload::Edit2(dto.into_payload())
        }
        Phase::View => {
            let dto: ViewDto = serde_json::from_value(body)?;
            PhasePayload::View(dto.into_payload())
        }
    })
}

/// Extract the `next` phase-2 payload from an `action=update_lq` response.
pub fn flags_payload(body: Value) -> Result<Edit2Payload, StoreError> {
    #[derive(Deserialize)]
    struct FlagsResponse {
        #[serde(default)]
        next: Edit2Dto,
    }

    let response: FlagsResponse = serde_json::from_value(body)?;
    Ok(response.next.into_payload())
}

/// Extract the `final` view payload from an `action=update_v` response.
pub fn classification_payload(body: Value) -> Result<ViewPayload, StoreError> {
    #[derive(Deserialize)]
    struct ClassificationResponse {
        #[serde(rename = "final", default)]
        final_view: ViewDto,
    }

    let response: ClassificationResponse = serde_json::from_value(body)?;
    Ok(response.final_view.into_payload())
}
