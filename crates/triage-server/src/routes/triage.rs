use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use triage_core::models::flag::YesNo;
use triage_core::models::nav::NavParams;
use triage_core::models::priority::Priority;
use triage_wizard::wizard::Screen;

use crate::error::ApiError;
use crate::state::AppState;

/// Navigation plus session selection, straight from the query string.
#[derive(Deserialize)]
pub struct NavQuery {
    row: Option<String>,
    mode: Option<String>,
    session: Option<String>,
}

impl NavQuery {
    fn nav(&self) -> NavParams {
        NavParams::from_query(self.row.as_deref(), self.mode.as_deref())
    }

    fn session_key(&self) -> &str {
        self.session.as_deref().unwrap_or("default")
    }
}

/// Load the screen for the current navigation state.
pub async fn load_screen(
    State(state): State<AppState>,
    Query(query): Query<NavQuery>,
) -> Result<Json<Screen>, ApiError> {
    let session = state.session(query.session_key()).await;
    let session = session.lock().await;

    let screen = state.wizard.load(&session, query.nav()).await?;
    Ok(Json(screen))
}

#[derive(Deserialize)]
pub struct FlagsSubmission {
    row: u32,
    /// Label → "Yes"/"No" as rendered; anything that isn't a "yes" reads No.
    flags: serde_json::Map<String, Value>,
}

/// Submit phase 1. The response is the buffered phase-2 screen.
pub async fn submit_flags(
    State(state): State<AppState>,
    Query(query): Query<NavQuery>,
    Json(submission): Json<FlagsSubmission>,
) -> Result<Json<Screen>, ApiError> {
    let row = valid_row(submission.row)?;
    let flags: Vec<(String, YesNo)> = submission
        .flags
        .into_iter()
        .map(|(label, value)| {
            let value = YesNo::normalize(value.as_str().unwrap_or(""));
            (label, value)
        })
        .collect();

    let session = state.session(query.session_key()).await;
    let mut session = session.lock().await;

    let screen = state.wizard.submit_flags(&mut session, row, flags).await?;
    Ok(Json(screen))
}

#[derive(Deserialize)]
pub struct ClassificationSubmission {
    row: u32,
    value: String,
}

/// Submit phase 2. The value must be one of the three allowed priorities;
/// the response is the final view screen with navigation at `(row, view)`.
pub async fn submit_classification(
    State(state): State<AppState>,
    Query(query): Query<NavQuery>,
    Json(submission): Json<ClassificationSubmission>,
) -> Result<Json<Screen>, ApiError> {
    let row = valid_row(submission.row)?;
    let value = Priority::parse(&submission.value).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "value must be one of {:?}",
            Priority::ALL.map(|p| p.as_str())
        ))
    })?;

    let session = state.session(query.session_key()).await;
    let mut session = session.lock().await;

    let screen = state
        .wizard
        .submit_classification(&mut session, row, value)
        .await?;
    Ok(Json(screen))
}

#[derive(Deserialize)]
pub struct RestartSubmission {
    row: u32,
}

/// Drop any buffered state and point navigation back at phase 1.
pub async fn restart(
    State(state): State<AppState>,
    Query(query): Query<NavQuery>,
    Json(submission): Json<RestartSubmission>,
) -> Result<Json<NavParams>, ApiError> {
    let row = valid_row(submission.row)?;

    let session = state.session(query.session_key()).await;
    let mut session = session.lock().await;

    let nav = state.wizard.restart(&mut session, row);
    Ok(Json(nav))
}

fn valid_row(row: u32) -> Result<u32, ApiError> {
    if row < 1 {
        return Err(ApiError::BadRequest(
            "row must be a positive integer".to_string(),
        ));
    }
    Ok(row)
}
