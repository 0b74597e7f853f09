//! HTTP assessment API
//!
//! Two routes: submit an assessment and fetch a stored one. The handlers own
//! all request validation; the computation pipeline only ever sees input that
//! passed it.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::request::AssessmentRequest;
use crate::storage::{AssessmentStore, NewAssessment};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssessmentStore>,
}

/// Build the API router over a store
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/assessment", post(submit_assessment))
        .route("/api/assessment/{id}", get(get_assessment))
        .with_state(state)
}

/// Bind and serve until interrupted
pub async fn run(config: &ServerConfig, store: Arc<dyn AssessmentStore>) -> anyhow::Result<()> {
    let app = router(AppState { store });
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}

fn bad_request(message: &str, errors: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message, "errors": errors })),
    )
        .into_response()
}

async fn submit_assessment(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let request: AssessmentRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(err) => return bad_request("Invalid assessment data", vec![err.to_string()]),
    };

    let errors = request.validate();
    if !errors.is_empty() {
        return bad_request("Invalid assessment data", errors);
    }

    let result = match request.analyze() {
        Ok(result) => result,
        Err(err) => {
            error!("error processing assessment: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to process assessment" })),
            )
                .into_response();
        }
    };

    // Optional calculator outputs are stored as serialized strings next to
    // the full result blob, mirroring the assessment table's columns
    let sei_mei_result = result
        .sei_mei_result
        .as_ref()
        .and_then(|r| serde_json::to_string(r).ok());
    let four_pillars_result = result
        .four_pillars_result
        .as_ref()
        .and_then(|r| serde_json::to_string(r).ok());

    let result_json = match serde_json::to_value(&result) {
        Ok(value) => value,
        Err(err) => {
            error!("error serializing assessment result: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "message": "Failed to process assessment" })),
            )
                .into_response();
        }
    };

    let record = state.store.create_assessment(NewAssessment {
        full_name: request.full_name.clone(),
        birth_year: request.birth_year,
        birth_month: request.birth_month,
        birth_day: request.birth_day,
        gender: request.gender.as_str().to_string(),
        life_focus: request.life_focus.clone(),
        challenges: request.challenges.clone().unwrap_or_default(),
        strengths: request.strengths.clone(),
        mbti_responses: request.mbti_responses.clone(),
        first_name_kanji: request.first_name_kanji.clone(),
        last_name_kanji: request.last_name_kanji.clone(),
        birth_hour: request.birth_hour,
        birth_minute: request.birth_minute,
        mbti_type: result.mbti_result.temperament.code().to_string(),
        sanmei_type: result.sanmei_result.full_type.clone(),
        type_nickname: result.type_nickname.clone(),
        sei_mei_result,
        four_pillars_result,
        result_json,
    });

    info!(
        id = record.id,
        mbti_type = %record.assessment.mbti_type,
        "assessment created"
    );

    (
        StatusCode::OK,
        Json(json!({ "success": true, "assessment": record, "result": result })),
    )
        .into_response()
}

async fn get_assessment(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id: u64 = match id.parse() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid ID", Vec::new()),
    };

    match state.store.get_assessment(id) {
        Some(record) => (
            StatusCode::OK,
            Json(json!({ "success": true, "assessment": record })),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Assessment not found" })),
        )
            .into_response(),
    }
}
