//! v1 JSON API behind the form page.
//!
//! Endpoints:
//! - `GET  /v1/form`         — subject catalog, defaults, input limits
//! - `POST /v1/summary`      — quick statistics for the current inputs
//! - `POST /v1/plan`         — validate, then generate a study plan
//! - `POST /v1/plan/export`  — plan text as a downloadable `.txt` attachment

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use studyplan_core::{AllocationEntry, Error, FormLimits, PlanSummary, StudyRequest};
use tracing::{info, warn};

use crate::SharedState;

/// Build the v1 router.
pub fn v1_router(state: SharedState) -> Router {
    Router::new()
        .route("/form", get(form_handler))
        .route("/summary", post(summary_handler))
        .route("/plan", post(plan_handler))
        .route("/plan/export", post(export_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct FormResponse {
    pub catalog: Vec<String>,
    pub defaults: StudyRequest,
    pub limits: FormLimits,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan: String,
    pub allocation: Vec<AllocationEntry>,
    pub file_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRequest {
    pub class_level: String,
    pub plan: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error onto an HTTP status and a JSON body.
fn api_error(err: &Error) -> ApiError {
    let status = match err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::Upstream(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn form_handler(State(state): State<SharedState>) -> Json<FormResponse> {
    let form = &state.form;
    Json(FormResponse {
        catalog: form.catalog.clone(),
        defaults: StudyRequest {
            class_level: form.default_class_level.clone(),
            subjects: form.default_subjects.clone(),
            weak_subjects: form.default_weak_subjects.clone(),
            daily_hours: form.default_daily_hours,
            exam_days: form.default_exam_days,
        },
        limits: form.limits.clone(),
    })
}

async fn summary_handler(Json(request): Json<StudyRequest>) -> Json<PlanSummary> {
    Json(request.summary())
}

async fn plan_handler(
    State(state): State<SharedState>,
    Json(request): Json<StudyRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    info!(class_level = %request.class_level, "v1/plan request");

    state
        .form
        .limits
        .validate(&request)
        .map_err(|e| api_error(&Error::from(e)))?;

    let generated = state.planner.generate_detailed(&request).await.map_err(|e| {
        warn!(error = %e, "Plan generation failed");
        api_error(&e)
    })?;

    Ok(Json(PlanResponse {
        plan: generated.plan,
        allocation: generated.allocation,
        file_name: request.export_file_name(),
    }))
}

async fn export_handler(Json(payload): Json<ExportRequest>) -> Response {
    let file_name = studyplan_core::export_file_name(&payload.class_level);
    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
        ],
        payload.plan,
    )
        .into_response()
}

/// `attachment; filename="..."`, restricted to characters a header value may carry.
fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
