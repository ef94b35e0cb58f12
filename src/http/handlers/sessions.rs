use crate::domain::form::{CreateSessionRequest, FormEvent};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> impl IntoResponse {
    let view = state.form_service.create_session(req.mobile_runtime).await;
    (axum::http::StatusCode::CREATED, Json(view))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.form_service.view(session_id).await {
        Ok(view) => (axum::http::StatusCode::OK, Json(view)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn post_event(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(event): Json<FormEvent>,
) -> impl IntoResponse {
    match state.form_service.apply_event(session_id, event).await {
        Ok(view) => (axum::http::StatusCode::OK, Json(view)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn submit(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.form_service.submit(session_id).await {
        Ok(view) => (axum::http::StatusCode::OK, Json(view)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct QrParams {
    pub size: Option<u32>,
}

pub async fn get_qr(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<QrParams>,
) -> impl IntoResponse {
    let size = params.size.unwrap_or(200);
    match state.form_service.qr(session_id, size).await {
        Ok(qr) => (
            axum::http::StatusCode::OK,
            Json(serde_json::json!({ "data": qr.data })),
        )
            .into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
