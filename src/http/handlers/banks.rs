use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BankView {
    pub id: String,
    pub display_name: String,
    pub upi_handle_suffix: String,
    pub logo_ref: String,
}

pub async fn list_banks(State(state): State<AppState>) -> impl IntoResponse {
    let resp: Vec<BankView> = state
        .form_service
        .registry
        .banks
        .iter()
        .map(|b| BankView {
            id: b.id.clone(),
            display_name: b.display_name.clone(),
            upi_handle_suffix: b.upi_handle_suffix.clone(),
            logo_ref: b.logo_ref.clone(),
        })
        .collect();
    (axum::http::StatusCode::OK, Json(resp))
}
