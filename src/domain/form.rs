use crate::form::groups::InputGroup;
use crate::resolution::state::ResolutionState;
use crate::upi::payload::UpiPayload;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormEvent {
    EditMobileGroup { index: usize, value: String },
    EditCardGroup { index: usize, value: String },
    FocusMobileGroup { index: usize },
    FocusCardGroup { index: usize },
    SetAmount { value: String },
    SelectBank { bank_id: String },
    RequestManualSelection,
    Reset,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldErrors {
    pub mobile_number: Option<String>,
    pub card_number: Option<String>,
    pub amount: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.mobile_number.is_none() && self.card_number.is_none() && self.amount.is_none()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notice {
    Ineligible { message: String },
    ManualSelection { message: String },
    FieldError { field: String, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub session_id: Uuid,
    pub mobile_groups: Vec<InputGroup>,
    pub card_groups: Vec<InputGroup>,
    pub mobile_number: String,
    pub card_number: String,
    pub amount: String,
    pub bank_id: Option<String>,
    pub resolution: ResolutionState,
    pub manual_panel_visible: bool,
    pub notice: Option<Notice>,
    pub field_errors: FieldErrors,
    pub form_valid: bool,
    pub submitting: bool,
    pub payload: Option<UpiPayload>,
    pub can_launch: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub mobile_runtime: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
