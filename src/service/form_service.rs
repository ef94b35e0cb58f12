use crate::classifier::CardClassifier;
use crate::domain::form::{ErrorEnvelope, ErrorPayload, FormEvent, FormView};
use crate::form::session::{EventError, FormSession};
use crate::registry::BankRegistry;
use crate::upi::qr::QrImage;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Clone)]
pub struct FormService {
    pub registry: BankRegistry,
    pub classifier: Arc<dyn CardClassifier>,
    pub submit_delay_ms: u64,
    sessions: Arc<Mutex<HashMap<Uuid, FormSession>>>,
}

impl FormService {
    pub fn new(
        registry: BankRegistry,
        classifier: Arc<dyn CardClassifier>,
        submit_delay_ms: u64,
    ) -> Self {
        Self {
            registry,
            classifier,
            submit_delay_ms,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn create_session(&self, mobile_runtime: bool) -> FormView {
        let session = FormSession::new(mobile_runtime);
        let view = session.view(&self.registry);
        self.sessions.lock().await.insert(session.id, session);
        view
    }

    pub async fn view(
        &self,
        session_id: Uuid,
    ) -> Result<FormView, (axum::http::StatusCode, ErrorEnvelope)> {
        let sessions = self.sessions.lock().await;
        let session = sessions.get(&session_id).ok_or_else(not_found)?;
        Ok(session.view(&self.registry))
    }

    pub async fn apply_event(
        &self,
        session_id: Uuid,
        event: FormEvent,
    ) -> Result<FormView, (axum::http::StatusCode, ErrorEnvelope)> {
        let (view, lookup) = {
            let mut sessions = self.sessions.lock().await;
            let session = sessions.get_mut(&session_id).ok_or_else(not_found)?;
            let lookup = session.apply(event, &self.registry).map_err(event_error)?;
            (session.view(&self.registry), lookup)
        };

        if let Some(prefix) = lookup {
            let service = self.clone();
            tokio::spawn(async move { service.run_lookup(session_id, prefix).await });
        }

        Ok(view)
    }

    pub async fn run_lookup(&self, session_id: Uuid, prefix: String) {
        let outcome = self.classifier.classify(&prefix).await;
        if let Err(err) = &outcome {
            tracing::warn!("card classification failed for session {}: {}", session_id, err);
        }

        let mut sessions = self.sessions.lock().await;
        if let Some(session) = sessions.get_mut(&session_id) {
            if !session.apply_lookup(&prefix, outcome, &self.registry) {
                tracing::debug!("discarding stale lookup result for session {}", session_id);
            }
        }
    }

    pub async fn submit(
        &self,
        session_id: Uuid,
    ) -> Result<FormView, (axum::http::StatusCode, ErrorEnvelope)> {
        let view = {
            let mut sessions = self.sessions.lock().await;
            let session = sessions.get_mut(&session_id).ok_or_else(not_found)?;

            if session.submitting {
                return Err((
                    axum::http::StatusCode::CONFLICT,
                    err("SUBMIT_IN_PROGRESS", "a submission is already being processed"),
                ));
            }
            if !session.validate_for_submit() {
                return Err((
                    axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                    err("FORM_INVALID", "form is not ready for submission"),
                ));
            }

            session.submitting = true;
            session.view(&self.registry)
        };

        let service = self.clone();
        let delay = self.submit_delay_ms;
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
            let mut sessions = service.sessions.lock().await;
            if let Some(session) = sessions.get_mut(&session_id) {
                session.submitting = false;
            }
        });

        Ok(view)
    }

    pub async fn qr(
        &self,
        session_id: Uuid,
        size: u32,
    ) -> Result<QrImage, (axum::http::StatusCode, ErrorEnvelope)> {
        let payload = {
            let sessions = self.sessions.lock().await;
            let session = sessions.get(&session_id).ok_or_else(not_found)?;
            session.payload(&self.registry)
        };

        let payload = payload.ok_or_else(|| {
            (
                axum::http::StatusCode::CONFLICT,
                err("FORM_INCOMPLETE", "form is not ready for a payment request"),
            )
        })?;

        QrImage::new_from_data(&payload.deep_link, size).map_err(|e| {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                err("QR_RENDER_FAILED", &e.to_string()),
            )
        })
    }
}

fn event_error(error: EventError) -> (axum::http::StatusCode, ErrorEnvelope) {
    match error {
        EventError::InvalidGroupIndex => (
            axum::http::StatusCode::BAD_REQUEST,
            err("INVALID_GROUP_INDEX", "group index out of range"),
        ),
        EventError::UnknownBank => (
            axum::http::StatusCode::BAD_REQUEST,
            err("UNKNOWN_BANK", "bank id is not in the registry"),
        ),
    }
}

fn not_found() -> (axum::http::StatusCode, ErrorEnvelope) {
    (
        axum::http::StatusCode::NOT_FOUND,
        err("SESSION_NOT_FOUND", "no session with that id"),
    )
}

fn err(code: &str, message: &str) -> ErrorEnvelope {
    ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
        },
    }
}
