use crate::classifier::MIN_LOOKUP_DIGITS;
use crate::domain::classification::ClassificationResult;
use crate::domain::form::{FieldErrors, FormEvent, FormView, Notice};
use crate::form::groups::GroupRow;
use crate::registry::BankRegistry;
use crate::resolution::state::{ManualReason, ResolutionState};
use crate::resolution::transitions;
use crate::upi::payload::{self, UpiPayload};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    InvalidGroupIndex,
    UnknownBank,
}

#[derive(Debug, Clone)]
pub struct FormSession {
    pub id: Uuid,
    pub mobile_groups: GroupRow,
    pub card_groups: GroupRow,
    pub amount: String,
    pub resolution: ResolutionState,
    pub field_errors: FieldErrors,
    pub submitting: bool,
    pub mobile_runtime: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FormSession {
    pub fn new(mobile_runtime: bool) -> Self {
        let now = Utc::now();
        let mut mobile_groups = GroupRow::mobile();
        mobile_groups.set_focus(0);
        Self {
            id: Uuid::new_v4(),
            mobile_groups,
            card_groups: GroupRow::card(),
            amount: String::new(),
            resolution: ResolutionState::Idle,
            field_errors: FieldErrors::default(),
            submitting: false,
            mobile_runtime,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(
        &mut self,
        event: FormEvent,
        registry: &BankRegistry,
    ) -> Result<Option<String>, EventError> {
        let lookup = match event {
            FormEvent::EditMobileGroup { index, value } => {
                if index >= self.mobile_groups.groups.len() {
                    return Err(EventError::InvalidGroupIndex);
                }
                self.mobile_groups.edit(index, &value);
                self.field_errors.mobile_number = None;
                None
            }
            FormEvent::EditCardGroup { index, value } => {
                if index >= self.card_groups.groups.len() {
                    return Err(EventError::InvalidGroupIndex);
                }
                self.card_groups.edit(index, &value);
                self.field_errors.card_number = None;
                self.restart_resolution()
            }
            FormEvent::FocusMobileGroup { index } => {
                if index >= self.mobile_groups.groups.len() {
                    return Err(EventError::InvalidGroupIndex);
                }
                self.mobile_groups.set_focus(index);
                None
            }
            FormEvent::FocusCardGroup { index } => {
                if index >= self.card_groups.groups.len() {
                    return Err(EventError::InvalidGroupIndex);
                }
                self.card_groups.set_focus(index);
                None
            }
            FormEvent::SetAmount { value } => {
                self.amount = value;
                self.field_errors.amount = None;
                None
            }
            FormEvent::SelectBank { bank_id } => {
                if registry.find_by_id(&bank_id).is_none() {
                    return Err(EventError::UnknownBank);
                }
                if self.resolution.needs_manual() {
                    let classification = self.resolution.classification().cloned();
                    self.resolution = ResolutionState::Resolved {
                        bank_id,
                        manual: true,
                        classification,
                    };
                    self.field_errors.card_number = None;
                }
                None
            }
            FormEvent::RequestManualSelection => {
                if self.resolution.is_resolved() {
                    let classification = self.resolution.classification().cloned();
                    self.resolution = ResolutionState::NeedsManual {
                        reason: ManualReason::UserRequested,
                        classification,
                    };
                }
                None
            }
            FormEvent::Reset => {
                self.reset();
                None
            }
        };
        self.updated_at = Utc::now();
        Ok(lookup)
    }

    // A classification is only valid for the exact card number it was issued
    // for, so every card edit restarts the pipeline.
    fn restart_resolution(&mut self) -> Option<String> {
        let card = self.card_groups.assembled();
        if card.len() >= MIN_LOOKUP_DIGITS {
            self.resolution = ResolutionState::Pending { prefix: card.clone() };
            Some(card)
        } else {
            self.resolution = ResolutionState::Idle;
            None
        }
    }

    pub fn apply_lookup(
        &mut self,
        issued_for: &str,
        outcome: anyhow::Result<ClassificationResult>,
        registry: &BankRegistry,
    ) -> bool {
        if self.card_groups.assembled() != issued_for {
            return false;
        }
        self.resolution = match outcome {
            Ok(classification) => transitions::outcome_for(&classification, registry),
            Err(_) => transitions::lookup_failed(),
        };
        self.updated_at = Utc::now();
        true
    }

    pub fn reset(&mut self) {
        self.mobile_groups = GroupRow::mobile();
        self.mobile_groups.set_focus(0);
        self.card_groups = GroupRow::card();
        self.amount.clear();
        self.resolution = ResolutionState::Idle;
        self.field_errors = FieldErrors::default();
        self.submitting = false;
    }

    pub fn form_valid(&self) -> bool {
        payload::is_complete_card(&self.card_groups.assembled())
            && payload::is_complete_mobile(&self.mobile_groups.assembled())
            && self.resolution.is_resolved()
            && payload::is_valid_amount(&self.amount)
    }

    pub fn validate_for_submit(&mut self) -> bool {
        let mut ok = true;
        if !payload::is_complete_mobile(&self.mobile_groups.assembled()) {
            self.field_errors.mobile_number =
                Some("Enter a valid 10-digit mobile number".to_string());
            ok = false;
        }
        if !payload::is_complete_card(&self.card_groups.assembled()) {
            self.field_errors.card_number = Some("Enter a valid 16-digit card number".to_string());
            ok = false;
        }
        if !payload::is_valid_amount(&self.amount) {
            self.field_errors.amount = Some("Enter a valid amount".to_string());
            ok = false;
        }
        match &self.resolution {
            ResolutionState::Resolved { .. } => {}
            ResolutionState::NeedsManual { .. } => {
                self.field_errors.card_number = Some("Please select your card issuer".to_string());
                ok = false;
            }
            ResolutionState::Rejected { reason, .. } => {
                self.field_errors.card_number = Some(reason.message().to_string());
                ok = false;
            }
            ResolutionState::Idle | ResolutionState::Pending { .. } => {
                self.field_errors.card_number = Some("Card verification required".to_string());
                ok = false;
            }
        }
        ok
    }

    pub fn payload(&self, registry: &BankRegistry) -> Option<UpiPayload> {
        if !self.form_valid() {
            return None;
        }
        let bank = registry.find_by_id(self.resolution.bank_id()?)?;
        Some(payload::build(&self.mobile_groups.assembled(), bank, &self.amount))
    }

    pub fn notice(&self) -> Option<Notice> {
        match &self.resolution {
            ResolutionState::Rejected { reason, .. } => {
                return Some(Notice::Ineligible { message: reason.message().to_string() });
            }
            ResolutionState::NeedsManual { reason, .. } => {
                return Some(Notice::ManualSelection { message: reason.prompt().to_string() });
            }
            _ => {}
        }
        let fields = [
            ("mobile_number", &self.field_errors.mobile_number),
            ("card_number", &self.field_errors.card_number),
            ("amount", &self.field_errors.amount),
        ];
        for (field, error) in fields {
            if let Some(message) = error {
                return Some(Notice::FieldError {
                    field: field.to_string(),
                    message: message.clone(),
                });
            }
        }
        None
    }

    pub fn view(&self, registry: &BankRegistry) -> FormView {
        let form_valid = self.form_valid();
        FormView {
            session_id: self.id,
            mobile_groups: self.mobile_groups.groups.clone(),
            card_groups: self.card_groups.groups.clone(),
            mobile_number: self.mobile_groups.assembled(),
            card_number: self.card_groups.assembled(),
            amount: self.amount.clone(),
            bank_id: self.resolution.bank_id().map(str::to_string),
            resolution: self.resolution.clone(),
            manual_panel_visible: self.resolution.needs_manual(),
            notice: self.notice(),
            field_errors: self.field_errors.clone(),
            form_valid,
            submitting: self.submitting,
            payload: self.payload(registry),
            can_launch: form_valid && self.mobile_runtime,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
