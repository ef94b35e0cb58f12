use crate::domain::classification::ClassificationResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    NonCreditCard,
    ForeignCard,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::NonCreditCard => "Only credit cards are accepted",
            RejectReason::ForeignCard => "Only domestic credit cards are accepted",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManualReason {
    LookupFailed,
    NoRegistryMatch,
    UserRequested,
}

impl ManualReason {
    pub fn prompt(&self) -> &'static str {
        match self {
            ManualReason::LookupFailed => {
                "Auto-detection failed. Please select your issuer manually"
            }
            ManualReason::NoRegistryMatch => {
                "We are unable to automatically detect your issuer. Kindly select your bank manually"
            }
            ManualReason::UserRequested => "Select your card issuer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionState {
    Idle,
    Pending {
        prefix: String,
    },
    Resolved {
        bank_id: String,
        manual: bool,
        classification: Option<ClassificationResult>,
    },
    NeedsManual {
        reason: ManualReason,
        classification: Option<ClassificationResult>,
    },
    Rejected {
        reason: RejectReason,
        classification: ClassificationResult,
    },
}

impl ResolutionState {
    pub fn bank_id(&self) -> Option<&str> {
        match self {
            ResolutionState::Resolved { bank_id, .. } => Some(bank_id),
            _ => None,
        }
    }

    pub fn classification(&self) -> Option<&ClassificationResult> {
        match self {
            ResolutionState::Resolved { classification, .. }
            | ResolutionState::NeedsManual { classification, .. } => classification.as_ref(),
            ResolutionState::Rejected { classification, .. } => Some(classification),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionState::Resolved { .. })
    }

    pub fn needs_manual(&self) -> bool {
        matches!(self, ResolutionState::NeedsManual { .. })
    }
}
