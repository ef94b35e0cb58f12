use crate::domain::classification::{CardKind, ClassificationResult};
use crate::registry::BankRegistry;
use crate::resolution::state::{ManualReason, RejectReason, ResolutionState};

pub fn outcome_for(classification: &ClassificationResult, registry: &BankRegistry) -> ResolutionState {
    if classification.card_kind != CardKind::Credit {
        return ResolutionState::Rejected {
            reason: RejectReason::NonCreditCard,
            classification: classification.clone(),
        };
    }

    if classification.country_code != "IN" {
        return ResolutionState::Rejected {
            reason: RejectReason::ForeignCard,
            classification: classification.clone(),
        };
    }

    let matches = registry.find_by_issuer(&classification.issuer);
    match matches.as_slice() {
        [bank] => ResolutionState::Resolved {
            bank_id: bank.id.clone(),
            manual: false,
            classification: Some(classification.clone()),
        },
        _ => ResolutionState::NeedsManual {
            reason: ManualReason::NoRegistryMatch,
            classification: Some(classification.clone()),
        },
    }
}

pub fn lookup_failed() -> ResolutionState {
    ResolutionState::NeedsManual {
        reason: ManualReason::LookupFailed,
        classification: None,
    }
}
