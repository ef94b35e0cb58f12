use upi_checkout::domain::bank::Bank;
use upi_checkout::domain::classification::{CardKind, ClassificationResult};
use upi_checkout::registry::BankRegistry;
use upi_checkout::resolution::state::{ManualReason, RejectReason, ResolutionState};
use upi_checkout::resolution::transitions::{lookup_failed, outcome_for};

#[test]
fn registered_issuer_resolves_automatically() {
    let registry = BankRegistry::builtin();
    let out = outcome_for(&credit_in("HDFC BANK"), &registry);
    match out {
        ResolutionState::Resolved { bank_id, manual, classification } => {
            assert_eq!(bank_id, "hdfc");
            assert!(!manual);
            assert!(classification.is_some());
        }
        other => panic!("expected resolved, got {:?}", other),
    }
}

#[test]
fn unregistered_issuer_needs_manual_selection_with_context() {
    let registry = BankRegistry::builtin();
    let out = outcome_for(&credit_in("UNKNOWN BANK X"), &registry);
    match out {
        ResolutionState::NeedsManual { reason, classification } => {
            assert_eq!(reason, ManualReason::NoRegistryMatch);
            let c = classification.expect("classification context kept");
            assert_eq!(c.network.as_deref(), Some("VISA"));
            assert_eq!(c.tier.as_deref(), Some("PLATINUM"));
        }
        other => panic!("expected manual, got {:?}", other),
    }
}

#[test]
fn debit_card_is_a_hard_stop() {
    let registry = BankRegistry::builtin();
    let mut c = credit_in("HDFC BANK");
    c.card_kind = CardKind::Debit;
    assert!(matches!(
        outcome_for(&c, &registry),
        ResolutionState::Rejected { reason: RejectReason::NonCreditCard, .. }
    ));
}

#[test]
fn unknown_card_kind_is_a_hard_stop() {
    let registry = BankRegistry::builtin();
    let mut c = credit_in("HDFC BANK");
    c.card_kind = CardKind::Unknown;
    assert!(matches!(
        outcome_for(&c, &registry),
        ResolutionState::Rejected { reason: RejectReason::NonCreditCard, .. }
    ));
}

#[test]
fn foreign_card_is_a_hard_stop() {
    let registry = BankRegistry::builtin();
    let mut c = credit_in("HDFC BANK");
    c.country_code = "US".to_string();
    assert!(matches!(
        outcome_for(&c, &registry),
        ResolutionState::Rejected { reason: RejectReason::ForeignCard, .. }
    ));
}

#[test]
fn ambiguous_alias_match_needs_manual_selection() {
    let registry = BankRegistry::new(vec![
        bank("one", "Bank One", &["SHARED ALIAS"]),
        bank("two", "Bank Two", &["SHARED ALIAS"]),
    ]);
    assert!(matches!(
        outcome_for(&credit_in("SHARED ALIAS"), &registry),
        ResolutionState::NeedsManual { reason: ManualReason::NoRegistryMatch, .. }
    ));
}

#[test]
fn issuer_matching_is_case_insensitive() {
    let registry = BankRegistry::builtin();
    assert!(outcome_for(&credit_in("hdfc bank"), &registry).is_resolved());
}

#[test]
fn resolution_is_idempotent() {
    let registry = BankRegistry::builtin();
    let first = outcome_for(&credit_in("HDFC BANK"), &registry);
    let second = outcome_for(&credit_in("HDFC BANK"), &registry);
    assert_eq!(first, second);
}

#[test]
fn lookup_failure_discards_prior_context() {
    let out = lookup_failed();
    match out {
        ResolutionState::NeedsManual { reason, classification } => {
            assert_eq!(reason, ManualReason::LookupFailed);
            assert!(classification.is_none());
        }
        other => panic!("expected manual, got {:?}", other),
    }
}

fn credit_in(issuer: &str) -> ClassificationResult {
    ClassificationResult {
        network: Some("VISA".to_string()),
        issuer: issuer.to_string(),
        tier: Some("PLATINUM".to_string()),
        card_kind: CardKind::Credit,
        country_code: "IN".to_string(),
    }
}

fn bank(id: &str, name: &str, aliases: &[&str]) -> Bank {
    Bank {
        id: id.to_string(),
        display_name: name.to_string(),
        issuer_aliases: aliases.iter().map(|a| a.to_string()).collect(),
        upi_handle_suffix: format!("@{}", id),
        logo_ref: format!("assets/banks/{}.svg", id),
    }
}
