use crate::domain::bank::Bank;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpiPayload {
    pub virtual_address: String,
    pub deep_link: String,
}

pub fn is_complete_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit())
}

pub fn is_complete_card(card: &str) -> bool {
    card.len() == 16 && card.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_amount(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }
    if !raw.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    if raw.chars().filter(|c| *c == '.').count() > 1 {
        return false;
    }
    raw.parse::<f64>().map(|v| v > 0.0).unwrap_or(false)
}

pub fn virtual_address(mobile: &str, bank: &Bank) -> String {
    format!("{}{}", mobile, bank.upi_handle_suffix)
}

pub fn deep_link(virtual_address: &str, payee_name: &str, amount: &str) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR",
        virtual_address, payee_name, amount
    )
}

pub fn build(mobile: &str, bank: &Bank, amount: &str) -> UpiPayload {
    let virtual_address = virtual_address(mobile, bank);
    let deep_link = deep_link(&virtual_address, &bank.display_name, amount);
    UpiPayload {
        virtual_address,
        deep_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_rejects_empty_zero_and_malformed() {
        assert!(!is_valid_amount(""));
        assert!(!is_valid_amount("0"));
        assert!(!is_valid_amount("0.00"));
        assert!(!is_valid_amount("."));
        assert!(!is_valid_amount("12.3.4"));
        assert!(!is_valid_amount("1e5"));
        assert!(!is_valid_amount("-5"));
        assert!(is_valid_amount("1"));
        assert!(is_valid_amount("250.50"));
    }

    #[test]
    fn mobile_and_card_completeness() {
        assert!(is_complete_mobile("9876543210"));
        assert!(!is_complete_mobile("987654321"));
        assert!(is_complete_card("4111111111111111"));
        assert!(!is_complete_card("411111111111111"));
    }
}
