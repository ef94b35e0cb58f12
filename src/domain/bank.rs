use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bank {
    pub id: String,
    pub display_name: String,
    pub issuer_aliases: Vec<String>,
    pub upi_handle_suffix: String,
    pub logo_ref: String,
}

impl Bank {
    pub fn matches_issuer(&self, issuer: &str) -> bool {
        self.issuer_aliases
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(issuer))
    }
}
