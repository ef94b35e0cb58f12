use crate::domain::bank::Bank;
use anyhow::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct BankRegistry {
    pub banks: Arc<Vec<Bank>>,
}

impl BankRegistry {
    pub fn new(banks: Vec<Bank>) -> Self {
        Self { banks: Arc::new(banks) }
    }

    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let banks: Vec<Bank> = serde_json::from_str(&raw)?;
                anyhow::ensure!(!banks.is_empty(), "bank registry at {} is empty", path);
                Ok(Self::new(banks))
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            bank("hdfc", "HDFC Bank", &["HDFC BANK", "HDFC BANK LTD"], "@hdfcbank"),
            bank("icici", "ICICI Bank", &["ICICI BANK", "ICICI BANK LIMITED"], "@icici"),
            bank("sbi", "State Bank of India", &["STATE BANK OF INDIA", "SBI", "SBI CARDS AND PAYMENT SERVICES"], "@sbi"),
            bank("axis", "Axis Bank", &["AXIS BANK", "AXIS BANK LTD"], "@axisbank"),
            bank("kotak", "Kotak Mahindra Bank", &["KOTAK MAHINDRA BANK", "KOTAK BANK"], "@kotak"),
            bank("yes", "Yes Bank", &["YES BANK", "YES BANK LTD"], "@yesbank"),
            bank("idfc", "IDFC First Bank", &["IDFC FIRST BANK", "IDFC BANK"], "@idfcbank"),
            bank("indusind", "IndusInd Bank", &["INDUSIND BANK"], "@indus"),
        ])
    }

    pub fn find_by_issuer(&self, issuer: &str) -> Vec<&Bank> {
        self.banks.iter().filter(|b| b.matches_issuer(issuer)).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Bank> {
        self.banks.iter().find(|b| b.id == id)
    }
}

fn bank(id: &str, display_name: &str, aliases: &[&str], suffix: &str) -> Bank {
    Bank {
        id: id.to_string(),
        display_name: display_name.to_string(),
        issuer_aliases: aliases.iter().map(|a| a.to_string()).collect(),
        upi_handle_suffix: suffix.to_string(),
        logo_ref: format!("assets/banks/{}.svg", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_match_is_case_insensitive() {
        let registry = BankRegistry::builtin();
        let found = registry.find_by_issuer("hdfc bank ltd");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "hdfc");
    }

    #[test]
    fn unknown_issuer_matches_nothing() {
        let registry = BankRegistry::builtin();
        assert!(registry.find_by_issuer("SOME OTHER BANK").is_empty());
    }

    #[test]
    fn find_by_id_returns_registered_bank() {
        let registry = BankRegistry::builtin();
        assert_eq!(registry.find_by_id("icici").map(|b| b.display_name.as_str()), Some("ICICI Bank"));
        assert!(registry.find_by_id("nope").is_none());
    }
}
