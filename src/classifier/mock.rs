use crate::classifier::CardClassifier;
use crate::domain::classification::{CardKind, ClassificationResult};
use anyhow::Result;

pub struct MockClassifier {
    pub behavior: String,
    pub issuer: String,
}

#[async_trait::async_trait]
impl CardClassifier for MockClassifier {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn classify(&self, _prefix: &str) -> Result<ClassificationResult> {
        match self.behavior.as_str() {
            "ALWAYS_FAIL" => anyhow::bail!("mock lookup failure"),
            "DEBIT" => Ok(ClassificationResult {
                network: Some("VISA".to_string()),
                issuer: self.issuer.clone(),
                tier: Some("CLASSIC".to_string()),
                card_kind: CardKind::Debit,
                country_code: "IN".to_string(),
            }),
            "FOREIGN" => Ok(ClassificationResult {
                network: Some("VISA".to_string()),
                issuer: self.issuer.clone(),
                tier: Some("SIGNATURE".to_string()),
                card_kind: CardKind::Credit,
                country_code: "US".to_string(),
            }),
            _ => Ok(ClassificationResult {
                network: Some("VISA".to_string()),
                issuer: self.issuer.clone(),
                tier: Some("PLATINUM".to_string()),
                card_kind: CardKind::Credit,
                country_code: "IN".to_string(),
            }),
        }
    }
}
