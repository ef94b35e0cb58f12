use crate::classifier::CardClassifier;
use crate::domain::classification::{CardKind, ClassificationResult};
use anyhow::{Context, Result};
use serde::Deserialize;

pub struct BinTableClient {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct BinLookupResponse {
    #[serde(rename = "Scheme")]
    scheme: Option<String>,
    #[serde(rename = "Type")]
    card_type: Option<String>,
    #[serde(rename = "CardTier")]
    card_tier: Option<String>,
    #[serde(rename = "Country")]
    country: Option<CountryBlock>,
    #[serde(rename = "Issuer")]
    issuer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountryBlock {
    #[serde(rename = "A2")]
    a2: Option<String>,
}

#[async_trait::async_trait]
impl CardClassifier for BinTableClient {
    fn name(&self) -> &'static str {
        "bintable"
    }

    async fn classify(&self, prefix: &str) -> Result<ClassificationResult> {
        let url = format!("{}/bin/{}", self.base_url, prefix);
        let resp = self
            .client
            .get(url)
            .header("x-api-key", &self.api_key)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        anyhow::ensure!(resp.status().is_success(), "bin lookup returned {}", resp.status());

        let body: BinLookupResponse = resp.json().await?;
        normalize(body)
    }
}

fn normalize(body: BinLookupResponse) -> Result<ClassificationResult> {
    let issuer = body
        .issuer
        .filter(|s| !s.trim().is_empty())
        .context("bin lookup response missing issuer")?;
    let country_code = body
        .country
        .and_then(|c| c.a2)
        .filter(|s| !s.trim().is_empty())
        .context("bin lookup response missing country")?
        .to_ascii_uppercase();

    let card_kind = match body.card_type.as_deref() {
        Some(t) if t.eq_ignore_ascii_case("CREDIT") => CardKind::Credit,
        Some(t) if t.eq_ignore_ascii_case("DEBIT") => CardKind::Debit,
        _ => CardKind::Unknown,
    };

    Ok(ClassificationResult {
        network: body.scheme,
        issuer,
        tier: body.card_tier,
        card_kind,
        country_code,
    })
}
