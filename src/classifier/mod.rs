use crate::domain::classification::ClassificationResult;
use anyhow::Result;

pub mod bintable;
pub mod mock;

pub const MIN_LOOKUP_DIGITS: usize = 6;

#[async_trait::async_trait]
pub trait CardClassifier: Send + Sync {
    fn name(&self) -> &'static str;

    async fn classify(&self, prefix: &str) -> Result<ClassificationResult>;
}
