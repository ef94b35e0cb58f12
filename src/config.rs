#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bin_lookup_base_url: String,
    pub bin_lookup_api_key: String,
    pub bin_lookup_timeout_ms: u64,
    pub bank_registry_path: Option<String>,
    pub submit_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            bin_lookup_base_url: std::env::var("BIN_LOOKUP_BASE_URL")
                .unwrap_or_else(|_| "https://api.bintable.com".to_string()),
            bin_lookup_api_key: std::env::var("BIN_LOOKUP_API_KEY").unwrap_or_default(),
            bin_lookup_timeout_ms: std::env::var("BIN_LOOKUP_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            bank_registry_path: std::env::var("BANK_REGISTRY_PATH").ok(),
            submit_delay_ms: std::env::var("SUBMIT_DELAY_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1500),
        }
    }
}
