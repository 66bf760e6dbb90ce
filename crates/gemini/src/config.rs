/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default REST root for `generateContent` calls.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Connection settings for the hosted model.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key. May be empty; the service then rejects calls at request time.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Timeout for a single outbound call, in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `API_KEY`            | empty                   |
    /// | `GEMINI_MODEL`       | `gemini-1.5-flash`      |
    /// | `GEMINI_BASE_URL`    | Google v1beta models    |
    /// | `MODEL_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let api_key = std::env::var("API_KEY").unwrap_or_default();
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("MODEL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("MODEL_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        }
    }

    /// Full `generateContent` URL for the configured model (key excluded).
    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}
