use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use advisor_core::relay::COMPARISON_STYLES;
use advisor_gemini::GeminiConfig;

/// Headroom added on top of the worst-case `/test-prompts` run.
const DIAGNOSTICS_SLACK_SECS: u64 = 5;

/// Process settings for the advisor server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS (`CORS_ORIGINS`, comma separated).
    pub cors_origins: Vec<String>,
    /// Upper bound on a single request, except `/test-prompts`.
    pub request_timeout_secs: u64,
    /// Directory holding `css/`, `js/` and `images/`.
    pub static_dir: PathBuf,
    /// Pause after each successful `/test-prompts` model call.
    pub test_prompts_delay_ms: u64,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// Read settings from the process environment.
    ///
    /// | Variable                | Fallback                 |
    /// |-------------------------|--------------------------|
    /// | `HOST`                  | `0.0.0.0`                |
    /// | `PORT`                  | `3000`                   |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `60`                     |
    /// | `STATIC_DIR`            | `public`                 |
    /// | `TEST_PROMPTS_DELAY_MS` | `1000`                   |
    ///
    /// An unparseable number stops startup. Model settings are read by
    /// [`GeminiConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            host: text_setting("HOST", "0.0.0.0"),
            port: numeric_setting("PORT", 3000),
            cors_origins: split_origins(&text_setting("CORS_ORIGINS", "http://localhost:3000")),
            request_timeout_secs: numeric_setting("REQUEST_TIMEOUT_SECS", 60),
            static_dir: text_setting("STATIC_DIR", "public").into(),
            test_prompts_delay_ms: numeric_setting("TEST_PROMPTS_DELAY_MS", 1000),
            gemini: GeminiConfig::from_env(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Budget for `/test-prompts`: one model timeout plus one spacing pause
    /// per compared style. Never shorter than [`Self::request_timeout`].
    pub fn diagnostics_timeout(&self) -> Duration {
        let per_style = Duration::from_secs(self.gemini.timeout_secs)
            + Duration::from_millis(self.test_prompts_delay_ms);
        let worst_case = per_style * COMPARISON_STYLES.len() as u32
            + Duration::from_secs(DIAGNOSTICS_SLACK_SECS);
        worst_case.max(self.request_timeout())
    }
}

fn text_setting(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn numeric_setting<T>(key: &str, fallback: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match parse_setting(key, std::env::var(key).ok(), fallback) {
        Ok(value) => value,
        Err(msg) => panic!("{msg}"),
    }
}

fn parse_setting<T>(key: &str, raw: Option<String>, fallback: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(fallback),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{key}={raw:?} is not usable: {e}")),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(request_timeout_secs: u64, model_secs: u64, delay_ms: u64) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: Vec::new(),
            request_timeout_secs,
            static_dir: "public".into(),
            test_prompts_delay_ms: delay_ms,
            gemini: GeminiConfig {
                api_key: String::new(),
                model: "m".into(),
                base_url: "http://127.0.0.1:9".into(),
                timeout_secs: model_secs,
            },
        }
    }

    #[test]
    fn diagnostics_budget_covers_every_style() {
        // 3 * (30s + 1s) + 5s
        assert_eq!(config(60, 30, 1000).diagnostics_timeout(), Duration::from_secs(98));
    }

    #[test]
    fn diagnostics_budget_never_below_request_timeout() {
        assert_eq!(config(60, 1, 0).diagnostics_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn unset_setting_falls_back() {
        assert_eq!(parse_setting::<u16>("PORT", None, 3000), Ok(3000));
    }

    #[test]
    fn set_setting_is_parsed() {
        assert_eq!(parse_setting::<u64>("X", Some(" 42 ".into()), 1), Ok(42));
        let err = parse_setting::<u16>("PORT", Some("http".into()), 3000).unwrap_err();
        assert!(err.starts_with("PORT=\"http\""));
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            split_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
