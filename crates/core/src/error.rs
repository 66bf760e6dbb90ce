/// Failure of a call to the external text-generation service.
///
/// Every variant is absorbed at the request boundary and turned into a
/// canned message (see [`crate::messages::user_message`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Model call timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("{0}")]
    Unknown(String),
}

impl ModelError {
    /// Classify a non-success HTTP status returned by the model service.
    ///
    /// 429, 400 and 403 get their own kinds; anything else is `Unknown`.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            429 => Self::RateLimited(detail),
            400 => Self::BadRequest(detail),
            403 => Self::Forbidden(detail),
            other => Self::Unknown(format!("HTTP {other}: {detail}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn status_429_is_rate_limited() {
        assert_matches!(
            ModelError::from_status(429, "quota"),
            ModelError::RateLimited(msg) if msg == "quota"
        );
    }

    #[test]
    fn status_400_is_bad_request() {
        assert_matches!(ModelError::from_status(400, "x"), ModelError::BadRequest(_));
    }

    #[test]
    fn status_403_is_forbidden() {
        assert_matches!(ModelError::from_status(403, "x"), ModelError::Forbidden(_));
    }

    #[test]
    fn other_statuses_are_unknown() {
        assert_matches!(
            ModelError::from_status(503, "overloaded"),
            ModelError::Unknown(msg) if msg == "HTTP 503: overloaded"
        );
        assert_matches!(ModelError::from_status(500, ""), ModelError::Unknown(_));
    }

    #[test]
    fn display_timeout() {
        let err = ModelError::Timeout { secs: 30 };
        assert_eq!(err.to_string(), "Model call timed out after 30s");
    }
}
