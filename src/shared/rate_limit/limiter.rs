use async_trait::async_trait;

use crate::shared::config::{parse_or, ConfigError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u64,
    pub window_secs: u64,
}

impl RateLimitConfig {
    /// 100 requests per client per 15 minutes unless overridden.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_requests = parse_or("RATE_LIMIT_MAX_REQUESTS", 100u64)?;
        let window_secs = parse_or("RATE_LIMIT_WINDOW_SECS", 15 * 60u64)?;

        if max_requests == 0 {
            return Err(ConfigError::Invalid {
                key: "RATE_LIMIT_MAX_REQUESTS",
                reason: "must be greater than zero".to_string(),
            });
        }
        if window_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "RATE_LIMIT_WINDOW_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            max_requests,
            window_secs,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: u64 },
    Limited { retry_after_secs: u64 },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RateLimitError {
    #[error("Rate limit backend unavailable: {0}")]
    Backend(String),
}

/// Fixed-window counter keyed by client identity.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn check(&self, client_key: &str) -> Result<RateLimitDecision, RateLimitError>;
}
