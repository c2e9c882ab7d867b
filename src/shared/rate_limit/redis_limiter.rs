use async_trait::async_trait;
use deadpool_redis::{redis, Pool};
use std::sync::Arc;

use super::limiter::{RateLimitConfig, RateLimitDecision, RateLimitError, RateLimiter};

#[derive(Clone)]
pub struct RedisRateLimiter {
    pool: Arc<Pool>,
    config: RateLimitConfig,
}

impl RedisRateLimiter {
    pub fn new(pool: Arc<Pool>, config: RateLimitConfig) -> Self {
        Self { pool, config }
    }

    fn key(client_key: &str) -> String {
        format!("rate_limit:{}", client_key)
    }
}

#[async_trait]
impl RateLimiter for RedisRateLimiter {
    async fn check(&self, client_key: &str) -> Result<RateLimitDecision, RateLimitError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| RateLimitError::Backend(e.to_string()))?;

        let key = Self::key(client_key);

        // SET NX opens the window exactly once; INCR counts inside it.
        let (count, ttl): (u64, i64) = redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&key)
            .arg(0)
            .arg("EX")
            .arg(self.config.window_secs)
            .arg("NX")
            .ignore()
            .cmd("INCR")
            .arg(&key)
            .cmd("TTL")
            .arg(&key)
            .query_async(&mut conn)
            .await
            .map_err(|e| RateLimitError::Backend(e.to_string()))?;

        Ok(decide(count, ttl, &self.config))
    }
}

fn decide(count: u64, ttl: i64, config: &RateLimitConfig) -> RateLimitDecision {
    if count > config.max_requests {
        let retry_after_secs = if ttl > 0 {
            ttl as u64
        } else {
            config.window_secs
        };
        RateLimitDecision::Limited { retry_after_secs }
    } else {
        RateLimitDecision::Allowed {
            remaining: config.max_requests - count,
        }
    }
}
