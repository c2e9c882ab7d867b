mod limiter;
mod middleware;
mod redis_limiter;

pub use limiter::{RateLimitConfig, RateLimitDecision, RateLimitError, RateLimiter};
pub use middleware::rate_limit;
pub use redis_limiter::RedisRateLimiter;
