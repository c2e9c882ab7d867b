pub mod api;
pub mod config;
pub mod patch;
pub mod rate_limit;
