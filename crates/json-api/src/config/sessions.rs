//! Session Config

use clap::Args;
use jiff::SignedDuration;

/// Longest accepted session lifetime, ten years.
pub const MAX_SESSION_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Session cookie and store settings.
#[derive(Debug, Clone, Args)]
pub struct SessionConfig {
    /// Name of the session cookie
    #[arg(
        long = "session-cookie-name",
        env = "SESSION_COOKIE_NAME",
        default_value = "sessionid"
    )]
    pub cookie_name: String,

    /// Session lifetime in seconds, refreshed whenever the session is saved
    #[arg(
        long = "session-ttl-seconds",
        env = "SESSION_TTL_SECONDS",
        default_value_t = 1_209_600_u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_SESSION_TTL_SECONDS)
    )]
    pub ttl_seconds: u64,

    /// Only send the session cookie over HTTPS
    #[arg(
        long = "session-cookie-secure",
        env = "SESSION_COOKIE_SECURE",
        default_value_t = false
    )]
    pub cookie_secure: bool,

    /// How often expired sessions are purged, in seconds
    #[arg(
        long = "session-purge-interval-seconds",
        env = "SESSION_PURGE_INTERVAL_SECONDS",
        default_value_t = 3_600_u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub purge_interval_seconds: u64,
}

impl SessionConfig {
    /// Session lifetime.
    #[must_use]
    pub fn ttl(&self) -> SignedDuration {
        SignedDuration::from_secs(i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX))
    }
}
