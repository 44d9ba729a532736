//! Process configuration from environment variables

use chrono::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SWEEP_SECS: u64 = 60;
/// Upper bound for `SESSION_TTL_SECS`, ten years
const MAX_SESSION_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Idle time after which a session is forgotten. `None` keeps sessions forever.
    pub session_ttl: Option<Duration>,
    pub sweep_interval: std::time::Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            session_ttl: None,
            sweep_interval: std::time::Duration::from_secs(DEFAULT_SWEEP_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT").unwrap_or(defaults.port);

        let session_ttl = parse_var::<i64>(&lookup, "SESSION_TTL_SECS")
            .filter(|secs| *secs > 0)
            .filter(|secs| {
                let in_range = *secs <= MAX_SESSION_TTL_SECS;
                if !in_range {
                    tracing::warn!(
                        value = *secs,
                        max = MAX_SESSION_TTL_SECS,
                        "Ignoring oversized SESSION_TTL_SECS; eviction disabled"
                    );
                }
                in_range
            })
            .and_then(Duration::try_seconds);

        let sweep_interval = parse_var::<u64>(&lookup, "SESSION_SWEEP_SECS")
            .filter(|secs| *secs > 0)
            .map_or(defaults.sweep_interval, std::time::Duration::from_secs);

        Self {
            port,
            session_ttl,
            sweep_interval,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}
