use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    /// Published spreadsheet export (CSV) to read the news from
    pub feed_url: String,
    /// How often the feed is reloaded in the background
    pub refresh_interval: Duration,
    /// Timeout applied to each feed fetch
    pub fetch_timeout: Duration,
    pub port: u16,
    /// Manual reload rate limit, per client IP: one request replenished every
    /// `reload_replenish_secs`, up to `reload_burst` at once
    pub reload_replenish_secs: u64,
    pub reload_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let feed_url = env::var("FEED_URL")
            .context("FEED_URL must be set to the published CSV export of the news sheet")?;

        let refresh_secs: u64 = parse_or("REFRESH_INTERVAL_SECS", 30)?;
        if refresh_secs == 0 {
            anyhow::bail!("REFRESH_INTERVAL_SECS must be greater than zero");
        }

        Ok(Self {
            feed_url,
            refresh_interval: Duration::from_secs(refresh_secs),
            fetch_timeout: Duration::from_secs(parse_or("FETCH_TIMEOUT_SECS", 15)?),
            port: parse_or("PORT", 8080)?,
            reload_replenish_secs: parse_or("RELOAD_REPLENISH_SECS", 2)?,
            reload_burst: parse_or("RELOAD_BURST", 5)?,
        })
    }
}

/// Read a numeric variable, falling back to `default` when unset
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_uses_default_when_unset() {
        let value: u64 = parse_or("NEWSFEED_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn parse_or_reads_and_trims_value() {
        env::set_var("NEWSFEED_TEST_INTERVAL", " 90 ");
        let value: u64 = parse_or("NEWSFEED_TEST_INTERVAL", 30).unwrap();
        assert_eq!(value, 90);
    }

    #[test]
    fn parse_or_rejects_garbage() {
        env::set_var("NEWSFEED_TEST_PORT", "eighty");
        let result: Result<u16> = parse_or("NEWSFEED_TEST_PORT", 8080);
        assert!(result.is_err());
    }
}
