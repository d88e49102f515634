use std::{str::FromStr, sync::Arc, time::Duration};

use crate::about::{load_about_data, AboutData, AboutService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub about_service: AboutService,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub news_api_url: String,
    pub news_api_timeout: Duration,
    pub toast_lifetime: Duration,
    /// External endpoint the admin login form posts to.
    pub admin_auth_url: String,
    pub about: AboutData,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 3000),
            news_api_url: lookup("NEWS_API_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000/api".to_string()),
            news_api_timeout: Duration::from_secs(parse_or(&lookup, "NEWS_API_TIMEOUT_SECS", 10)),
            toast_lifetime: Duration::from_millis(parse_or(&lookup, "TOAST_LIFETIME_MS", 4000)),
            admin_auth_url: lookup("ADMIN_AUTH_URL")
                .unwrap_or_else(|| "/api/auth/login".to_string()),
            about: load_about_data(&lookup),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{} must be a number, using {}", key, default);
            default
        }),
        None => default,
    }
}
