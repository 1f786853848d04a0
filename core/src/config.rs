//! Client configuration.
//!
//! Credentials are supplied once and turned into a basic-auth header by the
//! dispatcher. `ClientConfig::from_env` reads:
//!
//! - `CALLFIRE_LOGIN` (required)
//! - `CALLFIRE_PASSWORD` (required)
//! - `CALLFIRE_BASE_URL` (optional, defaults to [DEFAULT_BASE_URL])

use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://api.callfire.com/v2";

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const LOGIN_ENV: &str = "CALLFIRE_LOGIN";
pub const PASSWORD_ENV: &str = "CALLFIRE_PASSWORD";
pub const BASE_URL_ENV: &str = "CALLFIRE_BASE_URL";

/// API login and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// Value for the `Authorization` header.
    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.login, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Credentials,
    pub user_agent: String,
    /// Transport-level timeout for a whole exchange. `None` keeps the
    /// transport defaults.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::new(login, password),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ClientError::Config(format!("{name} is not set")))
        };
        let mut config = Self::new(required(LOGIN_ENV)?, required(PASSWORD_ENV)?);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
