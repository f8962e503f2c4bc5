/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_ACHIEVEMENTS_URL, DEFAULT_AUTH_URL, DEFAULT_INTRA_URL, DEFAULT_REST_TIMEOUT,
};
use crate::utils::config::{get_env_flag, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};
use urlencoding::encode;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login and password used by [`Client::login_from_config`](crate::application::client::Client::login_from_config)
pub struct Credentials {
    /// Intranet login
    pub login: String,
    /// Intranet password
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Hosts of the three ETNA services and the HTTP timeout
pub struct RestApiConfig {
    /// Authentication service: identity, users and photos
    pub auth_url: String,
    /// Intranet API: promotions and walls
    pub intra_url: String,
    /// Achievements service: trophies and trophy pictures
    pub achievements_url: String,
    /// Timeout in seconds for REST requests
    pub timeout: u64,
}

/// How the login/password pair is encoded in the body of `POST /identity`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoginEncoding {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
}

impl fmt::Display for LoginEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginEncoding::Json => write!(f, "json"),
            LoginEncoding::Form => write!(f, "form"),
        }
    }
}

impl FromStr for LoginEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LoginEncoding::Json),
            "form" | "urlencoded" => Ok(LoginEncoding::Form),
            other => Err(format!("unknown login encoding: {other}")),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the ETNA client
pub struct Config {
    /// Credentials read from the environment
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Probe the identity endpoint (and log in again if needed) before each resource call
    pub keep_alive: bool,
    /// Body encoding of the login request
    pub login_encoding: LoginEncoding,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds a configuration from the environment, loading `.env` first.
    ///
    /// Missing credentials are reported but do not prevent building the
    /// configuration: explicit logins through [`Client::login`](crate::application::client::Client::login)
    /// do not need them.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let login = get_env_or_default("ETNA_LOGIN", String::from("default_login"));
        let password = get_env_or_default("ETNA_PASSWORD", String::from("default_password"));

        if login == "default_login" {
            error!("ETNA_LOGIN not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("ETNA_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { login, password },
            rest_api: RestApiConfig {
                auth_url: get_env_or_default("ETNA_AUTH_URL", String::from(DEFAULT_AUTH_URL)),
                intra_url: get_env_or_default("ETNA_INTRA_URL", String::from(DEFAULT_INTRA_URL)),
                achievements_url: get_env_or_default(
                    "ETNA_ACHIEVEMENTS_URL",
                    String::from(DEFAULT_ACHIEVEMENTS_URL),
                ),
                timeout: get_env_or_default("ETNA_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            keep_alive: get_env_flag("ETNA_KEEP_ALIVE", true),
            login_encoding: get_env_or_default("ETNA_LOGIN_ENCODING", LoginEncoding::Json),
        }
    }

    /// Configuration pointing the three services at a single base URL.
    ///
    /// Does not read the environment; meant for local gateways and tests.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Config {
            credentials: Credentials {
                login: String::new(),
                password: String::new(),
            },
            rest_api: RestApiConfig {
                auth_url: base.clone(),
                intra_url: base.clone(),
                achievements_url: base,
                timeout: DEFAULT_REST_TIMEOUT,
            },
            keep_alive: true,
            login_encoding: LoginEncoding::Json,
        }
    }
}

/// Logins and wall names are percent-encoded before they reach a path or a query.
impl RestApiConfig {
    fn auth(&self) -> &str {
        self.auth_url.trim_end_matches('/')
    }

    fn intra(&self) -> &str {
        self.intra_url.trim_end_matches('/')
    }

    fn achievements(&self) -> &str {
        self.achievements_url.trim_end_matches('/')
    }

    /// `{auth}/identity`: login (POST), probe (GET) and logout (DELETE)
    #[must_use]
    pub fn identity_url(&self) -> String {
        format!("{}/identity", self.auth())
    }

    /// `{auth}/api/users/{login}`
    #[must_use]
    pub fn user_url(&self, login: &str) -> String {
        format!("{}/api/users/{}", self.auth(), encode(login))
    }

    /// `{auth}/api/users/{login}/photo`
    #[must_use]
    pub fn user_photo_url(&self, login: &str) -> String {
        format!("{}/api/users/{}/photo", self.auth(), encode(login))
    }

    /// `{intra}/promo?login={login}`
    #[must_use]
    pub fn promo_url(&self, login: &str) -> String {
        format!("{}/promo?login={}", self.intra(), encode(login))
    }

    /// `{intra}/walls`
    #[must_use]
    pub fn walls_url(&self) -> String {
        format!("{}/walls", self.intra())
    }

    /// `{intra}/walls/{wall}/conversations?from={start}&size={stop}`
    #[must_use]
    pub fn wall_conversations_url(&self, wall_name: &str, start: u32, stop: u32) -> String {
        format!(
            "{}/walls/{}/conversations?from={}&size={}",
            self.intra(),
            encode(wall_name),
            start,
            stop
        )
    }

    /// `{achievements}/api/users/{login}/achievements`
    #[must_use]
    pub fn achievements_url_for(&self, login: &str) -> String {
        format!(
            "{}/api/users/{}/achievements",
            self.achievements(),
            encode(login)
        )
    }

    /// `{achievements}/api/achievements/{id}.png`
    #[must_use]
    pub fn trophy_image_url(&self, id_trophy: u64) -> String {
        format!("{}/api/achievements/{}.png", self.achievements(), id_trophy)
    }
}
