/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session management for the ETNA intranet
//!
//! The intranet keeps its session server side and hands out a cookie on
//! `POST /identity`. This module owns that lifecycle:
//! - Login with a login/password pair
//! - Logout, which invalidates the remote session
//! - The keep-alive guard, which probes `GET /identity` and logs in again with the
//!   stored credentials when the server forgot the session

use crate::application::config::{Config, LoginEncoding};
use crate::error::AppError;
use crate::model::auth::{Identity, LoginRequest};
use crate::model::http::parse_json;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// An open intranet session
#[derive(Debug, Clone)]
pub struct Session {
    /// Intranet login returned by the identity endpoint
    pub login: String,
    /// Identity payload returned at login
    pub identity: Identity,
    /// When the session was opened (or last renewed by the keep-alive guard)
    pub logged_at: DateTime<Utc>,
    credentials: LoginRequest,
}

impl Session {
    fn open(credentials: LoginRequest, identity: Identity) -> Self {
        Self {
            login: identity.login.clone(),
            identity,
            logged_at: Utc::now(),
            credentials,
        }
    }

    /// Login used to authenticate, which may differ from the intranet login
    #[must_use]
    pub fn user(&self) -> &str {
        &self.credentials.login
    }
}

/// Authentication manager for the ETNA intranet
///
/// Shares its cookie-enabled HTTP client with the resource fetchers, so the
/// cookie set at login authenticates every later request.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: RwLock<Option<Session>>,
}

impl Auth {
    /// Creates a new Auth instance on top of a cookie-enabled client
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: RwLock::new(None),
        }
    }

    /// Whether a session is open
    pub async fn is_logged(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Intranet login of the open session
    pub async fn etna_login(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.login.clone())
    }

    /// Returns a copy of the open session
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(AppError::NotAuthenticated)
    }

    /// Opens a session.
    ///
    /// Fails with [`AppError::AlreadyAuthenticated`] without touching the network when a
    /// session is already open, and with [`AppError::AuthenticationRejected`] when the
    /// intranet refuses the pair. On success the credentials are kept for the
    /// keep-alive guard.
    pub async fn login(&self, user: &str, password: &str) -> Result<Identity, AppError> {
        let mut session = self.session.write().await;
        if session.is_some() {
            warn!("Login requested while already logged in");
            return Err(AppError::AlreadyAuthenticated);
        }

        let credentials = LoginRequest::new(user, password);
        let identity = self.authenticate(&credentials).await?;

        info!("✓ Login successful as {}", identity.login);
        *session = Some(Session::open(credentials, identity.clone()));
        Ok(identity)
    }

    /// Sends the credentials to the identity endpoint
    async fn authenticate(&self, credentials: &LoginRequest) -> Result<Identity, AppError> {
        let url = self.config.rest_api.identity_url();
        debug!(
            "Sending login request for {} to {} ({})",
            credentials.login, url, self.config.login_encoding
        );

        let request = self.client.post(&url);
        let request = match self.config.login_encoding {
            LoginEncoding::Json => request.json(credentials),
            LoginEncoding::Form => request.form(credentials),
        };
        let response = request.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Login failed for {} with status {}", credentials.login, status);
            return Err(AppError::AuthenticationRejected(status));
        }

        let body = response.bytes().await?;
        parse_json(&body)
    }

    /// Closes the session.
    ///
    /// Does nothing when no session is open. Otherwise sends a single
    /// `DELETE /identity` and clears the local session whatever the outcome.
    pub async fn logout(&self) -> Result<(), AppError> {
        let mut session = self.session.write().await;
        let Some(current) = session.take() else {
            debug!("Logout requested without an open session");
            return Ok(());
        };

        info!("Logging out {}", current.login);
        match self
            .client
            .delete(self.config.rest_api.identity_url())
            .send()
            .await
        {
            Ok(response) if response.status() == StatusCode::OK => {
                info!("✓ Logged out successfully");
            }
            Ok(response) => {
                warn!("Remote logout answered {}", response.status());
            }
            Err(e) => {
                warn!("Remote logout failed: {}", e);
            }
        }
        Ok(())
    }

    /// Probes `GET /identity`; `true` when the server still knows the session
    pub async fn check_session(&self) -> bool {
        match self
            .client
            .get(self.config.rest_api.identity_url())
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                debug!("Identity probe answered {}", status);
                status == StatusCode::OK
            }
            Err(e) => {
                warn!("Identity probe failed: {}", e);
                false
            }
        }
    }

    /// Keep-alive guard run before protected calls.
    ///
    /// Probes the identity endpoint once. When the probe fails the local session is
    /// dropped and a single login is attempted with the stored credentials; if that
    /// login fails its error is returned and the client stays logged out.
    pub async fn ensure_session(&self) -> Result<(), AppError> {
        let mut session = self.session.write().await;
        let Some(current) = session.as_ref() else {
            return Err(AppError::NotAuthenticated);
        };

        if self.check_session().await {
            return Ok(());
        }

        let credentials = current.credentials.clone();
        *session = None;
        warn!("Session expired, logging in again as {}", credentials.login);

        let identity = self.authenticate(&credentials).await?;
        info!("✓ Session renewed for {}", identity.login);
        *session = Some(Session::open(credentials, identity));
        Ok(())
    }
}
