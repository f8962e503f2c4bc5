/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the ETNA intranet
//!
//! ```ignore
//! use etna_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.login("martin_y", "secret").await?;
//!
//! let promos = client.user_promo(None).await?;
//! let trophies = client.user_trophy(Some("dupont_j")).await?;
//!
//! client.logout().await?;
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::auth::Identity;
use crate::model::http::HttpClient;
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Client for the ETNA intranet.
///
/// Owns one cookie-backed session. Resource operations come from the service traits
/// ([`UserService`](crate::application::interfaces::user::UserService),
/// [`PromoService`](crate::application::interfaces::promo::PromoService),
/// [`WallService`](crate::application::interfaces::wall::WallService),
/// [`TrophyService`](crate::application::interfaces::trophy::TrophyService)).
pub struct Client {
    pub(crate) http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client without logging in
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self {
            http_client: Arc::new(HttpClient::new(config)?),
        })
    }

    /// Creates a client from the environment (see [`Config::new`])
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Logs in and returns the identity payload
    pub async fn login(&self, user: &str, password: &str) -> Result<Identity, AppError> {
        self.http_client.auth().login(user, password).await
    }

    /// Logs in with the credentials of the configuration
    pub async fn login_from_config(&self) -> Result<Identity, AppError> {
        let credentials = &self.http_client.config().credentials;
        info!("Logging in with configured credentials for {}", credentials.login);
        self.login(&credentials.login, &credentials.password).await
    }

    /// Logs out; does nothing when not logged in
    pub async fn logout(&self) -> Result<(), AppError> {
        self.http_client.auth().logout().await
    }

    /// Whether a session is open
    pub async fn is_logged(&self) -> bool {
        self.http_client.auth().is_logged().await
    }

    /// Intranet login of the open session
    pub async fn etna_login(&self) -> Option<String> {
        self.http_client.auth().etna_login().await
    }

    /// Copy of the open session
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.http_client.auth().get_session().await
    }

    /// Runs the keep-alive guard, then `op`.
    ///
    /// `op` is not called when the guard fails (no session, or the silent re-login was
    /// rejected).
    pub async fn keep_alive<F, T>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce() -> T,
    {
        self.http_client.auth().ensure_session().await?;
        Ok(op())
    }

    /// Runs the keep-alive guard, then awaits the future built by `op`
    pub async fn keep_alive_async<F, Fut, T>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.http_client.auth().ensure_session().await?;
        Ok(op().await)
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}
