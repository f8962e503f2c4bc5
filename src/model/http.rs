/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Decodes a JSON body.
///
/// Syntax errors stay [`AppError::Json`]; a well-formed document that does not match
/// the expected shape (missing key, bad date) becomes [`AppError::MalformedPayload`].
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        if e.is_data() {
            AppError::MalformedPayload(e.to_string())
        } else {
            AppError::Json(e)
        }
    })
}

/// HTTP layer shared by every resource fetcher.
///
/// Holds the cookie-enabled client and the session manager; each fetch goes through
/// [`HttpClient::authorize`] before issuing its request.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Builds the cookie-enabled client and the session manager on top of it
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Session manager
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gate run before every resource request.
    ///
    /// Fails with [`AppError::NotAuthenticated`] without any request when no session is
    /// open, runs the keep-alive guard when enabled, then resolves the target login:
    /// `user_login` when given, the session's own login otherwise.
    pub async fn authorize(&self, user_login: Option<&str>) -> Result<String, AppError> {
        if !self.auth.is_logged().await {
            debug!("Rejecting request: not logged in");
            return Err(AppError::NotAuthenticated);
        }

        if self.config.keep_alive {
            self.auth.ensure_session().await?;
        }

        match user_login {
            Some(login) => Ok(login.to_string()),
            None => self.auth.etna_login().await.ok_or(AppError::NotAuthenticated),
        }
    }

    /// GET `url` and decode its JSON body
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self.send(url).await?;
        let body = response.bytes().await?;
        parse_json(&body)
    }

    /// GET `url` and return its raw body
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self.send(url).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn send(&self, url: &str) -> Result<Response, AppError> {
        debug!("GET {}", url);
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            error!("Request to {} failed with status {}", url, status);
            return Err(AppError::RequestFailed(status));
        }
        Ok(response)
    }
}
