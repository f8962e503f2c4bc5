/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the ETNA client
#[derive(Debug, Error)]
pub enum AppError {
    /// A resource was requested before logging in
    #[error("not authenticated")]
    NotAuthenticated,

    /// `login` was called while a session is already open
    #[error("already authenticated")]
    AlreadyAuthenticated,

    /// The identity endpoint refused the login/password pair
    #[error("authentication rejected with status {0}")]
    AuthenticationRejected(StatusCode),

    /// A resource endpoint answered with a non-success status
    #[error("request failed with status {0}")]
    RequestFailed(StatusCode),

    /// Transport level failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body could not be decoded as JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON body decoded but an expected field is missing or invalid
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Result type used across the crate
pub type EtnaResult<T> = Result<T, AppError>;
