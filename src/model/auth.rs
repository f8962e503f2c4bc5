/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::serialization::deserialize_null_as_empty_vec;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /identity`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Intranet login
    pub login: String,
    /// Intranet password
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}

/// Identity of the logged user, returned by `POST /identity` and `GET /identity`.
///
/// Only `login` is required; keys this type does not name are kept in `extra`.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Internal unique ID of the user
    #[serde(default)]
    pub id: Option<u64>,
    /// Intranet login, the default target of every resource call
    pub login: String,
    /// School email address
    #[serde(default)]
    pub email: Option<String>,
    /// Login used when impersonating another account
    #[serde(default)]
    pub logas: Option<Value>,
    /// Groups the user belongs to
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub groups: Vec<String>,
    /// Date of the login
    #[serde(default)]
    pub login_date: Option<String>,
    /// Remaining keys of the payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
