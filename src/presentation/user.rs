/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::serialization::{
    deserialize_null_as_empty_vec, option_datetime_format, parse_datetime,
    parse_optional_datetime,
};
use chrono::NaiveDateTime;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An intranet account, as returned by `GET /api/users/{login}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UserPayload")]
pub struct User {
    /// Internal unique ID of the user
    pub id: u64,
    /// Unique login (username)
    pub login: String,
    /// First name
    pub firstname: String,
    /// Last name
    pub lastname: String,
    /// School email address
    pub email: String,
    /// Whether the account is closed
    pub close: bool,
    /// When the account was closed, if the intranet says so
    #[serde(serialize_with = "option_datetime_format::serialize")]
    pub closed_at: Option<NaiveDateTime>,
    /// Roles granted to the user
    pub roles: Vec<String>,
    /// Account creation
    #[serde(serialize_with = "option_datetime_format::serialize")]
    pub created_at: Option<NaiveDateTime>,
    /// Last account update
    #[serde(serialize_with = "option_datetime_format::serialize")]
    pub updated_at: Option<NaiveDateTime>,
    /// Account deletion
    #[serde(serialize_with = "option_datetime_format::serialize")]
    pub deleted_at: Option<NaiveDateTime>,
}

impl User {
    /// First name and last name separated by a space
    #[must_use]
    pub fn identity(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Closure flag together with the closure date
    #[must_use]
    pub fn is_closed(&self) -> (bool, Option<NaiveDateTime>) {
        if self.close {
            (true, self.closed_at)
        } else {
            (false, None)
        }
    }
}

/// Wire shape of a user. `close` is either a boolean or the closure timestamp;
/// `closed_at` only appears in the serialized form of [`User`].
#[derive(Deserialize)]
struct UserPayload {
    id: u64,
    login: String,
    firstname: String,
    lastname: String,
    email: String,
    #[serde(default)]
    close: Value,
    #[serde(default)]
    closed_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    roles: Vec<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    deleted_at: Option<String>,
}

fn parse_closure(
    close: &Value,
    closed_at: Option<&str>,
) -> Result<(bool, Option<NaiveDateTime>), AppError> {
    match close {
        Value::Null | Value::Bool(false) => Ok((false, None)),
        Value::Bool(true) => Ok((true, parse_optional_datetime("closed_at", closed_at)?)),
        Value::String(s) => Ok((true, Some(parse_datetime("close", s)?))),
        other => Err(AppError::MalformedPayload(format!(
            "close: expected a boolean or a timestamp, got {other}"
        ))),
    }
}

impl TryFrom<UserPayload> for User {
    type Error = AppError;

    fn try_from(p: UserPayload) -> Result<Self, Self::Error> {
        let (close, closed_at) = parse_closure(&p.close, p.closed_at.as_deref())?;
        Ok(User {
            id: p.id,
            login: p.login,
            firstname: p.firstname,
            lastname: p.lastname,
            email: p.email,
            close,
            closed_at,
            roles: p.roles,
            created_at: parse_optional_datetime("created_at", p.created_at.as_deref())?,
            updated_at: parse_optional_datetime("updated_at", p.updated_at.as_deref())?,
            deleted_at: parse_optional_datetime("deleted_at", p.deleted_at.as_deref())?,
        })
    }
}
