/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::serialization::{date_format, deserialize_string_or_number};
use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A promotion (cohort) the user belongs to, from `GET /promo?login={login}`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    /// Internal unique ID of the promotion
    pub id: u64,
    /// Full name of the promotion
    pub target_name: String,
    /// Name and month of the term
    pub term_name: String,
    /// First day of the promotion
    #[serde(with = "date_format")]
    pub learning_start: NaiveDate,
    /// Last day of the promotion
    #[serde(with = "date_format")]
    pub learning_end: NaiveDate,
    /// Duration of the promotion in days
    pub learning_duration: u32,
    /// Cohort year
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub promo: String,
    /// Speciality
    pub spe: String,
    /// Name of the wall attached to the promotion
    pub wall_name: String,
}
