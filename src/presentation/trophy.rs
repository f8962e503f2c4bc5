/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_ACHIEVEMENTS_URL;
use crate::error::AppError;
use crate::presentation::serialization::{datetime_format, parse_datetime};
use chrono::NaiveDateTime;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A trophy earned by a user, from `GET /api/users/{login}/achievements`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrophyPayload")]
pub struct Trophy {
    /// Internal unique ID of the trophy
    pub id: u64,
    /// Name of the trophy
    pub name: String,
    /// Description of the trophy
    pub description: String,
    /// Type of the trophy
    #[serde(rename = "type")]
    pub kind: String,
    /// Picture of the trophy, `{achievements}/api/achievements/{id}.png`
    pub image_url: String,
    /// When the trophy was awarded
    #[serde(serialize_with = "datetime_format::serialize")]
    pub achieved_at: NaiveDateTime,
}

impl Trophy {
    /// Rebuilds `image_url` against another achievements host
    #[must_use]
    pub fn with_image_base(mut self, achievements_url: &str) -> Self {
        self.image_url = image_url(achievements_url, self.id);
        self
    }
}

/// Picture of a trophy together with the URL it was downloaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrophyImage {
    /// URL of the picture
    pub url: String,
    /// Raw PNG bytes
    pub content: Vec<u8>,
}

fn image_url(achievements_url: &str, id: u64) -> String {
    format!(
        "{}/api/achievements/{}.png",
        achievements_url.trim_end_matches('/'),
        id
    )
}

/// `achieved_at` is a list on the wire and a single timestamp once serialized
#[derive(Deserialize)]
#[serde(untagged)]
enum AchievedAt {
    One(String),
    Many(Vec<String>),
}

/// Wire shape of a trophy. The first `achieved_at` entry is the award date.
#[derive(Deserialize)]
struct TrophyPayload {
    id: u64,
    name: String,
    description: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    image_url: Option<String>,
    achieved_at: AchievedAt,
}

impl TryFrom<TrophyPayload> for Trophy {
    type Error = AppError;

    fn try_from(p: TrophyPayload) -> Result<Self, Self::Error> {
        let first = match &p.achieved_at {
            AchievedAt::One(date) => date,
            AchievedAt::Many(dates) => dates.first().ok_or_else(|| {
                AppError::MalformedPayload(format!("achieved_at: empty list for trophy {}", p.id))
            })?,
        };
        let achieved_at = parse_datetime("achieved_at", first)?;

        Ok(Trophy {
            id: p.id,
            name: p.name,
            description: p.description,
            kind: p.kind,
            image_url: p
                .image_url
                .unwrap_or_else(|| image_url(DEFAULT_ACHIEVEMENTS_URL, p.id)),
            achieved_at,
        })
    }
}
