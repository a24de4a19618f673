use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Serde-adapter for host-appens tidsstempler ("%Y-%m-%d %H:%M:%S", naiv lokaltid).
pub mod host_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(dt: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ser.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(de: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(de)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub session_id: String,
    #[serde(rename = "datetime", with = "host_datetime")]
    pub date_time: NaiveDateTime,
    #[serde(alias = "games")]
    pub game_count: u32,
    #[serde(alias = "shayne_wins")]
    pub wins_a: u32,
    #[serde(alias = "matt_wins")]
    pub wins_b: u32,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    #[serde(with = "host_datetime")]
    pub start_time: NaiveDateTime,
    #[serde(with = "host_datetime")]
    pub end_time: NaiveDateTime,
    pub total_games: u32,
    #[serde(alias = "shayne_wins")]
    pub wins_a: u32,
    #[serde(alias = "matt_wins")]
    pub wins_b: u32,
    pub duration_minutes: u32,
}

// Én rad fra host-appens spillogg (kolonnene i game_results.csv)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "datetime", with = "host_datetime")]
    pub date_time: NaiveDateTime,
    #[serde(default, alias = "shayne_character")]
    pub character_a: Option<String>,
    #[serde(default, alias = "matt_character")]
    pub character_b: Option<String>,
    pub winner: String,
    #[serde(default)]
    pub stocks_remaining: Option<u32>,
    pub timestamp: f64, // unix-sekunder, sorteringsnøkkel
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Punktsammendrag for tooltip (se tooltip::describe).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointSummary {
    pub session_id: String,
    pub date: String, // full dato, "Jan 5, 2024"
    pub games: u32,
    pub trend: f64,
    pub player_a: String,
    pub player_b: String,
    pub wins_a: u32,
    pub wins_b: u32,
    pub win_rate_a: String, // prosent med én desimal, "62.5"
    pub win_rate_b: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerNames {
    pub a: String,
    pub b: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            a: "Shayne".to_string(),
            b: "Matt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cfg {
    #[serde(default)]
    pub players: PlayerNames,
    #[serde(default = "default_base_url")]
    pub feed_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub feed_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            players: PlayerNames::default(),
            feed_base_url: default_base_url(),
            feed_timeout_secs: default_timeout_secs(),
        }
    }
}
