use serde::de::DeserializeOwned;
use serde_json::json;

pub mod dates;
pub mod feed;
pub mod feed_api;
pub mod metrics;
pub mod sessions;
pub mod smoothing;
pub mod storage;
pub mod timeline;
pub mod tooltip;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use dates::{ChronoDateFormatter, DateFormatter};
pub use feed::{CachedFeed, FeedError, FeedProvider, StaticFeedProvider};
pub use feed_api::ApiClient;
pub use smoothing::{rolling_trend, window_size, RoundTo};
pub use storage::{load_cfg, save_cfg};
pub use timeline::{normalize, timeline_points};
pub use tooltip::describe;
pub use types::{Cfg, GameRecord, PlayerNames, PointSummary, SessionSummary, TimelinePoint};

fn parse_json_list<T: DeserializeOwned>(json_in: &str, what: &str) -> Result<Vec<T>, String> {
    let mut de = serde_json::Deserializer::from_str(json_in);
    serde_path_to_error::deserialize(&mut de)
        .map_err(|e| format!("parse error ({}) at {}: {}", what, e.path(), e))
}

fn parse_cfg(cfg_json: Option<&str>) -> Result<Cfg, String> {
    match cfg_json {
        None => Ok(Cfg::default()),
        Some(s) => {
            let mut de = serde_json::Deserializer::from_str(s);
            serde_path_to_error::deserialize(&mut de)
                .map_err(|e| format!("parse error (cfg) at {}: {}", e.path(), e))
        }
    }
}

/// JSON-inn/JSON-ut: normaliser + trend i ett kall.
/// Inn: liste av tidslinjepunkter (feed-feltnavn som "games"/"shayne_wins"
/// aksepteres via alias). Ut: { labels, counts, trend, total_sessions }.
pub fn timeline_series_json(points_json: &str) -> Result<String, String> {
    let points: Vec<TimelinePoint> = parse_json_list(points_json, "points")?;
    let fmt = ChronoDateFormatter;

    let (labels, counts) = timeline::normalize(&points, &fmt);
    let trend = smoothing::rolling_trend(&counts);

    Ok(json!({
        "labels": labels,
        "counts": counts,
        "trend": trend,
        "total_sessions": points.len(),
    })
    .to_string())
}

/// Punktsammendrag for tooltip, som JSON. Grensen validerer indeksen og
/// returnerer Err i stedet for å panikke; kjernen beholder forutsetningen.
pub fn describe_point_json(
    points_json: &str,
    index: usize,
    cfg_json: Option<&str>,
) -> Result<String, String> {
    let points: Vec<TimelinePoint> = parse_json_list(points_json, "points")?;
    let cfg = parse_cfg(cfg_json)?;

    if index >= points.len() {
        return Err(format!("index {} out of range (n={})", index, points.len()));
    }

    let fmt = ChronoDateFormatter;
    let (_labels, counts) = timeline::normalize(&points, &fmt);
    let trend = smoothing::rolling_trend(&counts);

    let summary = tooltip::describe(&points, index, trend[index], &cfg.players, &fmt);
    serde_json::to_string(&summary).map_err(|e| e.to_string())
}

/// Spillogg → øktsammendrag via 4-timersregelen (nyeste først), som JSON.
pub fn sessions_from_games_json(games_json: &str, cfg_json: Option<&str>) -> Result<String, String> {
    let mut games: Vec<GameRecord> = parse_json_list(games_json, "games")?;
    let cfg = parse_cfg(cfg_json)?;

    sessions::assign_session_ids(&mut games);
    let summaries = sessions::summarize_sessions(&games, &cfg.players);
    serde_json::to_string(&summaries).map_err(|e| e.to_string())
}
