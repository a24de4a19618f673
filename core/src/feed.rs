use std::sync::Mutex;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::metrics::{feed_cache_hit_total, feed_cache_miss_total, feed_fetch_fail_total, Metrics};
use crate::types::{SessionSummary, TimelinePoint};

#[derive(Debug, Error)]
pub enum FeedError {
    /// Transportfeil: nett, timeout, HTTP-status.
    #[error("feed transport: {0}")]
    Transport(String),
    /// Backenden svarte success=false; meldingen er menneskelesbar.
    #[error("feed api: {0}")]
    Api(String),
    /// JSON-dekoding feilet (inkluderer sti fra serde_path_to_error).
    #[error("feed parse: {0}")]
    Parse(String),
}

/// Konvolutten alle feed-svar pakkes i:
/// { success, data, message?, total_sessions? }
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub total_sessions: Option<usize>,
}

/// Pakk ut konvolutten: success=false → FeedError::Api med backend-meldingen.
pub fn decode_envelope<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, FeedError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let env: Envelope<T> = serde_path_to_error::deserialize(&mut de)
        .map_err(|e| FeedError::Parse(format!("at {}: {}", e.path(), e)))?;

    if !env.success {
        return Err(FeedError::Api(
            env.message.unwrap_or_else(|| "ukjent feed-feil".to_string()),
        ));
    }
    Ok(env.data)
}

/// Transport-seam for de to uavhengige lesefeedene
/// (prod: feed_api::ApiClient, test: StaticFeedProvider).
pub trait FeedProvider {
    fn fetch_timeline(&self) -> Result<Vec<TimelinePoint>, FeedError>;
    fn fetch_sessions(&self) -> Result<Vec<SessionSummary>, FeedError>;
}

/// Fast datasett, for tester og frakoblet kjøring.
#[derive(Debug, Default, Clone)]
pub struct StaticFeedProvider {
    pub timeline: Vec<TimelinePoint>,
    pub sessions: Vec<SessionSummary>,
}

impl FeedProvider for StaticFeedProvider {
    fn fetch_timeline(&self) -> Result<Vec<TimelinePoint>, FeedError> {
        Ok(self.timeline.clone())
    }

    fn fetch_sessions(&self) -> Result<Vec<SessionSummary>, FeedError> {
        Ok(self.sessions.clone())
    }
}

/// Snapshot-cache rundt en provider. Hele serien byttes ut ved refetch,
/// aldri inkrementelt; invalidate() tvinger ny henting ved neste lesing.
/// De to feedene har hvert sitt slot – feil i den ene blokkerer ikke den
/// andre.
pub struct CachedFeed<P: FeedProvider> {
    provider: P,
    timeline: Mutex<Option<Vec<TimelinePoint>>>,
    sessions: Mutex<Option<Vec<SessionSummary>>>,
}

impl<P: FeedProvider> CachedFeed<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            timeline: Mutex::new(None),
            sessions: Mutex::new(None),
        }
    }

    pub fn timeline(&self, metrics: &Metrics) -> Result<Vec<TimelinePoint>, FeedError> {
        let mut slot = self.timeline.lock().unwrap();
        if let Some(data) = slot.as_ref() {
            feed_cache_hit_total(metrics).inc();
            return Ok(data.clone());
        }

        match self.provider.fetch_timeline() {
            Ok(data) => {
                feed_cache_miss_total(metrics).inc();
                *slot = Some(data.clone());
                Ok(data)
            }
            Err(e) => {
                feed_fetch_fail_total(metrics).inc();
                warn!("tidslinje-feed feilet: {e}");
                Err(e)
            }
        }
    }

    pub fn sessions(&self, metrics: &Metrics) -> Result<Vec<SessionSummary>, FeedError> {
        let mut slot = self.sessions.lock().unwrap();
        if let Some(data) = slot.as_ref() {
            feed_cache_hit_total(metrics).inc();
            return Ok(data.clone());
        }

        match self.provider.fetch_sessions() {
            Ok(data) => {
                feed_cache_miss_total(metrics).inc();
                *slot = Some(data.clone());
                Ok(data)
            }
            Err(e) => {
                feed_fetch_fail_total(metrics).inc();
                warn!("øktliste-feed feilet: {e}");
                Err(e)
            }
        }
    }

    pub fn invalidate(&self) {
        *self.timeline.lock().unwrap() = None;
        *self.sessions.lock().unwrap() = None;
    }
}
