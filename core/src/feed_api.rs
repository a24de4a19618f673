// core/src/feed_api.rs
use log::info;
use ureq::Agent;

use crate::feed::{decode_envelope, FeedError, FeedProvider};
use crate::types::{Cfg, SessionSummary, TimelinePoint};

/// Blocking-klient mot host-backendens to feeds (ureq, ingen tokio).
pub struct ApiClient {
    agent: Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(cfg: &Cfg) -> Self {
        // En enkel agent; ureq bruker rustls når "tls" er aktivert
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(cfg.feed_timeout_secs))
            .build();
        Self {
            agent,
            base_url: cfg.feed_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_body(&self, path: &str) -> Result<String, FeedError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| FeedError::Transport(e.to_string()))?;
        resp.into_string()
            .map_err(|e| FeedError::Transport(e.to_string()))
    }
}

// De to hentingene er uavhengige: egen metode per feed, ingen delt tilstand.
impl FeedProvider for ApiClient {
    fn fetch_timeline(&self) -> Result<Vec<TimelinePoint>, FeedError> {
        let body = self.get_body("/api/sessions/timeline")?;
        let data: Vec<TimelinePoint> = decode_envelope(&body)?;
        info!("tidslinje-feed: {} punkter", data.len());
        Ok(data)
    }

    fn fetch_sessions(&self) -> Result<Vec<SessionSummary>, FeedError> {
        let body = self.get_body("/api/sessions")?;
        let data: Vec<SessionSummary> = decode_envelope(&body)?;
        info!("øktliste-feed: {} økter", data.len());
        Ok(data)
    }
}
