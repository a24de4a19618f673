use once_cell::sync::Lazy;
use prometheus::IntCounter;

use crate::types::{GameRecord, PlayerNames};

/// Vinnprosent med én desimal, som streng for visning.
/// 0 spill rapporteres som "0.0" – eksplisitt spesialtilfelle, ingen divisjon.
pub fn win_rate_pct(wins: u32, games: u32) -> String {
    if games == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", (wins as f64 / games as f64) * 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Streak {
    pub player: String,
    pub length: u32,
}

/// Gjeldende seiersrekke: gå bakover i loggen til motstanderen vinner.
/// Vinnere som ikke matcher noen av spillerne avslutter rekka.
pub fn current_streak(games: &[GameRecord], players: &PlayerNames) -> Option<Streak> {
    let mut streak_a = 0u32;
    let mut streak_b = 0u32;

    for g in games.iter().rev() {
        if g.winner == players.a {
            if streak_b > 0 {
                break;
            }
            streak_a += 1;
        } else if g.winner == players.b {
            if streak_a > 0 {
                break;
            }
            streak_b += 1;
        } else {
            break;
        }
    }

    if streak_a > 0 {
        Some(Streak {
            player: players.a.clone(),
            length: streak_a,
        })
    } else if streak_b > 0 {
        Some(Streak {
            player: players.b.clone(),
            length: streak_b,
        })
    } else {
        None
    }
}

// ── Prometheus-tellere for feed-henting ──────────────────────────────────────

/// Tellere for feed/cache. Opprettes uregistrert; host kan registrere dem i
/// eget registry ved behov.
pub struct Metrics {
    feed_cache_hit: IntCounter,
    feed_cache_miss: IntCounter,
    feed_fetch_fail: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            feed_cache_hit: IntCounter::new("feed_cache_hit_total", "Treff i feed-snapshotcache")
                .unwrap(),
            feed_cache_miss: IntCounter::new("feed_cache_miss_total", "Bom i feed-snapshotcache")
                .unwrap(),
            feed_fetch_fail: IntCounter::new("feed_fetch_fail_total", "Feilede feed-hentinger")
                .unwrap(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

pub fn feed_cache_hit_total(metrics: &Metrics) -> &IntCounter {
    &metrics.feed_cache_hit
}

pub fn feed_cache_miss_total(metrics: &Metrics) -> &IntCounter {
    &metrics.feed_cache_miss
}

pub fn feed_fetch_fail_total(metrics: &Metrics) -> &IntCounter {
    &metrics.feed_fetch_fail
}

/// Prosessglobal instans, delt på tvers av bindingen og host-appen.
pub static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);
