use chrono::NaiveDateTime;
use log::warn;

use crate::types::{GameRecord, PlayerNames, SessionSummary};

/// Mer enn 4 timer mellom to spill starter ny økt (host-appens regel).
pub const SESSION_GAP_HOURS: f64 = 4.0;

/// Økt-id = "%Y-%m-%d-%H" for øktas første spill.
pub fn session_id_for(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d-%H").to_string()
}

/// Tildeler økt-id til spill som mangler den. Eksisterende id-er beholdes og
/// viderefører økta for etterfølgende spill innen gap-grensen. Sorterer på
/// `timestamp` først, som host-appens migrering.
pub fn assign_session_ids(games: &mut [GameRecord]) {
    games.sort_by(|a, b| a.timestamp.partial_cmp(&b.timestamp).unwrap());

    let mut current: Option<String> = None;
    let mut last_ts: Option<f64> = None;

    for g in games.iter_mut() {
        if let Some(id) = &g.session_id {
            current = Some(id.clone());
            last_ts = Some(g.timestamp);
            continue;
        }

        let new_session = match last_ts {
            None => true,
            Some(prev) => (g.timestamp - prev) / 3600.0 > SESSION_GAP_HOURS,
        };
        if new_session || current.is_none() {
            current = Some(session_id_for(&g.date_time));
        }

        g.session_id = current.clone();
        last_ts = Some(g.timestamp);
    }
}

/// Grupperer en id-tildelt, tidssortert logg til øktsammendrag, nyeste først
/// (samme rekkefølge som øktliste-feeden). Vinnere som ikke matcher noen av
/// spillerne teller ikke for noen – dermed holder wins_a + wins_b <= total.
pub fn summarize_sessions(games: &[GameRecord], players: &PlayerNames) -> Vec<SessionSummary> {
    let mut sessions: Vec<SessionSummary> = Vec::new();

    let mut i = 0usize;
    while i < games.len() {
        let sid = match &games[i].session_id {
            Some(s) => s.clone(),
            None => {
                warn!("spill uten økt-id hoppes over (t={})", games[i].timestamp);
                i += 1;
                continue;
            }
        };

        let mut wins_a = 0u32;
        let mut wins_b = 0u32;
        let mut j = i;
        while j < games.len() && games[j].session_id.as_deref() == Some(sid.as_str()) {
            let g = &games[j];
            if g.winner == players.a {
                wins_a += 1;
            } else if g.winner == players.b {
                wins_b += 1;
            }
            j += 1;
        }

        let start_time = games[i].date_time;
        let end_time = games[j - 1].date_time;
        let duration_minutes = (end_time - start_time).num_minutes().max(0) as u32;

        sessions.push(SessionSummary {
            session_id: sid,
            start_time,
            end_time,
            total_games: (j - i) as u32,
            wins_a,
            wins_b,
            duration_minutes,
        });

        i = j;
    }

    sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    sessions
}
