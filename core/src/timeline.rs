use crate::dates::DateFormatter;
use crate::types::{SessionSummary, TimelinePoint};

/// Normaliserer rå tidslinjepunkter til parallelle serier for plotting:
/// korte datoetiketter (uten år) og rå antall spill per økt.
/// Tom input gir to tomme vektorer. Ren funksjon, ingen tilstand.
pub fn normalize(points: &[TimelinePoint], fmt: &dyn DateFormatter) -> (Vec<String>, Vec<f64>) {
    let mut labels = Vec::with_capacity(points.len());
    let mut counts = Vec::with_capacity(points.len());

    for p in points {
        labels.push(fmt.short_label(&p.date_time));
        counts.push(p.game_count as f64);
    }

    (labels, counts)
}

/// Øktliste (nyeste først, som i feeden) → tidslinjepunkter stigende i tid.
/// Samme omforming som host-appens /api/sessions/timeline.
pub fn timeline_points(sessions: &[SessionSummary]) -> Vec<TimelinePoint> {
    let mut points: Vec<TimelinePoint> = sessions
        .iter()
        .map(|s| TimelinePoint {
            session_id: s.session_id.clone(),
            date_time: s.start_time,
            game_count: s.total_games,
            wins_a: s.wins_a,
            wins_b: s.wins_b,
            duration_minutes: s.duration_minutes,
        })
        .collect();

    points.sort_by_key(|p| p.date_time);
    points
}
