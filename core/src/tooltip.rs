use crate::dates::DateFormatter;
use crate::metrics::win_rate_pct;
use crate::types::{PlayerNames, PointSummary, TimelinePoint};

/// Sammendraget tooltipen viser for ett plottet punkt: full dato, rått
/// antall spill, trendverdi, seire og vinnprosent per spiller, varighet.
///
/// Forutsetning: `index < points.len()`. Trendverdien for indeksen leveres
/// av kaller (utdata fra smoothing::rolling_trend, indeks-justert).
pub fn describe(
    points: &[TimelinePoint],
    index: usize,
    trend_at_index: f64,
    players: &PlayerNames,
    fmt: &dyn DateFormatter,
) -> PointSummary {
    let p = &points[index];

    PointSummary {
        session_id: p.session_id.clone(),
        date: fmt.full_label(&p.date_time),
        games: p.game_count,
        trend: trend_at_index,
        player_a: players.a.clone(),
        player_b: players.b.clone(),
        wins_a: p.wins_a,
        wins_b: p.wins_b,
        win_rate_a: win_rate_pct(p.wins_a, p.game_count),
        win_rate_b: win_rate_pct(p.wins_b, p.game_count),
        duration_minutes: p.duration_minutes,
    }
}
