use chrono::{NaiveDate, NaiveDateTime};
use smashgraph_core::dates::ChronoDateFormatter;
use smashgraph_core::tooltip::describe;
use smashgraph_core::types::{PlayerNames, TimelinePoint};

fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(19, 30, 0)
        .unwrap()
}

fn pt(games: u32, wa: u32, wb: u32) -> TimelinePoint {
    TimelinePoint {
        session_id: "2024-01-05-19".to_string(),
        date_time: dt(2024, 1, 5),
        game_count: games,
        wins_a: wa,
        wins_b: wb,
        duration_minutes: 87,
    }
}

#[test]
fn sammendrag_med_vinnprosent() {
    let points = vec![pt(10, 3, 6)];
    let s = describe(&points, 0, 6.3, &PlayerNames::default(), &ChronoDateFormatter);

    assert_eq!(s.date, "Jan 5, 2024"); // full dato, med år
    assert_eq!(s.games, 10);
    assert_eq!(s.trend, 6.3);
    assert_eq!(s.player_a, "Shayne");
    assert_eq!(s.player_b, "Matt");
    assert_eq!(s.wins_a, 3);
    assert_eq!(s.win_rate_a, "30.0");
    assert_eq!(s.win_rate_b, "60.0");
    assert_eq!(s.duration_minutes, 87);
}

#[test]
fn null_spill_gir_null_prosent_ikke_nan() {
    let points = vec![pt(0, 0, 0)];
    let s = describe(&points, 0, 0.0, &PlayerNames::default(), &ChronoDateFormatter);

    assert_eq!(s.win_rate_a, "0.0");
    assert_eq!(s.win_rate_b, "0.0");
}

#[test]
fn egne_spillernavn_brukes() {
    let players = PlayerNames {
        a: "P1".to_string(),
        b: "P2".to_string(),
    };
    let points = vec![pt(8, 5, 2)];
    let s = describe(&points, 0, 8.0, &players, &ChronoDateFormatter);

    assert_eq!(s.player_a, "P1");
    assert_eq!(s.win_rate_a, "62.5");
    assert_eq!(s.win_rate_b, "25.0");
}
