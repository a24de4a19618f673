use chrono::NaiveDateTime;

/// Datoformatering bak et seam slik at kjernelogikken holdes fri for
/// locale/kalender-detaljer (prod: ChronoDateFormatter, test: fast impl).
pub trait DateFormatter {
    /// Kort etikett for aksen, uten år ("Jan 5").
    fn short_label(&self, dt: &NaiveDateTime) -> String;
    /// Full etikett for punkt-detalj ("Jan 5, 2024").
    fn full_label(&self, dt: &NaiveDateTime) -> String;
}

/// Standardformatering via chrono, en-US-stil som i host-appens frontend.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoDateFormatter;

impl DateFormatter for ChronoDateFormatter {
    fn short_label(&self, dt: &NaiveDateTime) -> String {
        dt.format("%b %-d").to_string()
    }

    fn full_label(&self, dt: &NaiveDateTime) -> String {
        dt.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn labels_uten_nullpadding() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        let f = ChronoDateFormatter;
        assert_eq!(f.short_label(&dt), "Jan 5");
        assert_eq!(f.full_label(&dt), "Jan 5, 2024");
    }
}
