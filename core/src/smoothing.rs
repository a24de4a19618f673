/// Avrunding til gitt antall desimaler, half-away-from-zero (f64::round).
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Adaptiv vindusbredde: ceil(n/10), klemt til [1, 5].
/// Nesten rå serie for korte historikker, maks 5-punkts glatting for lange.
pub fn window_size(n: usize) -> usize {
    ((n + 9) / 10).clamp(1, 5)
}

/// Sentrert glidende snitt med adaptivt vindu, én verdi per inngangspunkt.
/// Ved kantene krymper vinduet i stedet for å padde med syntetiske verdier.
/// NB: venstre side bruker floor(w/2), høyre ceil(w/2) (eksklusiv) – ved
/// partall vindu ligger vinduet ett hakk tungt mot venstre. Verdiene rundes
/// til én desimal (half-away-from-zero).
pub fn rolling_trend(counts: &[f64]) -> Vec<f64> {
    if counts.is_empty() {
        return Vec::new();
    }
    let n = counts.len();
    let w = window_size(n);
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        let start = i.saturating_sub(w / 2);
        let end = (i + (w + 1) / 2).min(n);
        // delintervallet inneholder alltid minst counts[i]
        let slice = &counts[start..end];
        let avg = slice.iter().copied().sum::<f64>() / slice.len() as f64;
        out.push(avg.round_to(1));
    }

    out
}
