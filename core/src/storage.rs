use anyhow::{Context, Result};
use std::path::Path;

use crate::types::Cfg;

/// Leser inn konfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
pub fn load_cfg(path: &str) -> Result<Cfg> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("kunne ikke lese konfig fra {path}"))?;
        let cfg: Cfg = serde_json::from_str(&contents)
            .with_context(|| format!("ugyldig konfig-JSON i {path}"))?;
        println!(
            "📂 Konfig lastet fra {} (spillere={}/{})",
            path, cfg.players.a, cfg.players.b
        );
        Ok(cfg)
    } else {
        println!("⚠️ Fant ikke konfig på {}, returnerer default", path);
        Ok(Cfg::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_cfg(cfg: &Cfg, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, &json)
        .with_context(|| format!("kunne ikke skrive konfig til {path}"))?;
    println!("✅ Konfig lagret til {}", path);
    Ok(())
}
