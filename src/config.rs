//! Run configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `BONK_SEED` | RNG seed for enemy placement and loot jitter | `1` |
//! | `BONK_ENEMIES` | Enemies at the start of a run (capped at `MAX_ENEMIES`) | `INITIAL_ENEMIES` |
//! | `BONK_WAVES` | `0`, `false`, `off` or `no` disables waves | on |
//! | `BONK_LOG_PATH` | File that receives log records | unset (logging off) |
//! | `BONK_KEY_RELEASE_MS` | Auto-release for terminals without release events | `KEY_RELEASE_TIMEOUT_MS` |
//! | `BONK_UNITS_PER_PX` | Render zoom, world units per pixel | `4.0` |
//!
//! Missing or unparsable values fall back to the default.

use std::path::PathBuf;

use crate::core::WorldConfig;
use crate::types::{INITIAL_ENEMIES, KEY_RELEASE_TIMEOUT_MS, MAX_ENEMIES};

pub const DEFAULT_UNITS_PER_PX: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed: u32,
    pub initial_enemies: usize,
    pub waves: bool,
    pub log_path: Option<PathBuf>,
    pub key_release_ms: f64,
    pub units_per_px: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            initial_enemies: INITIAL_ENEMIES,
            waves: true,
            log_path: None,
            key_release_ms: KEY_RELEASE_TIMEOUT_MS,
            units_per_px: DEFAULT_UNITS_PER_PX,
        }
    }
}

impl RunConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("BONK_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let initial_enemies = var("BONK_ENEMIES")
            .and_then(|s| s.parse::<usize>().ok())
            .map(|n| n.min(MAX_ENEMIES))
            .unwrap_or(defaults.initial_enemies);

        let waves = var("BONK_WAVES")
            .map(|s| !matches!(s.to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(defaults.waves);

        let log_path = var("BONK_LOG_PATH").map(PathBuf::from);

        let key_release_ms = var("BONK_KEY_RELEASE_MS")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|ms| ms.is_finite() && *ms > 0.0)
            .unwrap_or(defaults.key_release_ms);

        let units_per_px = var("BONK_UNITS_PER_PX")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|u| u.is_finite() && *u > 0.0)
            .unwrap_or(defaults.units_per_px);

        Self {
            seed,
            initial_enemies,
            waves,
            log_path,
            key_release_ms,
            units_per_px,
        }
    }

    pub fn world_config(&self) -> WorldConfig {
        WorldConfig {
            seed: self.seed,
            initial_enemies: self.initial_enemies,
            waves: self.waves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(RunConfig::from_lookup(lookup(&[])), RunConfig::default());
    }

    #[test]
    fn test_values_are_parsed() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("BONK_SEED", "42"),
            ("BONK_ENEMIES", " 3 "),
            ("BONK_WAVES", "off"),
            ("BONK_LOG_PATH", "/tmp/bonk.log"),
            ("BONK_KEY_RELEASE_MS", "300"),
            ("BONK_UNITS_PER_PX", "2.5"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.initial_enemies, 3);
        assert!(!cfg.waves);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/bonk.log")));
        assert_eq!(cfg.key_release_ms, 300.0);
        assert_eq!(cfg.units_per_px, 2.5);

        let world = cfg.world_config();
        assert_eq!(world.seed, 42);
        assert_eq!(world.initial_enemies, 3);
        assert!(!world.waves);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = RunConfig::from_lookup(lookup(&[
            ("BONK_SEED", "-1"),
            ("BONK_ENEMIES", "many"),
            ("BONK_LOG_PATH", "   "),
            ("BONK_KEY_RELEASE_MS", "0"),
            ("BONK_UNITS_PER_PX", "NaN"),
        ]));
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn test_enemy_count_is_capped() {
        let cfg = RunConfig::from_lookup(lookup(&[("BONK_ENEMIES", "1000")]));
        assert_eq!(cfg.initial_enemies, MAX_ENEMIES);
    }
}
