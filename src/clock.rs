//! Host time to simulation time.

use crate::types::MAX_FRAME_DT;

/// Turns host monotonic milliseconds into per-frame `dt` and a simulation
/// timestamp.
///
/// `dt` is clamped to `0..=MAX_FRAME_DT` seconds so a stalled terminal cannot
/// teleport enemies. The simulation timestamp only advances by the clamped
/// amount and stands still while paused, which keeps loot from expiring
/// during a pause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last_host_ms: Option<f64>,
    sim_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_host_ms: None,
            sim_ms: 0.0,
        }
    }

    /// Current simulation timestamp in milliseconds.
    pub fn sim_ms(&self) -> f64 {
        self.sim_ms
    }

    /// Step to `host_ms`; returns `(dt_seconds, sim_ms)`.
    ///
    /// The first call yields `dt = 0`. A host clock that runs backwards also
    /// yields zero.
    pub fn advance(&mut self, host_ms: f64, paused: bool) -> (f32, f64) {
        let elapsed_ms = match self.last_host_ms {
            Some(last) if host_ms.is_finite() => (host_ms - last).max(0.0),
            _ => 0.0,
        };
        if host_ms.is_finite() {
            self.last_host_ms = Some(host_ms);
        }

        if paused {
            return (0.0, self.sim_ms);
        }

        let dt = ((elapsed_ms / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT);
        self.sim_ms += dt as f64 * 1000.0;
        (dt, self.sim_ms)
    }

    /// Back to zero, e.g. on restart.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
