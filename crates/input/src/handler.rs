//! Polled key-state handler.
//!
//! Press/release events only update the held-key table; the game loop samples
//! it once per frame with [`InputHandler::sample`]. Terminals that never send
//! key-release events are supported through an auto-release timeout.

use crate::types::{InputFrame, Key, KEY_RELEASE_TIMEOUT_MS};

/// Tracks held keys and the pending attack request.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Last press/repeat timestamp of every held key.
    held: [Option<f64>; Key::COUNT],
    attack_pending: bool,
    key_release_timeout_ms: Option<f64>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: [None; Key::COUNT],
            attack_pending: false,
            key_release_timeout_ms: Some(KEY_RELEASE_TIMEOUT_MS),
        }
    }

    /// Override the auto-release timeout; `None` trusts release events fully.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<f64>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<f64> {
        self.key_release_timeout_ms
    }

    /// Record a press (or auto-repeat) of `key` at `now_ms`.
    ///
    /// Returns `true` only on a released → held transition. An `Attack`
    /// transition raises the attack request; held repeats never do.
    pub fn handle_key_press(&mut self, key: Key, now_ms: f64) -> bool {
        let slot = &mut self.held[key.index()];
        let edge = slot.is_none();
        *slot = Some(now_ms);
        if edge && key == Key::Attack {
            self.attack_pending = true;
        }
        edge
    }

    pub fn handle_key_release(&mut self, key: Key) {
        self.held[key.index()] = None;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()].is_some()
    }

    /// Release keys not seen for longer than the auto-release timeout.
    pub fn expire(&mut self, now_ms: f64) {
        let Some(timeout) = self.key_release_timeout_ms else {
            return;
        };
        for slot in self.held.iter_mut() {
            if let Some(seen) = *slot {
                if now_ms - seen > timeout {
                    *slot = None;
                }
            }
        }
    }

    /// Current movement direction from the held arrow keys.
    ///
    /// Opposite keys cancel; diagonals are scaled to unit length.
    pub fn movement_intent(&self) -> (f32, f32) {
        let axis = |neg: Key, pos: Key| -> f32 {
            (self.is_held(pos) as i8 - self.is_held(neg) as i8) as f32
        };
        let x = axis(Key::Left, Key::Right);
        let y = axis(Key::Up, Key::Down);
        if x != 0.0 && y != 0.0 {
            (x * std::f32::consts::FRAC_1_SQRT_2, y * std::f32::consts::FRAC_1_SQRT_2)
        } else {
            (x, y)
        }
    }

    /// Sample the input for one frame, consuming the attack request.
    pub fn sample(&mut self, now_ms: f64) -> InputFrame {
        self.expire(now_ms);
        let (move_x, move_y) = self.movement_intent();
        let attack = std::mem::take(&mut self.attack_pending);
        InputFrame {
            move_x,
            move_y,
            attack,
        }
    }

    pub fn reset(&mut self) {
        self.held = [None; Key::COUNT];
        self.attack_pending = false;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
