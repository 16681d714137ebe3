// Copyright 2025 the Galley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Cursor blink timing.
///
/// This is plain state owned by the host, deliberately not global: each
/// editor view drives its own instance from its frame clock and draws the
/// caret when [`is_visible`](Self::is_visible) returns true. The editor
/// itself never reads it.
#[derive(Copy, Clone, Debug)]
pub struct BlinkState {
    interval: f64,
    elapsed: f64,
    visible: bool,
    running: bool,
}

impl Default for BlinkState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl BlinkState {
    /// The conventional blink phase length, in seconds.
    pub const DEFAULT_INTERVAL: f64 = 0.5;

    /// Creates a stopped blink state with the given phase length in seconds.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            visible: true,
            running: false,
        }
    }

    /// Starts blinking from a visible phase.
    pub fn start(&mut self) {
        self.running = true;
        self.reset();
    }

    /// Stops blinking. The caret stays visible while stopped.
    pub fn stop(&mut self) {
        self.running = false;
        self.visible = true;
        self.elapsed = 0.0;
    }

    /// Restarts the current phase, making the caret visible.
    ///
    /// Hosts call this on every edit or cursor move so the caret does not
    /// blink mid-interaction.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.visible = true;
    }

    /// Advances the clock by `dt` seconds.
    ///
    /// Returns true if the visibility changed and the caret needs redrawing.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.running || self.interval <= 0.0 {
            return false;
        }
        let before = self.visible;
        self.elapsed += dt;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.visible = !self.visible;
        }
        before != self.visible
    }

    /// Whether the caret should currently be drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
