use crate::constants::{
    BLINK_CLOSED_SCALE, BLINK_CLOSE_MS, BLINK_OVERSHOOT_MS, BLINK_OVERSHOOT_SCALE, BLINK_SETTLE_MS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkPhase {
    Idle,
    Closing,
    Overshoot,
    Settling,
}

impl BlinkPhase {
    fn duration_ms(self) -> f64 {
        match self {
            BlinkPhase::Idle => f64::INFINITY,
            BlinkPhase::Closing => BLINK_CLOSE_MS,
            BlinkPhase::Overshoot => BLINK_OVERSHOOT_MS,
            BlinkPhase::Settling => BLINK_SETTLE_MS,
        }
    }

    /// Vertical eye scale reached at the end of the phase.
    fn target_scale(self) -> f32 {
        match self {
            BlinkPhase::Idle | BlinkPhase::Settling => 1.0,
            BlinkPhase::Closing => BLINK_CLOSED_SCALE,
            BlinkPhase::Overshoot => BLINK_OVERSHOOT_SCALE,
        }
    }

    fn next(self) -> Self {
        match self {
            BlinkPhase::Closing => BlinkPhase::Overshoot,
            BlinkPhase::Overshoot => BlinkPhase::Settling,
            BlinkPhase::Settling | BlinkPhase::Idle => BlinkPhase::Idle,
        }
    }
}

/// Frame-clocked blink: collapse, overshoot, settle.
///
/// Re-triggering mid-blink restarts from `Closing`, starting at whatever
/// scale the eyes currently have.
#[derive(Clone, Debug)]
pub struct Blink {
    phase: BlinkPhase,
    phase_started_ms: f64,
    from_scale: f32,
    scale: f32,
}

impl Default for Blink {
    fn default() -> Self {
        Self {
            phase: BlinkPhase::Idle,
            phase_started_ms: 0.0,
            from_scale: 1.0,
            scale: 1.0,
        }
    }
}

impl Blink {
    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_active(&self) -> bool {
        self.phase != BlinkPhase::Idle
    }

    pub fn trigger(&mut self, now_ms: f64) {
        self.from_scale = self.scale;
        self.phase = BlinkPhase::Closing;
        self.phase_started_ms = now_ms;
    }

    /// Move the animation to `now_ms` and return the current eye scale.
    ///
    /// Long frames may skip whole phases; each skipped phase still ends at
    /// its own target so the next one interpolates from the right value.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        while self.phase != BlinkPhase::Idle {
            let end = self.phase_started_ms + self.phase.duration_ms();
            if now_ms < end {
                break;
            }
            self.from_scale = self.phase.target_scale();
            self.phase_started_ms = end;
            self.phase = self.phase.next();
        }
        self.scale = match self.phase {
            BlinkPhase::Idle => 1.0,
            phase => {
                let elapsed = (now_ms - self.phase_started_ms).max(0.0);
                let t = (elapsed / phase.duration_ms()).clamp(0.0, 1.0) as f32;
                let eased = 1.0 - (1.0 - t) * (1.0 - t);
                self.from_scale + (phase.target_scale() - self.from_scale) * eased
            }
        };
        self.scale
    }
}
