use crate::config::ExpressionConfig;
use rand::prelude::*;

/// Idle behaviors that came due during a [`IdleScheduler::poll`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdleEvents {
    pub blink: bool,
    pub wide_smile: bool,
}

/// Deterministic scheduler for idle blinks and wide smiles.
///
/// Each behavior keeps the timestamp of its next occurrence, drawn when it is
/// (re)scheduled as `now + cooldown + Exp(mean_extra)`. The cooldown is a hard
/// floor between two occurrences; the exponential tail keeps the rhythm from
/// looking mechanical. With the same seed and the same sequence of `poll`
/// timestamps the output is identical.
pub struct IdleScheduler {
    rng: StdRng,
    blink_cooldown_ms: f64,
    blink_mean_extra_ms: f64,
    wide_cooldown_ms: f64,
    wide_mean_extra_ms: f64,
    next_blink_at: Option<f64>,
    next_wide_smile_at: Option<f64>,
}

impl IdleScheduler {
    pub fn new(config: &ExpressionConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            blink_cooldown_ms: config.blink_cooldown_ms,
            blink_mean_extra_ms: config.blink_mean_extra_ms,
            wide_cooldown_ms: config.wide_smile_cooldown_ms,
            wide_mean_extra_ms: config.wide_smile_mean_extra_ms,
            next_blink_at: None,
            next_wide_smile_at: None,
        }
    }

    pub fn next_blink_at(&self) -> Option<f64> {
        self.next_blink_at
    }

    pub fn next_wide_smile_at(&self) -> Option<f64> {
        self.next_wide_smile_at
    }

    /// Report due behaviors and reschedule them.
    ///
    /// A poll that finds a timer unarmed arms it and reports nothing. At most
    /// one behavior fires per poll; blink wins a tie and the smile stays due
    /// for the next poll.
    pub fn poll(&mut self, now_ms: f64) -> IdleEvents {
        let mut events = IdleEvents::default();
        if !now_ms.is_finite() {
            return events;
        }
        let (Some(blink_at), Some(wide_at)) = (self.next_blink_at, self.next_wide_smile_at) else {
            if self.next_blink_at.is_none() {
                self.reschedule_blink(now_ms);
            }
            if self.next_wide_smile_at.is_none() {
                self.reschedule_wide_smile(now_ms);
            }
            return events;
        };
        if now_ms >= blink_at {
            events.blink = true;
            self.reschedule_blink(now_ms);
        } else if now_ms >= wide_at {
            events.wide_smile = true;
            self.reschedule_wide_smile(now_ms);
        }
        events
    }

    /// Push the next idle blink out after an externally triggered blink.
    pub fn note_blink(&mut self, now_ms: f64) {
        if now_ms.is_finite() {
            self.reschedule_blink(now_ms);
        }
    }

    fn reschedule_blink(&mut self, now_ms: f64) {
        let extra = sample_exponential(&mut self.rng, self.blink_mean_extra_ms);
        self.next_blink_at = Some(now_ms + self.blink_cooldown_ms + extra);
    }

    fn reschedule_wide_smile(&mut self, now_ms: f64) {
        let extra = sample_exponential(&mut self.rng, self.wide_mean_extra_ms);
        let at = now_ms + self.wide_cooldown_ms + extra;
        self.next_wide_smile_at = Some(at);
        log::trace!("[idle] next wide smile at {:.0}ms", at);
    }
}

/// Inverse-CDF sample of an exponential distribution with the given mean.
fn sample_exponential(rng: &mut StdRng, mean: f64) -> f64 {
    if mean <= 0.0 {
        return 0.0;
    }
    // gen::<f64>() is in [0, 1), so 1 - u is in (0, 1] and ln stays finite
    let u: f64 = rng.gen();
    -mean * (1.0 - u).ln()
}
