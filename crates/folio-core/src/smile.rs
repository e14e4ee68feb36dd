//! Smile geometry and its overlay states.
//!
//! The base smile follows pointer intensity. Two transient overlays sit on
//! top of it: a hover boost while an interactive element is under the
//! pointer, and a randomly scheduled wide smile. Leaving an overlay never
//! snaps back; the geometry eases toward the distance-driven values.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SmileMode {
    Neutral,
    DistanceDriven,
    HoverBoosted,
    RandomlyWide { until_ms: f64 },
}

/// Geometry handed to the styling layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmileParams {
    pub width_px: f32,
    /// Border radius of the top corners, in percent.
    pub curve_pct: f32,
    pub thickness_px: f32,
    /// Pronounced-smile flag (the `wide` CSS class).
    pub wide: bool,
    /// Border drawn in the softer hover ink, from hover start until the
    /// release has fully recovered.
    pub hover_ink: bool,
}

/// Distance-driven geometry for an intensity in [0, 1].
pub fn distance_geometry(intensity: f32) -> SmileParams {
    let i = intensity.clamp(0.0, 1.0);
    let eased = i.powf(SMILE_EASE_EXPONENT);
    SmileParams {
        width_px: SMILE_WIDTH_MIN_PX + eased * SMILE_WIDTH_SPAN_PX,
        curve_pct: SMILE_CURVE_MIN_PCT + eased * SMILE_CURVE_SPAN_PCT,
        thickness_px: SMILE_THICKNESS_MIN_PX + eased * SMILE_THICKNESS_SPAN_PX,
        wide: i > SMILE_WIDE_THRESHOLD,
        hover_ink: false,
    }
}

#[derive(Clone, Debug)]
pub struct Smile {
    mode: SmileMode,
    intensity: f32,
    width_px: f32,
    thickness_px: f32,
    recovering: bool,
    hover_ink: bool,
}

impl Default for Smile {
    fn default() -> Self {
        let base = distance_geometry(0.0);
        Self {
            mode: SmileMode::Neutral,
            intensity: 0.0,
            width_px: base.width_px,
            thickness_px: base.thickness_px,
            recovering: false,
            hover_ink: false,
        }
    }
}

impl Smile {
    pub fn mode(&self) -> SmileMode {
        self.mode
    }

    pub fn is_recovering(&self) -> bool {
        self.recovering
    }

    pub fn width_px(&self) -> f32 {
        self.width_px
    }

    fn base_mode(&self) -> SmileMode {
        if self.intensity > 0.0 {
            SmileMode::DistanceDriven
        } else {
            SmileMode::Neutral
        }
    }

    /// Hover width: one step above the distance width, capped, and never
    /// narrower than the distance width itself.
    fn boosted_width(&self) -> f32 {
        let base = distance_geometry(self.intensity).width_px;
        base.max((base + HOVER_STEP_PX).min(HOVER_CAP_PX))
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.clamp(0.0, 1.0);
        match self.mode {
            SmileMode::Neutral | SmileMode::DistanceDriven => {
                self.mode = self.base_mode();
                if !self.recovering {
                    let base = distance_geometry(self.intensity);
                    self.width_px = base.width_px;
                    self.thickness_px = base.thickness_px;
                }
            }
            SmileMode::HoverBoosted => self.width_px = self.boosted_width(),
            SmileMode::RandomlyWide { .. } => {}
        }
    }

    pub fn set_hover(&mut self, active: bool) {
        if active {
            self.mode = SmileMode::HoverBoosted;
            self.width_px = self.boosted_width();
            self.thickness_px = HOVER_THICKNESS_PX;
            self.recovering = false;
            self.hover_ink = true;
            return;
        }
        if self.mode != SmileMode::HoverBoosted {
            return;
        }
        self.mode = self.base_mode();
        if self.width_px > HOVER_RELEASE_THRESHOLD_PX {
            self.thickness_px = HOVER_RELEASE_THICKNESS_PX;
            self.recovering = true;
        } else {
            let base = distance_geometry(self.intensity);
            self.width_px = base.width_px;
            self.thickness_px = base.thickness_px;
            self.hover_ink = false;
        }
    }

    pub fn start_wide(&mut self, now_ms: f64, duration_ms: f64) {
        self.mode = SmileMode::RandomlyWide {
            until_ms: now_ms + duration_ms,
        };
        self.width_px = SMILE_WIDTH_MIN_PX + SMILE_WIDTH_SPAN_PX;
        self.recovering = false;
        self.hover_ink = false;
    }

    /// Per-frame update: expire the wide overlay and ease any recovery.
    pub fn advance(&mut self, now_ms: f64) {
        if let SmileMode::RandomlyWide { until_ms } = self.mode {
            if now_ms >= until_ms {
                self.mode = self.base_mode();
                self.recovering = true;
            }
        }
        if !self.recovering {
            return;
        }
        let base = distance_geometry(self.intensity);
        self.width_px += (base.width_px - self.width_px) * SMILE_RECOVERY_RATE;
        self.thickness_px += (base.thickness_px - self.thickness_px) * SMILE_RECOVERY_RATE;
        if (self.width_px - base.width_px).abs() < SMILE_RECOVERY_EPSILON_PX
            && (self.thickness_px - base.thickness_px).abs() < SMILE_RECOVERY_EPSILON_PX
        {
            self.width_px = base.width_px;
            self.thickness_px = base.thickness_px;
            self.recovering = false;
            self.hover_ink = false;
        }
    }

    pub fn params(&self) -> SmileParams {
        let base = distance_geometry(self.intensity);
        SmileParams {
            width_px: self.width_px,
            curve_pct: base.curve_pct,
            thickness_px: self.thickness_px,
            wide: base.wide || matches!(self.mode, SmileMode::RandomlyWide { .. }),
            hover_ink: self.hover_ink,
        }
    }
}
