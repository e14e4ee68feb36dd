//! Cursor-reactive avatar expression engine.
//!
//! The engine turns pointer samples into a per-frame [`RenderParams`]
//! snapshot: eased pupil offset, eyebrow raise/tilt, head turn, squint,
//! blink scale and smile geometry.
//!
//! Typical usage:
//! - Construct with `ExpressionEngine::init(config, seed)`
//! - Keep the avatar rect current with `set_anchor`
//! - Feed `on_pointer_move(x, y, now_ms)` from pointer events
//! - Call `tick(now_ms)` once per animation frame and style the DOM from
//!   the returned params

use crate::blink::{Blink, BlinkPhase};
use crate::config::ExpressionConfig;
use crate::constants::*;
use crate::scheduler::{IdleEvents, IdleScheduler};
use crate::smile::{Smile, SmileMode, SmileParams};
use glam::Vec2;

/// Avatar bounding rect in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center of the rect, or `None` before layout (zero size) or when any
    /// component is non-finite.
    pub fn center(&self) -> Option<Vec2> {
        let finite = [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EyebrowParams {
    pub raise_px: f32,
    pub left_rotation_deg: f32,
    pub right_rotation_deg: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeadParams {
    pub translate: Vec2,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub perspective_px: f32,
}

/// Everything the styling layer needs to pose the avatar for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    pub intensity: f32,
    /// Pupil translation from the eye center, in pixels.
    pub pupil_offset: Vec2,
    /// Vertical scale of the eyes (1 open, near 0 mid-blink).
    pub eye_scale_y: f32,
    pub squint: bool,
    pub eyebrows: EyebrowParams,
    pub head: HeadParams,
    pub smile: SmileParams,
}

impl RenderParams {
    /// Resting pose: eyes centered and open, neutral smile.
    pub fn neutral() -> Self {
        Self {
            intensity: 0.0,
            pupil_offset: Vec2::ZERO,
            eye_scale_y: 1.0,
            squint: false,
            eyebrows: eyebrows_for(0.0, 0.0, EYEBROW_RAISE_PX),
            head: head_for(Vec2::ZERO),
            smile: crate::smile::distance_geometry(0.0),
        }
    }
}

/// `1 - min(distance / falloff, 1)`; 0 for non-finite distances.
pub fn expression_intensity(distance: f32, falloff_px: f32) -> f32 {
    if !distance.is_finite() || !falloff_px.is_finite() || falloff_px <= 0.0 {
        return 0.0;
    }
    (1.0 - (distance.max(0.0) / falloff_px).min(1.0)).clamp(0.0, 1.0)
}

/// Desired pupil offset for a pointer at `angle`/`distance` from the center.
///
/// Amplitude grows with distance and saturates at 1.5x the range; vertical
/// travel is 70% of horizontal.
pub fn look_target(angle: f32, distance: f32, range: f32) -> Vec2 {
    let look = (distance / LOOK_DISTANCE_DIVISOR).min(LOOK_INTENSITY_MAX);
    Vec2::new(
        angle.cos() * range * look,
        angle.sin() * range * PUPIL_VERTICAL_RATIO * look,
    )
}

fn eyebrows_for(intensity: f32, angle: f32, raise_px: f32) -> EyebrowParams {
    let tilt = angle.sin() * EYEBROW_TILT_DEG;
    EyebrowParams {
        raise_px: intensity * raise_px,
        left_rotation_deg: -EYEBROW_REST_ROTATION_DEG - tilt,
        right_rotation_deg: EYEBROW_REST_ROTATION_DEG - tilt,
    }
}

fn head_for(delta: Vec2) -> HeadParams {
    HeadParams {
        translate: Vec2::new(delta.x / HEAD_MOVE_X_DIVISOR, delta.y / HEAD_MOVE_Y_DIVISOR),
        rotate_x_deg: -delta.y / HEAD_TILT_DIVISOR,
        rotate_y_deg: delta.x / HEAD_TURN_DIVISOR,
        perspective_px: HEAD_PERSPECTIVE_PX,
    }
}

pub struct ExpressionEngine {
    config: ExpressionConfig,
    anchor: AnchorRect,
    last_sample: Option<PointerSample>,
    clock_ms: f64,

    eye_offset: Vec2,
    eye_target: Vec2,
    intensity: f32,
    delta: Vec2,
    angle: f32,

    blink: Blink,
    smile: Smile,
    scheduler: IdleScheduler,
    blink_requested: bool,
    disposed: bool,
}

impl ExpressionEngine {
    pub fn init(config: ExpressionConfig, seed: u64) -> Self {
        log::debug!("[expression] init seed={seed}");
        let scheduler = IdleScheduler::new(&config, seed);
        Self {
            config,
            anchor: AnchorRect::default(),
            last_sample: None,
            clock_ms: 0.0,
            eye_offset: Vec2::ZERO,
            eye_target: Vec2::ZERO,
            intensity: 0.0,
            delta: Vec2::ZERO,
            angle: 0.0,
            blink: Blink::default(),
            smile: Smile::default(),
            scheduler,
            blink_requested: false,
            disposed: false,
        }
    }

    /// Stop reacting to input. Further calls leave the state untouched and
    /// `tick` returns the neutral pose.
    pub fn dispose(&mut self) {
        if !self.disposed {
            log::debug!("[expression] dispose");
        }
        self.blink_requested = false;
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn eye_offset(&self) -> Vec2 {
        self.eye_offset
    }

    pub fn eye_target(&self) -> Vec2 {
        self.eye_target
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn blink_phase(&self) -> BlinkPhase {
        self.blink.phase()
    }

    pub fn smile_mode(&self) -> SmileMode {
        self.smile.mode()
    }

    pub fn smile_width_px(&self) -> f32 {
        self.smile.width_px()
    }

    /// Update the avatar rect; the last pointer sample is re-evaluated
    /// against it so layout shifts take effect without a new move.
    pub fn set_anchor(&mut self, rect: AnchorRect) {
        if self.disposed {
            return;
        }
        self.anchor = rect;
        if let Some(sample) = self.last_sample {
            self.apply_sample(sample);
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        if self.disposed {
            return;
        }
        if !(x.is_finite() && y.is_finite() && now_ms.is_finite()) {
            log::trace!("[expression] discarding non-finite pointer sample");
            return;
        }
        self.clock_ms = now_ms;
        let sample = PointerSample {
            x,
            y,
            timestamp_ms: now_ms,
        };
        self.last_sample = Some(sample);
        self.apply_sample(sample);
        self.run_idle(now_ms);
    }

    fn apply_sample(&mut self, sample: PointerSample) {
        let Some(center) = self.anchor.center() else {
            self.intensity = 0.0;
            self.eye_target = Vec2::ZERO;
            self.delta = Vec2::ZERO;
            self.angle = 0.0;
            self.smile.set_intensity(0.0);
            return;
        };
        let delta = Vec2::new(sample.x, sample.y) - center;
        let distance = delta.length();
        if !distance.is_finite() {
            return;
        }
        let angle = delta.y.atan2(delta.x);
        self.delta = delta;
        self.angle = angle;
        self.intensity = expression_intensity(distance, self.config.falloff_px);
        self.eye_target = look_target(angle, distance, self.config.pupil_range);
        self.smile.set_intensity(self.intensity);
    }

    fn run_idle(&mut self, now_ms: f64) {
        let IdleEvents { blink, wide_smile } = self.scheduler.poll(now_ms);
        if blink {
            log::trace!("[expression] idle blink at {now_ms:.0}ms");
            self.blink.trigger(now_ms);
        }
        if wide_smile && self.smile.mode() != SmileMode::HoverBoosted {
            log::trace!("[expression] idle wide smile at {now_ms:.0}ms");
            self.smile
                .start_wide(now_ms, self.config.wide_smile_duration_ms);
        }
    }

    /// Request a blink. It starts at the timestamp of the next `tick`, so a
    /// request made after a long gap between frames still plays in full.
    /// Several requests before that tick collapse into one.
    pub fn trigger_blink(&mut self) {
        if self.disposed {
            return;
        }
        self.blink_requested = true;
    }

    pub fn set_hover_boost(&mut self, active: bool) {
        if self.disposed {
            return;
        }
        self.smile.set_hover(active);
    }

    /// Advance one frame and snapshot the pose.
    ///
    /// Easing is a fixed fraction per call, not per elapsed millisecond.
    pub fn tick(&mut self, now_ms: f64) -> RenderParams {
        if self.disposed {
            return RenderParams::neutral();
        }
        if now_ms.is_finite() {
            self.clock_ms = now_ms;
        }
        let now = self.clock_ms;
        self.run_idle(now);
        if std::mem::take(&mut self.blink_requested) {
            self.blink.trigger(now);
            self.scheduler.note_blink(now);
        }

        self.eye_offset += (self.eye_target - self.eye_offset) * self.config.follow_speed;
        let eye_scale_y = self.blink.advance(now);
        self.smile.advance(now);

        RenderParams {
            intensity: self.intensity,
            pupil_offset: self.eye_offset * PUPIL_OFFSET_SCALE,
            eye_scale_y,
            squint: self.intensity * SQUINT_GAIN > SQUINT_THRESHOLD,
            eyebrows: eyebrows_for(self.intensity, self.angle, self.config.eyebrow_raise_px),
            head: head_for(self.delta),
            smile: self.smile.params(),
        }
    }
}
