//! Expression and particle tuning constants.
//!
//! Distances are in logical (CSS) pixels, times in milliseconds. The values
//! reproduce the look of the portfolio avatar and background; `config.rs`
//! gathers them into overridable structs.

// Pointer mapping
pub const INTENSITY_FALLOFF_PX: f32 = 400.0; // distance at which expressions go neutral
pub const LOOK_DISTANCE_DIVISOR: f32 = 60.0;
pub const LOOK_INTENSITY_MAX: f32 = 1.5; // eyes cannot travel past the socket
pub const PUPIL_MOVEMENT_RANGE: f32 = 7.0;
pub const PUPIL_VERTICAL_RATIO: f32 = 0.7; // elliptical socket
pub const PUPIL_OFFSET_SCALE: f32 = 0.9;
pub const EYE_FOLLOW_SPEED: f32 = 0.12; // fraction of the remaining gap per tick

// Eyebrows
pub const EYEBROW_RAISE_PX: f32 = 5.0;
pub const EYEBROW_TILT_DEG: f32 = 5.0;
pub const EYEBROW_REST_ROTATION_DEG: f32 = 5.0;

// Squint
pub const SQUINT_GAIN: f32 = 0.7;
pub const SQUINT_THRESHOLD: f32 = 0.3;

// Head
pub const HEAD_TURN_DIVISOR: f32 = 80.0;
pub const HEAD_TILT_DIVISOR: f32 = 120.0;
pub const HEAD_MOVE_X_DIVISOR: f32 = 100.0;
pub const HEAD_MOVE_Y_DIVISOR: f32 = 200.0;
pub const HEAD_PERSPECTIVE_PX: f32 = 1000.0;

// Smile geometry (distance-driven)
pub const SMILE_EASE_EXPONENT: f32 = 0.7;
pub const SMILE_WIDTH_MIN_PX: f32 = 25.0;
pub const SMILE_WIDTH_SPAN_PX: f32 = 35.0;
pub const SMILE_CURVE_MIN_PCT: f32 = 40.0;
pub const SMILE_CURVE_SPAN_PCT: f32 = 80.0;
pub const SMILE_THICKNESS_MIN_PX: f32 = 2.0;
pub const SMILE_THICKNESS_SPAN_PX: f32 = 3.0;
pub const SMILE_WIDE_THRESHOLD: f32 = 0.3;

// Smile overlays
pub const HOVER_STEP_PX: f32 = 10.0;
pub const HOVER_CAP_PX: f32 = 40.0;
pub const HOVER_RELEASE_THRESHOLD_PX: f32 = 30.0;
pub const HOVER_THICKNESS_PX: f32 = 3.0;
pub const HOVER_RELEASE_THICKNESS_PX: f32 = 2.5;
pub const SMILE_RECOVERY_RATE: f32 = 0.15; // fraction per tick after an overlay ends
pub const SMILE_RECOVERY_EPSILON_PX: f32 = 0.05;
pub const WIDE_SMILE_DURATION_MS: f64 = 1500.0;

// Blink phases
pub const BLINK_CLOSE_MS: f64 = 80.0;
pub const BLINK_OVERSHOOT_MS: f64 = 100.0;
pub const BLINK_SETTLE_MS: f64 = 100.0;
pub const BLINK_CLOSED_SCALE: f32 = 0.05;
pub const BLINK_OVERSHOOT_SCALE: f32 = 1.1;

// Idle scheduling
pub const BLINK_COOLDOWN_MS: f64 = 3000.0;
pub const BLINK_MEAN_EXTRA_MS: f64 = 750.0; // ~3.75 s average, like an 80% roll every 3 s
pub const WIDE_SMILE_COOLDOWN_MS: f64 = 5000.0;
pub const WIDE_SMILE_MEAN_EXTRA_MS: f64 = 12_000.0;

// Particle field
pub const PARTICLE_DENSITY_AREA: f32 = 15_000.0; // px² per particle
pub const PARTICLE_SPEED_MAX: f32 = 0.25; // per axis, px per frame
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;
pub const LINK_DISTANCE: f32 = 100.0;
pub const LINK_OPACITY_MAX: f32 = 0.2;
pub const LINK_WIDTH_PX: f32 = 1.0;
pub const SPATIAL_GRID_MIN_PARTICLES: usize = 400;

// Palettes (RGB 0..255)
pub const DARK_PARTICLE_RGB: [u8; 3] = [59, 130, 246];
pub const LIGHT_PARTICLE_RGB: [u8; 3] = [99, 102, 241];
