// Host-side tests for the avatar expression engine.

use folio_core::constants::*;
use folio_core::*;
use glam::Vec2;

/// Engine with a 100x100 avatar centered at (50, 50).
fn make_engine() -> ExpressionEngine {
    let mut engine = ExpressionEngine::init(ExpressionConfig::default(), 7);
    engine.set_anchor(AnchorRect::new(0.0, 0.0, 100.0, 100.0));
    engine
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn intensity_saturates_at_both_ends() {
    assert_eq!(expression_intensity(0.0, 400.0), 1.0);
    assert_eq!(expression_intensity(400.0, 400.0), 0.0);
    for d in [400.0, 401.0, 500.0, 10_000.0] {
        assert_eq!(expression_intensity(d, 400.0), 0.0, "d={d}");
    }
    assert_eq!(expression_intensity(f32::NAN, 400.0), 0.0);
}

#[test]
fn intensity_is_non_increasing_in_distance() {
    let mut prev = expression_intensity(0.0, 400.0);
    for step in 1..=1000 {
        let i = expression_intensity(step as f32 * 0.5, 400.0);
        assert!(i <= prev, "intensity rose at d={}", step as f32 * 0.5);
        assert!((0.0..=1.0).contains(&i));
        prev = i;
    }
}

#[test]
fn look_target_saturates_and_compresses_vertically() {
    let far_right = look_target(0.0, 1_000.0, 7.0);
    assert!(approx(far_right.x, 7.0 * 1.5));
    assert!(approx(far_right.y, 0.0));

    let far_down = look_target(std::f32::consts::FRAC_PI_2, 1_000.0, 7.0);
    assert!(approx(far_down.y, 7.0 * 0.7 * 1.5));

    let near = look_target(0.0, 30.0, 7.0);
    assert!(approx(near.x, 7.0 * 0.5));
}

#[test]
fn eye_offset_eases_strictly_toward_target() {
    let mut engine = make_engine();
    engine.on_pointer_move(250.0, 50.0, 1_000.0);
    let target = engine.eye_target();
    assert!(approx(target.x, 10.5));

    let mut prev = engine.eye_offset();
    for frame in 0..30 {
        engine.tick(1_000.0 + frame as f64 * 16.0);
        let now = engine.eye_offset();
        assert!(now.x > prev.x && now.x < target.x, "frame {frame}: {now:?}");
        prev = now;
    }
    // first step is exactly the follow fraction of the gap
    let mut fresh = make_engine();
    fresh.on_pointer_move(250.0, 50.0, 1_000.0);
    fresh.tick(1_000.0);
    assert!(approx(fresh.eye_offset().x, 10.5 * EYE_FOLLOW_SPEED));
}

#[test]
fn pointer_at_center_gives_full_expression() {
    let mut engine = make_engine();
    engine.on_pointer_move(50.0, 50.0, 1_000.0);
    let params = engine.tick(1_000.0);

    assert_eq!(params.intensity, 1.0);
    assert!(approx(params.eyebrows.raise_px, EYEBROW_RAISE_PX));
    assert!(approx(params.smile.width_px, 60.0));
    assert!(approx(params.smile.curve_pct, 120.0));
    assert!(approx(params.smile.thickness_px, 5.0));
    assert!(params.smile.wide);
    assert!(params.squint);
    assert_eq!(params.pupil_offset, Vec2::ZERO);
    assert_eq!(engine.smile_mode(), SmileMode::DistanceDriven);
}

#[test]
fn pointer_far_away_is_neutral() {
    let mut engine = make_engine();
    engine.on_pointer_move(550.0, 50.0, 1_000.0);
    let params = engine.tick(1_000.0);

    assert_eq!(params.intensity, 0.0);
    assert_eq!(params.eyebrows.raise_px, 0.0);
    assert!(approx(params.smile.width_px, 25.0));
    assert!(!params.smile.wide);
    assert!(!params.squint);
    assert_eq!(engine.smile_mode(), SmileMode::Neutral);
}

#[test]
fn head_follows_pointer_delta() {
    let mut engine = make_engine();
    engine.on_pointer_move(130.0, 110.0, 1_000.0); // dx = 80, dy = 60
    let head = engine.tick(1_000.0).head;
    assert!(approx(head.rotate_y_deg, 1.0));
    assert!(approx(head.rotate_x_deg, -0.5));
    assert!(approx(head.translate.x, 0.8));
    assert!(approx(head.translate.y, 0.3));
    assert_eq!(head.perspective_px, 1000.0);
}

#[test]
fn eyebrows_tilt_with_pointer_angle() {
    let mut engine = make_engine();
    engine.on_pointer_move(50.0, 150.0, 1_000.0); // straight below
    let brows = engine.tick(1_000.0).eyebrows;
    assert!(approx(brows.left_rotation_deg, -10.0));
    assert!(approx(brows.right_rotation_deg, 0.0));
}

#[test]
fn zero_size_anchor_means_zero_intensity() {
    let mut engine = ExpressionEngine::init(ExpressionConfig::default(), 7);
    engine.on_pointer_move(10.0, 10.0, 1_000.0);
    let params = engine.tick(1_000.0);
    assert_eq!(params.intensity, 0.0);
    assert!(params.pupil_offset.is_finite());
    assert!(params.head.translate.is_finite());

    engine.set_anchor(AnchorRect::new(f32::NAN, 0.0, 10.0, 10.0));
    assert_eq!(engine.intensity(), 0.0);
}

#[test]
fn anchor_update_reevaluates_last_sample() {
    let mut engine = ExpressionEngine::init(ExpressionConfig::default(), 7);
    engine.on_pointer_move(50.0, 50.0, 1_000.0);
    assert_eq!(engine.intensity(), 0.0);
    engine.set_anchor(AnchorRect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(engine.intensity(), 1.0);
}

#[test]
fn non_finite_samples_are_discarded() {
    let mut engine = make_engine();
    engine.on_pointer_move(150.0, 50.0, 1_000.0);
    let intensity = engine.intensity();
    let target = engine.eye_target();

    engine.on_pointer_move(f32::NAN, 50.0, 1_010.0);
    engine.on_pointer_move(50.0, f32::INFINITY, 1_020.0);
    engine.on_pointer_move(50.0, 50.0, f64::NAN);

    assert_eq!(engine.intensity(), intensity);
    assert_eq!(engine.eye_target(), target);
    assert!(engine.tick(f64::NAN).pupil_offset.is_finite());
}

#[test]
fn blink_runs_through_its_phases() {
    let mut engine = make_engine();
    engine.tick(1_000.0);
    engine.trigger_blink();
    assert_eq!(engine.blink_phase(), BlinkPhase::Idle);

    // the request is picked up by the next frame
    let start = engine.tick(1_000.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Closing);
    assert_eq!(start.eye_scale_y, 1.0);

    let closing = engine.tick(1_040.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Closing);
    assert!(closing.eye_scale_y < 1.0);

    let overshoot = engine.tick(1_170.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Overshoot);
    assert!(overshoot.eye_scale_y > closing.eye_scale_y);

    engine.tick(1_200.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Settling);

    let done = engine.tick(1_300.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Idle);
    assert_eq!(done.eye_scale_y, 1.0);
}

#[test]
fn retriggered_blink_restarts_from_closing() {
    let mut engine = make_engine();
    engine.tick(1_000.0);
    engine.trigger_blink();
    engine.tick(1_000.0);
    engine.tick(1_150.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Overshoot);

    engine.trigger_blink();
    engine.tick(1_160.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Closing);
}

#[test]
fn blink_after_a_long_frame_gap_still_plays() {
    let mut engine = make_engine();
    engine.tick(1_000.0);
    // no frames for two seconds (paused loop, hidden tab)
    engine.trigger_blink();
    engine.tick(3_000.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Closing);

    let closing = engine.tick(3_040.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Closing);
    assert!(closing.eye_scale_y < 1.0);
}

#[test]
fn blink_requested_before_first_frame_plays() {
    let mut engine = make_engine();
    engine.trigger_blink();
    engine.tick(5_000.0);
    let closing = engine.tick(5_040.0);
    assert_eq!(engine.blink_phase(), BlinkPhase::Closing);
    assert!(closing.eye_scale_y < 1.0);
}

#[test]
fn early_blink_keeps_idle_wide_smiles() {
    let mut engine = make_engine();
    engine.trigger_blink();
    let mut wide_frames = 0;
    for frame in 0..(60 * 600) {
        engine.tick(frame as f64 * 1000.0 / 60.0);
        if matches!(engine.smile_mode(), SmileMode::RandomlyWide { .. }) {
            wide_frames += 1;
        }
    }
    assert!(wide_frames > 0);
}

#[test]
fn hover_release_decays_instead_of_snapping() {
    let mut engine = make_engine();
    engine.on_pointer_move(550.0, 50.0, 1_000.0);
    engine.tick(1_000.0);
    let resting = engine.smile_width_px();

    engine.set_hover_boost(true);
    assert!(approx(engine.smile_width_px(), resting + HOVER_STEP_PX));
    engine.set_hover_boost(false);
    assert!(engine.smile_width_px() > resting, "release must not snap");

    let mut prev = engine.smile_width_px();
    for frame in 1..=10 {
        let width = engine.tick(1_000.0 + frame as f64).smile.width_px;
        assert!(width < prev && width > resting, "frame {frame}: {width}");
        prev = width;
    }
    for frame in 11..=120 {
        engine.tick(1_000.0 + frame as f64);
    }
    assert!(approx(engine.smile_width_px(), resting));
}

#[test]
fn disposed_engine_ignores_input() {
    let mut engine = make_engine();
    engine.dispose();
    engine.on_pointer_move(50.0, 50.0, 1_000.0);
    engine.set_hover_boost(true);
    engine.trigger_blink();
    assert!(engine.is_disposed());
    assert_eq!(engine.intensity(), 0.0);
    assert_eq!(engine.tick(1_000.0), RenderParams::neutral());
}

#[test]
fn idle_blinks_happen_without_pointer_input() {
    let mut engine = make_engine();
    let mut blinks = 0;
    let mut was_idle = true;
    for frame in 0..(60 * 30) {
        engine.tick(frame as f64 * 1000.0 / 60.0);
        let idle = engine.blink_phase() == BlinkPhase::Idle;
        if was_idle && !idle {
            blinks += 1;
        }
        was_idle = idle;
    }
    // 30 s with a 3 s floor between blinks
    assert!((2..=10).contains(&blinks), "blinks={blinks}");
}
