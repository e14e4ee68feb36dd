// Host-side tests for the particle field and its proximity graph.

mod common;

use common::{DrawCall, RecordingSurface};
use folio_core::constants::*;
use folio_core::*;
use glam::Vec2;

fn make_field(width: f32, height: f32) -> ParticleField {
    let mut field = ParticleField::init(FieldConfig::default(), Theme::Light, 42);
    field.resize(width, height);
    field
}

fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        x,
        y,
        vx,
        vy,
        size: 2.0,
        opacity: 0.5,
    }
}

#[test]
fn count_follows_density() {
    assert_eq!(make_field(300.0, 300.0).len(), 6);
    assert_eq!(make_field(800.0, 600.0).len(), 32);
    assert_eq!(particle_count_for(100.0, 100.0, PARTICLE_DENSITY_AREA), 0);
    assert_eq!(particle_count_for(-10.0, 100.0, PARTICLE_DENSITY_AREA), 0);
}

#[test]
fn generated_particles_respect_ranges() {
    let field = make_field(1920.0, 1080.0);
    assert_eq!(field.len(), 138);
    for p in field.particles() {
        assert!((0.0..=1920.0).contains(&p.x) && (0.0..=1080.0).contains(&p.y));
        assert!(p.vx.abs() <= PARTICLE_SPEED_MAX && p.vy.abs() <= PARTICLE_SPEED_MAX);
        assert!((PARTICLE_SIZE_MIN..=PARTICLE_SIZE_MAX).contains(&p.size));
        assert!((PARTICLE_OPACITY_MIN..=PARTICLE_OPACITY_MAX).contains(&p.opacity));
    }
}

#[test]
fn bad_resize_keeps_previous_particles() {
    let mut field = make_field(800.0, 600.0);
    let before = field.particles().to_vec();
    field.resize(0.0, 600.0);
    field.resize(800.0, -1.0);
    field.resize(f32::NAN, 600.0);
    field.resize(800.0, f32::INFINITY);
    assert_eq!(field.particles(), before.as_slice());
    assert_eq!(field.size(), (800.0, 600.0));
}

#[test]
fn resize_regenerates_for_new_size() {
    let mut field = make_field(800.0, 600.0);
    field.resize(300.0, 300.0);
    assert_eq!(field.len(), 6);
    assert!(field.particles().iter().all(|p| p.x <= 300.0 && p.y <= 300.0));
}

#[test]
fn step_reflects_only_out_of_range_coordinates() {
    let mut field = make_field(300.0, 300.0);
    field.replace_particles(vec![
        particle(299.9, 150.0, 0.25, 0.1),
        particle(0.1, 0.05, -0.25, -0.1),
        particle(150.0, 150.0, 0.2, -0.2),
    ]);
    field.step();
    let ps = field.particles();

    assert!(ps[0].x > 300.0);
    assert_eq!(ps[0].vx, -0.25);
    assert_eq!(ps[0].vy, 0.1);

    assert!(ps[1].x < 0.0 && ps[1].y < 0.0);
    assert_eq!((ps[1].vx, ps[1].vy), (0.25, 0.1));

    assert_eq!((ps[2].vx, ps[2].vy), (0.2, -0.2));
}

#[test]
fn velocity_flips_match_boundary_crossings_over_time() {
    let mut field = make_field(400.0, 300.0);
    for _ in 0..5_000 {
        let before = field.particles().to_vec();
        field.step();
        for (old, new) in before.iter().zip(field.particles()) {
            let x_out = new.x < 0.0 || new.x > 400.0;
            let y_out = new.y < 0.0 || new.y > 300.0;
            assert_eq!(old.vx != new.vx, x_out);
            assert_eq!(old.vy != new.vy, y_out);
        }
    }
    // reflection keeps everyone within one step of the walls
    for p in field.particles() {
        assert!(p.x > -PARTICLE_SPEED_MAX && p.x < 400.0 + PARTICLE_SPEED_MAX);
        assert!(p.y > -PARTICLE_SPEED_MAX && p.y < 300.0 + PARTICLE_SPEED_MAX);
    }
}

#[test]
fn link_opacity_falls_off_linearly() {
    assert_eq!(link_opacity(0.0, 100.0, 0.2), 0.2);
    assert_eq!(link_opacity(100.0, 100.0, 0.2), 0.0);
    assert_eq!(link_opacity(150.0, 100.0, 0.2), 0.0);
    assert!((link_opacity(50.0, 100.0, 0.2) - 0.1).abs() < 1e-6);
    assert_eq!(link_opacity(f32::NAN, 100.0, 0.2), 0.0);
}

#[test]
fn links_connect_only_close_pairs() {
    let mut field = make_field(300.0, 300.0);
    field.replace_particles(vec![
        particle(0.0, 0.0, 0.0, 0.0),
        particle(60.0, 80.0, 0.0, 0.0),  // 100 from #0: no link
        particle(60.0, 130.0, 0.0, 0.0), // 50 from #1
        particle(0.0, 0.0, 0.0, 0.0),    // on top of #0
    ]);
    let links = field.links().to_vec();
    assert_eq!(links.len(), 2);
    assert_eq!((links[0].a, links[0].b), (0, 3));
    assert!((links[0].opacity - 0.2).abs() < 1e-6);
    assert_eq!((links[1].a, links[1].b), (1, 2));
    assert!((links[1].opacity - 0.1).abs() < 1e-6);
}

#[test]
fn grid_and_brute_force_agree() {
    let field = make_field(2560.0, 1440.0);
    let points: Vec<Vec2> = field.particles().iter().map(Particle::position).collect();
    assert!(points.len() > 200);

    let mut brute = Vec::new();
    let mut grid = Vec::new();
    links_brute_force(&points, LINK_DISTANCE, LINK_OPACITY_MAX, &mut brute);
    links_grid(&points, LINK_DISTANCE, LINK_OPACITY_MAX, &mut grid);
    assert!(!brute.is_empty());
    assert_eq!(brute, grid);

    // points outside the viewport still land in the right cells
    let shifted: Vec<Vec2> = points.iter().map(|p| *p - Vec2::splat(50.0)).collect();
    links_brute_force(&shifted, LINK_DISTANCE, LINK_OPACITY_MAX, &mut brute);
    links_grid(&shifted, LINK_DISTANCE, LINK_OPACITY_MAX, &mut grid);
    assert_eq!(brute, grid);
}

#[test]
fn theme_change_recolors_without_moving() {
    let mut field = make_field(800.0, 600.0);
    let before = field.particles().to_vec();
    field.set_theme(true);
    assert_eq!(field.theme(), Theme::Dark);
    assert_eq!(field.particles(), before.as_slice());

    let mut surface = RecordingSurface::default();
    field.render(&mut surface);
    let first_circle = surface
        .calls
        .iter()
        .find_map(|c| match c {
            DrawCall::Circle { color, .. } => Some(*color),
            _ => None,
        })
        .expect("at least one particle");
    assert_eq!([first_circle.r, first_circle.g, first_circle.b], DARK_PARTICLE_RGB);
}

#[test]
fn theme_change_can_reseed() {
    let config = FieldConfig {
        reseed_on_theme_change: true,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::init(config, Theme::Light, 42);
    field.resize(800.0, 600.0);
    let before = field.particles().to_vec();
    field.set_theme(true);
    assert_eq!(field.len(), 32);
    assert_ne!(field.particles(), before.as_slice());
}

#[test]
fn render_draws_particles_then_links() {
    let mut field = make_field(300.0, 300.0);
    field.replace_particles(vec![
        particle(10.0, 10.0, 0.0, 0.0),
        particle(40.0, 50.0, 0.0, 0.0),
        particle(250.0, 250.0, 0.0, 0.0),
    ]);
    let mut surface = RecordingSurface::default();
    field.render(&mut surface);

    assert_eq!(surface.clears(), 1);
    assert_eq!(surface.circles(), 3);
    assert_eq!(surface.lines(), 1);
    assert_eq!(
        surface.calls[0],
        DrawCall::Clear {
            width: 300.0,
            height: 300.0
        }
    );
    match surface.calls.last() {
        Some(DrawCall::Line {
            from, to, width, color,
        }) => {
            assert_eq!((*from, *to), (Vec2::new(10.0, 10.0), Vec2::new(40.0, 50.0)));
            assert_eq!(*width, LINK_WIDTH_PX);
            assert!((color.a - 0.2 * 0.5).abs() < 1e-6);
            assert_eq!([color.r, color.g, color.b], LIGHT_PARTICLE_RGB);
        }
        other => panic!("expected a link last, got {other:?}"),
    }
}

#[test]
fn disposed_field_is_empty_and_silent() {
    let mut field = make_field(800.0, 600.0);
    field.dispose();
    field.resize(1024.0, 768.0);
    assert!(field.is_empty());
    let mut surface = RecordingSurface::default();
    field.render(&mut surface);
    assert!(surface.calls.is_empty());
}
