use crate::config::FieldConfig;
use crate::constants::LINK_WIDTH_PX;
use crate::proximity::{build_links, Link};
use crate::surface::{Rgba, Surface, Theme};
use glam::Vec2;
use rand::prelude::*;

/// One background dot. `size` and `opacity` are fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// `floor(width * height / density_area)`; 0 for degenerate input.
pub fn particle_count_for(width: f32, height: f32, density_area: f32) -> usize {
    if !(width > 0.0 && height > 0.0 && density_area > 0.0) {
        return 0;
    }
    let n = (width * height / density_area).floor();
    if n.is_finite() {
        n as usize
    } else {
        0
    }
}

/// Drifting particles with distance-faded links, sized to the viewport.
///
/// The field is the only owner of its particles. A resize regenerates the
/// whole set; a theme change only recolors unless
/// `FieldConfig::reseed_on_theme_change` is set.
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    theme: Theme,
    particles: Vec<Particle>,
    rng: StdRng,
    // scratch buffers reused across frames
    points: Vec<Vec2>,
    links: Vec<Link>,
    disposed: bool,
}

impl ParticleField {
    pub fn init(config: FieldConfig, theme: Theme, seed: u64) -> Self {
        log::debug!("[particles] init theme={} seed={seed}", theme.as_str());
        Self {
            config,
            width: 0.0,
            height: 0.0,
            theme,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            points: Vec::new(),
            links: Vec::new(),
            disposed: false,
        }
    }

    /// Drop all particles and ignore further input.
    pub fn dispose(&mut self) {
        if !self.disposed {
            log::debug!("[particles] dispose ({} particles)", self.particles.len());
        }
        self.particles.clear();
        self.links.clear();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Take ownership of a prepared particle set, e.g. a hand-placed layout.
    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        if !self.disposed {
            self.particles = particles;
        }
    }

    /// Resize the field and regenerate its particles.
    ///
    /// Non-finite or non-positive dimensions are ignored so one bad resize
    /// event does not wipe the field.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.disposed {
            return;
        }
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            log::debug!("[particles] ignoring resize to {width}x{height}");
            return;
        }
        if width == self.width && height == self.height && !self.particles.is_empty() {
            return;
        }
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = particle_count_for(self.width, self.height, self.config.density_area);
        let (w, h) = (self.width, self.height);
        let c = &self.config;
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles.extend((0..count).map(|_| Particle {
            x: rng.gen::<f32>() * w,
            y: rng.gen::<f32>() * h,
            vx: (rng.gen::<f32>() * 2.0 - 1.0) * c.speed_max,
            vy: (rng.gen::<f32>() * 2.0 - 1.0) * c.speed_max,
            size: c.size_min + rng.gen::<f32>() * (c.size_max - c.size_min),
            opacity: c.opacity_min + rng.gen::<f32>() * (c.opacity_max - c.opacity_min),
        }));
        log::debug!("[particles] {w}x{h} -> {count} particles");
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        if self.disposed {
            return;
        }
        let theme = Theme::from_dark_flag(is_dark);
        if theme == self.theme {
            return;
        }
        self.theme = theme;
        if self.config.reseed_on_theme_change && self.width > 0.0 && self.height > 0.0 {
            self.regenerate();
        }
    }

    /// Integrate one frame and bounce off the walls.
    ///
    /// Reflection flips the velocity sign instead of clamping, so a particle
    /// may sit just outside the viewport for a tick.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }
        }
    }

    /// Current proximity graph.
    pub fn links(&mut self) -> &[Link] {
        self.points.clear();
        self.points.extend(self.particles.iter().map(Particle::position));
        build_links(
            &self.points,
            self.config.link_distance,
            self.config.link_opacity,
            self.config.grid_threshold,
            &mut self.links,
        );
        &self.links
    }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.disposed {
            return;
        }
        surface.clear(self.width, self.height);
        let rgb = self.theme.particle_rgb();
        for p in &self.particles {
            surface.fill_circle(p.position(), p.size, Rgba::from_rgb(rgb, p.opacity));
        }
        self.links();
        for link in &self.links {
            surface.stroke_line(
                self.points[link.a],
                self.points[link.b],
                LINK_WIDTH_PX,
                Rgba::from_rgb(rgb, link.opacity),
            );
        }
    }
}
