use crate::constants::{DARK_PARTICLE_RGB, LIGHT_PARTICLE_RGB};
use glam::Vec2;

/// Straight-alpha color with 8-bit channels and a float alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn from_rgb(rgb: [u8; 3], alpha: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// CSS `rgba(...)` string, as accepted by canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Page color scheme. Drives the particle palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark_flag(!self.is_dark())
    }

    /// Base RGB shared by particle fills and link strokes.
    pub fn particle_rgb(self) -> [u8; 3] {
        match self {
            Theme::Dark => DARK_PARTICLE_RGB,
            Theme::Light => LIGHT_PARTICLE_RGB,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Minimal 2D drawing target for the particle field.
///
/// The browser host implements this on a canvas 2D context; tests record the
/// calls instead.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
