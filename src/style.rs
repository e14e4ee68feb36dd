// CSS value formatting for the avatar styling layer.
//
// Pure string builders so they can be checked on the host; `avatar.rs`
// writes the results into element styles.

use folio_core::{HeadParams, Theme};
use glam::Vec2;

/// Pupils are absolutely centered, so the offset rides on top of -50%.
pub fn pupil_transform(offset: Vec2) -> String {
    format!(
        "translate(calc(-50% + {:.2}px), calc(-50% + {:.2}px))",
        offset.x, offset.y
    )
}

pub fn eyebrow_transform(raise_px: f32, rotation_deg: f32) -> String {
    format!("translateY(-{:.2}px) rotate({:.2}deg)", raise_px, rotation_deg)
}

pub fn head_transform(head: &HeadParams) -> String {
    format!(
        "perspective({:.0}px) translate({:.2}px, {:.2}px) rotateY({:.2}deg) rotateX({:.2}deg)",
        head.perspective_px, head.translate.x, head.translate.y, head.rotate_y_deg, head.rotate_x_deg
    )
}

pub fn eyes_transform(scale_y: f32) -> String {
    format!("scaleY({:.3})", scale_y)
}

pub fn smile_width(width_px: f32) -> String {
    format!("{:.2}px", width_px)
}

pub fn smile_border_radius(curve_pct: f32) -> String {
    format!("{:.1}% {:.1}% 0 0", curve_pct, curve_pct)
}

pub const SMILE_INK: &str = "#000";
pub const SMILE_HOVER_INK: &str = "#333";

pub fn smile_border_bottom(thickness_px: f32, hover_ink: bool) -> String {
    let ink = if hover_ink { SMILE_HOVER_INK } else { SMILE_INK };
    format!("{:.2}px solid {}", thickness_px, ink)
}

/// Icon shown on the theme toggle: the theme you would switch to.
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀️",
        Theme::Light => "🌙",
    }
}
