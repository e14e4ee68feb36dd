//! Both subsystems behind one owner, driven in a fixed per-frame order.

use crate::config::{ConfigError, SceneConfig};
use crate::expression::{AnchorRect, ExpressionEngine, PointerSample, RenderParams};
use crate::particles::ParticleField;
use crate::surface::{Surface, Theme};

/// Owns the expression engine and the particle field for one page.
///
/// Pointer moves are queued and applied at the start of the next
/// [`Scene::frame`], which then ticks the engine, steps the field and renders
/// it, in that order. Only the latest queued sample is kept.
pub struct Scene {
    expression: ExpressionEngine,
    field: ParticleField,
    pending: Option<PointerSample>,
    /// Interactive elements currently under the pointer; they can nest.
    hover_depth: u32,
    disposed: bool,
}

impl Scene {
    pub fn init(config: SceneConfig, theme: Theme, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        // decorrelate the two RNG streams derived from one seed
        let field_seed = seed ^ 0x9E37_79B9_7F4A_7C15;
        Ok(Self {
            expression: ExpressionEngine::init(config.expression, seed),
            field: ParticleField::init(config.field, theme, field_seed),
            pending: None,
            hover_depth: 0,
            disposed: false,
        })
    }

    pub fn dispose(&mut self) {
        self.expression.dispose();
        self.field.dispose();
        self.pending = None;
        self.hover_depth = 0;
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn expression(&self) -> &ExpressionEngine {
        &self.expression
    }

    pub fn expression_mut(&mut self) -> &mut ExpressionEngine {
        &mut self.expression
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn queue_pointer(&mut self, x: f32, y: f32, now_ms: f64) {
        if self.disposed || !(x.is_finite() && y.is_finite() && now_ms.is_finite()) {
            return;
        }
        self.pending = Some(PointerSample {
            x,
            y,
            timestamp_ms: now_ms,
        });
    }

    pub fn has_pending_pointer(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_anchor(&mut self, rect: AnchorRect) {
        self.expression.set_anchor(rect);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.resize(width, height);
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.field.set_theme(is_dark);
    }

    pub fn set_hover_boost(&mut self, active: bool) {
        self.expression.set_hover_boost(active);
    }

    /// Pointer entered an interactive element. The boost starts with the
    /// outermost one.
    pub fn hover_enter(&mut self) {
        if self.disposed {
            return;
        }
        self.hover_depth += 1;
        if self.hover_depth == 1 {
            self.expression.set_hover_boost(true);
        }
    }

    /// Pointer left an interactive element. The boost ends only once no
    /// interactive element is hovered.
    pub fn hover_leave(&mut self) {
        if self.disposed || self.hover_depth == 0 {
            return;
        }
        self.hover_depth -= 1;
        if self.hover_depth == 0 {
            self.expression.set_hover_boost(false);
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hover_depth > 0
    }

    pub fn trigger_blink(&mut self) {
        self.expression.trigger_blink();
    }

    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> RenderParams {
        if self.disposed {
            return RenderParams::neutral();
        }
        if let Some(sample) = self.pending.take() {
            self.expression
                .on_pointer_move(sample.x, sample.y, sample.timestamp_ms);
        }
        let params = self.expression.tick(now_ms);
        self.field.step();
        self.field.render(surface);
        params
    }
}
