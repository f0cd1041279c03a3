use eframe::egui::{Pos2, Vec2, pos2, vec2};
use rand::Rng;

use crate::config::ParticleConfig;

/// Simulation data for one particle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    pub position: Pos2,
    /// Pixels per frame
    pub velocity: Vec2,
    pub size: f32,
    /// Always within `[min_opacity, max_opacity]`
    pub opacity: f32,
    /// +1.0 while fading in, -1.0 while fading out
    pub opacity_direction: f32,
    pub pulse_speed: f32,
    /// Render-time displacement from the pointer; not part of `position`
    pub parallax_offset: Vec2,
}

impl ParticleState {
    /// Random particle somewhere inside a `viewport`-sized area.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Vec2, config: &ParticleConfig) -> Self {
        let speed = config.max_speed;
        Self {
            position: pos2(rng.r#gen::<f32>() * viewport.x, rng.r#gen::<f32>() * viewport.y),
            velocity: vec2(rng.gen_range(-speed..speed), rng.gen_range(-speed..speed)),
            size: rng.gen_range(config.min_size..config.max_size),
            opacity: rng.gen_range(config.min_opacity..config.max_opacity),
            opacity_direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            pulse_speed: rng.gen_range(config.min_pulse_speed..config.max_pulse_speed),
            parallax_offset: Vec2::ZERO,
        }
    }

    /// Advances one frame: move, wrap, pulse, and recompute parallax from the
    /// already-smoothed pointer offset.
    pub fn advance(&mut self, viewport: Vec2, smoothed_pointer: Vec2, config: &ParticleConfig) {
        self.position += self.velocity;
        self.position.x = wrap(self.position.x, viewport.x, config.wrap_margin);
        self.position.y = wrap(self.position.y, viewport.y, config.wrap_margin);

        self.opacity += self.opacity_direction * self.pulse_speed;
        if self.opacity >= config.max_opacity {
            self.opacity = config.max_opacity;
            self.opacity_direction = -1.0;
        } else if self.opacity <= config.min_opacity {
            self.opacity = config.min_opacity;
            self.opacity_direction = 1.0;
        }

        let depth = self.size / config.max_size;
        self.parallax_offset = smoothed_pointer * config.parallax_strength * depth;
    }

    /// Where the particle is drawn, relative to the viewport origin.
    pub fn render_position(&self) -> Pos2 {
        self.position + self.parallax_offset
    }
}

/// Past `-margin` jumps to the far edge and vice versa.
fn wrap(value: f32, extent: f32, margin: f32) -> f32 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}
