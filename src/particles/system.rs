use eframe::egui::{Color32, Painter, Pos2, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::particle::ParticleState;
use crate::config::{PARTICLES, ParticleConfig};

/// One filled circle produced by `ParticleSystem::draw_list`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Relative to the viewport origin
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
}

/// Owns the particle collection and the pointer state that drives parallax.
///
/// The host calls `tick` once per frame and `render` right after. A stopped
/// system keeps its particles and still renders them, frozen.
pub struct ParticleSystem {
    config: &'static ParticleConfig,
    particles: Vec<ParticleState>,
    viewport: Vec2,
    /// Smoothed pointer offset from the viewport center
    pointer: Vec2,
    /// Raw pointer offset from the viewport center
    target_pointer: Vec2,
    running: bool,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(viewport: Vec2) -> Self {
        Self::with_rng(viewport, StdRng::from_entropy())
    }

    /// Deterministic particle layout, for tests and reproducible captures.
    pub fn with_seed(viewport: Vec2, seed: u64) -> Self {
        Self::with_rng(viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(viewport: Vec2, rng: StdRng) -> Self {
        let mut system = Self {
            config: &PARTICLES,
            particles: Vec::new(),
            viewport,
            pointer: Vec2::ZERO,
            target_pointer: Vec2::ZERO,
            running: false,
            rng,
        };
        system.create_particles();
        system
    }

    fn create_particles(&mut self) {
        let count = self.config.count_for_width(self.viewport.x);
        let viewport = self.viewport;
        let config = self.config;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| ParticleState::random(rng, viewport, config))
            .collect();
    }

    pub fn particles(&self) -> &[ParticleState] {
        &self.particles
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Updates the wrap bounds. Existing particles keep their positions unless
    /// the width crosses the mobile breakpoint, which rebuilds the collection
    /// at the matching count.
    pub fn resize(&mut self, viewport: Vec2) {
        if viewport == self.viewport {
            return;
        }
        let old_count = self.config.count_for_width(self.viewport.x);
        let new_count = self.config.count_for_width(viewport.x);
        self.viewport = viewport;

        if old_count != new_count {
            #[cfg(debug_assertions)]
            if crate::config::DEBUG_FLAGS.print_particle_resizes {
                log::info!(
                    "[particles] viewport {:.0}x{:.0}: rebuilding {} -> {} particles",
                    viewport.x,
                    viewport.y,
                    old_count,
                    new_count
                );
            }
            self.create_particles();
        }
    }

    /// Pointer position relative to the viewport origin.
    pub fn set_pointer(&mut self, position: Pos2) {
        self.target_pointer = position.to_vec2() - self.viewport / 2.0;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Steps once if running. Returns whether the host should schedule
    /// another frame.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.step();
        }
        self.running
    }

    /// Advances the simulation by exactly one frame.
    pub fn step(&mut self) {
        self.pointer += (self.target_pointer - self.pointer) * self.config.mouse_smoothing;

        for particle in &mut self.particles {
            particle.advance(self.viewport, self.pointer, self.config);
        }
    }

    /// Circles to draw this frame, back to front.
    pub fn draw_list(&self) -> Vec<Dot> {
        let config = self.config;
        let base = config.base_color;
        let tint = config.highlight_tint;
        let mut dots = Vec::with_capacity(self.particles.len() * 2);

        for particle in &self.particles {
            let center = particle.render_position();
            dots.push(Dot {
                center,
                radius: particle.size,
                color: Color32::from_rgba_unmultiplied(
                    base.r,
                    base.g,
                    base.b,
                    alpha(particle.opacity),
                ),
            });

            if particle.size > config.highlight_min_size {
                dots.push(Dot {
                    center,
                    radius: particle.size * config.highlight_radius_scale,
                    color: Color32::from_rgba_unmultiplied(
                        base.r.saturating_add(tint),
                        base.g.saturating_add(tint),
                        base.b.saturating_add(tint),
                        alpha(particle.opacity * config.highlight_alpha_scale),
                    ),
                });
            }
        }
        dots
    }

    /// Paints every particle with `origin` as the viewport's top-left corner.
    /// The caller's panel provides the cleared background.
    pub fn render(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for dot in self.draw_list() {
            painter.circle_filled(dot.center + offset, dot.radius, dot.color);
        }
    }
}

fn alpha(opacity: f32) -> u8 {
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}
