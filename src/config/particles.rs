//! Particle background tuning

/// Plain RGB triple used for particle fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub struct ParticleConfig {
    /// Particle count on desktop-sized viewports
    pub desktop_count: usize,
    /// Particle count when the viewport is narrower than `mobile_breakpoint`
    pub mobile_count: usize,
    /// Viewport width (px) below which the mobile count applies
    pub mobile_breakpoint: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Velocity components are drawn from `-max_speed..max_speed`
    pub max_speed: f32,
    /// Per-frame opacity change is drawn from this range
    pub min_pulse_speed: f32,
    pub max_pulse_speed: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    /// How far (px) a particle may drift past an edge before wrapping
    pub wrap_margin: f32,
    /// Exponential smoothing factor applied to the pointer each frame
    pub mouse_smoothing: f32,
    pub parallax_strength: f32,
    pub base_color: Rgb,
    /// Added to each channel of `base_color` for the highlight core
    pub highlight_tint: u8,
    /// Particles larger than this get a highlight core
    pub highlight_min_size: f32,
    /// Highlight radius as a fraction of the particle radius
    pub highlight_radius_scale: f32,
    /// Highlight alpha as a fraction of the particle opacity
    pub highlight_alpha_scale: f32,
}

pub const PARTICLES: ParticleConfig = ParticleConfig {
    desktop_count: 200,
    mobile_count: 40,
    mobile_breakpoint: 768.0,
    min_size: 1.0,
    max_size: 3.0,
    max_speed: 0.2,
    min_pulse_speed: 0.002,
    max_pulse_speed: 0.008,
    min_opacity: 0.1,
    max_opacity: 1.0,
    wrap_margin: 50.0,
    mouse_smoothing: 0.05,
    parallax_strength: 0.02,
    base_color: Rgb { r: 0, g: 175, b: 255 },
    highlight_tint: 50,
    highlight_min_size: 1.5,
    highlight_radius_scale: 0.4,
    highlight_alpha_scale: 0.8,
};

impl ParticleConfig {
    /// Number of particles to allocate for a viewport of the given width.
    pub fn count_for_width(&self, width: f32) -> usize {
        if width < self.mobile_breakpoint {
            self.mobile_count
        } else {
            self.desktop_count
        }
    }
}
