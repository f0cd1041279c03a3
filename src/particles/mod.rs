//! Floating particle background: per-frame simulation plus egui rendering.

pub mod particle;
pub mod system;

pub use particle::ParticleState;
pub use system::{Dot, ParticleSystem};
