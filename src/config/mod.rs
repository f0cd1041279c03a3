//! Configuration module for the landing page and admin dashboard.

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod particles;
pub mod site;
pub mod timing;

// Re-export commonly used items
pub use particles::{PARTICLES, ParticleConfig, Rgb};
pub use site::{APP_STATE_PATH, SITE_CONFIG_PATH, STORAGE_KEYS, SiteConfig, StorageKeys};
pub use timing::{
    CLICK_AFFORDANCE, COMING_SOON_LABEL_TTL, SIGNUP_FEEDBACK_TTL, STATUS_MESSAGE_TTL,
};
