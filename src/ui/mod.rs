// User interface components
pub mod admin;
pub mod admin_app;
pub mod config;
pub mod landing_app;
pub mod site;
pub mod styles;
pub mod transient;
pub mod ui_text;
pub mod utils;

// Re-export the two page apps
pub use admin_app::AdminApp;
pub use config::UI_CONFIG;
pub use landing_app::LandingApp;
