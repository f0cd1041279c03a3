use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub background: Color32,
    pub panel: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub error: Color32,
    pub badge_idle: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Width of the centered content column on the landing and admin pages
    pub content_width: f32,
    /// Width of single-line text inputs
    pub input_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(170, 180, 200),
        heading: Color32::from_rgb(0, 175, 255), // Same blue as the particles
        subsection_heading: Color32::from_rgb(120, 200, 255),
        background: Color32::from_rgb(5, 8, 20),
        panel: Color32::from_rgb(14, 20, 38),
        accent: Color32::from_rgb(0, 175, 255),
        success: Color32::from_rgb(80, 220, 140),
        error: Color32::from_rgb(255, 100, 100),
        badge_idle: Color32::from_rgb(120, 120, 140),
    },
    content_width: 440.0,
    input_width: 360.0,
};
