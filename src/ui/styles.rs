use eframe::egui::{Color32, RichText, Ui};

use crate::ui::admin::BadgeState;
use crate::ui::config::UI_CONFIG;
use crate::ui::transient::{StatusKind, StatusMessage};

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for helper lines under inputs).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair; the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a transient save/remove status in its kind's color.
    fn status_badge(&mut self, status: &StatusMessage);

    /// Renders a "Configured"/"Active"/"Not Configured" settings badge.
    fn settings_badge(&mut self, label: &str, badge: BadgeState);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).monospace());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }

    fn status_badge(&mut self, status: &StatusMessage) {
        let color = match status.kind {
            StatusKind::Success => UI_CONFIG.colors.success,
            StatusKind::Error => UI_CONFIG.colors.error,
        };
        self.label(RichText::new(&status.text).small().color(color));
    }

    fn settings_badge(&mut self, label: &str, badge: BadgeState) {
        let color = if badge.is_set() {
            UI_CONFIG.colors.success
        } else {
            UI_CONFIG.colors.badge_idle
        };
        self.metric(label, &badge.to_string(), color);
    }
}
