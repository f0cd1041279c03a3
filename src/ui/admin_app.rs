use eframe::{Frame, egui};
use egui::{Button, CentralPanel, RichText, ScrollArea, TextEdit, Ui};

use crate::ui::admin::{AdminController, AdminState};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{
    repaint_at, section_heading, setup_custom_visuals, spaced_separator, submitted_with_enter,
};
use crate::utils::app_time::{AppInstant, now};

/// Admin dashboard window: login/setup screens and the settings form.
pub struct AdminApp {
    controller: AdminController,
}

impl AdminApp {
    pub fn new(cc: &eframe::CreationContext<'_>, controller: AdminController) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        Self { controller }
    }

    fn render_setup(&mut self, ui: &mut Ui, now: AppInstant) {
        section_heading(ui, UI_TEXT.setup_heading);
        ui.label_subdued(UI_TEXT.setup_blurb);
        ui.add_space(8.0);

        let confirm_id = ui.make_persistent_id("confirm_password");

        let new_response = ui.add(
            TextEdit::singleline(&mut self.controller.new_password)
                .password(true)
                .hint_text(UI_TEXT.setup_new_password_hint)
                .desired_width(UI_CONFIG.input_width),
        );
        if submitted_with_enter(ui, &new_response) {
            ui.memory_mut(|mem| mem.request_focus(confirm_id));
        }

        let confirm_response = ui.add(
            TextEdit::singleline(&mut self.controller.confirm_password)
                .id(confirm_id)
                .password(true)
                .hint_text(UI_TEXT.setup_confirm_password_hint)
                .desired_width(UI_CONFIG.input_width),
        );

        ui.add_space(6.0);
        let clicked = ui.button(UI_TEXT.setup_button).clicked();
        if clicked || submitted_with_enter(ui, &confirm_response) {
            if let Err(e) = self.controller.submit_setup(now) {
                log::debug!("Admin setup rejected: {}", e);
            }
        }

        if let Some(error) = self.controller.setup_error(now) {
            ui.label_error(error);
        }
    }

    fn render_login(&mut self, ui: &mut Ui, now: AppInstant) {
        section_heading(ui, UI_TEXT.login_heading);
        ui.add_space(8.0);

        let response = ui.add(
            TextEdit::singleline(&mut self.controller.password)
                .password(true)
                .hint_text(UI_TEXT.login_password_hint)
                .desired_width(UI_CONFIG.input_width),
        );

        ui.add_space(6.0);
        let clicked = ui.button(UI_TEXT.login_button).clicked();
        if clicked || submitted_with_enter(ui, &response) {
            if self.controller.submit_login(now).is_err() {
                response.request_focus();
            }
        }

        if let Some(error) = self.controller.login_error(now) {
            ui.label_error(error);
        }
    }

    fn render_dashboard(&mut self, ui: &mut Ui, now: AppInstant) {
        ui.horizontal(|ui| {
            ui.label_header(UI_TEXT.admin_title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(UI_TEXT.logout_button).clicked() {
                    self.controller.logout();
                }
            });
        });
        if self.controller.state() != AdminState::Unlocked {
            return;
        }

        section_heading(ui, UI_TEXT.overview_heading);
        let badges = self.controller.badges();
        ui.settings_badge(UI_TEXT.webhook_stat_label, badges.webhook);
        ui.settings_badge(UI_TEXT.download_stat_label, badges.download);

        spaced_separator(ui);
        self.render_webhook_section(ui, now);

        spaced_separator(ui);
        self.render_download_section(ui, now);

        if self.controller.show_help {
            spaced_separator(ui);
            self.render_help(ui);
        }
    }

    fn render_webhook_section(&mut self, ui: &mut Ui, now: AppInstant) {
        ui.label_subheader(UI_TEXT.webhook_heading);
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.controller.webhook_input)
                    .hint_text(UI_TEXT.webhook_hint)
                    .desired_width(UI_CONFIG.input_width),
            );
            if ui.button(UI_TEXT.save_button).clicked() {
                if let Err(e) = self.controller.save_webhook(now) {
                    log::debug!("Webhook URL rejected: {}", e);
                }
            }
        });
        if let Some(status) = self.controller.webhook_status(now) {
            ui.status_badge(status);
        }
        if ui.link(UI_TEXT.webhook_help_link).clicked() {
            self.controller.show_help = true;
        }
    }

    fn render_download_section(&mut self, ui: &mut Ui, now: AppInstant) {
        ui.label_subheader(UI_TEXT.download_url_heading);
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut self.controller.download_input)
                    .hint_text(UI_TEXT.download_url_hint)
                    .desired_width(UI_CONFIG.input_width),
            );
            if ui.button(UI_TEXT.save_button).clicked() {
                if let Err(e) = self.controller.save_download(now) {
                    log::debug!("Download URL rejected: {}", e);
                }
            }
            let has_link = self.controller.active_download_url().is_some();
            if ui
                .add_enabled(has_link, Button::new(UI_TEXT.remove_button))
                .clicked()
            {
                if let Err(e) = self.controller.remove_download(now) {
                    log::warn!("Could not remove download URL: {}", e);
                }
            }
        });
        if let Some(status) = self.controller.download_status(now) {
            ui.status_badge(status);
        }

        if let Some(url) = self.controller.active_download_url() {
            ui.add_space(4.0);
            ui.label_subdued(UI_TEXT.current_download_label);
            ui.hyperlink_to(RichText::new(url).color(UI_CONFIG.colors.accent), url);
        }
    }

    fn render_help(&mut self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.help_heading);
        for step in UI_TEXT.help_steps {
            ui.label(*step);
        }
        if ui.button(UI_TEXT.close_help_button).clicked() {
            self.controller.show_help = false;
        }
    }
}

impl eframe::App for AdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = now();

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(UI_CONFIG.content_width);
                    match self.controller.state() {
                        AdminState::SetupRequired => self.render_setup(ui, now),
                        AdminState::Authenticating => self.render_login(ui, now),
                        AdminState::Unlocked => self.render_dashboard(ui, now),
                    }
                });
            });
        });

        repaint_at(ctx, self.controller.next_expiry(now));
    }
}
