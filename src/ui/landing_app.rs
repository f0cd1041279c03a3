use std::rc::Rc;

use eframe::{Frame, egui};
use egui::{Button, CentralPanel, RichText, ScrollArea, TextEdit, Ui, vec2};

use crate::net::WebhookTransport;
use crate::particles::ParticleSystem;
use crate::settings::ConfigStore;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::site::{DownloadAction, DownloadOutcome, SignupForm};
use crate::ui::styles::UiStyleExt;
use crate::ui::transient::soonest;
use crate::ui::utils::{
    colored_heading, repaint_at, section_heading, setup_custom_visuals, spaced_separator,
    submitted_with_enter,
};
use crate::utils::app_time::{AppInstant, now};

// Real size arrives with the first frame; a desktop guess matches page load.
const INITIAL_VIEWPORT: egui::Vec2 = vec2(1280.0, 720.0);

/// Public landing page: animated background, download buttons, beta signup.
pub struct LandingApp {
    particles: ParticleSystem,
    hero_download: DownloadAction,
    section_download: DownloadAction,
    signup: SignupForm,
}

impl LandingApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: ConfigStore,
        transport: Rc<dyn WebhookTransport>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut particles = ParticleSystem::new(INITIAL_VIEWPORT);
        particles.start();

        Self {
            particles,
            hero_download: DownloadAction::new(config.clone()),
            section_download: DownloadAction::new(config.clone()),
            signup: SignupForm::new(config, transport),
        }
    }

    fn render_background(&mut self, ui: &Ui) {
        let rect = ui.max_rect();
        self.particles.resize(rect.size());

        if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
            self.particles.set_pointer(pos - rect.min.to_vec2());
        }
        if self.particles.tick() {
            ui.ctx().request_repaint();
        }
        self.particles.render(ui.painter(), rect.min);
    }

    fn render_hero(&mut self, ui: &mut Ui, now: AppInstant) {
        ui.add_space(40.0);
        ui.label(
            RichText::new(UI_TEXT.hero_title)
                .size(48.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subheader(UI_TEXT.hero_tagline);
        ui.add_space(6.0);
        ui.label(UI_TEXT.hero_subtitle);
        ui.add_space(16.0);
        download_button(ui, &mut self.hero_download, now);
    }

    fn render_signup(&mut self, ui: &mut Ui, now: AppInstant) {
        section_heading(ui, UI_TEXT.beta_heading);
        ui.label_subdued(UI_TEXT.beta_blurb);
        ui.add_space(8.0);

        let sending = self.signup.is_sending();
        let response = ui.add_enabled(
            !sending,
            TextEdit::singleline(&mut self.signup.email)
                .hint_text(UI_TEXT.beta_email_hint)
                .desired_width(UI_CONFIG.input_width),
        );

        let label = if sending {
            UI_TEXT.beta_sending
        } else {
            UI_TEXT.beta_submit
        };
        let clicked = ui.add_enabled(!sending, Button::new(label)).clicked();
        if clicked || submitted_with_enter(ui, &response) {
            let outcome = self.signup.submit(now);
            log::debug!("Signup submitted: {:?}", outcome);
        }

        if let Some(feedback) = self.signup.feedback(now) {
            ui.status_badge(feedback);
        }
    }
}

/// Renders one download control and opens the link when it is usable.
fn download_button(ui: &mut Ui, action: &mut DownloadAction, now: AppInstant) {
    let state = action.button_state();

    let mut button = Button::new(RichText::new(action.label(now)).strong());
    if action.is_clicked(now) {
        button = button.fill(UI_CONFIG.colors.accent);
    }

    let response = ui.add_enabled(state.enabled, button);
    let response = if state.enabled {
        response.on_hover_text(state.tooltip)
    } else {
        response.on_disabled_hover_text(state.tooltip)
    };

    if response.clicked() {
        if let DownloadOutcome::Open(url) = action.invoke(now) {
            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
        }
    }
}

impl eframe::App for LandingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = now();
        self.signup.poll(now);

        CentralPanel::default().show(ctx, |ui| {
            self.render_background(ui);

            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(UI_CONFIG.content_width);
                    self.render_hero(ui, now);

                    spaced_separator(ui);
                    ui.heading(colored_heading(UI_TEXT.download_heading));
                    ui.add_space(8.0);
                    download_button(ui, &mut self.section_download, now);

                    spaced_separator(ui);
                    self.render_signup(ui, now);
                });
            });
        });

        if self.signup.is_sending() {
            // Keep polling until the dispatch settles
            ctx.request_repaint();
        }
        repaint_at(
            ctx,
            soonest([
                self.hero_download.next_expiry(now),
                self.section_download.next_expiry(now),
                self.signup.next_expiry(now),
            ]),
        );
    }
}
