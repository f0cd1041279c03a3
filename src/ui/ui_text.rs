/// Every user-facing string in one table, so copy edits never touch logic.
pub struct UiText {
    // Landing page
    pub app_title: &'static str,
    pub hero_title: &'static str,
    pub hero_tagline: &'static str,
    pub hero_subtitle: &'static str,
    pub download_heading: &'static str,
    pub download_button: &'static str,
    pub download_coming_soon_label: &'static str,
    pub download_tooltip_ready: &'static str,
    pub download_tooltip_disabled: &'static str,
    pub beta_heading: &'static str,
    pub beta_blurb: &'static str,
    pub beta_email_hint: &'static str,
    pub beta_submit: &'static str,
    pub beta_sending: &'static str,
    pub beta_success: &'static str,

    // Admin: access
    pub admin_title: &'static str,
    pub setup_heading: &'static str,
    pub setup_blurb: &'static str,
    pub setup_new_password_hint: &'static str,
    pub setup_confirm_password_hint: &'static str,
    pub setup_button: &'static str,
    pub login_heading: &'static str,
    pub login_password_hint: &'static str,
    pub login_button: &'static str,
    pub logout_button: &'static str,

    // Admin: settings
    pub overview_heading: &'static str,
    pub webhook_stat_label: &'static str,
    pub download_stat_label: &'static str,
    pub webhook_heading: &'static str,
    pub webhook_hint: &'static str,
    pub webhook_help_link: &'static str,
    pub download_url_heading: &'static str,
    pub download_url_hint: &'static str,
    pub current_download_label: &'static str,
    pub save_button: &'static str,
    pub remove_button: &'static str,
    pub saved_status: &'static str,
    pub removed_status: &'static str,
    pub help_heading: &'static str,
    pub help_steps: &'static [&'static str],
    pub close_help_button: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Next Level - AI Fitness Coach",
    hero_title: "NEXT LEVEL",
    hero_tagline: "AI Fitness Coach",
    hero_subtitle: "Become the Hunter of your fitness goals.",
    download_heading: "Get the App",
    download_button: "Download Beta",
    download_coming_soon_label: "Coming Soon...",
    download_tooltip_ready: "Download the latest version",
    download_tooltip_disabled: "Download coming soon",
    beta_heading: "Join the Hunter Program",
    beta_blurb: "Sign up for early access and level up with the first wave of hunters.",
    beta_email_hint: "you@example.com",
    beta_submit: "Join the Beta",
    beta_sending: "Sending...",
    beta_success: "🎮 Welcome to the Hunter Program! Check your email for updates.",

    admin_title: "Next Level Admin",
    setup_heading: "Create Admin Password",
    setup_blurb: "First visit: choose a password for this dashboard.",
    setup_new_password_hint: "New password (min 4 characters)",
    setup_confirm_password_hint: "Confirm password",
    setup_button: "Set Password",
    login_heading: "Admin Login",
    login_password_hint: "Password",
    login_button: "Log In",
    logout_button: "Log Out",

    overview_heading: "Overview",
    webhook_stat_label: "Signup webhook",
    download_stat_label: "Download link",
    webhook_heading: "Signup Webhook URL",
    webhook_hint: "https://script.google.com/macros/s/.../exec",
    webhook_help_link: "How do I get this URL?",
    download_url_heading: "Download URL",
    download_url_hint: "https://drive.google.com/uc?id=...&export=download",
    current_download_label: "Current download link:",
    save_button: "Save",
    remove_button: "Remove",
    saved_status: "✓ Saved successfully",
    removed_status: "✓ Download link removed",
    help_heading: "Setting up the signup webhook",
    help_steps: &[
        "1. Create a Google Sheet and open Extensions > Apps Script.",
        "2. Add a doPost(e) handler that appends JSON.parse(e.postData.contents).email to the sheet.",
        "3. Deploy > New deployment > Web app, execute as yourself, access: Anyone.",
        "4. Paste the /exec URL of the deployment above and press Save.",
    ],
    close_help_button: "Close",
};
