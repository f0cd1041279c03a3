#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use next_level_site::{MemoryStore, Page, SharedStore, SiteConfig, StorageScopes, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*; // <--- REQUIRED for .dyn_into()

// The binary still needs a main() even though 'start' is the real entry point.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
fn init_web_logging() {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::Output::call(|record| {
            web_sys::console::log_1(&record.args().to_string().into());
        }))
        .apply();
    if result.is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

#[cfg(target_arch = "wasm32")]
fn web_store(
    scope: &str,
    open: fn() -> Result<next_level_site::storage::WebStorage, next_level_site::SiteError>,
) -> SharedStore {
    match open() {
        Ok(store) => next_level_site::storage::shared(store),
        Err(e) => {
            log::warn!("⚠️  {} unavailable, settings will not persist: {}", scope, e);
            next_level_site::storage::shared(MemoryStore::default())
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use next_level_site::storage::WebStorage;

    // A. Init Logging
    console_error_panic_hook::set_once();
    init_web_logging();

    // B. Pick the page from the URL
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let pathname = window.location().pathname().unwrap_or_default();
    let page = Page::from_path(&pathname);
    log::info!("🚀 Next Level starting in WASM mode ({:?} page)...", page);

    // C. Browser storage scopes
    let scopes = StorageScopes::new(
        web_store("localStorage", WebStorage::local),
        web_store("sessionStorage", WebStorage::session),
    );
    let site_config = SiteConfig::compiled();

    // D. Find the canvas element by ID
    let document = window.document().ok_or("should have a document on window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(run_app(cc, page, scopes, site_config))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use next_level_site::Cli;
    use next_level_site::storage::{JsonFileStore, shared};
    use next_level_site::ui::config::UI_TEXT;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Static defaults
    let site_config = match SiteConfig::from_file(&args.site_config) {
        Ok(Some(config)) => config,
        Ok(None) => SiteConfig::compiled(),
        Err(e) => {
            log::warn!("⚠️  {:#}; using built-in defaults", e);
            SiteConfig::compiled()
        }
    };

    // D. Storage: persistent JSON file + per-process session
    let persistent = match JsonFileStore::open(args.state_file.clone()) {
        Ok(store) => store,
        Err(e) => {
            log::error!("⚠️  {:#}; starting with empty settings", e);
            JsonFileStore::empty(args.state_file.clone())
        }
    };
    let session: SharedStore = shared(MemoryStore::default());
    let scopes = StorageScopes::new(shared(persistent), session);

    // E. Run Native App
    let page = args.page();
    log::info!("🚀 Next Level starting ({:?} page)", page);

    eframe::run_native(
        UI_TEXT.app_title,
        NativeOptions::default(),
        Box::new(move |cc| Ok(run_app(cc, page, scopes, site_config))),
    )
}
