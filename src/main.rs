mod app;
mod message;
mod sample_catalog;
mod style;
mod view;

use app::CatalogApp;
use catalog_nav::Config;
use eframe::egui;
use std::env;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("catalog_nav=info"))
        .init();

    if let Err(e) = Config::create_default() {
        log::warn!("Could not write default config: {e}");
    }
    let config = Config::load();

    // Optional deep link, e.g. `catalog-nav '#section=accelerators&sort=az'`
    let fragment = env::args().nth(1).unwrap_or_default();
    log::info!("Starting at '{fragment}'");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Catalog"),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog",
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogApp::new(config, &fragment)))),
    )
}
