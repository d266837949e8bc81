 // hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod component;
mod config;
mod constants;
mod error;

use eframe::egui;
use error::WrapErr;
use tracing::info;

fn main() -> error::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let cfg = config::Config::load().context("Load configuration error")?;
    info!("configuration at {:?}", cfg.config_path);

    // A missing corpus directory is fatal before any UI comes up
    let searcher = doc_search::Searcher::new(cfg.search.clone())
        .context("Open corpus error")?;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([cfg.app.width, cfg.app.height])
        .with_app_id(constants::APP_ID);

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        config::constants::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, cfg, searcher)))),
    )
    .map_err(|e| error::error!("{e}"))?;

    Ok(())
}
