//! Note Keeper App, the WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser adapters and hands them to the egui UI.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CANVAS_ID: &str = "notekeeper_canvas";

/// WASM entry point, called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Note Keeper starting...");

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .expect("No canvas element with id 'notekeeper_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::NoteKeeperApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
