//! Browser bindings for the admin page behaviors.
//!
//! Loaded once per admin page as a WASM module. On start it:
//! - installs `window.openModal(id)` / `window.closeModal(id)` for inline handlers
//! - waits for the document to be parsed, then wires the brand filter,
//!   runs icon replacement and flash-message dismissal, and loads the
//!   appointments chart
//!
//! Each behavior checks for its own elements, so the same module serves
//! every page.

pub mod js_bridge;
pub mod page_config;

use admin_ui_core::{bootstrap, dictionary, modal, statistics, AdminUiConfig};
use dioxus_logger::tracing::Level;
use js_bridge::{ChartJs, FetchSource, GlobalIcons, LocationNavigator, TimeoutScheduler, WebDom};
use js_sys::Reflect;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

#[wasm_bindgen(start)]
pub fn start() {
    // A host page that already set up logging keeps its subscriber.
    let _ = dioxus_logger::init(Level::INFO);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    expose(&window, "openModal", open_modal);
    expose(&window, "closeModal", close_modal);

    let dom = WebDom::new(document.clone());
    js_bridge::on_ready(&document, move || {
        let config = page_config::load(&dom);
        run(window, dom, config);
    });
}

fn run(window: Window, dom: WebDom, config: AdminUiConfig) {
    dictionary::init(&dom, LocationNavigator::new(window.clone()), &config);
    bootstrap::init_page(
        &dom,
        &TimeoutScheduler::new(window.clone()),
        &GlobalIcons::new(window.clone()),
        &config,
    );

    wasm_bindgen_futures::spawn_local(async move {
        let source = FetchSource::new(window.clone());
        let charts = ChartJs::new(window);
        if let Err(e) = statistics::load(&dom, &source, &charts, &config).await {
            error!("appointments chart not drawn: {}", e);
        }
    });
}

/// Show the modal with the given id (`display: flex`).
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) {
    if let Some(dom) = WebDom::current() {
        modal::open_modal(&dom, id);
    }
}

/// Hide the modal with the given id (`display: none`).
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) {
    if let Some(dom) = WebDom::current() {
        modal::close_modal(&dom, id);
    }
}

/// Make `f` callable as `window[name](id)`.
fn expose(window: &Window, name: &str, f: fn(&str)) {
    let callback = Closure::<dyn Fn(String)>::new(move |id: String| f(&id));
    if let Err(e) = Reflect::set(window, &JsValue::from_str(name), callback.as_ref()) {
        warn!("could not install window.{}: {:?}", name, e);
    }
    callback.forget();
}
