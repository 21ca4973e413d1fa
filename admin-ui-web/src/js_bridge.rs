//! Browser implementations of the `admin_ui_core::host` capabilities.
//!
//! Page globals (`Chart`, `feather`) are reached through `js_sys::Reflect`
//! rather than `extern` bindings: either may be missing on a given page,
//! and that must not break module instantiation.

use admin_ui_core::host::{ChartFactory, Dom, IconReplacer, JsonSource, Navigator, Scheduler};
use admin_ui_core::statistics::LineChart;
use anyhow::anyhow;
use js_sys::{Array, Function, Reflect, JSON};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlElement, Response, Window};

/// Turn a thrown JS value into an `anyhow` error.
fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, err)
}

/// Look up a property of `window`, treating `undefined`/`null` as absent.
fn global(window: &Window, name: &str) -> Option<JsValue> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Run `f` once the document is parsed (`DOMContentLoaded`), or now if it already is.
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        warn!("could not wait for DOMContentLoaded: {:?}", e);
    }
}

/// The live document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current page's document, if running in a window.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    /// Text content of the element with `id`, if present.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }
}

impl Dom for WebDom {
    type Node = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn elements_by_class(&self, class: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(&format!(".{}", class)) else {
            warn!("invalid class selector: {}", class);
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = node.style().set_property(property, value) {
            warn!("could not set {}: {:?}", property, e);
        }
    }

    fn remove(&self, node: &HtmlElement) {
        node.remove();
    }

    fn on_change(&self, node: &HtmlElement, mut handler: Box<dyn FnMut(String)>) {
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            // <select> and <input> both expose `value`.
            let value = event
                .current_target()
                .and_then(|target| Reflect::get(&target, &JsValue::from_str("value")).ok())
                .and_then(|v| v.as_string())
                .unwrap_or_default();
            handler(value);
        });
        if let Err(e) = node.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
            warn!("could not attach change listener: {:?}", e);
        }
        // Lives as long as the page.
        listener.forget();
    }
}

/// `setTimeout`.
#[derive(Clone)]
pub struct TimeoutScheduler {
    window: Window,
}

impl TimeoutScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || task());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            warn!("setTimeout failed: {:?}", e);
        }
    }
}

/// `window.location.href = url`.
pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            warn!("navigation to {} failed: {:?}", url, e);
        }
    }
}

/// `window[library].replace()`, e.g. Feather Icons.
pub struct GlobalIcons {
    window: Window,
}

impl GlobalIcons {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl IconReplacer for GlobalIcons {
    fn replace_icons(&self, library: &str) -> bool {
        let Some(lib) = global(&self.window, library) else {
            return false;
        };
        let replace = Reflect::get(&lib, &JsValue::from_str("replace"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        match replace {
            Some(replace) => {
                if let Err(e) = replace.call0(&lib) {
                    warn!("{}.replace() threw: {:?}", library, e);
                }
                true
            }
            None => false,
        }
    }
}

/// `new Chart(canvas, config)` from Chart.js.
pub struct ChartJs {
    window: Window,
}

impl ChartJs {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ChartFactory<HtmlElement> for ChartJs {
    fn line_chart(&self, canvas: &HtmlElement, chart: &LineChart) -> anyhow::Result<()> {
        let constructor = global(&self.window, "Chart")
            .ok_or_else(|| anyhow!("Chart is not defined"))?
            .dyn_into::<Function>()
            .map_err(|v| js_error("Chart is not a constructor", v))?;
        let config_json = serde_json::to_string(chart)?;
        let config = JSON::parse(&config_json).map_err(|e| js_error("chart config", e))?;
        Reflect::construct(&constructor, &Array::of2(canvas, &config))
            .map_err(|e| js_error("new Chart()", e))?;
        Ok(())
    }
}

/// `fetch(path).then(r => r.text())`, status ignored.
pub struct FetchSource {
    window: Window,
}

impl FetchSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl JsonSource for FetchSource {
    async fn get_text(&self, path: &str) -> anyhow::Result<String> {
        let response = JsFuture::from(self.window.fetch_with_str(path))
            .await
            .map_err(|e| js_error(path, e))?
            .dyn_into::<Response>()
            .map_err(|v| js_error("fetch did not return a Response", v))?;
        let text = response.text().map_err(|e| js_error("Response.text()", e))?;
        JsFuture::from(text)
            .await
            .map_err(|e| js_error("reading body", e))?
            .as_string()
            .ok_or_else(|| anyhow!("body of {} is not text", path))
    }
}
