//! Capabilities the behaviors need from their host page.
//!
//! The browser implementations live in `admin-ui-web::js_bridge`. Nothing
//! here is `Send`: the host is the single-threaded page event loop.

use crate::statistics::LineChart;

/// Element lookup and the few mutations the behaviors perform.
pub trait Dom: Clone + 'static {
    /// Handle to one element of the document.
    type Node: Clone + 'static;

    /// Element with the given `id`, if any.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// Set one inline style property.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Detach the element from the document.
    fn remove(&self, node: &Self::Node);

    /// Call `handler` with the control's current value on every `change` event.
    fn on_change(&self, node: &Self::Node, handler: Box<dyn FnMut(String)>);
}

/// Deferred execution (`setTimeout` in a browser).
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Navigates the current browsing context.
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Global icon library such as `feather`.
pub trait IconReplacer {
    /// Run the library's `replace()`. Returns `false` when the library is not loaded.
    fn replace_icons(&self, library: &str) -> bool;
}

/// Global chart constructor (`new Chart(canvas, config)`).
pub trait ChartFactory<N> {
    fn line_chart(&self, canvas: &N, chart: &LineChart) -> anyhow::Result<()>;
}

/// Fetches a response body over HTTP GET.
///
/// No status or content-type check is implied: any body that arrives is
/// returned as text.
#[allow(async_fn_in_trait)]
pub trait JsonSource {
    async fn get_text(&self, path: &str) -> anyhow::Result<String>;
}
