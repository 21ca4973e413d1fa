//! In-memory stand-ins for the host capabilities.

use crate::host::{ChartFactory, Dom, IconReplacer, JsonSource, Navigator, Scheduler};
use crate::statistics::LineChart;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Index of an element inside a [`FakeDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub usize);

#[derive(Default)]
struct FakeElement {
    id: Option<String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attached: bool,
    listeners: Vec<Box<dyn FnMut(String)>>,
}

/// A flat document: elements with an optional id, classes and inline styles.
#[derive(Clone, Default)]
pub struct FakeDom {
    elements: Rc<RefCell<Vec<FakeElement>>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attached: true,
            ..Default::default()
        });
        NodeId(elements.len() - 1)
    }

    pub fn add_with_id(&self, id: &str) -> NodeId {
        self.add(Some(id), &[])
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.elements.borrow()[node.0].styles.get(property).cloned()
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.elements.borrow()[node.0].attached
    }

    pub fn listener_count(&self) -> usize {
        self.elements.borrow().iter().map(|e| e.listeners.len()).sum()
    }

    /// Dispatch a `change` event carrying `value` to the element's listeners.
    pub fn change(&self, node: NodeId, value: &str) {
        // Handlers may call back into the dom, so run them unborrowed.
        let mut listeners = std::mem::take(&mut self.elements.borrow_mut()[node.0].listeners);
        for listener in listeners.iter_mut() {
            listener(value.to_string());
        }
        self.elements.borrow_mut()[node.0].listeners = listeners;
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .borrow()
            .iter()
            .position(|e| e.attached && e.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attached && e.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.elements.borrow_mut()[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn remove(&self, node: &NodeId) {
        self.elements.borrow_mut()[node.0].attached = false;
    }

    fn on_change(&self, node: &NodeId, handler: Box<dyn FnMut(String)>) {
        self.elements.borrow_mut()[node.0].listeners.push(handler);
    }
}

struct Pending {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    seq: u64,
    pending: Vec<Pending>,
}

/// Virtual clock. Tasks run only inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move time forward by `ms`, running due tasks in due order.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let earliest = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                earliest.map(|i| {
                    let pending = clock.pending.remove(i);
                    clock.now = pending.due;
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + u64::from(delay_ms);
        let seq = clock.seq;
        clock.seq += 1;
        clock.pending.push(Pending { due, seq, task });
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Rc<RefCell<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_string());
    }
}

#[derive(Default)]
pub struct FakeIcons {
    pub loaded: bool,
    pub calls: Cell<usize>,
}

impl IconReplacer for FakeIcons {
    fn replace_icons(&self, _library: &str) -> bool {
        if self.loaded {
            self.calls.set(self.calls.get() + 1);
        }
        self.loaded
    }
}

#[derive(Default)]
pub struct RecordingCharts {
    pub built: RefCell<Vec<(NodeId, LineChart)>>,
    pub fail: bool,
}

impl ChartFactory<NodeId> for RecordingCharts {
    fn line_chart(&self, canvas: &NodeId, chart: &LineChart) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("Chart is not defined");
        }
        self.built.borrow_mut().push((*canvas, chart.clone()));
        Ok(())
    }
}

/// Serves one canned body (or failure) and records requested paths.
pub struct FakeStatsSource {
    pub body: Result<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeStatsSource {
    pub fn serving(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            body: Err(message.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl JsonSource for FakeStatsSource {
    async fn get_text(&self, path: &str) -> anyhow::Result<String> {
        self.requests.borrow_mut().push(path.to_string());
        self.body.clone().map_err(anyhow::Error::msg)
    }
}
