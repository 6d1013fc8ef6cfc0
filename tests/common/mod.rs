//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use docs_sidebar::prelude::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What the recording renderer last drew for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView {
    pub state: Disclosure,
    pub visible: bool,
    pub selected: bool,
}

/// Renderer keeping a per-row view, like the DOM would
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rows: HashMap<String, RowView>,
    pub calls: usize,
}

impl RecordingRenderer {
    fn view(&mut self, node: &Node) -> &mut RowView {
        self.calls += 1;
        self.rows.entry(node.path().to_string()).or_insert(RowView {
            state: node.disclosure(),
            visible: node.is_visible(),
            selected: false,
        })
    }

    pub fn row(&self, path: &str) -> RowView {
        self.rows[path]
    }
}

impl RowRenderer for RecordingRenderer {
    fn render_disclosure(&mut self, node: &Node) {
        self.view(node).state = node.disclosure();
    }

    fn render_visibility(&mut self, node: &Node) {
        self.view(node).visible = node.is_visible();
    }

    fn render_selection(&mut self, node: &Node, selected: bool) {
        self.view(node).selected = selected;
    }
}

/// Assert that every drawn row matches the logical tree
pub fn assert_in_sync(sidebar: &Sidebar<RecordingRenderer>) {
    let tree = sidebar.tree();
    for (id, node) in tree.iter() {
        let view = sidebar.renderer().row(node.path());
        assert_eq!(view.state, node.disclosure(), "state of {}", node.path());
        assert_eq!(view.visible, node.is_visible(), "visibility of {}", node.path());
        assert_eq!(view.selected, tree.is_selected(id), "selection of {}", node.path());
    }
}

/// Content slot recording what it was asked to show
#[derive(Debug, Default)]
pub struct RecordingSlot {
    pub html: String,
    pub shown: Vec<String>,
    pub scrolls: usize,
    pub error: Option<String>,
}

impl ContentSlot for RecordingSlot {
    fn replace(&mut self, fragment: &Fragment) {
        self.html = fragment.html.clone();
        self.shown.push(fragment.path.clone());
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn report_error(&mut self, error: &SidebarError) {
        self.error = Some(error.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

/// In-memory fragment source with optional per-path latency
#[derive(Debug, Default)]
pub struct MemorySource {
    pages: HashMap<String, (u16, String, Duration)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, path: &str, status: u16, body: &str) -> Self {
        self.pages
            .insert(path.to_string(), (status, body.to_string(), Duration::ZERO));
        self
    }

    pub fn slow_page(self, path: &str, body: &str, delay: Duration) -> Self {
        self.slow_status(path, 200, body, delay)
    }

    pub fn slow_status(mut self, path: &str, status: u16, body: &str, delay: Duration) -> Self {
        self.pages.insert(path.to_string(), (status, body.to_string(), delay));
        self
    }
}

impl FragmentSource for MemorySource {
    async fn fetch(&self, path: &str) -> SidebarResult<FetchedFragment> {
        let Some((status, body, delay)) = self.pages.get(path).cloned() else {
            return Ok(FetchedFragment::new(404, "not found"));
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(FetchedFragment::new(status, body))
    }
}

pub fn content_page(body: &str) -> String {
    format!("<html><body><nav>menu</nav><div id=\"content\">{body}</div></body></html>")
}

/// a (collapsed) > [b (leaf), c (collapsed) > [d (leaf)]], e (leaf)
pub fn sample_rows() -> Vec<RowSpec> {
    vec![
        RowSpec::new("a.html", 0, Disclosure::Collapsed),
        RowSpec::new("a/b.html", 1, Disclosure::Leaf),
        RowSpec::new("a/c.html", 1, Disclosure::Collapsed),
        RowSpec::new("a/c/d.html", 2, Disclosure::Leaf),
        RowSpec::new("e.html", 0, Disclosure::Leaf),
    ]
}

pub fn sample_sidebar() -> Sidebar<RecordingRenderer> {
    Sidebar::from_rows(sample_rows(), RecordingRenderer::default(), HitZone::new(20.0, 16.0))
        .unwrap()
}
