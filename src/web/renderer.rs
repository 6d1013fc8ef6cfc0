//! Row renderer writing attributes, classes and display style to the DOM

use web_sys::{Document, HtmlElement};

use crate::config::SidebarConfig;
use crate::render::RowRenderer;
use crate::tree::{Disclosure, Node};
use crate::web::dom::{html_element, js_error};

pub struct DomRenderer {
    document: Document,
    config: SidebarConfig,
}

impl DomRenderer {
    pub fn new(document: Document, config: SidebarConfig) -> Self {
        Self { document, config }
    }

    fn row(&self, node: &Node) -> Option<HtmlElement> {
        let row = html_element(&self.document, node.path());
        if row.is_none() {
            log::warn!("row element '{}' disappeared", node.path());
        }
        row
    }

    fn text(&self, node: &Node) -> Option<HtmlElement> {
        html_element(&self.document, &self.config.text_id(node.path()))
    }
}

fn check<T>(context: &str, result: Result<T, wasm_bindgen::JsValue>) {
    if let Err(e) = result {
        log::warn!("{}", js_error(context, e));
    }
}

impl RowRenderer for DomRenderer {
    fn render_disclosure(&mut self, node: &Node) {
        let state = node.disclosure();
        if let Some(row) = self.row(node) {
            check("setting state", row.set_attribute("state", state.as_attr()));
        }
        let Some(text) = self.text(node) else { return };
        let classes = text.class_list();
        let expanded = state == Disclosure::Expanded;
        let collapsed = state == Disclosure::Collapsed;
        check("expanded class", classes.toggle_with_force(&self.config.expanded_class, expanded));
        check(
            "collapsed class",
            classes.toggle_with_force(&self.config.collapsed_class, collapsed),
        );
    }

    fn render_visibility(&mut self, node: &Node) {
        let targets = [self.row(node), self.text(node)];
        for el in targets.into_iter().flatten() {
            let style = el.style();
            if node.is_visible() {
                check("showing row", style.remove_property("display"));
            } else {
                check("hiding row", style.set_property("display", "none"));
            }
        }
    }

    fn render_selection(&mut self, node: &Node, selected: bool) {
        if let Some(text) = self.text(node) {
            check(
                "selected class",
                text.class_list().toggle_with_force(&self.config.selected_class, selected),
            );
        }
    }
}
