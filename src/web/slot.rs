//! Content slot backed by a DOM element

use web_sys::{Document, Element};

use crate::config::SidebarConfig;
use crate::error::{SidebarError, SidebarResult};
use crate::loader::{ContentSlot, Fragment};
use crate::web::dom::{element, js_error, window};

pub struct DomContentSlot {
    slot: Element,
    status: Element,
}

impl DomContentSlot {
    /// Bind to the slot element, creating the status element before it if absent
    pub fn new(document: &Document, config: &SidebarConfig) -> SidebarResult<Self> {
        let slot = element(document, &config.content_slot_id)?;
        let status = match document.get_element_by_id(&config.status_id) {
            Some(status) => status,
            None => {
                let status = document
                    .create_element("div")
                    .map_err(|e| js_error("creating status element", e))?;
                status.set_id(&config.status_id);
                status
                    .set_attribute("role", "alert")
                    .map_err(|e| js_error("status role", e))?;
                status
                    .set_attribute("hidden", "")
                    .map_err(|e| js_error("status hidden", e))?;
                slot.before_with_node_1(&status)
                    .map_err(|e| js_error("inserting status element", e))?;
                status
            }
        };
        Ok(Self { slot, status })
    }

    pub fn element(&self) -> &Element {
        &self.slot
    }
}

impl ContentSlot for DomContentSlot {
    fn replace(&mut self, fragment: &Fragment) {
        // one assignment: the old content is never shown half-removed
        self.slot.set_inner_html(&fragment.html);
    }

    fn scroll_to_top(&mut self) {
        self.slot.set_scroll_top(0);
        if let Ok(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn report_error(&mut self, error: &SidebarError) {
        self.status
            .set_text_content(Some(&format!("Could not load page. {error}")));
        if let Err(e) = self.status.remove_attribute("hidden") {
            log::warn!("{}", js_error("showing status", e));
        }
    }

    fn clear_error(&mut self) {
        self.status.set_text_content(None);
        if let Err(e) = self.status.set_attribute("hidden", "") {
            log::warn!("{}", js_error("hiding status", e));
        }
    }
}
