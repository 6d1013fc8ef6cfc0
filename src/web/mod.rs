//! Browser bindings
//!
//! ```javascript,ignore
//! import init, { SidebarApp } from './docs_sidebar.js';
//!
//! await init();
//! const app = SidebarApp.mount({ initial_path: 'guide/intro.html' });
//! await app.load('guide/setup.html');
//! ```

pub mod dom;
pub mod renderer;
pub mod slot;
pub mod xhr;

use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Element, MouseEvent};

use crate::config::SidebarConfig;
use crate::error::SidebarError;
use crate::hit_zone::{label_x, Intent};
use crate::loader::{ContentLoader, LOAD_ATTR};
use crate::navigation::{Origin, Session};
use crate::sidebar::Sidebar;

pub use renderer::DomRenderer;
pub use slot::DomContentSlot;
pub use xhr::XhrSource;

type DomSession = Session<XhrSource, DomContentSlot, DomRenderer>;
type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: SidebarError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn init_logging(config: &SidebarConfig) -> Result<(), SidebarError> {
    if let Some(level) = config.log_level_filter()?.to_level() {
        // a second mount keeps the first logger
        let _ = console_log::init_with_level(level);
    }
    Ok(())
}

/// The mounted sidebar and content slot of the current page
#[wasm_bindgen]
pub struct SidebarApp {
    session: Rc<DomSession>,
    _listeners: Vec<ClickListener>,
}

#[wasm_bindgen]
impl SidebarApp {
    /// Build the sidebar from the current document and wire its events
    ///
    /// `config` is a plain object with any `SidebarConfig` fields, or
    /// `undefined` for the defaults.
    pub fn mount(config: JsValue) -> Result<SidebarApp, JsValue> {
        let config: SidebarConfig = if config.is_undefined() || config.is_null() {
            SidebarConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| to_js(SidebarError::InvalidConfig(e.to_string())))?
        };
        config.validate().map_err(to_js)?;
        init_logging(&config).map_err(to_js)?;

        let document = dom::document().map_err(to_js)?;
        let rows = dom::scan_rows(&document, &config).map_err(to_js)?;
        let renderer = DomRenderer::new(document.clone(), config.clone());
        let sidebar = Sidebar::from_rows(rows, renderer, config.hit_zone).map_err(to_js)?;
        let slot = DomContentSlot::new(&document, &config).map_err(to_js)?;
        let slot_element = slot.element().clone();
        let loader = ContentLoader::new(
            XhrSource::new(config.fetch_timeout_ms),
            config.fragment_container_id.clone(),
        );
        let session = Rc::new(Session::new(loader, slot, sidebar));

        let mut listeners = Vec::new();
        let paths: Vec<String> = session
            .sidebar()
            .tree()
            .iter()
            .map(|(_, node)| node.path().to_string())
            .collect();
        for path in paths {
            let Some(text) = document.get_element_by_id(&config.text_id(&path)) else {
                log::warn!("row '{}' has no clickable label", path);
                continue;
            };
            let listener = row_listener(session.clone(), path, text.clone());
            text.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            listeners.push(listener);
        }

        let listener = link_listener(session.clone());
        slot_element.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        listeners.push(listener);

        log::info!("sidebar mounted with {} rows", session.sidebar().tree().len());

        if let Some(initial) = config.initial_path.clone() {
            let session = session.clone();
            spawn_local(async move {
                // failures are already shown in the status element
                let _ = session.start(&initial).await;
            });
        }

        Ok(SidebarApp {
            session,
            _listeners: listeners,
        })
    }

    /// Navigate to `path` as if a link had been followed
    pub fn load(&self, path: String) -> Promise {
        let session = self.session.clone();
        future_to_promise(async move {
            session
                .load(&path, Origin::Link)
                .await
                .map(|_| JsValue::UNDEFINED)
                .map_err(to_js)
        })
    }

    pub fn toggle(&self, path: &str) {
        self.session.toggle(path);
    }

    pub fn reveal(&self, path: &str) {
        self.session.reveal(path);
    }

    /// Path of the selected row, if any
    pub fn selected(&self) -> Option<String> {
        let sidebar = self.session.sidebar();
        let tree = sidebar.tree();
        tree.selected().map(|id| tree.node(id).path().to_string())
    }
}

fn row_listener(session: Rc<DomSession>, path: String, label: Element) -> ClickListener {
    Closure::new(move |event: MouseEvent| {
        event.prevent_default();
        let left = label.get_bounding_client_rect().left();
        let x = label_x(f64::from(event.client_x()), left);
        // toggles happen inside the handler; only the load is deferred
        let intent = session.dispatch(&path, x);
        if intent == Some(Intent::Navigate) {
            let session = session.clone();
            let path = path.clone();
            spawn_local(async move {
                let _ = session.load(&path, Origin::Link).await;
            });
        }
    })
}

fn link_listener(session: Rc<DomSession>) -> ClickListener {
    Closure::new(move |event: MouseEvent| {
        // modified clicks keep their default (new tab, download, ...)
        if event.button() != 0 || event.ctrl_key() || event.meta_key() || event.shift_key() {
            return;
        }
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(link)) = target.closest(&format!("a[{LOAD_ATTR}]")) else {
            return;
        };
        let Some(path) = link.get_attribute(LOAD_ATTR) else {
            return;
        };
        event.prevent_default();
        let session = session.clone();
        spawn_local(async move {
            let _ = session.load(&path, Origin::Link).await;
        });
    })
}
