//! Navigation session - loader, content slot and sidebar for one page
//!
//! Loads may overlap. Nothing is borrowed across the fetch, and each
//! completion replaces the slot on its own, so whichever response is
//! processed last is what stays on screen.

use std::cell::{Cell, Ref, RefCell};

use crate::error::SidebarResult;
use crate::hit_zone::Intent;
use crate::loader::{node_path, ContentLoader, ContentSlot, FragmentSource};
use crate::render::RowRenderer;
use crate::sidebar::Sidebar;

/// How a load was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The implicit load at startup
    Initial,
    /// A rewritten link or a sidebar row
    Link,
}

pub struct Session<S, C, R> {
    loader: ContentLoader<S>,
    slot: RefCell<C>,
    sidebar: RefCell<Sidebar<R>>,
    issued: Cell<u64>,
}

impl<S, C, R> Session<S, C, R>
where
    S: FragmentSource,
    C: ContentSlot,
    R: RowRenderer,
{
    pub fn new(loader: ContentLoader<S>, slot: C, sidebar: Sidebar<R>) -> Self {
        Self {
            loader,
            slot: RefCell::new(slot),
            sidebar: RefCell::new(sidebar),
            issued: Cell::new(0),
        }
    }

    pub fn sidebar(&self) -> Ref<'_, Sidebar<R>> {
        self.sidebar.borrow()
    }

    pub fn slot(&self) -> Ref<'_, C> {
        self.slot.borrow()
    }

    pub fn loader(&self) -> &ContentLoader<S> {
        &self.loader
    }

    /// Fetch `path` and splice it into the content slot
    ///
    /// Failures leave the slot content as it was and are returned. They are
    /// also reported through the slot unless a newer load was issued since.
    pub async fn load(&self, path: &str, origin: Origin) -> SidebarResult<()> {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        log::info!("load #{} '{}' ({:?})", seq, path, origin);

        let fragment = match self.loader.fetch(path).await {
            Ok(fragment) => fragment,
            Err(err) => {
                log::error!("load #{} failed: {}", seq, err);
                // a newer load owns the status element
                if seq == self.issued.get() {
                    self.slot.borrow_mut().report_error(&err);
                }
                return Err(err);
            }
        };

        {
            let mut slot = self.slot.borrow_mut();
            slot.clear_error();
            slot.replace(&fragment);
            if origin == Origin::Link {
                slot.scroll_to_top();
            }
        }
        if origin == Origin::Link {
            self.sidebar.borrow_mut().reveal(node_path(path));
        }
        log::debug!(
            "load #{} done, {} links rewritten",
            seq,
            fragment.links.len()
        );
        Ok(())
    }

    /// Synchronous half of a row click: toggles right away, reports the intent
    pub fn dispatch(&self, path: &str, pointer_x: f64) -> Option<Intent> {
        let intent = self.sidebar.borrow_mut().dispatch(path, pointer_x);
        if intent.is_none() {
            log::warn!("click on unknown row '{}'", path);
        }
        intent
    }

    /// Handle a click at `pointer_x` on the row for `path`
    pub async fn click_row(&self, path: &str, pointer_x: f64) -> SidebarResult<()> {
        match self.dispatch(path, pointer_x) {
            Some(Intent::Navigate) => self.load(path, Origin::Link).await,
            Some(Intent::Toggle) | None => Ok(()),
        }
    }

    /// Initial load, then reveal the page it shows in the sidebar
    pub async fn start(&self, initial_path: &str) -> SidebarResult<()> {
        self.load(initial_path, Origin::Initial).await?;
        self.sidebar.borrow_mut().reveal(node_path(initial_path));
        Ok(())
    }

    pub fn toggle(&self, path: &str) {
        self.sidebar.borrow_mut().toggle(path);
    }

    pub fn reveal(&self, path: &str) {
        self.sidebar.borrow_mut().reveal(node_path(path));
    }
}
