//! Sidebar context - the tree, its renderer and the click geometry
//!
//! This is the only place that mutates the tree. Every operation applies its
//! row changes to the renderer before returning, so the display never lags
//! behind the logical state.

use crate::disclosure;
use crate::error::SidebarResult;
use crate::hit_zone::{HitZone, Intent};
use crate::render::{self, RowRenderer, Transition};
use crate::reveal;
use crate::tree::{RowSpec, SidebarTree};

pub struct Sidebar<R> {
    tree: SidebarTree,
    renderer: R,
    hit_zone: HitZone,
}

impl<R: RowRenderer> Sidebar<R> {
    /// Take ownership of a built tree and render every row once
    pub fn new(tree: SidebarTree, mut renderer: R, hit_zone: HitZone) -> Self {
        render::sync_all(&mut renderer, &tree);
        Self {
            tree,
            renderer,
            hit_zone,
        }
    }

    pub fn from_rows<I>(rows: I, renderer: R, hit_zone: HitZone) -> SidebarResult<Self>
    where
        I: IntoIterator<Item = RowSpec>,
    {
        Ok(Self::new(SidebarTree::from_rows(rows)?, renderer, hit_zone))
    }

    pub fn tree(&self) -> &SidebarTree {
        &self.tree
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn hit_zone(&self) -> HitZone {
        self.hit_zone
    }

    /// Expand or collapse the node at `path`; unknown paths and leaves are ignored
    pub fn toggle(&mut self, path: &str) -> Transition {
        let Some(id) = self.tree.find(path) else {
            log::warn!("toggle: no sidebar node for '{}'", path);
            return Transition::new();
        };
        let transition = disclosure::toggle(&mut self.tree, id);
        render::apply(&mut self.renderer, &self.tree, &transition);
        transition
    }

    /// Expand the ancestors of `path` and select it
    pub fn reveal(&mut self, path: &str) -> Transition {
        let transition = reveal::reveal(&mut self.tree, path);
        render::apply(&mut self.renderer, &self.tree, &transition);
        transition
    }

    /// Route a click at `pointer_x` on the row for `path`
    ///
    /// A toggle is performed right away. `Navigate` is returned for the caller
    /// to start a load, since loading is asynchronous and lives elsewhere.
    pub fn dispatch(&mut self, path: &str, pointer_x: f64) -> Option<Intent> {
        let node = self.tree.get(path).ok()?;
        let intent = self.hit_zone.intent(node, pointer_x);
        if intent == Intent::Toggle {
            self.toggle(path);
        }
        Some(intent)
    }
}
