//! Docs Sidebar - collapsible navigation tree with in-place page loading
//!
//! A static documentation site renders its sidebar as a flat list of rows
//! carrying `id`, `level` and `state` attributes. This crate rebuilds the tree
//! from those rows, keeps expand/collapse state and the row display in step,
//! and swaps page fragments into a single content region without reloading:
//! - Disclosure engine (shallow expand, deep collapse)
//! - Hit-zone dispatch (glyph area toggles, the rest navigates)
//! - Fragment loader (fetch, extract, rewrite relative links, splice)
//! - Ancestor reveal and single selection
//!
//! The core is target independent; `web` binds it to the DOM on wasm32.
//!
//! ## Example
//! ```rust
//! use docs_sidebar::prelude::*;
//!
//! let mut tree = SidebarTree::from_rows([
//!     RowSpec::new("guide.html", 0, Disclosure::Collapsed),
//!     RowSpec::new("guide/intro.html", 1, Disclosure::Leaf),
//! ])
//! .unwrap();
//!
//! let guide = tree.find("guide.html").unwrap();
//! toggle(&mut tree, guide);
//! assert!(tree.get("guide/intro.html").unwrap().is_visible());
//!
//! reveal(&mut tree, "guide/intro.html");
//! assert_eq!(tree.selected(), tree.find("guide/intro.html"));
//! ```

pub mod config;
pub mod disclosure;
pub mod error;
pub mod hit_zone;
pub mod loader;
pub mod navigation;
pub mod render;
pub mod reveal;
pub mod sidebar;
pub mod tree;

// Re-export common types
pub mod prelude {
    pub use crate::config::SidebarConfig;
    pub use crate::disclosure::toggle;
    pub use crate::error::{SidebarError, SidebarResult};
    pub use crate::hit_zone::{HitZone, Intent};
    pub use crate::loader::{
        ContentLoader, ContentSlot, FetchedFragment, Fragment, FragmentSource, SUCCESS_STATUSES,
    };
    pub use crate::navigation::{Origin, Session};
    pub use crate::render::{RowChange, RowRenderer, Transition};
    pub use crate::reveal::reveal;
    pub use crate::sidebar::Sidebar;
    pub use crate::tree::{Disclosure, Node, NodeId, RowSpec, SidebarTree};
}

#[cfg(target_arch = "wasm32")]
pub mod web;
