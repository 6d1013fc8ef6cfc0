//! Sidebar node - one entry of the navigation tree

use serde::{Deserialize, Serialize};

use crate::error::{SidebarError, SidebarResult};

/// Arena handle of a node inside its `SidebarTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a node's direct children are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disclosure {
    Expanded,
    Collapsed,
    /// No children; never toggles
    Leaf,
}

impl Disclosure {
    /// Parse the `state` attribute of a rendered row
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "expanded" => Some(Disclosure::Expanded),
            "collapsed" => Some(Disclosure::Collapsed),
            "none" => Some(Disclosure::Leaf),
            _ => None,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Disclosure::Expanded => "expanded",
            Disclosure::Collapsed => "collapsed",
            Disclosure::Leaf => "none",
        }
    }

    pub fn is_leaf(self) -> bool {
        self == Disclosure::Leaf
    }
}

/// A rendered sidebar row as read from the page, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpec {
    pub path: String,
    pub level: usize,
    pub state: Disclosure,
}

impl RowSpec {
    pub fn new(path: impl Into<String>, level: usize, state: Disclosure) -> Self {
        Self {
            path: path.into(),
            level,
            state,
        }
    }

    /// Build from the raw `level` and `state` attribute strings
    pub fn from_attrs(path: &str, level: &str, state: &str) -> SidebarResult<Self> {
        let level = level.trim().parse().map_err(|_| SidebarError::MalformedRow {
            row: path.to_string(),
            reason: format!("level '{level}' is not a non-negative integer"),
        })?;
        let state = Disclosure::from_attr(state).ok_or_else(|| SidebarError::MalformedRow {
            row: path.to_string(),
            reason: format!("unknown state '{state}'"),
        })?;
        Ok(Self::new(path, level, state))
    }
}

/// One entry of the sidebar tree
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) path: String,
    pub(crate) level: usize,
    pub(crate) disclosure: Disclosure,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) visible: bool,
}

impl Node {
    /// Unique id, also the relative path of the fragment this row shows
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the row is currently rendered visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
