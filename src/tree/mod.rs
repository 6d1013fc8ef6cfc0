pub mod model;
pub mod node;

pub use model::{Ancestors, SidebarTree};
pub use node::{Disclosure, Node, NodeId, RowSpec};
