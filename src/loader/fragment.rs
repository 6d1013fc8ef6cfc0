//! Fragment extraction and link rewriting
//!
//! A fetched page is parsed with html5ever, the content container is located
//! by id, every relative `<a href>` inside it gets a `data-load` attribute
//! carrying its original target, and the container's children are
//! serialized back to markup for the content slot.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{parse_document, Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use url::Url;

use crate::error::{SidebarError, SidebarResult};

/// Attribute marking a link that must go through the loader
pub const LOAD_ATTR: &str = "data-load";

/// Processed content ready to be spliced into the content slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Path the fragment was loaded from
    pub path: String,
    /// Serialized children of the content container
    pub html: String,
    /// Original targets of every rewritten link, in document order
    pub links: Vec<String>,
}

/// Extract the container `container_id` from `body` and rewrite its links
pub fn extract(path: &str, body: &str, container_id: &str) -> SidebarResult<Fragment> {
    let dom = parse_document(RcDom::default(), Default::default()).one(body);

    let container = find_by_id(&dom.document, container_id).ok_or_else(|| {
        SidebarError::MissingContainer {
            path: path.to_string(),
            container: container_id.to_string(),
        }
    })?;

    let mut links = Vec::new();
    rewrite_links(&container, &mut links);

    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut bytes, &SerializableHandle::from(container), opts)
        .map_err(|e| SidebarError::Dom(format!("serializing '{path}': {e}")))?;

    Ok(Fragment {
        path: path.to_string(),
        html: String::from_utf8_lossy(&bytes).into_owned(),
        links,
    })
}

/// Whether `href` must be routed through the loader
///
/// Only scheme-less, non-anchor targets qualify: `http:`/`https:` (and any
/// other scheme such as `mailto:`) navigate normally, as do protocol-relative
/// `//host` links and in-page `#anchors`.
pub fn is_relative_link(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || href.starts_with("//") {
        return false;
    }
    matches!(Url::parse(href), Err(url::ParseError::RelativeUrlWithoutBase))
}

/// Sidebar node path addressed by a link target
///
/// Drops a leading `./` and any query or anchor part.
pub fn node_path(target: &str) -> &str {
    let target = target.trim();
    let target = target.strip_prefix("./").unwrap_or(target);
    let end = target.find(['#', '?']).unwrap_or(target.len());
    &target[..end]
}

fn find_by_id(handle: &Handle, id: &str) -> Option<Handle> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        let matches = attrs
            .borrow()
            .iter()
            .any(|attr| &*attr.name.local == "id" && &*attr.value == id);
        if matches {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_by_id(child, id))
}

fn rewrite_links(handle: &Handle, links: &mut Vec<String>) {
    if let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = handle.data
    {
        if &*name.local == "a" {
            let mut attrs = attrs.borrow_mut();
            let href = attrs
                .iter()
                .find(|attr| &*attr.name.local == "href")
                .map(|attr| attr.value.to_string());
            if let Some(href) = href.filter(|h| is_relative_link(h)) {
                attrs.retain(|attr| &*attr.name.local != LOAD_ATTR);
                attrs.push(Attribute {
                    name: QualName::new(None, Namespace::from(""), LocalName::from(LOAD_ATTR)),
                    value: StrTendril::from_slice(&href),
                });
                links.push(href);
            }
        }
    }
    for child in handle.children.borrow().iter() {
        rewrite_links(child, links);
    }
}
