//! DOM lookups shared by the browser bindings

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::SidebarConfig;
use crate::error::{SidebarError, SidebarResult};
use crate::tree::RowSpec;

pub fn js_error(context: &str, value: JsValue) -> SidebarError {
    let detail = value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"));
    SidebarError::Dom(format!("{context}: {detail}"))
}

pub fn window() -> SidebarResult<Window> {
    web_sys::window().ok_or_else(|| SidebarError::Dom("no global window".to_string()))
}

pub fn document() -> SidebarResult<Document> {
    window()?
        .document()
        .ok_or_else(|| SidebarError::Dom("window has no document".to_string()))
}

pub fn element(document: &Document, id: &str) -> SidebarResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SidebarError::Dom(format!("no element with id '{id}'")))
}

pub fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Read every row under the sidebar root, in document order
///
/// Rows are the elements carrying a `level` attribute; a missing `state`
/// attribute reads as a leaf.
pub fn scan_rows(document: &Document, config: &SidebarConfig) -> SidebarResult<Vec<RowSpec>> {
    let root = element(document, &config.sidebar_id)?;
    let list = root
        .query_selector_all("[level]")
        .map_err(|e| js_error("scanning sidebar rows", e))?;

    let mut rows = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(row) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let path = row.id();
        if path.is_empty() {
            return Err(SidebarError::MalformedRow {
                row: format!("#{i}"),
                reason: "row has no id".to_string(),
            });
        }
        let level = row.get_attribute("level").unwrap_or_default();
        let state = row.get_attribute("state").unwrap_or_else(|| "none".to_string());
        rows.push(RowSpec::from_attrs(&path, &level, &state)?);
    }
    log::debug!("found {} sidebar rows", rows.len());
    Ok(rows)
}
