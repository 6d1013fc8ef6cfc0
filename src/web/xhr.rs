//! Fragment source using XMLHttpRequest
//!
//! XHR rather than `fetch` because it completes with status 0 for file://
//! pages, which the loader counts as success.

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, XmlHttpRequest};

use crate::error::{SidebarError, SidebarResult};
use crate::loader::{FetchedFragment, FragmentSource};
use crate::web::dom::js_error;

pub struct XhrSource {
    timeout_ms: u32,
}

impl XhrSource {
    /// `timeout_ms` of 0 disables the timeout
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl FragmentSource for XhrSource {
    async fn fetch(&self, path: &str) -> SidebarResult<FetchedFragment> {
        let failed = |reason: String| SidebarError::FetchFailed {
            path: path.to_string(),
            reason,
        };

        let xhr = XmlHttpRequest::new().map_err(|e| js_error("creating request", e))?;
        xhr.open("GET", path)
            .map_err(|e| failed(js_error("open", e).to_string()))?;
        xhr.set_timeout(self.timeout_ms);

        let done = Promise::new(&mut |resolve, reject| {
            xhr.set_onload(Some(&resolve));
            xhr.set_onerror(Some(&reject));
            xhr.set_ontimeout(Some(&reject));
        });
        xhr.send().map_err(|e| failed(js_error("send", e).to_string()))?;

        if let Err(event) = JsFuture::from(done).await {
            let kind = event.dyn_ref::<Event>().map(|e| e.type_()).unwrap_or_default();
            return Err(if kind == "timeout" {
                SidebarError::FetchTimedOut {
                    path: path.to_string(),
                    timeout_ms: self.timeout_ms,
                }
            } else {
                failed("network error".to_string())
            });
        }

        let status = xhr.status().map_err(|e| failed(js_error("status", e).to_string()))?;
        let body = xhr
            .response_text()
            .map_err(|e| failed(js_error("response", e).to_string()))?
            .unwrap_or_default();
        Ok(FetchedFragment { status, body })
    }
}
