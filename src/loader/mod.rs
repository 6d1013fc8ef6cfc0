//! Content loader - fetch a fragment by path and prepare it for the slot

pub mod fragment;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;

use crate::error::{SidebarError, SidebarResult};

pub use fragment::{is_relative_link, node_path, Fragment, LOAD_ATTR};
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpSource;

/// Statuses treated as success; 0 is what file:// requests report
pub const SUCCESS_STATUSES: [u16; 2] = [200, 0];

/// Raw response for one fragment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFragment {
    pub status: u16,
    pub body: String,
}

impl FetchedFragment {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        SUCCESS_STATUSES.contains(&self.status)
    }
}

/// Where fragments come from
///
/// Transport failures are reported as errors; any completed response,
/// successful or not, is returned with its status for the loader to judge.
#[allow(async_fn_in_trait)]
pub trait FragmentSource {
    async fn fetch(&self, path: &str) -> SidebarResult<FetchedFragment>;
}

/// The single region showing the current fragment
pub trait ContentSlot {
    /// Swap the whole slot content for `fragment` in one step
    fn replace(&mut self, fragment: &Fragment);
    fn scroll_to_top(&mut self);
    /// Show a load failure without touching the current content
    fn report_error(&mut self, error: &SidebarError);
    fn clear_error(&mut self);
}

/// Fetches fragments and turns them into slot-ready content
pub struct ContentLoader<S> {
    source: S,
    container_id: String,
}

impl<S: FragmentSource> ContentLoader<S> {
    pub fn new(source: S, container_id: impl Into<String>) -> Self {
        Self {
            source,
            container_id: container_id.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `path` and extract its content container
    pub async fn fetch(&self, path: &str) -> SidebarResult<Fragment> {
        let response = self.source.fetch(path).await?;
        if !response.is_success() {
            return Err(SidebarError::FetchStatus {
                path: path.to_string(),
                status: response.status,
            });
        }
        fragment::extract(path, &response.body, &self.container_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert!(FetchedFragment::new(200, "").is_success());
        assert!(FetchedFragment::new(0, "").is_success());
        assert!(!FetchedFragment::new(204, "").is_success());
        assert!(!FetchedFragment::new(304, "").is_success());
        assert!(!FetchedFragment::new(404, "").is_success());
    }
}
