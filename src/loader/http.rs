//! HTTP fragment source for native hosts

use std::time::Duration;

use url::Url;

use crate::error::{SidebarError, SidebarResult};
use crate::loader::{FetchedFragment, FragmentSource};

/// Fetches fragments relative to a base URL with `reqwest`
pub struct HttpSource {
    base_url: Url,
    client: reqwest::Client,
    timeout_ms: u32,
}

impl HttpSource {
    /// `timeout_ms` of 0 disables the timeout
    pub fn new(base_url: &str, timeout_ms: u32) -> SidebarResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| SidebarError::InvalidConfig(format!("base url '{base_url}': {e}")))?;
        // join() replaces the last segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(u64::from(timeout_ms)));
        }
        let client = builder
            .build()
            .map_err(|e| SidebarError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            base_url,
            client,
            timeout_ms,
        })
    }

    /// Get the base URL for the source
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn transport_error(&self, path: &str, err: reqwest::Error) -> SidebarError {
        if err.is_timeout() {
            SidebarError::FetchTimedOut {
                path: path.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            SidebarError::FetchFailed {
                path: path.to_string(),
                reason: err.to_string(),
            }
        }
    }
}

impl FragmentSource for HttpSource {
    async fn fetch(&self, path: &str) -> SidebarResult<FetchedFragment> {
        let url = self.base_url.join(path).map_err(|e| SidebarError::FetchFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(path, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(path, e))?;

        Ok(FetchedFragment { status, body })
    }
}
