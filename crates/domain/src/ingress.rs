//! Ingress prefix: rebasing API paths behind a hosting platform's proxy.
//!
//! When the console is served through Home Assistant ingress the page lives
//! under `/api/hassio_ingress/<token>/` and every API call must go through
//! that same prefix.

/// Path segment that introduces an ingress token.
const INGRESS_MARKER: &str = "/api/hassio_ingress/";

/// Base used to resolve API paths for a given page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiBase {
    /// `/api/hassio_ingress/<token>/`, always ending with a slash.
    prefix: Option<String>,
}

impl ApiBase {
    /// Detect the ingress prefix in the page URL (absolute URL or path).
    ///
    /// The token must be non-empty and followed by a `/`. Query string and
    /// fragment are ignored.
    #[must_use]
    pub fn from_page_url(page_url: &str) -> Self {
        let path = page_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let prefix = path.find(INGRESS_MARKER).and_then(|start| {
            let after = &path[start + INGRESS_MARKER.len()..];
            let (token, _) = after.split_once('/')?;
            (!token.is_empty()).then(|| format!("{INGRESS_MARKER}{token}/"))
        });
        Self { prefix }
    }

    /// Resolve an API path such as `api/nodes`.
    ///
    /// Without an ingress prefix the path is returned unchanged.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{}", path.trim_start_matches('/')),
            None => path.to_string(),
        }
    }
}

/// Resolve `path` for a page loaded from `page_url`.
#[must_use]
pub fn api_url(page_url: &str, path: &str) -> String {
    ApiBase::from_page_url(page_url).url(path)
}
