use tracing::warn;

use crate::core::catalog::{sample_dramas, Drama};

/// Where a catalog payload came from. The data source reports this
/// explicitly instead of callers sniffing record contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct CatalogPayload {
    pub dramas: Vec<Drama>,
    pub origin: CatalogOrigin,
}

/// HTTP client for the drama catalog service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    /// Load the full catalog. Remote failure is absorbed here: the bundled
    /// sample set is substituted and the payload is tagged Fallback, so the
    /// startup load never fails.
    pub async fn fetch_catalog(&self) -> CatalogPayload {
        match self.get_dramas().await {
            Ok(dramas) => CatalogPayload {
                dramas,
                origin: CatalogOrigin::Remote,
            },
            Err(e) => {
                warn!("Catalog unavailable, using bundled sample set: {e}");
                CatalogPayload {
                    dramas: sample_dramas(),
                    origin: CatalogOrigin::Fallback,
                }
            }
        }
    }

    async fn get_dramas(&self) -> Result<Vec<Drama>, String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| "no catalog URL configured".to_string())?;
        let url = format!("{base}/dramas");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("catalog request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("catalog API error: {}", resp.status()));
        }

        resp.json()
            .await
            .map_err(|e| format!("catalog parse error: {e}"))
    }

    /// Free-text search against the remote service. Failure is returned to
    /// the caller; the orchestrator decides what to show.
    pub async fn search(&self, query: &str) -> Result<Vec<Drama>, String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| "no catalog URL configured".to_string())?;
        let url = format!("{base}/dramas/search?q={}", urlencoding::encode(query));

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("search request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("search API error: {}", resp.status()));
        }

        resp.json()
            .await
            .map_err(|e| format!("search parse error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_without_base_url_falls_back() {
        let client = ApiClient::new(None);
        let payload = client.fetch_catalog().await;
        assert_eq!(payload.origin, CatalogOrigin::Fallback);
        assert_eq!(payload.dramas[0].id, "1");
        assert_eq!(payload.dramas[0].title, "The CEO's Secret Vow");
    }

    #[tokio::test]
    async fn search_without_base_url_errors() {
        let client = ApiClient::new(None);
        let result = client.search("ceo").await;
        assert!(result.is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(Some("http://localhost:8080/".to_string()));
        assert_eq!(client.base_url.as_deref(), Some("http://localhost:8080"));
    }
}
