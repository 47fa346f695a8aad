use reqwest::Client;
use tracing::{debug, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::models::EmployeePage;

/// HTTP client for the directory listing endpoint.
///
/// The base URL is resolved once at process start (flag or environment)
/// and never changes for the lifetime of the process.
#[derive(Clone)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/employees?search=<term?>&limit=<n>&offset=<n>`.
    ///
    /// The `search` parameter is omitted when the trimmed term is empty,
    /// which the endpoint treats as an unfiltered listing.
    pub async fn search_employees(
        &self,
        term: &str,
        limit: u32,
        offset: u32,
    ) -> ApiResult<EmployeePage> {
        let url = format!("{}/api/employees", self.base_url);
        let mut request = self
            .http
            .get(&url)
            .query(&[("limit", limit), ("offset", offset)]);

        let term = term.trim();
        if !term.is_empty() {
            request = request.query(&[("search", term)]);
        }

        debug!(term, limit, offset, "issuing employee search");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "employee search failed");
            return Err(ApiError::from_error_response(status.as_u16(), &body));
        }

        Ok(response.json::<EmployeePage>().await?)
    }

    /// `GET /health`. Anything but a reachable 2xx counts as unhealthy.
    /// Off the critical path; used only for explicit liveness probing.
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!(error = %err, "health probe failed");
                false
            }
        }
    }
}
