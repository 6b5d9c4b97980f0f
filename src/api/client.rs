//! WestWine REST API client implementation.
//!
//! The [`WineClient`] is a thin async wrapper over three endpoints of the
//! WestWine wine catalogue.
//!
//! # Example
//!
//! ```rust,ignore
//! use westwine::api::WineClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WineClient::new()?;
//!
//!     // Get one wine
//!     let wine = client.fetch_wine_by_id(42).await?;
//!     println!("Wine: {}", wine);
//!
//!     // Create a wine; the response is returned as-is
//!     let response = client.add_wine(&json!({ "name": "Shiraz" })).await?;
//!     println!("Created: {}", response.status().is_success());
//!
//!     Ok(())
//! }
//! ```

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{Wine, WineId, WineList};
use crate::network::DEFAULT_API_URL;

/// Builder for configuring [`WineClient`].
#[derive(Debug, Clone)]
pub struct WineClientBuilder {
    base_url: String,
    default_headers: Vec<(String, String)>,
    http_client: Option<Client>,
}

impl Default for WineClientBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl WineClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: Vec::new(),
            http_client: None,
        }
    }

    /// Point the client at a different server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Use an existing [`reqwest::Client`] instead of building a new one.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<WineClient> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(WineClient {
            http_client,
            base_url: self.base_url,
            default_headers: headers,
        })
    }
}

/// WestWine REST API client.
///
/// Stateless apart from its configuration: every call issues exactly one
/// request and calls may run concurrently from a shared reference. There is
/// no retry, timeout, or status checking; the caller decides what a non-2xx
/// response means.
#[derive(Debug, Clone)]
pub struct WineClient {
    http_client: Client,
    base_url: String,
    default_headers: HeaderMap,
}

impl WineClient {
    /// Create a client for the public WestWine endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        WineClientBuilder::default().build()
    }

    /// Create a client for the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        WineClientBuilder::new(base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> WineClientBuilder {
        WineClientBuilder::default()
    }

    /// Get the base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Wine endpoints
    // =========================================================================

    /// Get a single wine by id.
    ///
    /// Sends `GET {base}/{id}` and returns the parsed JSON body whatever the
    /// response status was. A 404 with a JSON error body resolves to that body.
    ///
    /// The id is percent-encoded and always occupies exactly one path
    /// segment: `"red/white"` requests `{base}/red%2Fwhite`, never
    /// `{base}/red/white`. Numeric and alphanumeric ids are sent unchanged.
    pub async fn fetch_wine_by_id(&self, id: impl Into<WineId>) -> ApiResult<Wine> {
        self.fetch_wine_by_id_as(id).await
    }

    /// Get a single wine by id, deserialized into `T`.
    pub async fn fetch_wine_by_id_as<T: DeserializeOwned>(
        &self,
        id: impl Into<WineId>,
    ) -> ApiResult<T> {
        let url = self.wine_url(&id.into());
        self.get(&url).await
    }

    /// Get all wines.
    ///
    /// Sends `GET {base}/` and returns the parsed JSON body. The body is
    /// expected to be an array but is not checked.
    pub async fn fetch_wines(&self) -> ApiResult<WineList> {
        self.fetch_wines_as().await
    }

    /// Get all wines, deserialized into `T` (e.g. `Vec<MyWine>`).
    pub async fn fetch_wines_as<T: DeserializeOwned>(&self) -> ApiResult<T> {
        let url = self.wines_url();
        self.get(&url).await
    }

    /// Create a wine.
    ///
    /// Sends `POST {base}/new` with the JSON-serialized payload. Unlike the
    /// read endpoints, the response is returned raw: its body is not read
    /// and its status is not inspected.
    pub async fn add_wine<W: Serialize + ?Sized>(&self, wine: &W) -> ApiResult<Response> {
        let url = self.new_wine_url();
        let body = serde_json::to_vec(wine)?;

        let mut headers = self.default_headers.clone();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let request = self.http_client.post(&url).headers(headers).body(body);
        self.send(Method::POST, &url, request).await
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn wine_url(&self, id: &WineId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    fn wines_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn new_wine_url(&self) -> String {
        format!("{}/new", self.base_url)
    }

    /// Execute a GET request and parse the body as JSON.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let request = self.http_client.get(url).headers(self.default_headers.clone());
        let response = self.send(Method::GET, url, request).await?;
        response.json::<T>().await.map_err(ApiError::Deserialize)
    }

    /// Send a request once, logging the outcome.
    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> ApiResult<Response> {
        tracing::debug!(method = %method, url = %url, "Sending request");

        match request.send().await {
            Ok(response) => {
                tracing::debug!(
                    method = %method,
                    url = %url,
                    status = %response.status(),
                    "Received response"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
                Err(ApiError::Http(e))
            }
        }
    }
}
