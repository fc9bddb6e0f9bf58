// Hand-crafted async HTTP client for the shopdash REST API.
//
// Base path: /api/
// No authentication; all endpoints are read-only GETs.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types;

// ── Error response shape from the API ────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the shopdash REST API.
///
/// Wraps a `reqwest::Client`; every operation returns either a typed
/// payload (envelope already unwrapped) or a classified [`Error`]. No
/// retries are performed — failures surface to the caller immediately.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL with the `/api/` suffix.
    ///
    /// Accepts either `http://host:port` or `http://host:port/api`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }

        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"customers/7"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        // base_url always ends with `/api/`, so joining `customers…` works.
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(ErrorResponse { error: Some(msg) }) => msg,
            _ if raw.is_empty() => status.to_string(),
            _ => raw,
        };

        Error::Server {
            status: status.as_u16(),
            message,
        }
    }

    /// Reclassify a 404-class `Server` error as entity absence.
    fn not_found(resource: &'static str, id: u64) -> impl FnOnce(Error) -> Error {
        move |err| match err {
            Error::Server { status: 404, .. } => Error::NotFound { resource, id },
            other => other,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Statistics ───────────────────────────────────────────────────

    pub async fn statistics(&self) -> Result<types::Statistics, Error> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            statistics: types::Statistics,
        }

        let env: Envelope = self.get("statistics").await?;
        Ok(env.statistics)
    }

    // ── Customers ────────────────────────────────────────────────────

    pub async fn list_customers(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<types::CustomerPage, Error> {
        self.get_with_params(
            "customers",
            &[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ],
        )
        .await
    }

    pub async fn get_customer(&self, id: u64) -> Result<types::CustomerRecord, Error> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            customer: types::CustomerRecord,
        }

        let env: Envelope = self
            .get(&format!("customers/{id}"))
            .await
            .map_err(Self::not_found("customer", id))?;
        Ok(env.customer)
    }

    pub async fn list_customer_orders(&self, id: u64) -> Result<types::CustomerOrders, Error> {
        self.get(&format!("customers/{id}/orders"))
            .await
            .map_err(Self::not_found("customer", id))
    }

    // ── Orders ───────────────────────────────────────────────────────

    pub async fn list_orders(&self, page: u32, per_page: u32) -> Result<types::OrderPage, Error> {
        self.get_with_params(
            "orders",
            &[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ],
        )
        .await
    }

    pub async fn get_order(&self, id: u64) -> Result<types::OrderRecord, Error> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            order: types::OrderRecord,
        }

        let env: Envelope = self
            .get(&format!("orders/{id}"))
            .await
            .map_err(Self::not_found("order", id))?;
        Ok(env.order)
    }
}
