//! # Catalog Client
//!
//! One GET per collection against the configured API.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         fetch_products()                                │
//! │                                                                         │
//! │   endpoint(products_path) ──► GET ──► 2xx? ──► JSON array ──► Vec<T>    │
//! │                                │        │           │                   │
//! │                                ▼        ▼           ▼                   │
//! │                         RequestFailed  HttpStatus  DecodeFailed         │
//! │                                                                         │
//! │   No retry, no pagination, no caching. Each call is independent.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use registro_core::{Employee, Product};

use crate::config::ApiSettings;
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Source Trait
// =============================================================================

/// Where the catalog lists come from.
///
/// The app only sees this trait, so tests can swap the network out.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;

    async fn fetch_employees(&self) -> CatalogResult<Vec<Employee>>;
}

// =============================================================================
// HTTP Client
// =============================================================================

/// reqwest-backed [`CatalogSource`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    api: ApiSettings,
}

impl CatalogClient {
    /// Builds a client for the given API settings.
    pub fn from_settings(api: ApiSettings) -> CatalogResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| CatalogError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(CatalogClient { http, api })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.api
    }

    /// GETs `path` and decodes the body as a JSON array of `T`.
    async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> CatalogResult<Vec<T>> {
        let url = self.api.endpoint(path)?;
        debug!(%url, "Fetching collection");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "Request failed");
            CatalogError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Unexpected HTTP status");
            return Err(CatalogError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;

        let items: Vec<T> = serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "Response body did not decode");
            CatalogError::DecodeFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(%url, count = items.len(), "Collection fetched");
        Ok(items)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        self.get_collection(&self.api.products_path).await
    }

    async fn fetch_employees(&self) -> CatalogResult<Vec<Employee>> {
        self.get_collection(&self.api.employees_path).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    const PRODUCTS: &str = r#"[
        {"id": 1, "title": "Silla", "price": 44, "description": "d",
         "images": [], "category": {"id": 1, "name": "Muebles"}},
        {"id": 2, "title": "Mesa", "price": 120.5, "category": {"name": "Muebles"}}
    ]"#;

    const USERS: &str = r#"[
        {"id": 7, "email": "ana@umg.com", "password": "x", "name": "Ana",
         "role": "admin", "avatar": "https://i.imgur.com/a.png"}
    ]"#;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> CatalogClient {
        CatalogClient::from_settings(ApiSettings {
            base_url,
            ..ApiSettings::default()
        })
        .unwrap()
    }

    fn json_body(body: &'static str) -> ([(&'static str, &'static str); 1], &'static str) {
        ([("content-type", "application/json")], body)
    }

    #[tokio::test]
    async fn test_fetch_both_collections() {
        let app = Router::new()
            .route("/products", get(|| async { json_body(PRODUCTS) }))
            .route("/users", get(|| async { json_body(USERS) }));
        let client = client_for(serve(app).await);

        let products = client.fetch_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Silla");
        assert_eq!(products[1].price.cents(), 12_050);

        let employees = client.fetch_employees().await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].role, "admin");
    }

    #[tokio::test]
    async fn test_empty_collection_is_ok() {
        let app = Router::new().route("/products", get(|| async { json_body("[]") }));
        let client = client_for(serve(app).await);

        assert!(client.fetch_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let app = Router::new().route(
            "/products",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = client_for(serve(app).await);

        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_missing_route_is_http_status() {
        let client = client_for(serve(Router::new()).await);

        let err = client.fetch_employees().await.unwrap_err();
        assert!(matches!(err, CatalogError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let app = Router::new().route("/products", get(|| async { "<html>oops</html>" }));
        let client = client_for(serve(app).await);

        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::DecodeFailed { .. }));
        assert!(err.is_fetch_error());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::RequestFailed { .. }));
    }

    #[tokio::test]
    async fn test_base_url_with_path_prefix() {
        let app = Router::new().route("/api/v1/products", get(|| async { json_body("[]") }));
        let base = format!("{}/api/v1/", serve(app).await);
        let client = client_for(base);

        assert!(client.fetch_products().await.is_ok());
    }
}
