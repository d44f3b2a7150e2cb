//! HTTP server mode for REST API access to range computations

use anyhow::Context;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use url::Url;

use crate::cli::report::{NavigateReport, PagesReport, RangeReport};
use crate::cli::runner::build_links;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::pagination::{NavAction, PaginationController, PaginationParams};

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: AppConfig,
}

/// Query for `/range`
#[derive(Debug, Deserialize)]
struct RangeQuery {
    total: i64,
    #[serde(default)]
    page: Option<i64>,
    #[serde(default)]
    siblings: Option<u32>,
    #[serde(default)]
    boundaries: Option<u32>,
}

/// Query for `/navigate`
#[derive(Debug, Deserialize)]
struct NavigateQuery {
    total: i64,
    page: i64,
    action: String,
}

/// Query for `/pages`
#[derive(Debug, Deserialize)]
struct PagesQuery {
    records: u64,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    page: Option<i64>,
}

/// Query for `/links`
#[derive(Debug, Deserialize)]
struct LinksQuery {
    url: String,
    total: i64,
    #[serde(default)]
    siblings: Option<u32>,
    #[serde(default)]
    boundaries: Option<u32>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Map a handler result to a JSON response
fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::success(data))).into_response(),
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}

/// Build the router
pub fn router(config: AppConfig) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/range", get(range))
        .route("/navigate", get(navigate))
        .route("/pages", get(pages))
        .route("/links", get(links))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { config }))
}

/// Start the HTTP server
pub async fn serve(config: AppConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {port}"))?;

    axum::serve(listener, app)
        .await
        .context("HTTP server stopped unexpectedly")?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn params_for(
    config: &AppConfig,
    total: i64,
    page: i64,
    siblings: Option<u32>,
    boundaries: Option<u32>,
) -> PaginationParams {
    PaginationParams::new(total, page)
        .with_siblings(siblings.unwrap_or(config.pagination.siblings))
        .with_boundaries(boundaries.unwrap_or(config.pagination.boundaries))
}

/// Range for a total and active page
async fn range(State(state): State<Arc<AppState>>, Query(query): Query<RangeQuery>) -> Response {
    let config = &state.config;
    let page = query
        .page
        .unwrap_or_else(|| i64::from(config.listing.default_page));
    let params = params_for(config, query.total, page, query.siblings, query.boundaries);
    let controller = PaginationController::new(params);
    respond(Ok(RangeReport::from_controller(&controller)))
}

/// Clamped page for a navigation action
async fn navigate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigateQuery>,
) -> Response {
    let result = query.action.parse::<NavAction>().map(|action| {
        let params = params_for(&state.config, query.total, query.page, None, None);
        let page = PaginationController::new(params).apply(action);
        NavigateReport::new(action, page)
    });
    respond(result)
}

/// Page count and record window
async fn pages(State(state): State<Arc<AppState>>, Query(query): Query<PagesQuery>) -> Response {
    let config = &state.config;
    let page_size = query.page_size.unwrap_or(config.listing.page_size);
    let page = query
        .page
        .unwrap_or_else(|| i64::from(config.listing.default_page));
    respond(Ok(PagesReport::new(query.records, page_size, page)))
}

/// Range links for a listing URL
async fn links(State(state): State<Arc<AppState>>, Query(query): Query<LinksQuery>) -> Response {
    let result = Url::parse(&query.url)
        .map_err(Error::from)
        .and_then(|url| {
            build_links(
                &state.config,
                &url,
                query.total,
                query.siblings,
                query.boundaries,
            )
        });
    respond(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let taken = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = serve(AppConfig::default(), port).await.unwrap_err();
        assert!(matches!(err, Error::Anyhow(_)));
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), format!("Failed to bind to port {port}"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(router(AppConfig::default()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_range_endpoint() {
        let (status, body) =
            get_json(router(AppConfig::default()), "/range?total=20&page=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["range"], json!([1, "dots", 9, 10, 11, "dots", 20]));
        assert_eq!(body["data"]["has_previous"], true);
        assert_eq!(body["data"]["has_next"], true);
    }

    #[tokio::test]
    async fn test_range_endpoint_uses_config_defaults() {
        let mut config = AppConfig::default();
        config.pagination.siblings = 2;
        config.listing.default_page = 15;

        let (_, body) = get_json(router(config), "/range?total=30&boundaries=2").await;
        assert_eq!(
            body["data"]["range"],
            json!([1, 2, "dots", 13, 14, 15, 16, 17, "dots", 29, 30])
        );
    }

    #[tokio::test]
    async fn test_range_endpoint_missing_total() {
        let app = router(AppConfig::default());
        let response = app
            .oneshot(Request::builder().uri("/range?page=2").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_navigate_endpoint_clamps() {
        let (status, body) =
            get_json(router(AppConfig::default()), "/navigate?total=20&page=20&action=next").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({ "action": "next", "page": 20 }));

        let (_, body) =
            get_json(router(AppConfig::default()), "/navigate?total=20&page=3&action=0").await;
        assert_eq!(body["data"]["page"], 1);
    }

    #[tokio::test]
    async fn test_navigate_endpoint_bad_action() {
        let (status, body) =
            get_json(router(AppConfig::default()), "/navigate?total=20&page=3&action=up").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("'up'"));
    }

    #[tokio::test]
    async fn test_pages_endpoint() {
        let (status, body) =
            get_json(router(AppConfig::default()), "/pages?records=31&page=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["page_count"], 3);
        assert_eq!(body["data"]["window"]["skip"], 30);
        assert_eq!(body["data"]["window"]["take"], 15);
    }

    #[tokio::test]
    async fn test_links_endpoint() {
        let (status, body) = get_json(
            router(AppConfig::default()),
            "/links?total=3&url=https%3A%2F%2Fexample.com%2Frecords%3Fpage%3D2%26search%3Dann",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["query"]["page"], 2);
        assert_eq!(body["data"]["order_by"], json!([["name", "asc"]]));
        assert_eq!(
            body["data"]["links"][0],
            json!({ "entry": 1, "href": "https://example.com/records?page=1&search=ann" })
        );
    }

    #[tokio::test]
    async fn test_links_endpoint_bad_url() {
        let (status, body) =
            get_json(router(AppConfig::default()), "/links?total=3&url=not%20a%20url").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid URL"));
    }
}
