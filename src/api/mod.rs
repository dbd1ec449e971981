//! HTTP surface: JSON endpoints over the catalog and the calculator

mod handlers;
mod payload;

pub use handlers::{CalculateQuery, FinancingQuery};
pub use payload::{
    ApiError, ApiResponse, CalculationData, ComparisonData, FlipCostBreakdown, FlipResults,
    HealthData, StrategyResults,
};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::calculator::InvestmentCalculator;
use crate::property::PropertyRepository;

/// Shared, read-only server state
pub struct AppState {
    pub catalog: Box<dyn PropertyRepository>,
    pub calculator: InvestmentCalculator,
}

impl AppState {
    pub fn new(catalog: impl PropertyRepository + 'static, calculator: InvestmentCalculator) -> Self {
        Self {
            catalog: Box::new(catalog),
            calculator,
        }
    }
}

/// All routes, with permissive CORS for the browser frontend
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/states", get(handlers::list_states))
        .route("/api/properties", get(handlers::list_properties))
        .route("/api/properties/:id", get(handlers::get_property))
        .route("/api/calculate/:id", get(handlers::calculate))
        .route("/api/compare/:id", get(handlers::compare))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        "Listening on {} ({} listings)",
        listener.local_addr()?,
        state.catalog.all().len()
    );
    axum::serve(listener, router(Arc::new(state))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::property::InMemoryCatalog;

    fn app() -> Router {
        router(Arc::new(AppState::new(
            InMemoryCatalog::mock_listings(),
            InvestmentCalculator::default(),
        )))
    }

    async fn send(request: Request<Body>) -> Response {
        app().oneshot(request).await.unwrap()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = send(Request::get(uri).body(Body::empty()).unwrap()).await;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_query_param_is_400_envelope() {
        let (status, json) =
            get_json("/api/calculate/1?strategy=airbnb&downPayment=90000&loanTerm=30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("interestRate"), "{}", json);
        assert!(json.get("data").is_none());

        let (status, json) = get_json("/api/compare/1?downPayment=lots&interestRate=6.5&loanTerm=30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_frontend_flip_request_ignores_extra_params() {
        let (status, json) = get_json(
            "/api/calculate/1?strategy=flip&downPayment=90000&interestRate=6.5&loanTerm=30\
             &renovationBudget=50000&afterRepairValue=550000&holdingPeriod=6",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["strategy"], "flip");
        // The extra params do not override the computed values
        assert_eq!(json["data"]["costBreakdown"]["afterRepairValue"], 495_000);
        assert_eq!(json["data"]["results"]["annualizedROI"], -77.6);
    }

    #[tokio::test]
    async fn test_numeric_params_accept_decimals() {
        let (status, json) =
            get_json("/api/calculate/1?strategy=airbnb&downPayment=90000&interestRate=6.5&loanTerm=30.0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["results"]["totalROI"], 15.3);

        let (status, json) = get_json("/api/properties?bathrooms=2.5&state=co").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_oversized_loan_term_is_rejected() {
        let (status, json) =
            get_json("/api/calculate/1?strategy=airbnb&downPayment=90000&interestRate=6.5&loanTerm=400000000")
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().starts_with("Invalid financing"));
    }

    #[tokio::test]
    async fn test_routes() {
        let (status, json) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "ok");

        let (status, json) = get_json("/api/properties/4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["city"], "Phoenix");

        let (status, json) = get_json("/api/properties/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Property not found: 99");

        let (status, json) = get_json("/api/states").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0], "TX");

        let (status, json) = get_json("/api/compare/2?downPayment=76000&interestRate=6.5&loanTerm=30").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["ranking"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let request = Request::get("/api/health")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = send(request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let preflight = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/calculate/1")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = send(preflight).await;
        assert!(response.status().is_success());
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("GET"), "{}", methods);
    }
}
