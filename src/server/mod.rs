//! HTTP façade: maps routes to gateway intents and renders JSON.

use crate::error::GatewayError;
use crate::gateway::Gateway;
use axum::{
    Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

mod handlers;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = if self.is_caller_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// CORS policy for the configured browser origins
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                ::log::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS, Method::PUT])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
}

/// Builds the router with every gateway endpoint
pub fn router(gateway: Gateway, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search/:language", get(handlers::search))
        .route("/language/:language", get(handlers::browse))
        .route("/actors/:language/:actor_code", get(handlers::actor))
        .route("/genre/:language", get(handlers::genre))
        .route("/decade/:language/:decade", get(handlers::decade))
        .route("/year/:language/:year", get(handlers::year))
        .route("/watch", get(handlers::watch))
        .with_state(gateway)
        .layer(cors_layer(cors_origins))
}

/// Binds `host:port` and serves until the process is stopped
pub async fn serve(router: Router, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    ::log::info!("Gateway listening on http://{}:{}", host, port);
    axum::serve(listener, router).await
}
