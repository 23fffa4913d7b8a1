//! REST exposure of the echo service
//!
//! `POST /api/catcorner` answers with the JSON body it received, which is
//! what the form expects from its remote endpoint.

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Path the echo handler is mounted on
pub const ECHO_PATH: &str = "/api/catcorner";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// - Health check routes
    /// - The echo route
    /// - Custom routes, merged last
    pub fn build_router(custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(Self::echo_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(TraceLayer::new_for_http())
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    fn echo_routes() -> Router {
        Router::new().route(ECHO_PATH, post(Self::echo))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "cat-corner"
        }))
    }

    /// Mirror the posted JSON back
    async fn echo(Json(body): Json<Value>) -> Json<Value> {
        tracing::debug!(%body, "Echoing order");
        Json(body)
    }
}
