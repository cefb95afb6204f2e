//! Liveness HTTP endpoint.
//!
//! A stateless service with two read-only routes: a static health payload
//! and the faucet directory. No wallet or key material is ever served.

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;

use crate::faucets::{Faucet, FAUCETS};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub system: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        system: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Faucet directory endpoint
pub async fn faucets() -> Json<&'static [Faucet]> {
    Json(FAUCETS)
}

/// Builds the service router.
pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/faucets", get(faucets))
}

/// Binds and serves until ctrl-c.
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("liveness endpoint listening on http://{}", addr);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "alive");
        assert_eq!(body["system"], env!("CARGO_PKG_NAME"));
        // RFC 3339 timestamps parse back.
        assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn faucet_directory_is_served() {
        let (status, body) = get_json("/api/faucets").await;
        assert_eq!(status, StatusCode::OK);

        let list = body.as_array().unwrap();
        assert_eq!(list.len(), FAUCETS.len());
        assert_eq!(list[0]["name"], "Sepolia");
        assert!(list.iter().all(|f| f["url"].as_str().unwrap().starts_with("https://")));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/wallet")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
