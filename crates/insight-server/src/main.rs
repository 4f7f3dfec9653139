//! InsightEngine HTTP Server
//!
//! Axum-based server hosting the landing site.
//!
//! Serves the Leptos WASM frontend from a static directory, plus a small
//! JSON API and a redirect endpoint so the URL form also works with
//! JavaScript disabled.

mod config;
mod handlers;
mod state;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{health_check, site_metadata, submit_form};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    if !config.index_file().is_file() {
        tracing::warn!(
            "⚠ {} not found - build the frontend into {}",
            config.index_file().display(),
            config.static_dir.display()
        );
    }

    let addr = config.bind_addr.clone();
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 InsightEngine running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  GET  /api/site        - Site metadata");
    tracing::info!("  GET  /submit?url=...  - Form hand-off without JavaScript");
    tracing::info!("  GET  /*               - Frontend");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router
fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Unknown paths get index.html so client-side routes resolve
    let frontend = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/site", get(site_metadata))
        .route("/submit", get(submit_form))
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use insight_core::Role;

    use super::*;

    fn test_app() -> Router {
        router(AppState::new(ServerConfig {
            bind_addr: "127.0.0.1:0".into(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../insight-web")),
        }))
    }

    async fn get(uri: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_site_metadata() {
        let response = get("/api/site").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["title"], insight_core::SITE.title);
        assert_eq!(json["open_graph"]["title"], "InsightEngine - AI SEO Analyzer");
    }

    #[tokio::test]
    async fn test_submit_redirects_to_analyze() {
        let response = get("/submit?url=%20%20example.com%20%20").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/analyze?url=example.com");
    }

    #[tokio::test]
    async fn test_submit_reencodes_url() {
        let response = get("/submit?url=https%3A%2F%2Fa.com%2Fp%3Fq%3D1%26r%3D2").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&response),
            "/analyze?url=https%3A%2F%2Fa.com%2Fp%3Fq%3D1%26r%3D2"
        );
    }

    #[tokio::test]
    async fn test_blank_submit_returns_home() {
        for uri in ["/submit", "/submit?url=", "/submit?url=+++"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(location(&response), "/", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_repeated_url_param_uses_first() {
        let response = get("/submit?url=a.com&url=b.com").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/analyze?url=a.com");

        let response = get("/submit?ref=nav&url=%EF%BB%BF&url=b.com").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        let response = get("/analyze?url=example.com").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<title>InsightEngine"));
    }

    #[tokio::test]
    async fn test_stylesheet_covers_every_role() {
        let response = get("/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);

        let css = body_text(response).await;
        for role in Role::ALL {
            assert!(css.contains(&format!(".{} ", role.class())), "missing .{}", role.class());
        }
    }
}
