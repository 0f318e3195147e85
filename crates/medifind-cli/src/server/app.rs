//! Axum application setup.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        .route(
            "/doctors",
            get(handlers::list_doctors).post(handlers::create_doctor),
        )
        .route("/doctors/facets", get(handlers::doctor_facets));

    let router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http());

    let router = if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

/// Start the web server and run until Ctrl-C.
pub async fn run_server(
    state: AppState,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let app = create_router(state, config.enable_cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, cors = config.enable_cors, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use medifind::{MedifindError, MemoryStore, Provider, RecordStore};

    /// Store whose reads or writes always fail.
    struct BrokenStore {
        fail_reads: bool,
    }

    impl RecordStore for BrokenStore {
        fn load_all(&self) -> medifind::Result<Vec<Provider>> {
            if self.fail_reads {
                Err(MedifindError::StoreRead {
                    path: PathBuf::from("broken.json"),
                    message: "disk on fire".to_string(),
                })
            } else {
                Ok(Vec::new())
            }
        }

        fn save_all(&self, _records: &[Provider]) -> medifind::Result<()> {
            Err(MedifindError::StoreWrite {
                path: PathBuf::from("broken.json"),
                message: "read-only filesystem".to_string(),
            })
        }

        fn location(&self) -> String {
            "broken".to_string()
        }
    }

    fn app_with(store: impl RecordStore + 'static) -> Router {
        create_router(AppState::new(Arc::new(store)), true)
    }

    fn payload(name: &str, specialization: &str, experience: u32, fee: u32) -> Value {
        json!({
            "name": name,
            "specialization": specialization,
            "experience": experience,
            "languages": ["English"],
            "location": "Pune",
            "availability": ["mon", "wed"],
            "consultationFee": fee,
            "imageUrl": "https://example.com/photo.png"
        })
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/doctors")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        send(app, request).await
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let app = app_with(MemoryStore::new());

        let (status, body) = get(&app, "/api/doctors").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"doctors": [], "currentPage": 1, "totalPages": 0, "totalDoctors": 0})
        );
    }

    #[tokio::test]
    async fn test_create_then_list_with_filters() {
        let app = app_with(MemoryStore::new());

        let (status, created) = post(
            &app,
            payload("Dr. Rao", "Cardiology", 12, 800).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["id"].as_str().unwrap().starts_with("doc"));
        assert_eq!(created["experience"], 12);

        post(&app, payload("Dr. Shah", "Dermatology", 3, 300).to_string()).await;

        let (status, body) =
            get(&app, "/api/doctors?specialization=CARDIO&minExperience=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalDoctors"], 1);
        assert_eq!(body["doctors"][0]["name"], "Dr. Rao");

        let (_, body) = get(&app, "/api/doctors?sortBy=consultationFee&sortOrder=desc").await;
        let names: Vec<&str> = body["doctors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Dr. Rao", "Dr. Shah"]);
    }

    #[tokio::test]
    async fn test_malformed_query_values_fall_back() {
        let app = app_with(MemoryStore::new());
        post(&app, payload("Dr. A", "ENT", 4, 200).to_string()).await;

        let (status, body) = get(&app, "/api/doctors?page=abc&limit=-2&sortBy=height").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currentPage"], 1);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["totalDoctors"], 1);
    }

    #[tokio::test]
    async fn test_invalid_payload_returns_field_errors() {
        let app = app_with(MemoryStore::new());
        let mut bad = payload("", "Cardiology", 5, 100);
        bad["imageUrl"] = json!("nope");

        let (status, body) = post(&app, bad.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid doctor data");
        assert_eq!(body["errors"]["name"], json!(["Name is required"]));
        assert_eq!(body["errors"]["imageUrl"], json!(["Image URL must be a valid URL"]));

        let (_, listing) = get(&app, "/api/doctors").await;
        assert_eq!(listing["totalDoctors"], 0);
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let app = app_with(MemoryStore::new());

        let (status, body) = post(&app, "{ this is not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Invalid JSON payload"}));
    }

    #[tokio::test]
    async fn test_store_read_failure_is_500() {
        let app = app_with(BrokenStore { fail_reads: true });

        let (status, body) = get(&app, "/api/doctors").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch doctors");
        assert!(body["error"].as_str().unwrap().contains("disk on fire"));
    }

    #[tokio::test]
    async fn test_store_write_failure_is_500() {
        let app = app_with(BrokenStore { fail_reads: false });

        let (status, body) = post(&app, payload("Dr. B", "ENT", 1, 100).to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to add doctor");
        assert!(body["error"].as_str().unwrap().contains("read-only filesystem"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_parallel_creates_are_all_kept() {
        let app = app_with(MemoryStore::new());

        let tasks: Vec<_> = (0..12)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    post(&app, payload(&format!("Dr. {}", i), "ENT", i, 100).to_string()).await
                })
            })
            .collect();
        for task in tasks {
            let (status, _) = task.await.unwrap();
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = get(&app, "/api/doctors?limit=50").await;
        assert_eq!(body["totalDoctors"], 12);
    }

    #[tokio::test]
    async fn test_facets_and_health() {
        let app = app_with(MemoryStore::new());
        post(&app, payload("Dr. C", "Neurology", 9, 900).to_string()).await;
        post(&app, payload("Dr. D", "Cardiology", 9, 900).to_string()).await;

        let (status, facets) = get(&app, "/api/doctors/facets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(facets["specializations"], json!(["Cardiology", "Neurology"]));
        assert_eq!(facets["locations"], json!(["Pune"]));

        let (status, health) = get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "ok");
    }

    #[tokio::test]
    async fn test_cors_header_only_when_enabled() {
        let request = || {
            Request::get("/health")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap()
        };

        let enabled = create_router(AppState::new(Arc::new(MemoryStore::new())), true);
        let response = enabled.oneshot(request()).await.unwrap();
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

        let disabled = create_router(AppState::new(Arc::new(MemoryStore::new())), false);
        let response = disabled.oneshot(request()).await.unwrap();
        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
