pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::chat::handlers::handle_chat;
use crate::pages::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(handlers::handle_home))
        .route("/projects", get(handlers::handle_projects))
        .route("/architecture", get(handlers::handle_architecture))
        .route("/playground", get(handlers::handle_playground))
        // Chat API
        .route("/chat", post(handle_chat))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tera::Tera;
    use tower::ServiceExt;

    use crate::chat::prompts::{EXPLAIN_SYSTEM, GENERAL_SYSTEM};
    use crate::config::Config;
    use crate::llm_client::{ChatCompletion, LlmClient, ProviderError};
    use crate::pages::PageRenderer;

    /// Records every call and answers with a canned reply or a canned failure.
    struct FakeCompletion {
        calls: Mutex<Vec<(String, String)>>,
        reply: Option<String>,
    }

    impl FakeCompletion {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply: Some(reply.to_string()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply: None,
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatCompletion for FakeCompletion {
        async fn complete(
            &self,
            system_prompt: &str,
            user_message: &str,
        ) -> Result<String, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_message.to_string()));
            self.reply.clone().ok_or(ProviderError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        }
    }

    fn test_pages() -> Arc<PageRenderer> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("index.html", "<html>home</html>"),
            ("projects.html", "<html>projects</html>"),
            ("architecture.html", "<html>architecture</html>"),
            ("playground.html", "<html>playground</html>"),
        ])
        .unwrap();
        Arc::new(PageRenderer::from_tera(tera))
    }

    fn test_app(llm: Arc<FakeCompletion>) -> Router {
        let state = AppState {
            llm,
            pages: test_pages(),
        };
        build_router(state, "static")
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app(FakeCompletion::replying("unused"));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "portfolio-api");
    }

    #[tokio::test]
    async fn test_chat_uses_mode_prompt() {
        let llm = FakeCompletion::replying("Hi there!");
        let app = test_app(llm.clone());

        let response = app
            .oneshot(chat_request(r#"{"message": "Hello", "mode": "explain"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(
            llm.calls(),
            vec![(EXPLAIN_SYSTEM.to_string(), "Hello".to_string())]
        );
    }

    #[tokio::test]
    async fn test_chat_success_envelope() {
        let app = test_app(FakeCompletion::replying("Hi there!"));

        let response = app
            .oneshot(chat_request(r#"{"message": "Hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"response": "Hi there!"}));
    }

    #[tokio::test]
    async fn test_chat_defaults_and_unknown_mode_use_general() {
        let llm = FakeCompletion::replying("ok");

        for body in [
            r#"{"message": "a"}"#,
            r#"{"message": "b", "mode": "nonexistent"}"#,
        ] {
            let response = test_app(llm.clone())
                .oneshot(chat_request(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let prompts: Vec<String> = llm.calls().into_iter().map(|(p, _)| p).collect();
        assert_eq!(prompts, vec![GENERAL_SYSTEM.to_string(), GENERAL_SYSTEM.to_string()]);
    }

    #[tokio::test]
    async fn test_chat_provider_failure_envelope() {
        let app = test_app(FakeCompletion::failing());

        let response = app
            .oneshot(chat_request(r#"{"message": "Hello", "mode": "debug"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        let text = json["response"].as_str().unwrap();
        assert!(text.starts_with("Error: System Malfunction."), "{text}");
        // The provider's own error text is passed through to the caller
        assert!(text.contains("model overloaded"), "{text}");
    }

    #[tokio::test]
    async fn test_chat_missing_message_never_calls_provider() {
        let llm = FakeCompletion::replying("unused");
        let app = test_app(llm.clone());

        let response = app
            .oneshot(chat_request(r#"{"mode": "explain"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UNPROCESSABLE_ENTITY");
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_chat_malformed_json_is_bad_request() {
        let llm = FakeCompletion::replying("unused");
        let app = test_app(llm.clone());

        let response = app.oneshot(chat_request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_chat_requires_json_content_type() {
        let llm = FakeCompletion::replying("unused");
        let app = test_app(llm.clone());

        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .body(Body::from(r#"{"message": "Hello"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_pages_render_while_provider_is_down() {
        let llm = FakeCompletion::failing();

        for (uri, marker) in [
            ("/", "home"),
            ("/projects", "projects"),
            ("/architecture", "architecture"),
            ("/playground", "playground"),
        ] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = test_app(llm.clone()).oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let body = axum::body::to_bytes(response.into_body(), 4096)
                .await
                .unwrap();
            assert!(String::from_utf8_lossy(&body).contains(marker));
        }

        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_template_is_server_error() {
        let state = AppState {
            llm: FakeCompletion::replying("unused"),
            pages: Arc::new(PageRenderer::from_tera(Tera::default())),
        };
        let app = build_router(state, "static");

        let request = Request::builder()
            .uri("/projects")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_chat_unreachable_provider_envelope() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let config = Config::from_lookup(|key| match key {
            "GROQ_API_KEY" => Some("gsk_test".to_string()),
            "GROQ_BASE_URL" => Some(base_url.clone()),
            "GROQ_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        let state = AppState {
            llm: Arc::new(LlmClient::new(&config).unwrap()),
            pages: test_pages(),
        };

        let response = build_router(state, "static")
            .oneshot(chat_request(r#"{"message": "Hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        let text = json["response"].as_str().unwrap();
        assert!(
            text.starts_with("Error: System Malfunction. HTTP error:"),
            "{text}"
        );
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

        let request = Request::builder()
            .uri("/static/js/playground.js")
            .body(Body::empty())
            .unwrap();
        let response = test_router_with_static(static_dir)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .uri("/static/js/missing.js")
            .body(Body::empty())
            .unwrap();
        let response = test_router_with_static(static_dir)
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn test_router_with_static(static_dir: &str) -> Router {
        let state = AppState {
            llm: FakeCompletion::replying("unused"),
            pages: test_pages(),
        };
        build_router(state, static_dir)
    }
}
