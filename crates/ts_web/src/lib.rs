use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod page;
pub mod state;
pub mod submission;

pub use state::{AppState, CachedModel, ModelSource};

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::summarize))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use ts_core::{Error, Result};
    pub use crate::{create_app, AppState, CachedModel, ModelSource};
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::path::Path;
    use tower::ServiceExt;
    use ts_inference::{ModelArtifact, ModelLoader};

    fn app_for(path: &Path) -> Router {
        let loader = Arc::new(ModelLoader::new());
        create_app(AppState::new(Arc::new(CachedModel::new(loader, path))))
    }

    fn write_model(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("model.pkl");
        let artifact = ModelArtifact::LeadWords { words: 2 };
        let bytes = serde_pickle::to_vec(&artifact, serde_pickle::SerOptions::new()).unwrap();
        std::fs::write(&path, bytes).unwrap();
        path
    }

    async fn body_of(app: Router, request: Request<Body>) -> String {
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn submit(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("text={}", text)))
            .unwrap()
    }

    fn index() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let dir = tempfile::tempdir().unwrap();
        let html = body_of(app_for(&write_model(dir.path())), index()).await;
        assert!(html.contains("<form id=\"summarize-form\""));
        assert!(!html.contains("class=\"alert alert-error\""));
    }

    #[tokio::test]
    async fn test_submit_summarizes() {
        let dir = tempfile::tempdir().unwrap();
        let html = body_of(app_for(&write_model(dir.path())), submit("AI+is+great")).await;
        assert!(html.contains("<div class=\"summary-box\" id=\"summary\">AI is</div>"));
        assert!(html.contains("id=\"original-words\">3 words"));
        assert!(html.contains("id=\"summary-words\">2 words"));
        assert!(html.contains(">AI is great</textarea>"));
    }

    #[tokio::test]
    async fn test_blank_submit_warns() {
        let dir = tempfile::tempdir().unwrap();
        let html = body_of(app_for(&write_model(dir.path())), submit("+++")).await;
        assert!(html.contains("Please enter some text before summarizing."));
        assert!(!html.contains("id=\"summary\""));
    }

    #[tokio::test]
    async fn test_missing_model_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(&dir.path().join("missing.pkl"));

        let html = body_of(app.clone(), index()).await;
        assert!(html.contains("Model file not found"));

        let html = body_of(app, submit("AI+is+great")).await;
        assert!(html.contains("The model is not loaded. Please check the model path."));
        assert!(!html.contains("id=\"summary\""));
    }

    #[tokio::test]
    async fn test_unsupported_format_degrades() {
        let html = body_of(app_for(Path::new("model.xyz")), index()).await;
        assert!(html.contains("Unsupported model format: model.xyz"));
    }
}
