use axum::{
    extract::{Form, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::page::{render, PageView};
use crate::submission::{process, Outcome};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let model = state.resolve_model().await;
    let model_error = model.as_ref().err().map(|e| e.to_string());

    Html(render(&PageView {
        text: "",
        outcome: &Outcome::Idle,
        model_error: model_error.as_deref(),
    }))
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SummarizeForm>,
) -> Html<String> {
    let model = state.resolve_model().await;
    let outcome = process(&model, &form.text).await;
    let model_error = model.as_ref().err().map(|e| e.to_string());

    Html(render(&PageView {
        text: &form.text,
        outcome: &outcome,
        model_error: model_error.as_deref(),
    }))
}
