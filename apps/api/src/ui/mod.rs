//! The interactive form: GET renders it, POST validates, enhances and re-renders.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::enhancer::{enhance, render_outcome, PromptRequest};
use crate::errors::AppError;
use crate::state::AppState;

pub mod page;

use page::{Notice, Page};

pub const MISSING_KEY_WARNING: &str = "Please enter your OpenAI API key in the sidebar.";
pub const MISSING_FIELDS_WARNING: &str = "Please fill in all fields before generating.";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub role: String,
    pub context: String,
    pub task: String,
    pub api_key: Option<String>,
}

impl FormSubmission {
    fn prompt(&self) -> PromptRequest {
        PromptRequest::new(&self.role, &self.context, &self.task)
    }
}

/// GET /
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let fields = PromptRequest::default();
    let html = Page {
        key_configured: state.configured_api_key.is_some(),
        fields: &fields,
        notice: None,
    }
    .render()?;
    Ok(Html(html))
}

/// POST /
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<FormSubmission>,
) -> Result<Html<String>, AppError> {
    let fields = form.prompt();
    let notice = run_submission(&state, form.api_key.as_deref(), &fields).await;

    let html = Page {
        key_configured: state.configured_api_key.is_some(),
        fields: &fields,
        notice: Some(notice),
    }
    .render()?;
    Ok(Html(html))
}

/// Checks run in the same order as the form presents them: key first, then fields.
async fn run_submission(
    state: &AppState,
    submitted_key: Option<&str>,
    fields: &PromptRequest,
) -> Notice {
    let Some(api_key) = state.api_key_for(submitted_key) else {
        warn!("Submission rejected: no API key");
        return Notice::Warning(MISSING_KEY_WARNING.to_string());
    };

    if !fields.missing_fields().is_empty() {
        return Notice::Warning(MISSING_FIELDS_WARNING.to_string());
    }

    let request_id = Uuid::new_v4();
    let outcome = enhance(state.llm.as_ref(), &api_key, fields)
        .instrument(info_span!("enhance", %request_id))
        .await;

    let text = render_outcome(&outcome);
    if outcome.is_ok() {
        Notice::Enhanced(text)
    } else {
        Notice::Error(text)
    }
}
