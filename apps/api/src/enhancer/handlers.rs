use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::enhancer::{enhance, PromptRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(flatten)]
    pub prompt: PromptRequest,
    /// Only consulted when no key was configured at startup.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub request_id: Uuid,
    pub enhanced_prompt: String,
}

/// POST /api/v1/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let api_key = state
        .api_key_for(req.api_key.as_deref())
        .ok_or(AppError::Unauthorized)?;

    let missing = req.prompt.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let request_id = Uuid::new_v4();
    let enhanced_prompt = enhance(state.llm.as_ref(), &api_key, &req.prompt)
        .instrument(info_span!("enhance", %request_id))
        .await?;

    Ok(Json(EnhanceResponse {
        request_id,
        enhanced_prompt,
    }))
}
