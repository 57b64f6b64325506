use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method},
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::stateless_llm::ChatMessage;
use crate::translate::{PromptPair, TranslateRequest, TranslateResponse};

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

pub async fn translate(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<TranslateResponse>> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    check_access_token(state.config.access_token.as_deref(), &headers)?;

    // Unparseable bodies are treated as empty and fail validation below.
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let request = TranslateRequest::from_body(&body)?;

    info!(
        "Translating {} chars {}>{} (tone: {})",
        request.text.chars().count(),
        request.direction.from,
        request.direction.to,
        request.tone
    );

    let prompts = PromptPair::from_request(&request);
    let content = state
        .llm
        .chat_completion(vec![ChatMessage::user(prompts.user)], Some(prompts.system.as_str()))
        .await?;

    let translation = content.as_deref().map(str::trim).unwrap_or_default();
    if translation.is_empty() {
        return Err(AppError::EmptyResponse);
    }

    debug!("Translation complete ({} chars)", translation.chars().count());
    Ok(Json(TranslateResponse {
        translation: translation.to_string(),
    }))
}

/// Gate on the shared secret when one is configured; open access otherwise.
fn check_access_token(required: Option<&str>, headers: &HeaderMap) -> AppResult<()> {
    let Some(required) = required else {
        return Ok(());
    };

    let provided = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|header| header.to_str().ok());

    match provided {
        Some(token) if !token.is_empty() && token == required => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}
