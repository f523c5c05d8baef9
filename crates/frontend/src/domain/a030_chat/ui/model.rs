use crate::shared::http::post_json;
use contracts::domain::a030_chat::{ChatRequest, ChatResponse};
use contracts::shared::ApiError;

/// `POST /api/chat` with `{ "question": ... }`
pub async fn ask(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    post_json("/api/chat", request).await
}
