use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::content::models::ContentId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `DELETE /api/v1/content`
///
/// Deletes at most one item matching both the given id and the
/// authenticated owner. No match is a no-op, not an error; a malformed id
/// cannot match anything and falls into the same path.
pub async fn delete_content(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<DeleteContentRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    if let Ok(content_id) = ContentId::from_string(&body.content_id) {
        state
            .content_service
            .delete_content(content_id, auth_user.user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Content deletion failed");
                ApiError::InternalServerError("Internal server error".to_string())
            })?;
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Deleted"),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteContentRequest {
    #[serde(rename = "contentId")]
    content_id: String,
}
