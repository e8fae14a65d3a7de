use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::content::models::CreateContentCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `POST /api/v1/content`
///
/// Stores a link for the authenticated user. The item starts untagged; the
/// owner is the token subject, never taken from the body.
pub async fn create_content(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateContentRequest>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let command = CreateContentCommand::new(body.link, body.title, body.content_type);

    match state
        .content_service
        .create_content(command, auth_user.user_id)
        .await
    {
        Ok(_) => Ok(ApiSuccess::new(
            StatusCode::OK,
            MessageResponseData::new("Content Added"),
        )),
        Err(e) => {
            tracing::error!(error = %e, "Content creation failed");
            Err(ApiError::InternalServerError(
                "Internal server error".to_string(),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateContentRequest {
    link: String,
    title: String,
    #[serde(rename = "type")]
    content_type: String,
}
