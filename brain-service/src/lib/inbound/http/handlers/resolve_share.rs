use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::content::models::Content;
use crate::domain::share::errors::ShareError;
use crate::inbound::http::router::AppState;

/// `GET /api/v1/brain/:share_link`
///
/// Public, unauthenticated read of the content exposed by a share hash.
pub async fn resolve_share(
    State(state): State<AppState>,
    Path(share_link): Path<String>,
) -> Result<ApiSuccess<SharedBrainResponseData>, ApiError> {
    match state.share_service.resolve_share(&share_link).await {
        Ok(brain) => Ok(ApiSuccess::new(
            StatusCode::OK,
            SharedBrainResponseData {
                username: brain
                    .username
                    .unwrap_or_else(|| "Anonymous".to_string()),
                content: brain.content.iter().map(SharedContentData::from).collect(),
            },
        )),
        Err(ShareError::LinkNotFound(_)) => Err(ApiError::NotFound(
            "Share link is invalid or sharing is disabled".to_string(),
        )),
        Err(ShareError::OwnerNotFound(_)) => {
            Err(ApiError::NotFound("User not found".to_string()))
        }
        Err(e) => {
            tracing::error!(error = %e, "Share resolution failed");
            Err(ApiError::InternalServerError(
                "Error retrieving shared content".to_string(),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedBrainResponseData {
    pub username: String,
    pub content: Vec<SharedContentData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedContentData {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub link: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl From<&Content> for SharedContentData {
    fn from(content: &Content) -> Self {
        Self {
            id: content.id.to_string(),
            content_type: content.content_type.clone(),
            link: content.link.clone(),
            title: content.title.clone(),
            tags: content.tags.clone(),
        }
    }
}
