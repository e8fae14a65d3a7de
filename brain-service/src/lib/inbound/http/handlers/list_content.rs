use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::content::models::Content;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `GET /api/v1/content`
///
/// Lists the authenticated user's content with the owner reference resolved
/// to its username.
pub async fn list_content(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ListContentResponseData>, ApiError> {
    let content = state
        .content_service
        .list_content(auth_user.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Content listing failed");
            ApiError::InternalServerError("Internal server error".to_string())
        })?;

    // Nothing stored means nothing to resolve; the gate does not guarantee
    // the subject still resolves to a user row.
    if content.is_empty() {
        return Ok(ApiSuccess::new(
            StatusCode::OK,
            ListContentResponseData {
                content: Vec::new(),
            },
        ));
    }

    let owner = state
        .user_service
        .get_user(&auth_user.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Owner lookup failed");
            ApiError::InternalServerError("Internal server error".to_string())
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListContentResponseData {
            content: content
                .iter()
                .map(|item| ContentData::new(item, &owner))
                .collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListContentResponseData {
    pub content: Vec<ContentData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentData {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub link: String,
    pub title: String,
    pub tags: Vec<String>,
    pub user: ContentOwnerData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentOwnerData {
    pub id: String,
    pub username: Option<String>,
}

impl ContentData {
    fn new(content: &Content, owner: &User) -> Self {
        Self {
            id: content.id.to_string(),
            content_type: content.content_type.clone(),
            link: content.link.clone(),
            title: content.title.clone(),
            tags: content.tags.clone(),
            user: ContentOwnerData {
                id: owner.id.to_string(),
                username: owner.username.clone(),
            },
        }
    }
}
