use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `POST /api/v1/brain/share`
///
/// The `share` parameter must be truthy in the JavaScript sense
/// (`false`, `0`, `""`, `null`, and absent all fail); its value is
/// otherwise unused.
pub async fn create_share(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateShareRequest>,
) -> Result<ApiSuccess<CreateShareResponseData>, ApiError> {
    if !body.share.as_ref().is_some_and(is_truthy) {
        return Err(ApiError::BadRequest(
            "Share parameter is required".to_string(),
        ));
    }

    match state.share_service.create_share_link(auth_user.user_id).await {
        Ok(link) => Ok(ApiSuccess::new(
            StatusCode::OK,
            CreateShareResponseData { link: link.hash },
        )),
        Err(e) => {
            tracing::error!(error = %e, "Share link creation failed");
            Err(ApiError::InternalServerError(
                "Error creating share link".to_string(),
            ))
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateShareRequest {
    #[serde(default)]
    share: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateShareResponseData {
    pub link: String,
}
