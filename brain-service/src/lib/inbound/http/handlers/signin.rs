use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::errors::UserError;
use crate::inbound::http::router::AppState;

/// `POST /api/v1/signin`
///
/// An unknown email is a 403; a wrong password is answered with HTTP 200
/// and an in-body message (kept for wire compatibility). The email is
/// matched verbatim, without signup-style validation.
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SigninRequest>,
) -> Result<ApiSuccess<SigninResponseData>, ApiError> {
    // Absent fields behave like unmatchable values: no user has an empty
    // email, and an empty password never verifies.
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let user = match state.user_service.get_user_by_email(&email).await {
        Ok(user) => user,
        Err(UserError::NotFound(_)) => {
            return Err(ApiError::Forbidden("User does not exist".to_string()));
        }
        Err(e) => {
            tracing::error!(error = %e, "Signin lookup failed");
            return Err(ApiError::InternalServerError(
                "Internal server error".to_string(),
            ));
        }
    };

    let claims = auth::Claims::for_subject(user.id);

    match state
        .authenticator
        .authenticate(&password, &user.password_hash, &claims)
    {
        Ok(result) => Ok(ApiSuccess::new(
            StatusCode::OK,
            SigninResponseData::Token {
                token: result.access_token,
            },
        )),
        Err(auth::AuthenticationError::InvalidCredentials) => Ok(ApiSuccess::new(
            StatusCode::OK,
            SigninResponseData::IncorrectPassword {
                message: "Password is Incorrect".to_string(),
            },
        )),
        Err(auth::AuthenticationError::JwtError(e)) => {
            tracing::error!(error = %e, "Token generation failed");
            Err(ApiError::InternalServerError(
                "Internal server error".to_string(),
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SigninResponseData {
    Token { token: String },
    IncorrectPassword { message: String },
}
