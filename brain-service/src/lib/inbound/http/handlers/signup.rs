use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordPolicyError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::SignupCommand;
use crate::inbound::http::router::AppState;

/// `POST /api/v1/signup`
///
/// A schema-invalid payload is answered with HTTP 200 and an in-body
/// failure message; only the duplicate-email conflict uses an error status.
/// Both quirks are kept for wire compatibility with existing clients. Every
/// branch returns exactly one response value.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let command = match body.try_into_command() {
        Ok(command) => command,
        Err(e) => {
            return Ok(ApiSuccess::new(
                StatusCode::OK,
                SignupResponseData::invalid_format(e.to_string()),
            ));
        }
    };

    match state.user_service.create_user(command).await {
        Ok(_) => Ok(ApiSuccess::new(StatusCode::OK, SignupResponseData::signed_up())),
        Err(UserError::EmailAlreadyExists(_)) => {
            Err(ApiError::Forbidden("User already exists".to_string()))
        }
        Err(e) => {
            tracing::error!(error = %e, "Signup failed");
            Err(ApiError::InternalServerError(
                "Internal server error".to_string(),
            ))
        }
    }
}

/// HTTP request body for signing up (raw JSON)
///
/// Fields are optional at the deserialization layer so that an absent field
/// is a schema failure reported in-body, not a transport-level rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupCommand, ParseSignupRequestError> {
        let email = self
            .email
            .ok_or(ParseSignupRequestError::MissingField("email"))?;
        let password = self
            .password
            .ok_or(ParseSignupRequestError::MissingField("password"))?;

        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;
        Ok(SignupCommand::new(email, password, self.username))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignupResponseData {
    SignedUp { message: String },
    InvalidFormat { message: String, error: String },
}

impl SignupResponseData {
    fn signed_up() -> Self {
        Self::SignedUp {
            message: "Signed up!".to_string(),
        }
    }

    fn invalid_format(error: String) -> Self {
        Self::InvalidFormat {
            message: "Invalid Format".to_string(),
            error,
        }
    }
}
