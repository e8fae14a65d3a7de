use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token claims carried by every issued bearer token.
///
/// The subject id is the sole identity claim; `iat` records issue time.
/// There is deliberately no `exp` claim: tokens do not expire and are never
/// revoked, they only stop verifying when the signing secret changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject, stamping the issue time.
    ///
    /// # Arguments
    /// * `subject_id` - Unique identifier of the authenticated entity
    ///
    /// # Returns
    /// Claims with `sub` and `iat` set
    pub fn for_subject(subject_id: impl ToString) -> Self {
        Self {
            sub: subject_id.to_string(),
            iat: Utc::now().timestamp(),
        }
    }
}
