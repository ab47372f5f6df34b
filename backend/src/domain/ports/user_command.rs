//! Driving port for registering users.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId};

/// Registration payload as received from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name; trimmed before validation.
    pub name: String,
    /// Identity document, 7 or 8 ASCII digits.
    pub document: String,
}

/// Registration entry point.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a user and return the derived identifier.
    ///
    /// # Errors
    ///
    /// - `invalid_param` for malformed names or documents.
    /// - `conflict` when the document is already registered.
    async fn create_user(&self, request: CreateUserRequest) -> Result<UserId, Error>;
}
