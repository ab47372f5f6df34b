//! User data model.
//!
//! A user is identified by `usr_<document>`, so the identity document doubles
//! as the uniqueness key when registering.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix applied to the document number to form a [`UserId`].
pub const USER_ID_PREFIX: &str = "usr_";
/// Maximum number of characters in a user name after trimming.
pub const USER_NAME_MAX: usize = 100;
/// Accepted document lengths, in ASCII digits.
pub const DOCUMENT_LENGTHS: [usize; 2] = [7, 8];

/// Validation errors returned by the user value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// Identifier carried leading or trailing whitespace.
    #[error("user id must not contain surrounding whitespace")]
    InvalidId,
    /// Name was empty once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// Name exceeded [`USER_NAME_MAX`] characters.
    #[error("name must be at most {max} characters")]
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// Document was not 7 or 8 ASCII digits.
    #[error("document must be 7 or 8 digits")]
    InvalidDocument,
}

/// Stable user identifier.
///
/// # Examples
/// ```
/// use chirp::domain::{Document, UserId};
///
/// let document = Document::new("12345678").expect("valid document");
/// assert_eq!(UserId::from_document(&document).as_ref(), "usr_12345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Derive the identifier for the owner of `document`.
    pub fn from_document(document: &Document) -> Self {
        Self(format!("{USER_ID_PREFIX}{document}"))
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Human readable user name, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if trimmed.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// National identity document number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Document(String);

impl Document {
    /// Validate and construct a [`Document`].
    pub fn new(document: impl Into<String>) -> Result<Self, UserValidationError> {
        let document = document.into();
        let digits_only = document.bytes().all(|byte| byte.is_ascii_digit());
        if !digits_only || !DOCUMENT_LENGTHS.contains(&document.len()) {
            return Err(UserValidationError::InvalidDocument);
        }
        Ok(Self(document))
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Document> for String {
    fn from(value: Document) -> Self {
        value.0
    }
}

impl TryFrom<String> for Document {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered user.
///
/// ## Invariants
/// - `id` is always `usr_` followed by `document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: UserName,
    document: Document,
}

impl User {
    /// Register a user, deriving the identifier from the document.
    pub fn register(name: UserName, document: Document) -> Self {
        Self {
            id: UserId::from_document(&document),
            name,
            document,
        }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        name: impl AsRef<str>,
        document: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::register(UserName::new(name)?, Document::new(document)?))
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name shown to other users.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Identity document number.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserDto {
    id: String,
    name: String,
    document: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, document } = value;
        Self {
            id: id.into(),
            name: name.into(),
            document: document.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let user = User::try_from_strings(value.name, value.document)?;
        if user.id().as_ref() != value.id {
            return Err(UserValidationError::InvalidId);
        }
        Ok(user)
    }
}
