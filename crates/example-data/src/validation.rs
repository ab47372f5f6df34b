//! Validation rules mirroring the backend's user and tweet constraints.

/// Maximum number of characters in a user name after trimming.
pub const NAME_MAX: usize = 100;

/// Number of digits in a generated identity document.
pub const DOCUMENT_LENGTH: usize = 8;

/// Maximum number of characters in tweet content after trimming.
pub const TWEET_CONTENT_MAX: usize = 280;

/// Returns `true` when `name` is non-empty and within [`NAME_MAX`] once
/// trimmed.
///
/// # Examples
/// ```
/// use example_data::is_valid_name;
///
/// assert!(is_valid_name("Ada Lovelace"));
/// assert!(!is_valid_name("   "));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= NAME_MAX
}

/// Returns `true` when `document` is exactly [`DOCUMENT_LENGTH`] ASCII digits.
#[must_use]
pub fn is_valid_document(document: &str) -> bool {
    document.len() == DOCUMENT_LENGTH && document.bytes().all(|byte| byte.is_ascii_digit())
}

/// Returns `true` when `content` is non-empty and within
/// [`TWEET_CONTENT_MAX`] once trimmed.
#[must_use]
pub fn is_valid_tweet_content(content: &str) -> bool {
    let trimmed = content.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= TWEET_CONTENT_MAX
}
