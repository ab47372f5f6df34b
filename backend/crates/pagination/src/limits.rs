//! Bounds applied when normalising caller-supplied pagination parameters.

use thiserror::Error;

/// Page size used when the caller asks for zero or a negative number of items.
pub const DEFAULT_LIMIT: usize = 10;

/// Largest page size a caller may request.
pub const MAX_LIMIT: usize = 100;

/// Largest offset a caller may request.
pub const OFFSET_CAP: usize = 1000;

/// Validation errors returned by [`PaginationLimits::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationLimitsError {
    /// The default page size must be at least one.
    #[error("default limit must be greater than zero")]
    ZeroDefaultLimit,
    /// The maximum page size must be at least one.
    #[error("maximum limit must be greater than zero")]
    ZeroMaxLimit,
    /// The default page size cannot exceed the maximum page size.
    #[error("default limit {default_limit} exceeds maximum limit {max_limit}")]
    DefaultExceedsMax {
        /// Configured default page size.
        default_limit: usize,
        /// Configured maximum page size.
        max_limit: usize,
    },
}

/// Bounds used by [`crate::PageRequest::normalize_with`].
///
/// ## Invariants
/// - `default_limit` and `max_limit` are non-zero.
/// - `default_limit <= max_limit`.
///
/// # Examples
/// ```
/// use pagination::{PaginationLimits, PaginationLimitsError};
///
/// let limits = PaginationLimits::new(20, 50, 500).expect("valid limits");
/// assert_eq!(limits.max_limit(), 50);
///
/// let err = PaginationLimits::new(60, 50, 500).expect_err("default too large");
/// assert!(matches!(err, PaginationLimitsError::DefaultExceedsMax { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationLimits {
    default_limit: usize,
    max_limit: usize,
    offset_cap: usize,
}

impl PaginationLimits {
    /// The limits used across the public API.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            offset_cap: OFFSET_CAP,
        }
    }

    /// Validate and construct custom limits.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationLimitsError`] when either page size is zero or the
    /// default exceeds the maximum.
    pub const fn new(
        default_limit: usize,
        max_limit: usize,
        offset_cap: usize,
    ) -> Result<Self, PaginationLimitsError> {
        if default_limit == 0 {
            return Err(PaginationLimitsError::ZeroDefaultLimit);
        }
        if max_limit == 0 {
            return Err(PaginationLimitsError::ZeroMaxLimit);
        }
        if default_limit > max_limit {
            return Err(PaginationLimitsError::DefaultExceedsMax {
                default_limit,
                max_limit,
            });
        }
        Ok(Self {
            default_limit,
            max_limit,
            offset_cap,
        })
    }

    /// Page size applied when the requested limit is not positive.
    #[must_use]
    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Upper bound for the page size.
    #[must_use]
    pub const fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Upper bound for the offset.
    #[must_use]
    pub const fn offset_cap(&self) -> usize {
        self.offset_cap
    }
}

impl Default for PaginationLimits {
    fn default() -> Self {
        Self::standard()
    }
}
