//! Offset pagination primitives shared by chirp list endpoints.
//!
//! Callers hand over raw, possibly hostile `offset`/`limit` values and get
//! back a [`PageRequest`] that is always within the configured
//! [`PaginationLimits`]. The request can then select a window from an
//! ordered collection and describe the following page as a link.
//!
//! # Example
//!
//! ```
//! use pagination::PageRequest;
//!
//! let page = PageRequest::normalize(-5, 0);
//! assert_eq!(page.offset(), 0);
//! assert_eq!(page.limit(), pagination::DEFAULT_LIMIT);
//!
//! let items = [1, 2, 3];
//! assert_eq!(PageRequest::normalize(1, 1).slice(&items), &[2]);
//! ```

mod limits;
mod links;
mod request;

pub use limits::{DEFAULT_LIMIT, MAX_LIMIT, OFFSET_CAP, PaginationLimits, PaginationLimitsError};
pub use links::{PageLinks, page_url};
pub use request::PageRequest;
