//! Normalised offset/limit page requests.

use std::ops::Range;

use crate::limits::PaginationLimits;

/// A page request whose offset and limit are within [`PaginationLimits`].
///
/// Construction always succeeds: out-of-range input is clamped rather than
/// rejected, so malformed query strings cannot break a list endpoint.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let page = PageRequest::normalize(5_000, 250);
/// assert_eq!(page.offset(), pagination::OFFSET_CAP);
/// assert_eq!(page.limit(), pagination::MAX_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    offset: usize,
    limit: usize,
    limits: PaginationLimits,
}

impl PageRequest {
    /// Normalise raw parameters against [`PaginationLimits::standard`].
    #[must_use]
    pub fn normalize(offset: i64, limit: i64) -> Self {
        Self::normalize_with(offset, limit, PaginationLimits::standard())
    }

    /// Normalise raw parameters against custom limits.
    ///
    /// - negative offsets become `0`; offsets above the cap become the cap
    /// - non-positive limits become the default; limits above the maximum
    ///   become the maximum
    #[must_use]
    pub fn normalize_with(offset: i64, limit: i64, limits: PaginationLimits) -> Self {
        let clamped_offset = usize::try_from(offset)
            .unwrap_or(0)
            .min(limits.offset_cap());
        let clamped_limit = match usize::try_from(limit) {
            Ok(0) | Err(_) => limits.default_limit(),
            Ok(requested) => requested.min(limits.max_limit()),
        };
        Self {
            offset: clamped_offset,
            limit: clamped_limit,
            limits,
        }
    }

    /// Number of leading items skipped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Maximum number of items in the page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Index range selected from a collection of `total` items.
    ///
    /// The range is empty when the offset is at or beyond `total`.
    #[must_use]
    pub fn window(&self, total: usize) -> Range<usize> {
        if self.offset >= total {
            return total..total;
        }
        let end = self.offset.saturating_add(self.limit).min(total);
        self.offset..end
    }

    /// Borrow the selected window of `items`.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.window(items.len())).unwrap_or_default()
    }

    /// The request for the page following this one, if any items remain
    /// reachable within the offset cap.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let first = PageRequest::normalize(0, 2);
    /// let second = first.next_page(3).expect("one item remains");
    /// assert_eq!(second.offset(), 2);
    /// assert!(second.next_page(3).is_none());
    /// ```
    #[must_use]
    pub fn next_page(&self, total: usize) -> Option<Self> {
        let next_offset = self.offset.checked_add(self.limit)?;
        if next_offset >= total || next_offset > self.limits.offset_cap() {
            return None;
        }
        Some(Self {
            offset: next_offset,
            limit: self.limit,
            limits: self.limits,
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::normalize(0, 0)
    }
}
