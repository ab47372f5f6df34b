//! Link builders describing neighbouring pages of a list endpoint.

use url::Url;

use crate::request::PageRequest;

const OFFSET_PARAM: &str = "offset";
const LIMIT_PARAM: &str = "limit";

/// Rewrite `base` so its `offset` and `limit` query parameters describe
/// `page`. Unrelated query parameters are preserved in their original order.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, page_url};
/// use url::Url;
///
/// let base = Url::parse("http://localhost/timeline?offset=0&limit=2&lang=en").expect("url");
/// let next = page_url(&base, PageRequest::normalize(2, 2));
/// assert_eq!(next.as_str(), "http://localhost/timeline?lang=en&offset=2&limit=2");
/// ```
#[must_use]
pub fn page_url(base: &Url, page: PageRequest) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != OFFSET_PARAM && key != LIMIT_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(OFFSET_PARAM, &page.offset().to_string())
        .append_pair(LIMIT_PARAM, &page.limit().to_string());
    url
}

/// Self and next links for a served page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    current: Url,
    next: Option<Url>,
}

impl PageLinks {
    /// Build links for `page` out of `total` items reachable from `base`.
    #[must_use]
    pub fn new(base: &Url, page: PageRequest, total: usize) -> Self {
        Self {
            current: page_url(base, page),
            next: page.next_page(total).map(|next| page_url(base, next)),
        }
    }

    /// Link to the page that was served.
    #[must_use]
    pub const fn current(&self) -> &Url {
        &self.current
    }

    /// Link to the following page, when one exists.
    #[must_use]
    pub const fn next(&self) -> Option<&Url> {
        self.next.as_ref()
    }

    /// Render the links as an RFC 8288 `Link` header value.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageLinks, PageRequest};
    /// use url::Url;
    ///
    /// let base = Url::parse("http://localhost/timeline").expect("url");
    /// let links = PageLinks::new(&base, PageRequest::normalize(0, 1), 2);
    /// assert_eq!(
    ///     links.to_header_value(),
    ///     "<http://localhost/timeline?offset=0&limit=1>; rel=\"self\", \
    ///      <http://localhost/timeline?offset=1&limit=1>; rel=\"next\""
    /// );
    /// ```
    #[must_use]
    pub fn to_header_value(&self) -> String {
        let current = format!("<{}>; rel=\"self\"", self.current);
        match &self.next {
            Some(next) => format!("{current}, <{next}>; rel=\"next\""),
            None => current,
        }
    }
}
