//! Pagination parameters.

use serde::{Deserialize, Serialize};

/// Entries skipped when the caller gives no usable `skip`.
pub const DEFAULT_SKIP: usize = 0;

/// Page size when the caller gives no usable `limit`.
pub const DEFAULT_LIMIT: usize = 100;

/// Which slice of a container's entries to return.
///
/// `skip` entries are discarded first, then up to `limit` are collected.
/// A `limit` of zero means "no limit".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub skip: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(skip: usize, limit: usize) -> Self {
        PageRequest { skip, limit }
    }

    /// Every entry: no skip, no limit.
    pub fn all() -> Self {
        PageRequest { skip: 0, limit: 0 }
    }

    /// Decode textual query parameters.
    ///
    /// Each parameter falls back to its default on its own when it is missing
    /// or is not a plain non-negative decimal integer. Surrounding whitespace
    /// is not accepted.
    ///
    /// ```rust
    /// use nestview_core::PageRequest;
    ///
    /// assert_eq!(PageRequest::from_query(Some("20"), None), PageRequest::new(20, 100));
    /// assert_eq!(PageRequest::from_query(Some("-1"), Some("ten")), PageRequest::new(0, 100));
    /// assert_eq!(PageRequest::from_query(None, Some("0")), PageRequest::all());
    /// ```
    pub fn from_query(skip: Option<&str>, limit: Option<&str>) -> Self {
        PageRequest {
            skip: parse_or(skip, DEFAULT_SKIP),
            limit: parse_or(limit, DEFAULT_LIMIT),
        }
    }

    /// Check if this request has no limit.
    pub fn is_unbounded(&self) -> bool {
        self.limit == 0
    }

    /// The limit as an upper bound on collected entries, `None` when unbounded.
    pub fn max_entries(&self) -> Option<usize> {
        (!self.is_unbounded()).then_some(self.limit)
    }

    /// The request for the page after this one.
    ///
    /// An unbounded request has no next page; it is returned unchanged.
    #[must_use]
    pub fn next_page(&self) -> Self {
        PageRequest {
            skip: self.skip.saturating_add(self.limit),
            limit: self.limit,
        }
    }

    /// The request for the page before this one, clamped at the start.
    #[must_use]
    pub fn prev_page(&self) -> Self {
        PageRequest {
            skip: self.skip.saturating_sub(self.limit),
            limit: self.limit,
        }
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_hundred() {
        assert_eq!(PageRequest::default(), PageRequest::new(0, 100));
    }

    #[test]
    fn from_query_defaults_independently() {
        assert_eq!(PageRequest::from_query(None, None), PageRequest::default());
        assert_eq!(PageRequest::from_query(Some("5"), Some("x")), PageRequest::new(5, 100));
        assert_eq!(PageRequest::from_query(Some(""), Some("7")), PageRequest::new(0, 7));
        assert_eq!(PageRequest::from_query(Some(" 3 "), Some("2")), PageRequest::new(0, 2));
        assert_eq!(PageRequest::from_query(Some("3"), Some("2 ")), PageRequest::new(3, 100));
    }

    #[test]
    fn negative_values_fall_back() {
        assert_eq!(PageRequest::from_query(Some("-4"), Some("-1")), PageRequest::default());
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let req = PageRequest::from_query(Some("2"), Some("0"));
        assert!(req.is_unbounded());
        assert_eq!(req.max_entries(), None);
        assert_eq!(PageRequest::new(0, 3).max_entries(), Some(3));
    }

    #[test]
    fn paging_forward_and_back() {
        let req = PageRequest::new(0, 10);
        let next = req.next_page();
        assert_eq!(next, PageRequest::new(10, 10));
        assert_eq!(next.next_page().prev_page(), next);
        assert_eq!(PageRequest::new(4, 10).prev_page(), PageRequest::new(0, 10));
        assert_eq!(PageRequest::all().next_page(), PageRequest::all());
    }
}
