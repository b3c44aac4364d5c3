//! Call-budget accounting from the `X-Shopify-Shop-Api-Call-Limit` header.
//!
//! The header is advisory: the client records the last snapshot for callers
//! to inspect, but never waits before sending. Enforcement is purely reactive
//! to 429 responses (see [`Backoff`](crate::clients::Backoff)).

/// Name of the call-limit response header (lower-cased).
pub const CALL_LIMIT_HEADER: &str = "x-shopify-shop-api-call-limit";

/// Bucket size assumed before any call-limit header has been seen.
pub const DEFAULT_CALL_LIMIT: u32 = 40;

/// Rate limit snapshot parsed from a `"<used>/<total>"` header value.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
///
/// assert_eq!(ApiCallLimit::observe("garbage"), (0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Calls made in the current bucket.
    pub request_count: u32,
    /// Size of the bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a header value, returning `None` unless it holds exactly two
    /// numeric tokens separated by `/`.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let mut tokens = header_value.split('/');
        let (Some(used), Some(total), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return None;
        };

        Some(Self {
            request_count: used.parse().ok()?,
            bucket_size: total.parse().ok()?,
        })
    }

    /// Parses a header value into `(used, total)`.
    ///
    /// Malformed or empty values yield `(0, 0)`, which means "unknown" rather
    /// than "no budget left".
    #[must_use]
    pub fn observe(header_value: &str) -> (u32, u32) {
        Self::parse(header_value).map_or((0, 0), |limit| {
            (limit.request_count, limit.bucket_size)
        })
    }

    /// Snapshot for a header that was absent or malformed.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            request_count: 0,
            bucket_size: 0,
        }
    }

    /// Returns `true` when this snapshot came from an unusable header.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.bucket_size == 0
    }

    /// Calls left in the bucket, saturating at zero.
    #[must_use]
    pub const fn calls_remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

impl Default for ApiCallLimit {
    fn default() -> Self {
        Self {
            request_count: 0,
            bucket_size: DEFAULT_CALL_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_valid_header() {
        assert_eq!(ApiCallLimit::observe("40/80"), (40, 80));
        assert_eq!(ApiCallLimit::observe("1/40"), (1, 40));
    }

    #[test]
    fn test_observe_malformed_headers_yield_zero() {
        assert_eq!(ApiCallLimit::observe(""), (0, 0));
        assert_eq!(ApiCallLimit::observe("garbage"), (0, 0));
        assert_eq!(ApiCallLimit::observe("1/2/3"), (0, 0));
        assert_eq!(ApiCallLimit::observe("40/"), (0, 0));
        assert_eq!(ApiCallLimit::observe("/80"), (0, 0));
        assert_eq!(ApiCallLimit::observe("abc/def"), (0, 0));
        assert_eq!(ApiCallLimit::observe("-1/40"), (0, 0));
    }

    #[test]
    fn test_parse_rejects_extra_segments() {
        assert!(ApiCallLimit::parse("1/2/3").is_none());
        assert!(ApiCallLimit::parse("40").is_none());
    }

    #[test]
    fn test_default_budget_is_forty() {
        let limit = ApiCallLimit::default();
        assert_eq!(limit.bucket_size, DEFAULT_CALL_LIMIT);
        assert_eq!(limit.calls_remaining(), 40);
        assert!(!limit.is_unknown());
    }

    #[test]
    fn test_calls_remaining_saturates() {
        let limit = ApiCallLimit {
            request_count: 45,
            bucket_size: 40,
        };
        assert_eq!(limit.calls_remaining(), 0);
        assert!(ApiCallLimit::unknown().is_unknown());
    }
}
