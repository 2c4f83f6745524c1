//! `limit`/`page` handling shared by the paged list endpoints.
//!
//! Printify pages products, orders and uploads with `limit` and `page` query parameters. The API
//! serves at most [`MAX_LIMIT`] records per page and defaults to [`DEFAULT_LIMIT`]; a `limit`
//! equal to the default is left off the query string.

use crate::Result;
use crate::error::Error;

/// Largest page size accepted by the API.
pub const MAX_LIMIT: u32 = 100;

/// Page size the API uses when `limit` is omitted.
pub const DEFAULT_LIMIT: u32 = 10;

/// Rejects a `limit` above [`MAX_LIMIT`] before any request is sent.
pub(crate) fn validate_limit(limit: Option<u32>) -> Result<()> {
    match limit {
        Some(limit) if limit > MAX_LIMIT => Err(Error::validation(format!(
            "limit cannot be more than {MAX_LIMIT}, got {limit}"
        ))),
        _ => Ok(()),
    }
}

/// `skip_serializing_if` predicate: omit `limit` when unset or equal to the API default.
#[expect(
    clippy::ref_option,
    reason = "serde's skip_serializing_if passes a reference to the field"
)]
pub(crate) fn is_default_limit(limit: &Option<u32>) -> bool {
    limit.is_none_or(|limit| limit == DEFAULT_LIMIT)
}
