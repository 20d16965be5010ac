//! Query parameters
//!
//! Keys are unique and kept in insertion order, so the same map always
//! serializes to the same query string.

use crate::error::AddressError;

use std::borrow::Cow;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

/// Ordered query parameters. A `None` value is a key without `=`.
pub type QueryParams = IndexMap<String, Option<String>>;

/// Serializes `params` into a query string, including the leading `?`.
///
/// Keys and values are percent-encoded with the RFC 3986 data-escaping rules:
/// only ASCII letters, digits and `-_.~` are left as is.
/// Returns an empty string when there are no parameters.
///
/// # Examples
/// ```
/// # use s3_vhost_url::query::{QueryParams, to_query_string};
/// let mut params = QueryParams::new();
/// params.insert("prefix".into(), Some("a b&c".into()));
/// params.insert("versions".into(), None);
/// assert_eq!(to_query_string(&params), "?prefix=a%20b%26c&versions");
/// ```
#[must_use]
pub fn to_query_string(params: &QueryParams) -> String {
    let mut buf = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        buf.push(if i == 0 { '?' } else { '&' });
        buf.push_str(&urlencoding::encode(key));
        if let Some(value) = value {
            buf.push('=');
            buf.push_str(&urlencoding::encode(value));
        }
    }
    buf
}

/// Parses a raw query component into [`QueryParams`].
///
/// A leading `?` is ignored. Each `&`-separated pair is split on its first `=`;
/// a pair without `=` yields a `None` value.
///
/// # Errors
/// + [`AddressError::InvalidEncoding`] if a key or value does not decode to UTF-8
/// + [`AddressError::DuplicateQueryKey`] if a key occurs twice
/// + [`AddressError::TooManyQueryParams`] if there are more than `max_params` pairs
pub fn parse_query(query: &str, max_params: usize) -> Result<QueryParams, AddressError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params = QueryParams::new();
    for pair in query.split('&') {
        if params.len() >= max_params {
            debug!(max_params, "too many query parameters");
            return Err(AddressError::TooManyQueryParams { limit: max_params });
        }

        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        };
        let key = percent_decode(key)?;
        let value = value.map(percent_decode).transpose()?;

        match params.entry(key.into_owned()) {
            Entry::Occupied(e) => {
                debug!(key = %e.key(), "duplicate query key");
                return Err(AddressError::DuplicateQueryKey(e.key().as_str().into()));
            }
            Entry::Vacant(e) => {
                e.insert(value.map(Cow::into_owned));
            }
        }
    }
    Ok(params)
}

pub(crate) fn percent_decode(s: &str) -> Result<Cow<'_, str>, AddressError> {
    urlencoding::decode(s).map_err(|_| AddressError::InvalidEncoding(s.into()))
}
