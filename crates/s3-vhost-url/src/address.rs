//! Virtual-hosted-style S3 addresses

use crate::error::AddressError;
use crate::query::{QueryParams, to_query_string};
use crate::region::service_label;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

pub(crate) const SCHEME: &str = "https";

/// The last two host labels of every endpoint.
pub(crate) const DOMAIN_LABELS: [&str; 2] = ["amazonaws", "com"];

/// A decoded S3 endpoint address.
///
/// Produced by [`decode`](crate::decode). Formatting it with [`Display`](fmt::Display)
/// encodes it back into a URL.
///
/// # Example
/// ```
/// use s3_vhost_url::S3Address;
///
/// let addr: S3Address = "https://photos.s3-eu-west-1.amazonaws.com/2024/cat.jpg".parse().unwrap();
/// assert_eq!(addr.bucket, "photos");
/// assert_eq!(addr.region, "eu-west-1");
/// assert_eq!(addr.key, "2024/cat.jpg");
/// assert_eq!(addr.params, None);
/// assert_eq!(addr.to_string(), "https://photos.s3-eu-west-1.amazonaws.com/2024/cat.jpg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Address {
    /// bucket name, the first host label
    pub bucket: String,
    /// region, [`DEFAULT_REGION`](crate::region::DEFAULT_REGION) for the bare `s3` label
    pub region: String,
    /// object key, without a leading slash
    pub key: String,
    /// query parameters, `None` if the URL has no query
    pub params: Option<QueryParams>,
}

impl S3Address {
    /// Encodes this address into a URL string.
    #[must_use]
    pub fn to_url_string(&self) -> String {
        encode(
            Some(&self.region),
            Some(&self.bucket),
            Some(&self.key),
            self.params.as_ref(),
        )
    }

    /// Encodes this address into a parsed [`Url`].
    ///
    /// # Errors
    /// Returns [`AddressError::InvalidSyntax`] if the encoded string is not a valid URL.
    pub fn to_url(&self) -> Result<Url, AddressError> {
        Ok(Url::parse(&self.to_url_string())?)
    }
}

impl fmt::Display for S3Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url_string())
    }
}

impl FromStr for S3Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode(s)
    }
}

impl TryFrom<&Url> for S3Address {
    type Error = AddressError;

    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        crate::decode_url(url)
    }
}

/// Builds the virtual-hosted-style URL of an object.
///
/// + A blank or default `region` adds no region suffix, otherwise the host gets `s3-{region}`.
/// + A blank `bucket` adds no bucket label.
/// + One leading `/` is stripped from `key`.
/// + `params` are appended in order, see [`to_query_string`].
///
/// # Examples
/// ```
/// # use s3_vhost_url::encode;
/// assert_eq!(encode(None, None, None, None), "https://s3.amazonaws.com/");
/// assert_eq!(
///     encode(Some("US-EAST-1"), Some("mybucket"), Some("/a/b.txt"), None),
///     "https://mybucket.s3.amazonaws.com/a/b.txt",
/// );
/// assert_eq!(
///     encode(Some("eu-west-1"), Some("mybucket"), Some("a/b.txt"), None),
///     "https://mybucket.s3-eu-west-1.amazonaws.com/a/b.txt",
/// );
/// ```
#[must_use]
pub fn encode(region: Option<&str>, bucket: Option<&str>, key: Option<&str>, params: Option<&QueryParams>) -> String {
    let service = service_label(region);
    let [domain, tld] = DOMAIN_LABELS;
    let key = key.map_or("", |k| k.strip_prefix('/').unwrap_or(k));
    let query = params.map(to_query_string).unwrap_or_default();

    match bucket.filter(|b| !b.trim().is_empty()) {
        Some(bucket) => format!("{SCHEME}://{bucket}.{service}.{domain}.{tld}/{key}{query}"),
        None => format!("{SCHEME}://{service}.{domain}.{tld}/{key}{query}"),
    }
}

/// Like [`encode`], but returns a parsed [`Url`].
///
/// # Errors
/// Returns [`AddressError::InvalidSyntax`] if the composed string is not a valid URL,
/// which only happens when `bucket` or `region` contains characters that cannot appear in a host.
pub fn encode_url(
    region: Option<&str>,
    bucket: Option<&str>,
    key: Option<&str>,
    params: Option<&QueryParams>,
) -> Result<Url, AddressError> {
    let s = encode(region, bucket, key, params);
    Url::parse(&s).map_err(|e| {
        tracing::error!(url = %s, error = %e, "encoded an invalid URL");
        AddressError::InvalidSyntax(e)
    })
}
