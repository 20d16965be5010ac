//! URL decoding
//!
//! Only the legacy virtual-hosted-style hosts are accepted:
//! `[BUCKET].s3.amazonaws.com` and `[BUCKET].s3-[REGION].amazonaws.com`.
//! Dotted regional hosts and path-style URLs are rejected, never guessed.

use crate::address::{DOMAIN_LABELS, S3Address};
use crate::config::CodecConfig;
use crate::error::AddressError;
use crate::query::{parse_query, percent_decode};
use crate::region::parse_service_label;

use tracing::debug;
use url::Url;

/// Decodes a URL string with the default [`CodecConfig`].
///
/// # Errors
/// See [`decode_with_config`].
///
/// # Examples
/// ```
/// # use s3_vhost_url::{decode, AddressErrorKind};
/// let addr = decode("https://mybucket.s3.amazonaws.com/a/b.txt?versionId=3").unwrap();
/// assert_eq!(addr.bucket, "mybucket");
/// assert_eq!(addr.region, "us-east-1");
/// assert_eq!(addr.key, "a/b.txt");
///
/// let err = decode("ftp://b.s3.amazonaws.com/k").unwrap_err();
/// assert_eq!(err.kind(), AddressErrorKind::UnsupportedScheme);
/// ```
pub fn decode(input: &str) -> Result<S3Address, AddressError> {
    decode_with_config(input, &CodecConfig::default())
}

/// Decodes a parsed URL with the default [`CodecConfig`].
///
/// # Errors
/// See [`decode_url_with_config`].
pub fn decode_url(url: &Url) -> Result<S3Address, AddressError> {
    decode_url_with_config(url, &CodecConfig::default())
}

/// Parses `input` as a URL and decodes it.
///
/// # Errors
/// + [`AddressError::UrlTooLong`] if `input` is longer than [`CodecConfig::max_url_len`]
/// + [`AddressError::InvalidSyntax`] if `input` is not a valid URL
/// + any error of [`decode_url_with_config`]
#[tracing::instrument(level = "debug", skip(config), err)]
pub fn decode_with_config(input: &str, config: &CodecConfig) -> Result<S3Address, AddressError> {
    if input.len() > config.max_url_len {
        return Err(AddressError::UrlTooLong {
            len: input.len(),
            limit: config.max_url_len,
        });
    }

    let url = Url::parse(input)?;
    decode_url_with_config(&url, config)
}

/// Recovers bucket, region, key and query parameters from `url`.
///
/// # Errors
/// + [`AddressError::UnsupportedScheme`] if the scheme is not http or https
/// + [`AddressError::InvalidEncoding`] if the path or query has escapes that are not UTF-8
/// + [`AddressError::DuplicateQueryKey`] if a query key repeats
/// + [`AddressError::TooManyQueryParams`] if the query exceeds [`CodecConfig::max_query_params`]
/// + [`AddressError::MalformedHost`] if the host does not have exactly four labels
/// + [`AddressError::UnsupportedDomain`] if the host does not end with `amazonaws.com`
/// + [`AddressError::MalformedServiceLabel`] if the second label is neither `s3` nor `s3-[REGION]`
#[tracing::instrument(level = "debug", skip_all, fields(url = %url), err)]
pub fn decode_url_with_config(url: &Url, config: &CodecConfig) -> Result<S3Address, AddressError> {
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(AddressError::UnsupportedScheme(scheme.into()));
    }

    let path = url.path();
    let key = percent_decode(path.strip_prefix('/').unwrap_or(path))?.into_owned();

    let params = match url.query() {
        Some(query) if !query.trim().is_empty() => Some(parse_query(query, config.max_query_params)?),
        _ => None,
    };

    let host = url.host_str().unwrap_or_default();
    let labels: Vec<&str> = host.split('.').collect();
    let &[bucket, service, domain, tld] = labels.as_slice() else {
        debug!(host, count = labels.len(), "unexpected number of host labels");
        return Err(AddressError::MalformedHost(host.into()));
    };

    if [domain, tld] != DOMAIN_LABELS {
        return Err(AddressError::UnsupportedDomain(host.into()));
    }

    let Some(region) = parse_service_label(service) else {
        return Err(AddressError::MalformedServiceLabel(service.into()));
    };

    debug!(bucket, region, key = %key, "decoded address");

    Ok(S3Address {
        bucket: bucket.to_owned(),
        region: region.to_owned(),
        key,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressErrorKind;
    use crate::region::DEFAULT_REGION;

    fn kind(input: &str) -> AddressErrorKind {
        decode(input).unwrap_err().kind()
    }

    #[test]
    fn default_region_host() {
        let addr = decode("https://mybucket.s3.amazonaws.com/a/b.txt").unwrap();
        assert_eq!(addr.bucket, "mybucket");
        assert_eq!(addr.region, DEFAULT_REGION);
        assert_eq!(addr.key, "a/b.txt");
        assert_eq!(addr.params, None);
    }

    #[test]
    fn regional_host() {
        let addr = decode("http://logs.s3-eu-west-1.amazonaws.com/2024/01/app.log").unwrap();
        assert_eq!(addr.bucket, "logs");
        assert_eq!(addr.region, "eu-west-1");
        assert_eq!(addr.key, "2024/01/app.log");
    }

    #[test]
    fn root_path() {
        let addr = decode("https://b.s3.amazonaws.com").unwrap();
        assert_eq!(addr.key, "");
        let addr = decode("https://b.s3.amazonaws.com/").unwrap();
        assert_eq!(addr.key, "");
        let addr = decode("https://b.s3.amazonaws.com/dir/").unwrap();
        assert_eq!(addr.key, "dir/");
    }

    #[test]
    fn percent_decodes_key() {
        let addr = decode("https://b.s3.amazonaws.com/my%20file.txt").unwrap();
        assert_eq!(addr.key, "my file.txt");
        let addr = decode("https://b.s3.amazonaws.com/a b").unwrap();
        assert_eq!(addr.key, "a b");
    }

    #[test]
    fn query_params() {
        let addr = decode("https://b.s3.amazonaws.com/k?z=1&a&m=%26%3D").unwrap();
        let params = addr.params.unwrap();
        let pairs: Vec<_> = params.iter().map(|(k, v)| (k.as_str(), v.as_deref())).collect();
        assert_eq!(pairs, [("z", Some("1")), ("a", None), ("m", Some("&="))]);
    }

    #[test]
    fn blank_query_is_none() {
        let addr = decode("https://b.s3.amazonaws.com/k?").unwrap();
        assert_eq!(addr.params, None);
    }

    #[test]
    fn rejects_syntax() {
        assert_eq!(kind("not a url"), AddressErrorKind::InvalidSyntax);
        assert_eq!(kind("/relative/path"), AddressErrorKind::InvalidSyntax);
        assert_eq!(kind(""), AddressErrorKind::InvalidSyntax);
    }

    #[test]
    fn rejects_scheme() {
        assert_eq!(kind("ftp://b.s3.amazonaws.com/k"), AddressErrorKind::UnsupportedScheme);
        assert_eq!(kind("s3://b/k"), AddressErrorKind::UnsupportedScheme);
    }

    #[test]
    fn rejects_label_count() {
        assert_eq!(kind("https://onlythreeparts.amazonaws.com/x"), AddressErrorKind::MalformedHost);
        assert_eq!(kind("https://s3.amazonaws.com/b/k"), AddressErrorKind::MalformedHost);
        assert_eq!(kind("https://b.s3.eu-west-1.amazonaws.com/k"), AddressErrorKind::MalformedHost);
        assert_eq!(kind("https://localhost/k"), AddressErrorKind::MalformedHost);
    }

    #[test]
    fn rejects_domain() {
        assert_eq!(kind("https://b.s3.example.com/k"), AddressErrorKind::UnsupportedDomain);
        assert_eq!(kind("https://b.s3.amazonaws.org/k"), AddressErrorKind::UnsupportedDomain);
        assert_eq!(kind("https://10.0.0.1/k"), AddressErrorKind::UnsupportedDomain);
    }

    #[test]
    fn rejects_service_label() {
        assert_eq!(kind("https://b.ec2.amazonaws.com/k"), AddressErrorKind::MalformedServiceLabel);
        assert_eq!(kind("https://b.s3x.amazonaws.com/k"), AddressErrorKind::MalformedServiceLabel);
    }

    #[test]
    fn empty_labels_are_kept() {
        let addr = decode("https://b.s3-.amazonaws.com/k").unwrap();
        assert_eq!(addr.bucket, "b");
        assert_eq!(addr.region, "");

        let addr = decode("https://.s3.amazonaws.com/k").unwrap();
        assert_eq!(addr.bucket, "");
        assert_eq!(addr.region, DEFAULT_REGION);
        assert_eq!(addr.key, "k");
    }

    #[test]
    fn rejects_duplicate_query_key() {
        assert_eq!(kind("https://b.s3.amazonaws.com/k?a=1&a=2"), AddressErrorKind::DuplicateQueryKey);
    }

    #[test]
    fn rejects_invalid_escape() {
        assert_eq!(kind("https://b.s3.amazonaws.com/%FF"), AddressErrorKind::InvalidEncoding);
    }

    #[test]
    fn limits() {
        let config = CodecConfig {
            max_url_len: 40,
            max_query_params: 1,
        };
        let err = decode_with_config("https://b.s3.amazonaws.com/a-rather-long-key", &config).unwrap_err();
        assert_eq!(err, AddressError::UrlTooLong { len: 44, limit: 40 });

        let err = decode_with_config("https://b.s3.amazonaws.com/k?a&b", &config).unwrap_err();
        assert_eq!(err, AddressError::TooManyQueryParams { limit: 1 });
    }

    #[test]
    fn parsed_url() {
        let url = Url::parse("https://b.s3-us-west-2.amazonaws.com/x/y").unwrap();
        let addr = decode_url(&url).unwrap();
        assert_eq!(addr.region, "us-west-2");
        assert_eq!(addr.key, "x/y");
    }
}
