//! S3 region utilities
//!
//! Legacy endpoint naming: the default region has the bare `s3` service label,
//! every other region is embedded as `s3-{region}`.

use std::borrow::Cow;

/// The region whose endpoint host carries no region suffix.
pub const DEFAULT_REGION: &str = "us-east-1";

const SERVICE: &str = "s3";
const SERVICE_PREFIX: &str = "s3-";

/// Returns `true` if `region` is blank or equal to [`DEFAULT_REGION`], ignoring ASCII case.
///
/// # Examples
/// ```
/// # use s3_vhost_url::region::is_default_region;
/// assert!(is_default_region("us-east-1"));
/// assert!(is_default_region("US-EAST-1"));
/// assert!(is_default_region("  "));
/// assert!(!is_default_region("eu-west-1"));
/// ```
#[must_use]
pub fn is_default_region(region: &str) -> bool {
    let region = region.trim();
    region.is_empty() || region.eq_ignore_ascii_case(DEFAULT_REGION)
}

/// Builds the service label of an endpoint host.
///
/// # Examples
/// ```
/// # use s3_vhost_url::region::service_label;
/// assert_eq!(service_label(None), "s3");
/// assert_eq!(service_label(Some("Us-East-1")), "s3");
/// assert_eq!(service_label(Some("eu-west-1")), "s3-eu-west-1");
/// ```
#[must_use]
pub fn service_label(region: Option<&str>) -> Cow<'static, str> {
    match region {
        Some(region) if !is_default_region(region) => {
            if !is_valid_region(region) {
                tracing::warn!(region, "region is not a valid host label");
            }
            Cow::Owned(format!("{SERVICE_PREFIX}{region}"))
        }
        _ => Cow::Borrowed(SERVICE),
    }
}

/// Extracts the region from a service label.
///
/// `s3` maps to [`DEFAULT_REGION`], `s3-{region}` maps to `{region}`, which may be empty.
/// Anything else, including the dotted `s3.{region}` form split across labels, is rejected.
///
/// # Examples
/// ```
/// # use s3_vhost_url::region::parse_service_label;
/// assert_eq!(parse_service_label("s3"), Some("us-east-1"));
/// assert_eq!(parse_service_label("s3-ap-south-1"), Some("ap-south-1"));
/// assert_eq!(parse_service_label("s3-"), Some(""));
/// assert_eq!(parse_service_label("ec2"), None);
/// ```
#[must_use]
pub fn parse_service_label(label: &str) -> Option<&str> {
    if label == SERVICE {
        return Some(DEFAULT_REGION);
    }
    label.strip_prefix(SERVICE_PREFIX)
}

/// Checks whether a region can be embedded in a hyphenated host label.
///
/// The region must start with a lowercase letter, contain only lowercase letters,
/// digits and hyphens, and must not end with or repeat a hyphen.
///
/// # Examples
/// ```
/// # use s3_vhost_url::region::is_valid_region;
/// assert!(is_valid_region("us-gov-west-1"));
/// assert!(is_valid_region("local"));
/// assert!(!is_valid_region("eu west"));
/// assert!(!is_valid_region("Us-East-1"));
/// ```
#[must_use]
pub fn is_valid_region(s: &str) -> bool {
    let Some(&first) = s.as_bytes().first() else { return false };
    if !first.is_ascii_lowercase() {
        return false;
    }

    let is_valid_byte = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-';
    if !s.bytes().all(is_valid_byte) {
        return false;
    }

    !s.ends_with('-') && !s.contains("--")
}
