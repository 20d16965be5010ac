//! Navigation helpers for parsed URLs
//!
//! The root `/` is the first path segment and every segment keeps its
//! trailing slash, so `/dir/file.txt` has the segments `/`, `dir/` and `file.txt`.
//! Only the bare root has fewer than two.

use std::borrow::Cow;

use url::Url;

/// Returns the scheme and host of `url`, e.g. `https://bucket.s3.amazonaws.com`.
#[must_use]
pub fn domain(url: &Url) -> String {
    format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default())
}

fn segments(url: &Url) -> Vec<&str> {
    url.path().split_inclusive('/').collect()
}

/// Returns the address of the directory containing `url`, without a trailing slash.
///
/// Empty if the path has fewer than two segments.
///
/// # Examples
/// ```
/// # use s3_vhost_url::uri::parent_address;
/// let url = url::Url::parse("https://b.s3.amazonaws.com/dir/file.txt").unwrap();
/// assert_eq!(parent_address(&url), "https://b.s3.amazonaws.com/dir");
///
/// let url = url::Url::parse("https://b.s3.amazonaws.com/file.txt").unwrap();
/// assert_eq!(parent_address(&url), "https://b.s3.amazonaws.com");
///
/// let url = url::Url::parse("https://b.s3.amazonaws.com/").unwrap();
/// assert_eq!(parent_address(&url), "");
/// ```
#[must_use]
pub fn parent_address(url: &Url) -> String {
    match segments(url).as_slice() {
        [parents @ .., _] if !parents.is_empty() => {
            let mut buf = domain(url);
            buf.extend(parents.iter().copied());
            buf.truncate(buf.trim_end_matches('/').len());
            buf
        }
        _ => String::new(),
    }
}

/// Returns the last path segment of `url`, without a trailing slash.
///
/// Empty if the path has fewer than two segments.
///
/// # Examples
/// ```
/// # use s3_vhost_url::uri::local_name;
/// let url = url::Url::parse("https://b.s3.amazonaws.com/a/b/").unwrap();
/// assert_eq!(local_name(&url), "b");
/// ```
#[must_use]
pub fn local_name(url: &Url) -> String {
    let segments = segments(url);
    match segments.as_slice() {
        [_, .., last] => last.trim_end_matches('/').to_owned(),
        _ => String::new(),
    }
}

/// Appends a trailing `/` to `path` unless it is blank or already ends with one.
///
/// # Examples
/// ```
/// # use s3_vhost_url::uri::to_directory_path;
/// assert_eq!(to_directory_path("a/b"), "a/b/");
/// assert_eq!(to_directory_path("a/b/"), "a/b/");
/// assert_eq!(to_directory_path(""), "");
/// ```
#[must_use]
pub fn to_directory_path(path: &str) -> Cow<'_, str> {
    if path.trim().is_empty() || path.ends_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{path}/"))
    }
}
