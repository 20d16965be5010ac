//! Virtual-hosted-style S3 endpoint URLs
//!
//! `s3-vhost-url` converts between a structured object address
//! (region, bucket, object key, query parameters) and the URL that addresses
//! the object on the legacy S3 endpoints:
//!
//! - `https://{bucket}.s3.amazonaws.com/{key}` for the default region (`us-east-1`)
//! - `https://{bucket}.s3-{region}.amazonaws.com/{key}` for every other region
//!
//! Decoding is strict. Any URL that does not match one of these two host
//! patterns is rejected with a classified [`AddressError`]. Dotted regional
//! hosts (`s3.{region}.amazonaws.com`) and path-style URLs are not supported.
//!
//! # Example
//!
//! ```
//! use s3_vhost_url::query::QueryParams;
//! use s3_vhost_url::{decode, encode};
//!
//! let mut params = QueryParams::new();
//! params.insert("response-content-type".into(), Some("text/plain; charset=utf-8".into()));
//!
//! let url = encode(Some("eu-west-1"), Some("reports"), Some("/2024/q1.csv"), Some(&params));
//! assert_eq!(
//!     url,
//!     "https://reports.s3-eu-west-1.amazonaws.com/2024/q1.csv?response-content-type=text%2Fplain%3B%20charset%3Dutf-8",
//! );
//!
//! let addr = decode(&url).unwrap();
//! assert_eq!(addr.bucket, "reports");
//! assert_eq!(addr.region, "eu-west-1");
//! assert_eq!(addr.key, "2024/q1.csv");
//! assert_eq!(addr.params, Some(params));
//! ```
//!
//! # Modules
//!
//! - [`region`]: default region and service label handling
//! - [`query`]: ordered query parameters and their percent-encoding
//! - [`uri`]: domain, parent and local name of a parsed URL
//! - [`config`]: decoder limits
//!
//! All functions are pure and perform no I/O.

#![allow(
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions, // Sometimes not fixable
)]

mod address;
mod decode;
mod error;

pub mod config;
pub mod query;
pub mod region;
pub mod uri;

pub use self::address::{S3Address, encode, encode_url};
pub use self::decode::{decode, decode_url, decode_url_with_config, decode_with_config};
pub use self::error::{AddressError, AddressErrorKind};
