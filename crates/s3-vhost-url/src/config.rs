//! Codec Configuration
//!
//! Limits applied while decoding untrusted URLs.
//!
//! # Example
//! ```
//! use s3_vhost_url::config::CodecConfig;
//! use s3_vhost_url::{AddressErrorKind, decode_with_config};
//!
//! let mut config = CodecConfig::default();
//! config.max_query_params = 2;
//!
//! let res = decode_with_config("https://b.s3.amazonaws.com/k?a&b", &config);
//! assert!(res.is_ok());
//!
//! let err = decode_with_config("https://b.s3.amazonaws.com/k?a&b&c", &config).unwrap_err();
//! assert_eq!(err.kind(), AddressErrorKind::TooManyQueryParams);
//! ```

use serde::{Deserialize, Serialize};

/// Decoder limits.
///
/// Missing fields take their default values when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CodecConfig {
    /// Maximum length of an input URL string in bytes.
    ///
    /// Checked before the string is parsed.
    ///
    /// Default: 8192
    pub max_url_len: usize,

    /// Maximum number of query parameters.
    ///
    /// Default: 1000
    pub max_query_params: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_url_len: 8192,
            max_query_params: 1000,
        }
    }
}
