//! Address errors

/// Error returned when a URL cannot be decoded into an [`S3Address`](crate::S3Address).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AddressError {
    /// the input is not a well-formed URL
    #[error("AddressError: InvalidSyntax: input should be a valid URL")]
    InvalidSyntax(#[source] url::ParseError),

    /// the scheme is neither http nor https
    #[error("AddressError: UnsupportedScheme: expected http or https, got {0:?}")]
    UnsupportedScheme(Box<str>),

    /// the host does not have exactly four labels
    #[error("AddressError: MalformedHost: host should be [BUCKET].s3.amazonaws.com or [BUCKET].s3-[REGION].amazonaws.com, got {0:?}")]
    MalformedHost(Box<str>),

    /// the host does not end with `amazonaws.com`
    #[error("AddressError: UnsupportedDomain: host should have domain amazonaws.com, got {0:?}")]
    UnsupportedDomain(Box<str>),

    /// the service label is neither `s3` nor `s3-[REGION]`
    #[error("AddressError: MalformedServiceLabel: service label should be s3 or s3-[REGION], got {0:?}")]
    MalformedServiceLabel(Box<str>),

    /// a percent-escape decodes to invalid UTF-8
    #[error("AddressError: InvalidEncoding: {0:?} is not valid percent-encoded UTF-8")]
    InvalidEncoding(Box<str>),

    /// a query key occurs more than once
    #[error("AddressError: DuplicateQueryKey: {0:?}")]
    DuplicateQueryKey(Box<str>),

    /// the input exceeds [`CodecConfig::max_url_len`](crate::config::CodecConfig::max_url_len)
    #[error("AddressError: UrlTooLong: {len} bytes exceeds the limit of {limit}")]
    UrlTooLong {
        /// input length in bytes
        len: usize,
        /// configured limit
        limit: usize,
    },

    /// the query exceeds [`CodecConfig::max_query_params`](crate::config::CodecConfig::max_query_params)
    #[error("AddressError: TooManyQueryParams: more than {limit} query parameters")]
    TooManyQueryParams {
        /// configured limit
        limit: usize,
    },
}

/// The classification of an [`AddressError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AddressErrorKind {
    /// see [`AddressError::InvalidSyntax`]
    InvalidSyntax,
    /// see [`AddressError::UnsupportedScheme`]
    UnsupportedScheme,
    /// see [`AddressError::MalformedHost`]
    MalformedHost,
    /// see [`AddressError::UnsupportedDomain`]
    UnsupportedDomain,
    /// see [`AddressError::MalformedServiceLabel`]
    MalformedServiceLabel,
    /// see [`AddressError::InvalidEncoding`]
    InvalidEncoding,
    /// see [`AddressError::DuplicateQueryKey`]
    DuplicateQueryKey,
    /// see [`AddressError::UrlTooLong`]
    UrlTooLong,
    /// see [`AddressError::TooManyQueryParams`]
    TooManyQueryParams,
}

impl AddressError {
    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> AddressErrorKind {
        match self {
            Self::InvalidSyntax(_) => AddressErrorKind::InvalidSyntax,
            Self::UnsupportedScheme(_) => AddressErrorKind::UnsupportedScheme,
            Self::MalformedHost(_) => AddressErrorKind::MalformedHost,
            Self::UnsupportedDomain(_) => AddressErrorKind::UnsupportedDomain,
            Self::MalformedServiceLabel(_) => AddressErrorKind::MalformedServiceLabel,
            Self::InvalidEncoding(_) => AddressErrorKind::InvalidEncoding,
            Self::DuplicateQueryKey(_) => AddressErrorKind::DuplicateQueryKey,
            Self::UrlTooLong { .. } => AddressErrorKind::UrlTooLong,
            Self::TooManyQueryParams { .. } => AddressErrorKind::TooManyQueryParams,
        }
    }
}

impl From<url::ParseError> for AddressError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidSyntax(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = AddressError::MalformedHost("a.b".into());
        assert_eq!(err.kind(), AddressErrorKind::MalformedHost);

        let err = AddressError::UrlTooLong { len: 10, limit: 5 };
        assert_eq!(err.kind(), AddressErrorKind::UrlTooLong);

        let err = AddressError::from(url::ParseError::EmptyHost);
        assert_eq!(err.kind(), AddressErrorKind::InvalidSyntax);
    }

    #[test]
    fn message_names_expected_pattern() {
        let err = AddressError::MalformedServiceLabel("ec2".into());
        let msg = err.to_string();
        assert!(msg.contains("s3 or s3-[REGION]"), "{msg}");
        assert!(msg.contains("\"ec2\""), "{msg}");
    }

    #[test]
    fn syntax_error_keeps_source() {
        use std::error::Error as _;
        let err = AddressError::InvalidSyntax(url::ParseError::RelativeUrlWithoutBase);
        assert!(err.source().is_some());
    }
}
