use std::fmt;

/// Absolute origin URL (scheme + host + optional port) used to build the
/// OGP page and image URLs. Stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOrigin(String);

#[derive(Debug, thiserror::Error)]
pub enum SiteOriginError {
    #[error("Site origin must not be empty")]
    Empty,
}

impl SiteOrigin {
    pub fn new(origin: &str) -> Result<Self, SiteOriginError> {
        let trimmed = origin.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(SiteOriginError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical shareable page URL for a pair of identifiers.
    pub fn page_url(&self, id1: &str, id2: &str) -> String {
        format!("{}/ogp/{}/{}", self.0, id1, id2)
    }

    /// Absolute URL of a gallery image by file name.
    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}/images/ogp/{}", self.0, file_name)
    }
}

impl fmt::Display for SiteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
