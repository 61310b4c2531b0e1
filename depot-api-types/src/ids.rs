use serde::{Deserialize, Serialize};

/// Opaque server-assigned resource identifier (an href path).
///
/// The server owns these; the client only stores and echoes them. Building
/// one from path segments on the client side is always a bug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceHref(pub String);

impl ResourceHref {
    /// Create from a string returned by the server
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get as string (always available)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceHref {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ResourceHref {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ResourceHref {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ResourceHref {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_round_trips_transparently() {
        let href = ResourceHref::from("/api/v3/repositories/0195/");
        let json = serde_json::to_string(&href).unwrap();
        assert_eq!(json, "\"/api/v3/repositories/0195/\"");
        let back: ResourceHref = serde_json::from_str(&json).unwrap();
        assert_eq!(back, href);
    }

    #[test]
    fn test_href_display_matches_as_str() {
        let href = ResourceHref::from_string("/api/v3/tasks/abc/");
        assert_eq!(href.to_string(), href.as_str());
    }
}
