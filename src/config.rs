//! Engine invocation configuration.

use std::fmt;

/// Resolved parameters for one mapping-engine invocation.
///
/// Values are carried verbatim from the configuration graph; the assembler
/// performs no validation beyond the presence and single-value checks done
/// during resolution. One instance is built per request, handed to the
/// engine, and discarded when the invocation returns.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfiguration {
    /// Path or IRI of the mapping document.
    pub mapping_file: String,
    /// Connection URL of the backing relational database.
    pub connection_url: String,
    /// Database user, when the request supplies one.
    pub user: Option<String>,
    /// Database password, when the request supplies one.
    pub password: Option<String>,
}

impl EngineConfiguration {
    /// Creates a configuration with the two required values and no
    /// credentials.
    #[must_use]
    pub fn new(mapping_file: impl Into<String>, connection_url: impl Into<String>) -> Self {
        Self {
            mapping_file: mapping_file.into(),
            connection_url: connection_url.into(),
            user: None,
            password: None,
        }
    }
}

// The password must never reach logs; assemble() logs the configuration at
// debug level through this impl.
impl fmt::Debug for EngineConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfiguration")
            .field("mapping_file", &self.mapping_file)
            .field("connection_url", &self.connection_url)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_credentials_unset() {
        let config = EngineConfiguration::new("map.ttl", "jdbc:sqlite:test.db");
        assert_eq!(config.mapping_file, "map.ttl");
        assert_eq!(config.connection_url, "jdbc:sqlite:test.db");
        assert!(config.user.is_none());
        assert!(config.password.is_none());
    }

    #[test]
    fn debug_redacts_the_password() {
        let mut config = EngineConfiguration::new("map.ttl", "jdbc:sqlite:test.db");
        config.user = Some("alice".into());
        config.password = Some("hunter2".into());
        let rendered = format!("{config:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
