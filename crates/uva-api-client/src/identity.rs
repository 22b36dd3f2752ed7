use std::fmt;

/// Clients registered with the identity provider.
pub const KNOWN_IDENTITIES: [&str; 5] = [
    "nadimonly",
    "linklab",
    "linklab_admin",
    "devhub",
    "devhub_admin",
];

const PATH_SEPARATOR: char = '_';

/// A named client. It selects the credential pair, the OAuth2 scope and the
/// gateway path segment at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_IDENTITIES.contains(&self.0.as_str())
    }

    /// OAuth2 scope requested for this identity, e.g. `uva-api/linklab_admin`.
    pub fn scope(&self, namespace: &str) -> String {
        format!("{}/{}", namespace, self.0)
    }

    /// Gateway path for this identity: `linklab_admin` becomes `linklab/admin`.
    pub fn gateway_path(&self) -> String {
        self.0.replace(PATH_SEPARATOR, "/")
    }

    /// Environment-variable stem, e.g. `LINKLAB_ADMIN`.
    pub fn env_key(&self) -> String {
        self.0
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
