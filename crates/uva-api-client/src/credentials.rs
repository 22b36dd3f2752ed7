//! Credential pairs and the providers that look them up.
//!
//! Nothing is compiled in: pairs come from the environment, from a JSON
//! credentials file, or from a table built by the caller.

use std::collections::HashMap;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::error::ClientError;
use crate::identity::Identity;

pub const DEFAULT_ENV_PREFIX: &str = "UVA_API";

/// OAuth2 client id and secret registered for one identity.
#[derive(Debug)]
pub struct CredentialPair {
    client_id: String,
    client_secret: SecretString,
}

impl CredentialPair {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }
}

impl Clone for CredentialPair {
    fn clone(&self) -> Self {
        Self::new(self.client_id.clone(), self.client_secret.expose_secret())
    }
}

pub trait CredentialProvider {
    /// Returns the pair for `identity`, or `None` when none is configured.
    fn credentials_for(&self, identity: &Identity) -> Option<CredentialPair>;
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for Box<P> {
    fn credentials_for(&self, identity: &Identity) -> Option<CredentialPair> {
        (**self).credentials_for(identity)
    }
}

/// Reads `<PREFIX>_<IDENTITY>_CLIENT_ID` and `<PREFIX>_<IDENTITY>_CLIENT_SECRET`.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    prefix: String,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn client_id_var(&self, identity: &Identity) -> String {
        format!("{}_{}_CLIENT_ID", self.prefix, identity.env_key())
    }

    pub fn client_secret_var(&self, identity: &Identity) -> String {
        format!("{}_{}_CLIENT_SECRET", self.prefix, identity.env_key())
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl CredentialProvider for EnvCredentialProvider {
    fn credentials_for(&self, identity: &Identity) -> Option<CredentialPair> {
        let id_var = self.client_id_var(identity);
        let client_id = non_empty_var(&id_var)?;
        let Some(client_secret) = non_empty_var(&self.client_secret_var(identity)) else {
            debug!(var = %id_var, "client id set without a matching secret");
            return None;
        };
        Some(CredentialPair::new(client_id, client_secret))
    }
}

#[derive(Deserialize)]
struct FileEntry {
    client_id: String,
    client_secret: String,
}

/// In-memory identity → pair table.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    pairs: HashMap<String, CredentialPair>,
}

impl StaticCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        mut self,
        identity: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.insert(identity, CredentialPair::new(client_id, client_secret));
        self
    }

    pub fn insert(&mut self, identity: impl Into<String>, pair: CredentialPair) {
        self.pairs.insert(identity.into(), pair);
    }

    /// Loads a JSON object of the form
    /// `{"linklab": {"client_id": "...", "client_secret": "..."}}`.
    pub fn from_file(path: &Path) -> Result<Self, ClientError> {
        let fail = |reason: String| ClientError::Credentials {
            path: path.to_path_buf(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
        let entries: HashMap<String, FileEntry> =
            serde_json::from_str(&text).map_err(|e| fail(e.to_string()))?;

        debug!(path = %path.display(), count = entries.len(), "loaded credentials file");
        let mut provider = Self::new();
        for (identity, entry) in entries {
            provider.insert(
                identity,
                CredentialPair::new(entry.client_id, entry.client_secret),
            );
        }
        Ok(provider)
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credentials_for(&self, identity: &Identity) -> Option<CredentialPair> {
        self.pairs.get(identity.as_str()).cloned()
    }
}

/// Consults each provider in order and returns the first pair found.
#[derive(Default)]
pub struct ChainCredentialProvider {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl ChainCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl CredentialProvider for ChainCredentialProvider {
    fn credentials_for(&self, identity: &Identity) -> Option<CredentialPair> {
        self.providers
            .iter()
            .find_map(|provider| provider.credentials_for(identity))
    }
}
