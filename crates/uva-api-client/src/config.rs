use std::time::Duration;

use reqwest::header::HeaderName;
use url::Url;

use crate::error::ClientError;
use crate::identity::Identity;

pub const DEFAULT_TOKEN_URL: &str = "https://uva-api.auth.us-east-1.amazoncognito.com/oauth2/token";
pub const DEFAULT_GATEWAY_URL: &str = "https://leflanhxg2.execute-api.us-east-1.amazonaws.com/dev";
pub const DEFAULT_SCOPE_NAMESPACE: &str = "uva-api";
pub const DEFAULT_AUTH_HEADER: &str = "uva-auth";

/// Endpoints and request settings shared by the token and gateway calls.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub token_url: Url,
    pub gateway_url: Url,
    pub scope_namespace: String,
    pub auth_header: HeaderName,
    /// `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

fn parse_endpoint(kind: &str, raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw)
        .map_err(|e| ClientError::Config(format!("invalid {} URL '{}': {}", kind, raw, e)))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ClientError::Config(format!(
                "{} URL '{}' must use http or https, not '{}'",
                kind, raw, other
            )))
        }
    }
    if url.cannot_be_a_base() {
        return Err(ClientError::Config(format!(
            "{} URL '{}' cannot be used as a base",
            kind, raw
        )));
    }
    Ok(url)
}

impl ClientConfig {
    pub fn new(token_url: &str, gateway_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            token_url: parse_endpoint("token", token_url)?,
            gateway_url: parse_endpoint("gateway", gateway_url)?,
            scope_namespace: DEFAULT_SCOPE_NAMESPACE.to_string(),
            auth_header: HeaderName::from_static(DEFAULT_AUTH_HEADER),
            timeout: None,
        })
    }

    pub fn with_scope_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.scope_namespace = namespace.into();
        self
    }

    pub fn with_auth_header(mut self, name: &str) -> Result<Self, ClientError> {
        self.auth_header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClientError::Config(format!("invalid auth header name '{}'", name)))?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// `<gateway>/<identity path>`, tolerating a trailing slash on the base.
    pub fn endpoint_for(&self, identity: &Identity) -> Url {
        let mut url = self.gateway_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(identity.gateway_path().split('/'));
        }
        url
    }
}
