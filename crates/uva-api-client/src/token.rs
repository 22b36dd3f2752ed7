//! OAuth2 client-credentials exchange against the identity provider.

use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::credentials::CredentialPair;
use crate::error::ClientError;
use crate::identity::Identity;

pub const GRANT_TYPE: &str = "client_credentials";

/// Bearer token issued for one invocation.
#[derive(Debug)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Only `access_token` is consumed; `token_type` and `expires_in` are ignored.
#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

pub(crate) fn origin_of(url: &url::Url) -> String {
    url.origin().ascii_serialization()
}

/// Posts `grant_type=client_credentials&scope=<namespace>/<identity>` to the
/// token endpoint. Without a pair the request carries no client
/// authentication and is left for the provider to reject.
pub fn request_token(
    http: &Client,
    config: &ClientConfig,
    identity: &Identity,
    pair: Option<&CredentialPair>,
) -> Result<AccessToken, ClientError> {
    let scope = identity.scope(&config.scope_namespace);
    let host = origin_of(&config.token_url);
    debug!(
        url = %config.token_url,
        scope = %scope,
        client_id = pair.map(CredentialPair::client_id),
        "Requesting access token"
    );

    let mut request = http
        .post(config.token_url.clone())
        .form(&[("grant_type", GRANT_TYPE), ("scope", scope.as_str())]);
    if let Some(pair) = pair {
        request = request.basic_auth(pair.client_id(), Some(pair.client_secret().expose_secret()));
    }

    let response = request
        .send()
        .map_err(|e| ClientError::transport(host.clone(), e))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| ClientError::transport(host, e))?;
    debug!(status = status.as_u16(), bytes = body.len(), "Token endpoint responded");

    if !status.is_success() {
        return Err(ClientError::AuthenticationFailed {
            status: status.as_u16(),
            body,
        });
    }

    parse_token_response(&body)
}

fn parse_token_response(body: &str) -> Result<AccessToken, ClientError> {
    let parsed: TokenResponse = serde_json::from_str(body).map_err(|e| {
        ClientError::MalformedTokenResponse(format!("response is not a JSON object: {}", e))
    })?;
    match parsed.access_token {
        Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
        _ => Err(ClientError::MalformedTokenResponse(
            "missing access_token".to_string(),
        )),
    }
}
