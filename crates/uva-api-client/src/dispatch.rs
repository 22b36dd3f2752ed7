//! Builds and sends the single gateway request.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::identity::Identity;
use crate::params::ParamMap;
use crate::token::{origin_of, AccessToken};

#[derive(Debug, Serialize)]
pub struct RequestBody<'a> {
    pub params: &'a ParamMap,
    pub action: &'a str,
}

/// Everything needed for the gateway POST. The auth header value is marked
/// sensitive, so `Debug` never shows the token.
#[derive(Debug)]
pub struct RequestDescriptor {
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl RequestDescriptor {
    pub fn build(
        config: &ClientConfig,
        identity: &Identity,
        action: &str,
        params: &ParamMap,
        token: &AccessToken,
    ) -> Result<Self, ClientError> {
        let body = serde_json::to_string(&RequestBody { params, action })?;

        let mut auth = HeaderValue::from_str(token.expose()).map_err(|_| {
            ClientError::MalformedTokenResponse(
                "access token contains characters not allowed in a header".to_string(),
            )
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(config.auth_header.clone(), auth);

        Ok(Self {
            url: config.endpoint_for(identity),
            headers,
            body,
        })
    }
}

/// Returns the body text whatever the status; a non-2xx answer is logged,
/// not raised.
pub fn send(http: &Client, request: RequestDescriptor) -> Result<String, ClientError> {
    debug!(request = ?request, "Dispatching gateway request");
    let host = origin_of(&request.url);

    let response = http
        .post(request.url)
        .headers(request.headers)
        .body(request.body)
        .send()
        .map_err(|e| ClientError::transport(host.clone(), e))?;

    let status = response.status();
    if status.is_success() {
        debug!(status = status.as_u16(), "Gateway responded");
    } else {
        warn!(status = status.as_u16(), "Gateway returned an error status");
    }

    response.text().map_err(|e| ClientError::transport(host, e))
}
