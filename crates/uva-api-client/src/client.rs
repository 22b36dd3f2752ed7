use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::credentials::CredentialProvider;
use crate::dispatch::{self, RequestDescriptor};
use crate::error::ClientError;
use crate::identity::Identity;
use crate::params::ParamMap;
use crate::token::{self, AccessToken};

/// One gateway call: who is calling, what it asks for, and with which params.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub identity: Identity,
    pub action: String,
    pub params: ParamMap,
}

/// Runs the token exchange and the gateway call, strictly in that order.
pub struct UvaApiClient {
    http: Client,
    config: ClientConfig,
    credentials: Box<dyn CredentialProvider>,
}

impl UvaApiClient {
    pub fn new(
        config: ClientConfig,
        credentials: impl CredentialProvider + 'static,
    ) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            credentials: Box::new(credentials),
        })
    }

    pub fn acquire_token(&self, identity: &Identity) -> Result<AccessToken, ClientError> {
        let pair = self.credentials.credentials_for(identity);
        if pair.is_none() {
            warn!(
                identity = %identity,
                known = identity.is_known(),
                "No credential pair configured; requesting token without client authentication"
            );
        }
        token::request_token(&self.http, &self.config, identity, pair.as_ref())
    }

    pub fn dispatch(
        &self,
        identity: &Identity,
        action: &str,
        params: &ParamMap,
        token: &AccessToken,
    ) -> Result<String, ClientError> {
        let request = RequestDescriptor::build(&self.config, identity, action, params, token)?;
        dispatch::send(&self.http, request)
    }

    pub fn invoke(&self, invocation: &Invocation) -> Result<String, ClientError> {
        debug!(invocation = ?invocation, "Invoking gateway");
        let token = self.acquire_token(&invocation.identity)?;
        self.dispatch(
            &invocation.identity,
            &invocation.action,
            &invocation.params,
            &token,
        )
    }
}
