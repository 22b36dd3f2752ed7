//! Test harness for end-to-end CLI tests.
//!
//! Starts a mock Cognito token endpoint and a mock API gateway, and points
//! the `uva-api` binary at both through its environment variables.

use assert_cmd::Command;
use httpmock::prelude::*;
use httpmock::Mock;
use uva_api_client::KNOWN_IDENTITIES;

use super::{uva_api_cmd, TEST_TOKEN};

pub const TOKEN_PATH: &str = "/oauth2/token";
pub const STAGE: &str = "/dev";

pub struct TestHarness {
    pub token_server: MockServer,
    pub gateway: MockServer,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            token_server: MockServer::start(),
            gateway: MockServer::start(),
        }
    }

    /// A `uva-api` command wired to the mock servers, with credentials
    /// `id-<client>` / `secret-<client>` for every known client.
    pub fn cli_command(&self) -> Command {
        let mut cmd = uva_api_cmd();
        cmd.env("UVA_API_TOKEN_URL", self.token_server.url(TOKEN_PATH))
            .env("UVA_API_GATEWAY_URL", self.gateway.url(STAGE))
            .env_remove("UVA_API_SCOPE_NAMESPACE")
            .env_remove("UVA_API_AUTH_HEADER");
        for name in KNOWN_IDENTITIES {
            let key = name.to_ascii_uppercase();
            cmd.env(format!("UVA_API_{}_CLIENT_ID", key), format!("id-{}", name))
                .env(format!("UVA_API_{}_CLIENT_SECRET", key), format!("secret-{}", name));
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cli_command().args(args).assert()
    }

    /// Token endpoint answers every request with `TEST_TOKEN`.
    pub fn issue_token(&self) -> Mock<'_> {
        self.token_server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .body(format!(
                    r#"{{"access_token":"{}","expires_in":3600,"token_type":"Bearer"}}"#,
                    TEST_TOKEN
                ));
        })
    }

    /// Gateway answers any POST under the stage with `status` and `body`.
    pub fn gateway_returns(&self, status: u16, body: &str) -> Mock<'_> {
        let body = body.to_string();
        self.gateway.mock(|when, then| {
            when.method(POST).path_includes(STAGE);
            then.status(status)
                .header("content-type", "application/json")
                .body(body);
        })
    }

    pub fn gateway_path(&self, identity_path: &str) -> String {
        format!("{}/{}", STAGE, identity_path)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
