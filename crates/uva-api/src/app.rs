use std::time::Duration;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use tracing::debug;
use uva_api_client::{
    ChainCredentialProvider, ClientConfig, ClientError, EnvCredentialProvider,
    StaticCredentialProvider, UvaApiClient,
};
use uva_api_common::error_codes::exit_codes;

use crate::commands::{Cli, ConfigArgs};
use crate::common::telemetry;
use crate::common::{Colors, color_init};

const PROGRAM_NAME: &str = "uva-api";
const DEFAULT_LOG_LEVEL: &str = "info";
/// Debug for this workspace only; the HTTP stack stays at info.
const VERBOSE_LOG_LEVEL: &str = "info,uva_api=debug,uva_api_client=debug";

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> i32 {
        let cli = Cli::parse();
        let _telemetry = telemetry::init_tracing(if cli.verbose {
            VERBOSE_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        });
        color_init(cli.no_color);

        match self.execute(cli) {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => self.handle_error(e),
        }
    }

    fn execute(&self, cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
        debug!(cli = ?cli, "CLI arguments parsed");

        if let Some(shell) = cli.completions {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, PROGRAM_NAME, &mut std::io::stdout());
            return Ok(());
        }

        let invocation = cli
            .invocation()
            .ok_or("both --client and --action are required")?;

        let client = UvaApiClient::new(client_config(&cli.config)?, credential_provider(&cli.config)?)?;
        let response = client.invoke(&invocation)?;
        println!("{}", response);
        Ok(())
    }

    fn handle_error(&self, e: Box<dyn std::error::Error>) -> i32 {
        if let Some(client_error) = e.downcast_ref::<ClientError>() {
            eprintln!("{} {}", Colors::error("Error:"), client_error);
            if let Some(suggestion) = client_error.suggestion() {
                eprintln!("{} {}", Colors::dim("Suggestion:"), suggestion);
            }
            if client_error.is_retryable() {
                eprintln!(
                    "{}",
                    Colors::dim("(This error may be transient - retry may succeed)")
                );
            }
            client_error.category().exit_code()
        } else {
            eprintln!("{} {}", Colors::error("Error:"), e);
            exit_codes::GENERAL_ERROR
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

pub fn client_config(args: &ConfigArgs) -> Result<ClientConfig, ClientError> {
    Ok(ClientConfig::new(&args.token_url, &args.gateway_url)?
        .with_scope_namespace(args.scope_namespace.as_str())
        .with_auth_header(&args.auth_header)?
        .with_timeout(args.timeout.map(Duration::from_secs)))
}

/// Environment first, then the credentials file if one was given.
pub fn credential_provider(args: &ConfigArgs) -> Result<ChainCredentialProvider, ClientError> {
    let mut chain = ChainCredentialProvider::new().push(EnvCredentialProvider::new());
    if let Some(path) = &args.credentials_file {
        chain = chain.push(StaticCredentialProvider::from_file(path)?);
    }
    Ok(chain)
}
