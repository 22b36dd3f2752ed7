#![deny(clippy::all)]

mod client;
pub mod config;
pub mod credentials;
pub mod dispatch;
mod error;
mod identity;
mod params;
pub mod token;

pub use client::Invocation;
pub use client::UvaApiClient;
pub use config::ClientConfig;
pub use credentials::ChainCredentialProvider;
pub use credentials::CredentialPair;
pub use credentials::CredentialProvider;
pub use credentials::EnvCredentialProvider;
pub use credentials::StaticCredentialProvider;
pub use dispatch::RequestDescriptor;
pub use error::ClientError;
pub use identity::Identity;
pub use identity::KNOWN_IDENTITIES;
pub use params::ParamMap;
pub use token::AccessToken;

pub type Result<T> = std::result::Result<T, ClientError>;
