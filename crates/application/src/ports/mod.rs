//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod authorizer;
mod client_builder;
mod prompt;
mod secret_loader;
mod token_cache;

pub use authorizer::Authorizer;
pub use client_builder::{ClientBuildError, ClientBuilder};
pub use prompt::{PromptError, UserPrompt};
pub use secret_loader::{SecretError, SecretLoader};
pub use token_cache::{TokenCache, TokenCacheError};
