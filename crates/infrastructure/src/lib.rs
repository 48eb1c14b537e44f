//! Tukija Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: the client secret file, the on-disk
//! token cache, the `OAuth2` authorizer, the terminal prompt and the YouTube
//! Data API client, plus the members CSV export and layered settings.

pub mod adapters;
pub mod auth;
pub mod export;
pub mod persistence;
pub mod prompt;
pub mod serialization;
pub mod settings;
pub mod youtube;

pub use adapters::AuthenticatedClient;
pub use auth::OAuth2Authorizer;
pub use export::{ExportError, MembersCsvExporter};
pub use persistence::{FileSecretLoader, FileTokenCache};
pub use prompt::TerminalPrompt;
pub use serialization::{SerializationError, from_json_bytes, to_json_pretty_bytes};
pub use settings::{Settings, SettingsError};
pub use youtube::{ApiError, YouTubeClient, YouTubeClientBuilder};
