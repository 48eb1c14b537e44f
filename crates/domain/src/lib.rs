//! Tukija Domain - Core types
//!
//! This crate defines the domain model for Tukija: OAuth client secrets,
//! authorization configuration, cached tokens and the YouTube resources the
//! application lists. All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod youtube;

pub use auth::{
    AuthError, AuthorizerConfig, ClientSecret, ClientSecretFile, OAuth2Token,
    YOUTUBE_MEMBERSHIPS_CREATOR_SCOPE, YOUTUBE_READONLY_SCOPE,
};
pub use error::{DomainError, DomainResult};
pub use youtube::{Channel, ListResponse, Member, MembershipLevel};
