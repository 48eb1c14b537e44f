//! Tukija Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the secret file, token cache, OAuth
//!   authorizer, user prompt and API client construction)
//! - The authorization use cases and the context handed to UI handlers
//! - Application-level error handling

pub mod auth;
pub mod cancellation;
pub mod context;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use auth::AuthorizationState;
pub use cancellation::{CancellationReceiver, CancellationToken};
pub use context::AppContext;
pub use error::{ApplicationError, ApplicationResult};
pub use use_cases::{
    Authenticate, AuthenticateError, AuthenticateInput, AuthenticateOutput, CODE_PROMPT, SignOut,
    TokenOrigin,
};
