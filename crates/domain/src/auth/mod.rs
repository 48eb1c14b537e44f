//! Authorization domain types

mod secret;
mod types;

pub use secret::{ClientSecret, ClientSecretFile};
pub use types::{
    AuthError, AuthorizerConfig, OAuth2Token, YOUTUBE_MEMBERSHIPS_CREATOR_SCOPE,
    YOUTUBE_READONLY_SCOPE,
};
