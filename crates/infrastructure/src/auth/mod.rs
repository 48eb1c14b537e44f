//! OAuth2 authorization adapters.

mod oauth2_authorizer;

pub use oauth2_authorizer::OAuth2Authorizer;
