//! HTTP adapters shared by the API clients.

mod authenticated_client;

pub use authenticated_client::{AuthenticatedClient, REFRESH_BUFFER_SECONDS};
