//! Authorization flow support.

mod state;

pub use state::AuthorizationState;
