//! Application use cases (business logic orchestration).

mod authenticate;
mod sign_out;

pub use authenticate::*;
pub use sign_out::*;
