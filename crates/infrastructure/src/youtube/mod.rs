//! YouTube Data API v3 client.

mod builder;
mod client;
mod error;

pub use builder::{DEFAULT_API_BASE_URL, YouTubeClientBuilder};
pub use client::{MEMBERS_PAGE_SIZE, YouTubeClient};
pub use error::ApiError;
