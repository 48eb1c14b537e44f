//! Filesystem adapters: the client secret document and the token cache.

mod secret_loader;
mod token_cache;

pub use secret_loader::FileSecretLoader;
pub use token_cache::{DEFAULT_CREDENTIALS_DIR, DEFAULT_TOKEN_FILE_NAME, FileTokenCache};
