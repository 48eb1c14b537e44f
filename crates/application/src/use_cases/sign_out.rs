//! Sign out use case.

use std::sync::Arc;

use tracing::info;

use crate::context::AppContext;
use crate::ports::{TokenCache, TokenCacheError};

/// Forgets the cached token and the authenticated client.
pub struct SignOut<C: ?Sized> {
    cache: Arc<C>,
}

impl<C: TokenCache + ?Sized> SignOut<C> {
    /// Creates a new `SignOut` use case.
    pub const fn new(cache: Arc<C>) -> Self {
        Self { cache }
    }

    /// Removes the cached token and clears `context`.
    ///
    /// The context is cleared even when the cache file cannot be removed.
    ///
    /// # Errors
    /// Returns an error if the cache path cannot be resolved or the file
    /// cannot be deleted.
    pub async fn execute<S>(&self, context: &mut AppContext<S>) -> Result<(), TokenCacheError> {
        context.clear();
        let path = self.cache.cache_path().await?;
        self.cache.remove(&path).await?;
        info!(path = %path.display(), "Removed cached credentials");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use tukija_domain::OAuth2Token;

    use crate::use_cases::TokenOrigin;

    #[derive(Default)]
    struct MockCache {
        removed: Mutex<Vec<PathBuf>>,
    }

    #[async_trait]
    impl TokenCache for MockCache {
        async fn cache_path(&self) -> Result<PathBuf, TokenCacheError> {
            Ok(PathBuf::from("/home/ada/.credentials/tukija.json"))
        }

        async fn load(&self, path: &Path) -> Result<OAuth2Token, TokenCacheError> {
            Err(TokenCacheError::NotFound(path.to_path_buf()))
        }

        async fn store(&self, _: &Path, _: &OAuth2Token) -> Result<(), TokenCacheError> {
            Ok(())
        }

        async fn remove(&self, path: &Path) -> Result<(), TokenCacheError> {
            self.removed.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_sign_out_clears_context_and_cache() {
        let cache = Arc::new(MockCache::default());
        let mut context = AppContext::authenticated("client", TokenOrigin::Web);

        SignOut::new(cache.clone())
            .execute(&mut context)
            .await
            .expect("sign out");

        assert!(!context.is_authenticated());
        assert_eq!(
            cache.removed.lock().unwrap().clone(),
            vec![PathBuf::from("/home/ada/.credentials/tukija.json")]
        );
    }
}
