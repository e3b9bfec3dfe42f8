use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::errors::SiteError;
use crate::models::about::AboutContent;

struct CachedContent {
    content: AboutContent,
    fetched_at: Instant,
}

/// About page content read from a JSON export, cached between
/// revalidations. A failed reload keeps serving the last good copy.
pub struct ContentStore {
    path: PathBuf,
    revalidate: Duration,
    cached: RwLock<Option<CachedContent>>,
}

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>, revalidate_seconds: u64) -> Self {
        Self {
            path: path.into(),
            revalidate: Duration::from_secs(revalidate_seconds),
            cached: RwLock::new(None),
        }
    }

    pub async fn current(&self) -> Result<AboutContent, SiteError> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref() {
                if entry.fetched_at.elapsed() < self.revalidate {
                    return Ok(entry.content.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;
        // another worker may have refreshed while we waited for the lock
        if let Some(entry) = cached.as_ref() {
            if entry.fetched_at.elapsed() < self.revalidate {
                return Ok(entry.content.clone());
            }
        }

        match self.load().await {
            Ok(content) => {
                info!("Loaded about content from {}", self.path.display());
                *cached = Some(CachedContent {
                    content: content.clone(),
                    fetched_at: Instant::now(),
                });
                Ok(content)
            }
            Err(e) => match cached.as_ref() {
                Some(entry) => {
                    warn!("Revalidation failed, serving stale content: {}", e);
                    Ok(entry.content.clone())
                }
                None => Err(e),
            },
        }
    }

    /// Reloads now regardless of age. The cache is only replaced on
    /// success, so readers keep the old copy when the reload fails.
    pub async fn refresh(&self) -> Result<AboutContent, SiteError> {
        let mut cached = self.cached.write().await;
        let content = self.load().await?;
        info!("Reloaded about content from {}", self.path.display());
        *cached = Some(CachedContent {
            content: content.clone(),
            fetched_at: Instant::now(),
        });
        Ok(content)
    }

    async fn load(&self) -> Result<AboutContent, SiteError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SiteError::ContentUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
