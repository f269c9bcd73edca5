use crate::config::CounterConfig;
use crate::domain::models::{CounterHit, VisitorCount};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;
use crate::shared::services::http::HttpTransport;
use crate::shared::services::storage::KeyValueStore;

/// Best-effort page view counter.
///
/// One remote hit; if that fails for any reason the local counter is bumped
/// instead. The two counts are never reconciled.
pub struct VisitorCounter<H, S> {
    http: H,
    storage: S,
    config: CounterConfig,
    local_key: String,
}

impl<H: HttpTransport, S: KeyValueStore> VisitorCounter<H, S> {
    pub fn new(http: H, storage: S, config: CounterConfig, local_key: impl Into<String>) -> Self {
        Self {
            http,
            storage,
            config,
            local_key: local_key.into(),
        }
    }

    pub async fn record_visit(&self) -> VisitorCount {
        match self.remote_hit().await {
            Ok(value) => {
                logging::log_visitor_count("remote", value);
                VisitorCount::Known(value)
            }
            Err(err) => {
                logging::log_visitor_remote_failed(&err.to_string());
                match self.local_hit() {
                    Ok(value) => {
                        logging::log_visitor_count("local", value);
                        VisitorCount::Known(value)
                    }
                    Err(err) => {
                        logging::log_visitor_local_failed(&err.to_string());
                        VisitorCount::Unknown
                    }
                }
            }
        }
    }

    async fn remote_hit(&self) -> Result<u64> {
        let response = self.http.get(&self.config.hit_url(), &[]).await?;
        if !response.is_success() {
            return Err(AppError::status("Counter", response.status));
        }
        Ok(response.json::<CounterHit>()?.value)
    }

    fn local_hit(&self) -> Result<u64> {
        let previous = self
            .storage
            .get(&self.local_key)?
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);
        let current = previous.saturating_add(1);
        self.storage.set(&self.local_key, &current.to_string())?;
        Ok(current)
    }
}
