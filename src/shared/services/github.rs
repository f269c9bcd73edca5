use std::time::Duration;

use crate::config::GithubConfig;
use crate::domain::models::{project_repositories, LoadState, RawRepository, RepositoryEntry};
use crate::shared::errors::{AppError, Result};
use crate::shared::lifecycle::Liveness;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::clock::Clock;
use crate::shared::services::http::HttpTransport;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Loads the account's public repositories for the projects grid.
pub struct RepositoryLoader<H> {
    http: H,
    config: GithubConfig,
}

impl<H: HttpTransport> RepositoryLoader<H> {
    pub fn new(http: H, config: GithubConfig) -> Self {
        Self { http, config }
    }

    /// One listing request. Never returns `Loading`.
    pub async fn load(&self) -> LoadState {
        logging::log_repository_fetch_start(&self.config.account);

        let result = self.fetch().await;
        match &result {
            Ok(entries) => logging::log_repository_fetch_success(&self.config.account, entries.len()),
            Err(err) => logging::log_repository_fetch_error(&self.config.account, &err.to_string()),
        }
        result.into()
    }

    async fn fetch(&self) -> Result<Vec<RepositoryEntry>> {
        let mut headers = vec![("Accept", GITHUB_ACCEPT.to_string())];
        if let Some(token) = &self.config.token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }

        let response = self.http.get(&self.config.listing_url(), &headers).await?;
        if !response.is_success() {
            return Err(AppError::status("GitHub", response.status));
        }

        let raw: Vec<RawRepository> = response.json()?;
        Ok(project_repositories(raw))
    }
}

/// Loads, publishes, then waits `refresh` and loads again until the owner
/// goes away. Each cycle publishes `Loading` followed by the full new state.
/// A result whose token was superseded or invalidated is dropped and ends
/// the loop. With no refresh interval a single load is made.
pub async fn refresh_repositories<H, C>(
    loader: &RepositoryLoader<H>,
    clock: &C,
    refresh: Option<Duration>,
    liveness: &Liveness,
    mut publish: impl FnMut(LoadState),
) where
    H: HttpTransport,
    C: Clock + ?Sized,
{
    loop {
        let token = liveness.begin();
        publish(LoadState::Loading);

        let next = loader.load().await;
        if !token.is_current() {
            logging::log_stale_completion(LogOperation::RepositoryFetch);
            return;
        }
        publish(next);

        let Some(period) = refresh else {
            return;
        };
        clock.sleep(period).await;
        if !token.is_current() {
            return;
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::shared::services::http::testing::ScriptedTransport;
    use futures::executor::block_on;

    const LISTING: &str = r#"[
        {"id": 1, "name": "older", "html_url": "https://github.com/u/older",
         "description": "first", "language": "Java", "homepage": null,
         "updated_at": "2024-01-10T00:00:00Z", "fork": false},
        {"id": 2, "name": "newer", "html_url": "https://github.com/u/newer",
         "description": null, "language": "Rust", "homepage": "https://u.dev",
         "updated_at": "2025-02-01T00:00:00Z", "fork": true}
    ]"#;

    fn loader(transport: ScriptedTransport) -> RepositoryLoader<ScriptedTransport> {
        RepositoryLoader::new(transport, SiteConfig::default().github)
    }

    #[test]
    fn test_ready_sorted_newest_first() {
        let state = block_on(loader(ScriptedTransport::default().reply(200, LISTING)).load());

        let LoadState::Ready(entries) = state else {
            panic!("expected ready, got {:?}", state);
        };
        let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_request_shape() {
        let transport = ScriptedTransport::default().reply(200, "[]");
        block_on(loader(transport.clone()).load());

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert!(requests[0].url.contains("per_page=100"));
        assert!(requests[0].url.contains("sort=updated"));
        assert!(!requests[0].headers.iter().any(|(k, _)| k == "Authorization"));
    }

    #[test]
    fn test_token_sent_as_bearer() {
        let transport = ScriptedTransport::default().reply(200, "[]");
        let mut config = SiteConfig::default().github;
        config.token = Some("abc".to_string());
        block_on(RepositoryLoader::new(transport.clone(), config).load());

        let requests = transport.requests.borrow();
        assert!(requests[0]
            .headers
            .contains(&("Authorization".to_string(), "Bearer abc".to_string())));
    }

    #[test]
    fn test_empty_listing_is_ready_not_error() {
        let state = block_on(loader(ScriptedTransport::default().reply(200, "[]")).load());
        assert_eq!(state, LoadState::Ready(Vec::new()));
    }

    #[test]
    fn test_http_error_status() {
        let state = block_on(
            loader(ScriptedTransport::default().reply(403, r#"{"message":"rate limited"}"#)).load(),
        );
        assert_eq!(state.error(), Some("GitHub API 403"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_transport_failure_is_error_state() {
        let state = block_on(loader(ScriptedTransport::default().fail("offline")).load());
        assert!(state.error().unwrap().contains("offline"));
    }

    #[test]
    fn test_malformed_body_is_error_state() {
        let state = block_on(loader(ScriptedTransport::default().reply(200, "{}")).load());
        assert!(state.error().is_some());
    }

    mod refresh {
        use std::cell::RefCell;

        use async_trait::async_trait;

        use super::*;
        use crate::shared::services::clock::TokioClock;
        use crate::shared::services::http::HttpResponse;

        /// Replies after `delay` on the tokio clock.
        #[derive(Clone)]
        struct DelayedTransport {
            inner: ScriptedTransport,
            delay: Duration,
        }

        #[async_trait(?Send)]
        impl HttpTransport for DelayedTransport {
            async fn get(&self, url: &str, headers: &[(&str, String)]) -> Result<HttpResponse> {
                tokio::time::sleep(self.delay).await;
                self.inner.get(url, headers).await
            }

            async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse> {
                self.inner.post_json(url, body).await
            }
        }

        #[tokio::test(start_paused = true)]
        async fn test_each_cycle_replaces_previous_state() {
            let transport = ScriptedTransport::default()
                .reply(200, LISTING)
                .reply(500, "{}");
            let loader = loader(transport.clone());
            let clock = TokioClock::default();
            let liveness = Liveness::default();
            let published = RefCell::new(Vec::new());

            let run = refresh_repositories(
                &loader,
                &clock,
                Some(Duration::from_secs(60)),
                &liveness,
                |state| published.borrow_mut().push(state),
            );
            let teardown = async {
                // Between the second and third cycle
                tokio::time::sleep(Duration::from_secs(90)).await;
                liveness.invalidate();
            };
            tokio::join!(run, teardown);

            let published = published.into_inner();
            assert_eq!(published.len(), 4);
            assert!(published[0].is_loading());
            assert!(matches!(&published[1], LoadState::Ready(entries) if entries.len() == 2));
            assert!(published[2].is_loading());
            assert_eq!(published[3], LoadState::Error("GitHub API 500".to_string()));
            assert_eq!(transport.requests.borrow().len(), 2);
        }

        #[tokio::test(start_paused = true)]
        async fn test_result_after_teardown_is_dropped() {
            let transport = DelayedTransport {
                inner: ScriptedTransport::default().reply(200, LISTING),
                delay: Duration::from_millis(500),
            };
            let loader = RepositoryLoader::new(transport, SiteConfig::default().github);
            let clock = TokioClock::default();
            let liveness = Liveness::default();
            let published = RefCell::new(Vec::new());

            let run = refresh_repositories(
                &loader,
                &clock,
                Some(Duration::from_secs(60)),
                &liveness,
                |state| published.borrow_mut().push(state),
            );
            let teardown = async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                liveness.invalidate();
            };
            tokio::join!(run, teardown);

            assert_eq!(published.into_inner(), vec![LoadState::Loading]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_without_interval_loads_once() {
            let transport = ScriptedTransport::default().reply(200, "[]");
            let loader = loader(transport.clone());
            let published = RefCell::new(Vec::new());

            refresh_repositories(
                &loader,
                &TokioClock::default(),
                None,
                &Liveness::default(),
                |state| published.borrow_mut().push(state),
            )
            .await;

            assert_eq!(
                published.into_inner(),
                vec![LoadState::Loading, LoadState::Ready(Vec::new())]
            );
            assert_eq!(transport.requests.borrow().len(), 1);
        }
    }
}
