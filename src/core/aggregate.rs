use crate::core::salary::estimate;
use crate::domain::ports::JobSource;
use crate::utils::error::{Result, StatsError};
use std::time::Duration;
use tokio::time::sleep;

/// Connection-failure handling for one page request.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Attempts per page before giving up on the whole term.
    pub max_attempts: u32,
    /// Pause between attempts.
    pub pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            pause: Duration::from_secs(15),
        }
    }
}

/// Running totals for one search term across all its pages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TermTotals {
    pub found: u64,
    pub processed: u64,
    pub summed_estimates: f64,
}

pub struct PageAggregator<'a, S: JobSource> {
    source: &'a S,
    retry: RetryPolicy,
}

impl<'a, S: JobSource> PageAggregator<'a, S> {
    pub fn new(source: &'a S, retry: RetryPolicy) -> Self {
        Self { source, retry }
    }

    /// Walk every result page for `term` and fold the salary estimates into
    /// running totals.
    ///
    /// Per page: a transport failure pauses and re-requests the same page
    /// index (bounded by the retry policy); a non-success status skips the
    /// page without retrying it. The termination check runs on every
    /// iteration against the last page index reported by the most recent
    /// successful response, which starts at 0 and persists across skipped
    /// pages.
    pub async fn run(&self, term: &str) -> Result<TermTotals> {
        let mut totals = TermTotals::default();
        let mut last_page = 0u64;
        let mut page = 0u64;
        let mut attempts = 0u32;

        loop {
            match self.source.fetch_page(term, page).await {
                Ok(body) => {
                    attempts = 0;
                    totals.found = body.found;
                    last_page = body.last_page;
                    for bounds in &body.salaries {
                        if let Some(salary) = estimate(bounds.from, bounds.to) {
                            totals.summed_estimates += salary;
                            totals.processed += 1;
                        }
                    }
                    tracing::debug!(
                        "{}: '{}' page {}/{} done, {} processed so far",
                        self.source.name(),
                        term,
                        page,
                        last_page,
                        totals.processed
                    );
                }
                Err(StatsError::Request(err)) if err.is_connect() || err.is_timeout() => {
                    attempts += 1;
                    if attempts >= self.retry.max_attempts {
                        return Err(StatsError::RetryExhausted {
                            term: term.to_string(),
                            page,
                            attempts,
                        });
                    }
                    tracing::warn!(
                        "{}: network failure on '{}' page {}: {}",
                        self.source.name(),
                        term,
                        page,
                        err
                    );
                    sleep(self.retry.pause).await;
                    // Same page index again.
                    continue;
                }
                Err(StatsError::HttpStatus { status, .. }) => {
                    // Skipped, not retried; counters untouched.
                    tracing::warn!(
                        "{}: '{}' page {} failed with {}, skipping",
                        self.source.name(),
                        term,
                        page,
                        status
                    );
                }
                Err(other) => return Err(other),
            }

            if page >= last_page {
                break;
            }
            page += 1;
        }

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SalaryBounds, VacancyPage};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Scripted board: fails the first `failures` requests with a real
    /// connect error, then serves `pages` in order of requested index,
    /// recording every requested page.
    struct ScriptedSource {
        pages: Vec<VacancyPage>,
        failures: Mutex<u32>,
        requested: Mutex<Vec<u64>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<VacancyPage>, failures: u32) -> Self {
            Self {
                pages,
                failures: Mutex::new(failures),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<u64> {
            self.requested.lock().unwrap().clone()
        }

        // Nothing is listening on port 9; gives a genuine connect error.
        async fn connect_error() -> reqwest::Error {
            reqwest::Client::new()
                .get("http://127.0.0.1:9/")
                .send()
                .await
                .unwrap_err()
        }
    }

    #[async_trait]
    impl JobSource for ScriptedSource {
        fn name(&self) -> &'static str {
            "Scripted"
        }

        async fn fetch_page(&self, _term: &str, page: u64) -> Result<VacancyPage> {
            self.requested.lock().unwrap().push(page);
            let fail = {
                let mut failures = self.failures.lock().unwrap();
                if *failures > 0 {
                    *failures -= 1;
                    true
                } else {
                    false
                }
            };
            if fail {
                return Err(StatsError::Request(Self::connect_error().await));
            }
            Ok(self.pages[page as usize].clone())
        }
    }

    fn page(found: u64, last_page: u64, salaries: Vec<SalaryBounds>) -> VacancyPage {
        VacancyPage {
            found,
            last_page,
            salaries,
        }
    }

    fn bounds(from: Option<u64>, to: Option<u64>) -> SalaryBounds {
        SalaryBounds { from, to }
    }

    fn fast_retry() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            pause: Duration::from_millis(50),
        }
    }

    #[tokio::test]
    async fn test_single_page_term_issues_one_request() {
        let source = ScriptedSource::new(
            vec![page(2, 0, vec![bounds(Some(100), Some(200))])],
            0,
        );

        let totals = PageAggregator::new(&source, fast_retry())
            .run("Python")
            .await
            .unwrap();

        assert_eq!(source.requested(), vec![0]);
        assert_eq!(totals.found, 2);
        assert_eq!(totals.processed, 1);
        assert_eq!(totals.summed_estimates, 200.0);
    }

    #[tokio::test]
    async fn test_walks_pages_up_to_last_page_inclusive() {
        let source = ScriptedSource::new(
            vec![
                page(150, 1, vec![bounds(Some(100), None)]),
                page(150, 1, vec![bounds(None, Some(100))]),
            ],
            0,
        );

        let totals = PageAggregator::new(&source, fast_retry())
            .run("Go")
            .await
            .unwrap();

        assert_eq!(source.requested(), vec![0, 1]);
        assert_eq!(totals.processed, 2);
        assert_eq!(totals.summed_estimates, 200.0);
    }

    #[tokio::test]
    async fn test_listings_without_salary_are_not_processed() {
        let source = ScriptedSource::new(
            vec![page(3, 0, vec![
                bounds(None, None),
                bounds(Some(1000), Some(3000)),
                bounds(None, None),
            ])],
            0,
        );

        let totals = PageAggregator::new(&source, fast_retry())
            .run("Ruby")
            .await
            .unwrap();

        assert_eq!(totals.found, 3);
        assert_eq!(totals.processed, 1);
        assert_eq!(totals.summed_estimates, 2500.0);
    }

    #[tokio::test]
    async fn test_connect_failure_pauses_and_retries_same_page() {
        let source = ScriptedSource::new(
            vec![page(1, 0, vec![bounds(Some(1000), Some(3000))])],
            1,
        );
        let retry = fast_retry();

        let started = Instant::now();
        let totals = PageAggregator::new(&source, retry)
            .run("Python")
            .await
            .unwrap();

        // Page 0 again, not page 1, and only after the pause.
        assert_eq!(source.requested(), vec![0, 0]);
        assert!(started.elapsed() >= retry.pause);
        assert_eq!(totals.processed, 1);
    }

    #[tokio::test]
    async fn test_connect_failures_beyond_policy_give_up() {
        let source = ScriptedSource::new(vec![page(1, 0, vec![])], 10);

        let err = PageAggregator::new(&source, fast_retry())
            .run("Scala")
            .await
            .unwrap_err();

        match err {
            StatsError::RetryExhausted {
                term,
                page,
                attempts,
            } => {
                assert_eq!(term, "Scala");
                assert_eq!(page, 0);
                assert_eq!(attempts, 3);
            }
            other => panic!("expected RetryExhausted, got {other:?}"),
        }
        assert_eq!(source.requested(), vec![0, 0, 0]);
    }
}
