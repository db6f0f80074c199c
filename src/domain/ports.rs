use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// One job board. Implementations own their HTTP client, query fixtures and
/// salary-field schema, and hand back pages in the normalized shape.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Board name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetch one result page for a search term.
    ///
    /// Non-success statuses come back as `StatsError::HttpStatus`, transport
    /// failures as `StatsError::Request`; the caller decides how each is
    /// handled.
    async fn fetch_page(&self, term: &str, page: u64) -> Result<VacancyPage>;
}
