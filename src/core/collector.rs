use crate::core::aggregate::{PageAggregator, RetryPolicy};
use crate::domain::model::{LanguageStats, SourceReport};
use crate::domain::ports::JobSource;
use crate::utils::error::Result;

/// The search-term set, in report order. Spelled the way the boards index
/// them; not configurable.
pub const LANGUAGES: [&str; 10] = [
    "Python", "Java", "Javascript", "Ruby", "C#", "C++", "Go", "Scala", "PHP", "Kotlin",
];

pub struct StatsCollector {
    retry: RetryPolicy,
}

impl StatsCollector {
    pub fn new(retry: RetryPolicy) -> Self {
        Self { retry }
    }

    /// Aggregate every term against one board, sequentially, and return the
    /// per-language statistics in term order.
    pub async fn collect<S: JobSource>(&self, source: &S, terms: &[&str]) -> Result<SourceReport> {
        let mut report = SourceReport::with_capacity(terms.len());

        for term in terms {
            tracing::info!("{}: collecting '{}'", source.name(), term);
            let totals = PageAggregator::new(source, self.retry).run(term).await?;

            let average_salary = if totals.processed > 0 {
                (totals.summed_estimates / totals.processed as f64).floor() as u64
            } else {
                0
            };

            report.push((
                term.to_string(),
                LanguageStats {
                    vacancies_found: totals.found,
                    vacancies_processed: totals.processed,
                    average_salary,
                },
            ));
        }

        Ok(report)
    }
}
