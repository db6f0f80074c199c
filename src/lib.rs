pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod sources;
pub mod utils;

pub use config::CliConfig;
pub use core::aggregate::{PageAggregator, RetryPolicy};
pub use core::collector::{StatsCollector, LANGUAGES};
pub use domain::model::{LanguageStats, SalaryBounds, SourceReport, VacancyPage};
pub use domain::ports::JobSource;
pub use sources::{HeadHunter, SuperJob};
pub use utils::error::{Result, StatsError};
