pub mod aggregate;
pub mod collector;
pub mod salary;

pub use crate::domain::model::{LanguageStats, SalaryBounds, SourceReport, VacancyPage};
pub use crate::domain::ports::JobSource;
pub use crate::utils::error::Result;
