use serde::{Deserialize, Serialize};

/// Salary interval of one listing, in rubles. Both ends are `None` when the
/// listing carries no salary or quotes a foreign currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryBounds {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

/// One result page, normalized across boards: the grand total for the term,
/// the index of the last fetchable page, and the salary bounds of every
/// listing on the page.
#[derive(Debug, Clone)]
pub struct VacancyPage {
    pub found: u64,
    pub last_page: u64,
    pub salaries: Vec<SalaryBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Per-language statistics for one board, in query order.
pub type SourceReport = Vec<(String, LanguageStats)>;
