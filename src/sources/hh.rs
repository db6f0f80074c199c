use crate::domain::model::{SalaryBounds, VacancyPage};
use crate::domain::ports::JobSource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://api.hh.ru/vacancies";

const SOURCE_NAME: &str = "HeadHunter";
const USER_AGENT: &str = "vacancy-stats/0.1";
const MOSCOW_AREA: &str = "1";
const PROGRAMMING_SPECIALIZATION: &str = "1.221";
const RUBLE_CODE: &str = "RUR";
// hh.ru answers slowly under load; superjob gets no explicit timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SearchPage {
    found: u64,
    pages: u64,
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    currency: Option<String>,
    from: Option<u64>,
    to: Option<u64>,
}

fn extract_bounds(vacancy: &Vacancy) -> SalaryBounds {
    match &vacancy.salary {
        Some(salary) if salary.currency.as_deref() == Some(RUBLE_CODE) => SalaryBounds {
            from: salary.from,
            to: salary.to,
        },
        _ => SalaryBounds::default(),
    }
}

pub struct HeadHunter {
    client: Client,
    base_url: String,
    page_size: u64,
}

impl HeadHunter {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            page_size: super::PAGE_SIZE,
        }
    }
}

#[async_trait]
impl JobSource for HeadHunter {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_page(&self, term: &str, page: u64) -> Result<VacancyPage> {
        let response = self
            .client
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("text", term.to_string()),
                ("area", MOSCOW_AREA.to_string()),
                ("specialization", PROGRAMMING_SPECIALIZATION.to_string()),
                ("only_with_salary", "true".to_string()),
                ("page", page.to_string()),
                ("per_page", self.page_size.to_string()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::HttpStatus {
                source_name: SOURCE_NAME,
                term: term.to_string(),
                page,
                status,
            });
        }

        let body: SearchPage = response.json().await.map_err(|err| {
            if err.is_decode() {
                StatsError::MalformedResponse {
                    source_name: SOURCE_NAME,
                    detail: err.to_string(),
                }
            } else {
                StatsError::Request(err)
            }
        })?;

        Ok(VacancyPage {
            found: body.found,
            // `pages` is a page count; the last fetchable index is one less.
            last_page: body.pages.saturating_sub(1),
            salaries: body.items.iter().map(extract_bounds).collect(),
        })
    }
}
