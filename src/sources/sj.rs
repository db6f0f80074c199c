use crate::domain::model::{SalaryBounds, VacancyPage};
use crate::domain::ports::JobSource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

const SOURCE_NAME: &str = "SuperJob";
const APP_ID_HEADER: &str = "X-Api-App-Id";
const PROGRAMMING_CATALOGUE: &str = "48";
const MOSCOW_TOWN: &str = "4";
const RUBLE_CODE: &str = "rub";

#[derive(Debug, Deserialize)]
struct SearchPage {
    total: u64,
    objects: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    currency: Option<String>,
    payment_from: Option<u64>,
    payment_to: Option<u64>,
}

fn extract_bounds(vacancy: &Vacancy) -> SalaryBounds {
    match vacancy.currency.as_deref() {
        Some(RUBLE_CODE) => SalaryBounds {
            from: vacancy.payment_from,
            to: vacancy.payment_to,
        },
        _ => SalaryBounds::default(),
    }
}

pub struct SuperJob {
    client: Client,
    base_url: String,
    api_key: String,
    page_size: u64,
}

impl SuperJob {
    /// `api_key` may be empty; the board then rejects every request with an
    /// auth error, which flows through the normal HTTP-error handling.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            page_size: super::PAGE_SIZE,
        }
    }
}

#[async_trait]
impl JobSource for SuperJob {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_page(&self, term: &str, page: u64) -> Result<VacancyPage> {
        let response = self
            .client
            .get(&self.base_url)
            .header(APP_ID_HEADER, &self.api_key)
            .query(&[
                ("keyword", term.to_string()),
                ("id_vacancy", PROGRAMMING_CATALOGUE.to_string()),
                ("town", MOSCOW_TOWN.to_string()),
                ("count", self.page_size.to_string()),
                ("page", page.to_string()),
            ])
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
            found: body.total,
            // The board only reports a grand total; the last page index is
            // derived by integer division against the page size.
            last_page: body.total / self.page_size,
            salaries: body.objects.iter().map(extract_bounds).collect(),
        })
    }
}
