use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::aggregate::RetryPolicy;
use crate::sources::{hh, sj};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

/// Environment variable holding the SuperJob application credential.
pub const SJ_API_KEY_VAR: &str = "API_KEY_SJ";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programmer salaries from HeadHunter and SuperJob")]
pub struct CliConfig {
    #[arg(long, default_value = hh::DEFAULT_URL)]
    pub hh_url: String,

    #[arg(long, default_value = sj::DEFAULT_URL)]
    pub sj_url: String,

    #[arg(
        long,
        default_value = "5",
        help = "Connection attempts per page before giving up"
    )]
    pub max_attempts: u32,

    #[arg(
        long,
        default_value = "15",
        help = "Seconds to wait before retrying after a network failure"
    )]
    pub retry_pause_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            pause: Duration::from_secs(self.retry_pause_secs),
        }
    }

    /// SuperJob credential from the environment, empty when unset. An empty
    /// key is passed along as-is and fails server-side into the HTTP-error
    /// branch.
    pub fn sj_api_key(&self) -> String {
        std::env::var(SJ_API_KEY_VAR).unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hh_url", &self.hh_url)?;
        validate_url("sj_url", &self.sj_url)?;
        validate_positive_number("max_attempts", self.max_attempts as u64, 1)?;
        Ok(())
    }
}
