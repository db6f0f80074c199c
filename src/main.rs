use clap::Parser;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{CliConfig, HeadHunter, StatsCollector, SuperJob, LANGUAGES};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; the process environment wins.
    dotenvy::dotenv().ok();

    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vacancy-stats");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let collector = StatsCollector::new(config.retry_policy());

    let hh = HeadHunter::new(config.hh_url.clone());
    let hh_report = collector.collect(&hh, &LANGUAGES).await?;

    let sj = SuperJob::new(config.sj_url.clone(), config.sj_api_key());
    let sj_report = collector.collect(&sj, &LANGUAGES).await?;

    println!("{}", vacancy_stats::report::render("HeadHunter Moscow", &hh_report));
    println!();
    println!("{}", vacancy_stats::report::render("SuperJob Moscow", &sj_report));

    Ok(())
}
