use cep_race::app::startup::{self, EXIT_CONFIG, EXIT_USAGE};
use cep_race::utils::{logger, validation::Validate};
use cep_race::{CliConfig, ConsolePresenter, LookupRequest, Presenter};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if std::env::var("CEP_RACE_LOG_FORMAT").is_ok_and(|format| format == "json") {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger();
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(EXIT_USAGE);
    }

    let coordinator = match startup::prepare() {
        Ok(coordinator) => coordinator,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(EXIT_CONFIG);
        }
    };

    let request = LookupRequest::new(cli.cep.trim());
    let outcome = coordinator.race(&request).await;

    let mut stdout = std::io::stdout().lock();
    ConsolePresenter.present(&outcome, &mut stdout)?;

    let exit_code = outcome.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
