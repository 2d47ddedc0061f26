use clap::Parser;
use pwa_assets::app;
use pwa_assets::utils::logger;
use pwa_assets::CliConfig;

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting pwa-assets");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = app::run(&config) {
        let failure = app::describe_failure(&e);
        tracing::error!(
            "❌ Asset generation failed: {} (exit code {})",
            failure.message,
            failure.exit_code
        );

        eprintln!("❌ {}", failure.message);
        if let Some(suggestion) = failure.suggestion {
            eprintln!("💡 Suggestion: {}", suggestion);
        }
        std::process::exit(failure.exit_code);
    }
}
