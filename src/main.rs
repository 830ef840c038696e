use clap::Parser;
use mfc_probe::core::ConfigProvider;
use mfc_probe::utils::logger;
use mfc_probe::{CliConfig, HttpStatusSource, MfcError, Probe, Report};

async fn probe(cli: &CliConfig) -> Result<Report, MfcError> {
    let config = cli.resolve()?;
    tracing::debug!("Probe config: {:?}", config);

    let source = HttpStatusSource::from_config(&config)?;
    let probe = Probe::new(source, config.mbar_divisor())?;
    probe.run().await
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    match probe(&cli).await {
        Ok(report) => print!("{}", report),
        Err(e) => {
            tracing::error!(
                "❌ Probe failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
