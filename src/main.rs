use anyhow::Context;
use clap::Parser;
use geofilter::utils::{logger, validation::Validate};
use geofilter::{CliConfig, FaultKind, GeofilterEngine, GeofilterError, LocalStorage};
use std::io::Write;

fn report_failure(e: &GeofilterError) -> ! {
    match e.fault_kind() {
        FaultKind::Parse => tracing::warn!("❌ Input rejected: {}", e),
        // 完整錯誤只寫進日誌，使用者只看到通用訊息
        FaultKind::Unexpected => tracing::error!(
            "❌ Geofilter failed: {} (Category: {:?})",
            e,
            e.category()
        ),
    }
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting geofilter");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => report_failure(&e),
    };

    let engine = GeofilterEngine::new(LocalStorage::default(), settings);
    match engine.run() {
        Ok(report) => {
            match &report.written_to {
                Some(path) => {
                    tracing::info!("✅ {} customers saved to: {}", report.customers, path);
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout
                        .write_all(&report.rendered)
                        .and_then(|_| stdout.flush())
                        .context("failed to write results to stdout")?;
                    tracing::info!("✅ {} customers written", report.customers);
                }
            }
            Ok(())
        }
        Err(e) => report_failure(&e),
    }
}
