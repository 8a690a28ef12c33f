use clap::Parser;
use parcel_track::core::ConfigProvider;
use parcel_track::utils::error::ErrorSeverity;
use parcel_track::utils::logger;
use parcel_track::{CliConfig, Command, SweetTrackerClient, Theme, TrackerApp, TrackerError};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting parcel-track CLI");
    if cli.verbose {
        tracing::debug!("CLI command: {:?}", cli.command);
    }

    if !cli.needs_api() {
        print_themes();
        return Ok(());
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    tracing::debug!(
        "Directory endpoint: {}, tracking endpoint: {}",
        config.directory_endpoint(),
        config.tracking_endpoint()
    );

    let client = match SweetTrackerClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => exit_with(e),
    };
    let tracker = Arc::new(client.clone());

    let mut app = TrackerApp::mount(client, tracker).await;
    let controller = app.controller_mut();
    controller.set_theme(config.theme);
    tracing::debug!("Theme {} palette: {:?}", controller.theme(), controller.palette());

    match cli.command {
        Command::Carriers { scope } => {
            if let Some(scope) = scope {
                let (code, name) = scope.default_carrier();
                controller.select_scope(scope, code, name);
            }
            if controller.displayed().is_empty() {
                println!("No carriers available");
            }
            for carrier in controller.displayed() {
                let scope_label = if carrier.international { "국외" } else { "국내" };
                println!("{:>4}  {}  {}", carrier.code, scope_label, carrier.name);
            }
        }
        Command::Track {
            scope,
            carrier,
            invoice,
        } => {
            let (code, name) = scope.default_carrier();
            controller.select_scope(scope, code, name);

            if let Some(code) = carrier {
                if controller.displayed().iter().any(|c| c.code == code) {
                    controller.set_carrier(&code);
                } else {
                    tracing::warn!(
                        "Carrier {} is not listed for {} scope, keeping {}",
                        code,
                        scope,
                        controller.selected_code()
                    );
                }
            }

            let sanitized = controller.set_tracking_number(&invoice).to_string();
            let carrier_name = controller
                .selected_carrier()
                .map(|c| c.name.as_str())
                .unwrap_or_else(|| controller.selected_name());
            println!(
                "🔍 {} {} / {}",
                controller.selected_code(),
                carrier_name,
                sanitized
            );

            // 等待查詢任務結束，讓結果寫入日誌
            if let Err(e) = controller.submit_lookup().await {
                exit_with(TrackerError::from(e));
            }
        }
        Command::Themes => print_themes(),
    }

    Ok(())
}

fn print_themes() {
    for theme in Theme::ALL {
        let palette = theme.palette();
        println!(
            "{:<8} {}  back={} hover={} active={} text={} outline={}",
            theme.id(),
            theme.label(),
            palette.back,
            palette.hover,
            palette.active,
            palette.text,
            palette.outline
        );
    }
}

fn exit_with(e: TrackerError) -> ! {
    tracing::error!(
        "❌ parcel-track failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
