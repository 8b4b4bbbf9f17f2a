use clap::Parser;
use device_colors::adapters::device::HostDeviceInfo;
use device_colors::core::palette;
use device_colors::domain::model::Rgb;
use device_colors::domain::ports::DeviceInfoProvider;
use device_colors::utils::{logger, validation::Validate};
use device_colors::{
    CliConfig, DeviceColorReport, FileDeclarationSource, ReportEngine, StaticDeviceInfo,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting device-colors CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let provider = resolve_provider(&config).await;
    let declarations = FileDeclarationSource::new(&config.declarations_path);
    let engine = ReportEngine::new(provider, declarations);

    match engine.load_report().await {
        Ok(report) => print_report(&report, &config)?,
        Err(e) => {
            tracing::error!("Report load failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Probes the host, then lets CLI overrides replace individual fields so a
/// report can be reproduced for any device.
async fn resolve_provider(config: &CliConfig) -> StaticDeviceInfo {
    let host = HostDeviceInfo::new();
    let (host_device_color, host_enclosure_color) = host.raw_colors().await;

    let model_code = match &config.model_code {
        Some(code) => code.clone(),
        None => host.model_code().await,
    };
    let device_name = match &config.device_name {
        Some(name) => name.clone(),
        None => host.device_name().await,
    };

    StaticDeviceInfo::new(
        model_code,
        device_name,
        config.device_color.clone().unwrap_or(host_device_color),
        config
            .enclosure_color
            .clone()
            .unwrap_or(host_enclosure_color),
    )
}

fn print_report(report: &DeviceColorReport, config: &CliConfig) -> device_colors::Result<()> {
    if config.share {
        println!("{}", report.share_text());
        return Ok(());
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Device:               {}", report.device_name);
    println!("Model code:           {}", report.model_code);
    println!("Type:                 {}", report.model_name);
    println!(
        "DeviceColor:          {}  {}",
        report.device_color,
        swatch_summary(&report.device_color)
    );
    println!(
        "DeviceEnclosureColor: {}  {}",
        report.device_enclosure_color,
        swatch_summary(&report.device_enclosure_color)
    );

    Ok(())
}

fn swatch_summary(token: &str) -> String {
    let background = palette::display_color(token);
    let foreground = if palette::foreground_color(token) == Rgb::WHITE {
        "white"
    } else {
        "black"
    };

    format!("(swatch {}, {} text)", background.to_hex_string(), foreground)
}
