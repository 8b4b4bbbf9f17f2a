use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "device-colors")]
#[command(about = "Read device color identifiers and report them with a matched device type")]
pub struct CliConfig {
    #[arg(long, default_value = "./declarations/DeviceTypeDeclarations.toml")]
    pub declarations_path: String,

    #[arg(long, help = "Override the device color token (e.g. blue or #3b3b3c)")]
    pub device_color: Option<String>,

    #[arg(long, help = "Override the device enclosure color token")]
    pub enclosure_color: Option<String>,

    #[arg(long, help = "Override the hardware model code (e.g. iPhone14,2)")]
    pub model_code: Option<String>,

    #[arg(long, help = "Override the device display name")]
    pub device_name: Option<String>,

    #[arg(long, help = "Print the shareable report text instead of the table")]
    pub share: bool,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("declarations_path", &self.declarations_path)?;

        if let Some(model_code) = &self.model_code {
            validate_non_empty_string("model_code", model_code)?;
        }
        if let Some(device_name) = &self.device_name {
            validate_non_empty_string("device_name", device_name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig::parse_from(["device-colors"])
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_empty_overrides_are_rejected() {
        let mut config = base_config();
        config.model_code = Some("  ".to_string());
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.declarations_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_overrides_are_never_rejected() {
        // Color tokens are total inputs; even junk resolves to a fallback.
        let config = CliConfig::parse_from([
            "device-colors",
            "--device-color",
            "",
            "--enclosure-color",
            "##not-a-color",
        ]);
        assert!(config.validate().is_ok());
    }
}
