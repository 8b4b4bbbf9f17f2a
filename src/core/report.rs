use crate::core::matcher::matching_device_type;
use crate::domain::model::DeviceColorReport;
use crate::domain::ports::{DeclarationSource, DeviceInfoProvider};
use crate::utils::error::Result;

/// Label substituted when the declarations table has no entry for the
/// device's model code.
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// One-shot assembly of a [`DeviceColorReport`] from the injected device
/// info provider and declarations source.
pub struct ReportEngine<P: DeviceInfoProvider, D: DeclarationSource> {
    provider: P,
    declarations: D,
}

impl<P: DeviceInfoProvider, D: DeclarationSource> ReportEngine<P, D> {
    pub fn new(provider: P, declarations: D) -> Self {
        Self {
            provider,
            declarations,
        }
    }

    pub async fn load_report(&self) -> Result<DeviceColorReport> {
        let model_code = self.provider.model_code().await;
        let (device_color, enclosure_color) = self.provider.raw_colors().await;
        let color_token = matching_color_token(&enclosure_color, &device_color);

        let declarations = self.declarations.load().await?;
        tracing::debug!(
            model_code = %model_code,
            color_token = %color_token,
            declarations = declarations.len(),
            "resolving device type"
        );

        let model_name = matching_device_type(&model_code, &color_token, &declarations)
            .map(|declaration| declaration.description.clone())
            .unwrap_or_else(|| UNKNOWN_DEVICE.to_string());

        let device_name = display_device_name(&self.provider.device_name().await, &model_name);

        Ok(DeviceColorReport {
            device_name,
            model_name,
            model_code,
            device_color,
            device_enclosure_color: enclosure_color,
        })
    }
}

/// Token used for suffix-matching declaration identifiers: the preferred
/// raw token (enclosure when it carries data, else device color) with every
/// hash mark removed, lowercased.
fn matching_color_token(enclosure_color: &str, device_color: &str) -> String {
    let trimmed = enclosure_color.trim();
    let base = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        device_color
    } else {
        trimmed
    };

    base.replace('#', "").to_ascii_lowercase()
}

fn display_device_name(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("unknown") {
        return fallback.to_string();
    }

    trimmed.to_string()
}
