use crate::domain::ports::DeviceInfoProvider;
use async_trait::async_trait;

/// Sentinel reported when the platform exposes no value.
pub const UNKNOWN_TOKEN: &str = "unknown";

/// Provider with fixed values, used for CLI overrides and tests.
#[derive(Debug, Clone)]
pub struct StaticDeviceInfo {
    model_code: String,
    device_name: String,
    device_color: String,
    enclosure_color: String,
}

impl StaticDeviceInfo {
    pub fn new(
        model_code: impl Into<String>,
        device_name: impl Into<String>,
        device_color: impl Into<String>,
        enclosure_color: impl Into<String>,
    ) -> Self {
        Self {
            model_code: model_code.into(),
            device_name: device_name.into(),
            device_color: device_color.into(),
            enclosure_color: enclosure_color.into(),
        }
    }
}

#[async_trait]
impl DeviceInfoProvider for StaticDeviceInfo {
    async fn model_code(&self) -> String {
        self.model_code.clone()
    }

    async fn device_name(&self) -> String {
        self.device_name.clone()
    }

    async fn raw_colors(&self) -> (String, String) {
        (self.device_color.clone(), self.enclosure_color.clone())
    }
}

/// Probes the host for its identity. Linux exposes a hardware model string
/// through the device tree (ARM boards) or DMI (PCs); neither carries color
/// identifiers, so colors degrade to "unknown" here.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default)]
pub struct HostDeviceInfo;

#[cfg(feature = "cli")]
impl HostDeviceInfo {
    const MODEL_PROBE_PATHS: [&'static str; 2] = [
        "/sys/firmware/devicetree/base/model",
        "/sys/devices/virtual/dmi/id/product_name",
    ];

    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "cli")]
#[async_trait]
impl DeviceInfoProvider for HostDeviceInfo {
    async fn model_code(&self) -> String {
        for path in Self::MODEL_PROBE_PATHS {
            if let Ok(raw) = tokio::fs::read_to_string(path).await {
                // Device tree strings are NUL-terminated.
                let model = raw.trim_end_matches('\0').trim();
                if !model.is_empty() {
                    return model.to_string();
                }
            }
        }

        tracing::debug!("no hardware model probe answered");
        UNKNOWN_TOKEN.to_string()
    }

    async fn device_name(&self) -> String {
        sysinfo::System::host_name().unwrap_or_else(|| UNKNOWN_TOKEN.to_string())
    }

    async fn raw_colors(&self) -> (String, String) {
        // No portable counterpart to the undocumented color API.
        (UNKNOWN_TOKEN.to_string(), UNKNOWN_TOKEN.to_string())
    }
}
