use crate::domain::model::DeviceTypeDeclaration;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Access to the platform's device identity and its undocumented color
/// identifiers. Implementations that have no color API report "unknown".
#[async_trait]
pub trait DeviceInfoProvider: Send + Sync {
    async fn model_code(&self) -> String;

    async fn device_name(&self) -> String;

    /// Raw `(device_color, device_enclosure_color)` token pair.
    async fn raw_colors(&self) -> (String, String);
}

/// Read-only source of the device-type declarations table, resolved once
/// per load. An empty table is a valid degraded state, not an error.
#[async_trait]
pub trait DeclarationSource: Send + Sync {
    async fn load(&self) -> Result<Vec<DeviceTypeDeclaration>>;
}
