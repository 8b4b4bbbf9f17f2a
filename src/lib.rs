pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::declarations::{FileDeclarationSource, StaticDeclarations};
pub use adapters::device::StaticDeviceInfo;
pub use core::report::ReportEngine;
pub use domain::model::{DeviceColorReport, DeviceTypeDeclaration, Rgb};
pub use utils::error::{ReportError, Result};
