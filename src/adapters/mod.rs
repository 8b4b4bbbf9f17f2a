// Adapters layer: concrete implementations of the domain ports (declaration
// files, platform device probes, fixed values for tests and CLI overrides).

pub mod declarations;
pub mod device;
