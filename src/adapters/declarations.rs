use crate::domain::model::DeviceTypeDeclaration;
use crate::domain::ports::DeclarationSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct DeclarationsFile {
    #[serde(default, rename = "declaration")]
    declarations: Vec<DeviceTypeDeclaration>,
}

/// Declarations table backed by a TOML (`[[declaration]]` array of tables)
/// or JSON (top-level array) file.
///
/// A missing or malformed file degrades to an empty table with a warning;
/// the matcher then reports every device as unknown, which is the expected
/// non-fatal state.
#[derive(Debug, Clone)]
pub struct FileDeclarationSource {
    path: PathBuf,
}

impl FileDeclarationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DeclarationSource for FileDeclarationSource {
    async fn load(&self) -> Result<Vec<DeviceTypeDeclaration>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "declarations file not found, continuing with an empty table"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(parse_declarations(&self.path, &raw))
    }
}

fn parse_declarations(path: &Path, raw: &str) -> Vec<DeviceTypeDeclaration> {
    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            serde_json::from_str::<Vec<DeviceTypeDeclaration>>(raw).map_err(|e| e.to_string())
        }
        _ => toml::from_str::<DeclarationsFile>(raw)
            .map(|file| file.declarations)
            .map_err(|e| e.to_string()),
    };

    match parsed {
        Ok(declarations) => {
            tracing::debug!(
                path = %path.display(),
                count = declarations.len(),
                "loaded device type declarations"
            );
            declarations
        }
        Err(reason) => {
            tracing::warn!(
                path = %path.display(),
                reason = %reason,
                "declarations file is malformed, continuing with an empty table"
            );
            Vec::new()
        }
    }
}

/// In-memory declarations table, for tests and embedded defaults.
#[derive(Debug, Clone, Default)]
pub struct StaticDeclarations {
    declarations: Vec<DeviceTypeDeclaration>,
}

impl StaticDeclarations {
    pub fn new(declarations: Vec<DeviceTypeDeclaration>) -> Self {
        Self { declarations }
    }
}

#[async_trait]
impl DeclarationSource for StaticDeclarations {
    async fn load(&self) -> Result<Vec<DeviceTypeDeclaration>> {
        Ok(self.declarations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_declarations() {
        let raw = r#"
[[declaration]]
description = "iPhone 13 Pro"
identifier = "com.apple.iphone14-2-blue"
model_codes = ["iPhone14,2"]
"#;
        let declarations = parse_declarations(Path::new("types.toml"), raw);
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].description, "iPhone 13 Pro");
        assert_eq!(declarations[0].model_codes, vec!["iPhone14,2"]);
    }

    #[test]
    fn test_parse_json_declarations() {
        let raw = r#"[
            {
                "description": "iPhone 13 Pro",
                "identifier": "com.apple.iphone14-2-blue",
                "model_codes": ["iPhone14,2"]
            }
        ]"#;
        let declarations = parse_declarations(Path::new("types.json"), raw);
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].identifier, "com.apple.iphone14-2-blue");
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        assert!(parse_declarations(Path::new("types.toml"), "not toml [[[").is_empty());
        assert!(parse_declarations(Path::new("types.json"), "{broken").is_empty());
    }

    #[test]
    fn test_missing_model_codes_default_to_empty() {
        let raw = r#"
[[declaration]]
description = "iPhone 13 Pro"
identifier = "com.apple.iphone14-2-blue"
"#;
        let declarations = parse_declarations(Path::new("types.toml"), raw);
        assert_eq!(declarations.len(), 1);
        assert!(declarations[0].model_codes.is_empty());
    }
}
