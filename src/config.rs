// src/config.rs
use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default payload ceiling (10 MB). Only a config default; the effective
/// ceiling always comes from `ProcessorSettings`, never a compiled-in check.
pub const DEFAULT_SIZE_CEILING_BYTES: u64 = 10_000_000;

fn default_size_ceiling_bytes() -> u64 {
    DEFAULT_SIZE_CEILING_BYTES
}

/// Settings injected into the pipeline and fetcher at construction time.
#[derive(Deserialize, Debug, Clone)]
pub struct ProcessorSettings {
    /// Base URL of the remote content source, e.g. "https://content.internal/api".
    pub endpoint: String,
    /// Largest payload admitted for processing, in bytes.
    #[serde(default = "default_size_ceiling_bytes")]
    pub size_ceiling_bytes: u64,
}

impl ProcessorSettings {
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(PipelineError::ConfigValidationError(
                "ProcessorSettings: endpoint cannot be empty".to_string(),
            ));
        }
        if self.size_ceiling_bytes == 0 {
            return Err(PipelineError::ConfigValidationError(
                "ProcessorSettings: size_ceiling_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads and parses the processor settings YAML file.
pub fn load_settings<P: AsRef<Path>>(config_path: P) -> Result<ProcessorSettings> {
    let path_ref = config_path.as_ref();
    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to read settings file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    let settings: ProcessorSettings = serde_yaml::from_str(&config_content).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to parse settings YAML from '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Helper to create a temporary settings file with given content
    fn create_temp_settings_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "{}", content).expect("Failed to write to temp file");
        temp_file
    }

    #[test]
    fn test_load_valid_settings() {
        let yaml_content = r#"
endpoint: "https://content.internal/api"
size_ceiling_bytes: 5000000
        "#;
        let temp_file = create_temp_settings_file(yaml_content);
        let settings = load_settings(temp_file.path()).expect("Should load valid settings");
        assert_eq!(settings.endpoint, "https://content.internal/api");
        assert_eq!(settings.size_ceiling_bytes, 5_000_000);
    }

    #[test]
    fn test_size_ceiling_defaults_when_omitted() {
        let yaml_content = r#"
endpoint: "https://content.internal/api"
        "#;
        let temp_file = create_temp_settings_file(yaml_content);
        let settings = load_settings(temp_file.path()).unwrap();
        assert_eq!(settings.size_ceiling_bytes, DEFAULT_SIZE_CEILING_BYTES);
    }

    #[test]
    fn test_load_settings_file_not_found() {
        let result = load_settings("non_existent_settings.yaml");
        assert!(result.is_err());
        match result.err().unwrap() {
            PipelineError::ConfigError(msg) => {
                assert!(msg.contains("Failed to read settings file"));
                assert!(msg.contains("non_existent_settings.yaml"));
            }
            _ => panic!("Expected ConfigError for non-existent file"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_syntax() {
        let yaml_content = r#"
endpoint: "https://content.internal/api
size_ceiling_bytes 5000000
        "#;
        let temp_file = create_temp_settings_file(yaml_content);
        let result = load_settings(temp_file.path());
        assert!(result.is_err(), "Should fail for invalid YAML syntax");
        match result.err().unwrap() {
            PipelineError::ConfigError(msg) => {
                assert!(msg.contains("Failed to parse settings YAML"));
            }
            _ => panic!("Expected ConfigError for invalid YAML syntax"),
        }
    }

    #[test]
    fn test_load_settings_missing_endpoint() {
        let yaml_content = r#"
size_ceiling_bytes: 5000000
        "#;
        let temp_file = create_temp_settings_file(yaml_content);
        let result = load_settings(temp_file.path());
        assert!(result.is_err());
        match result.err().unwrap() {
            PipelineError::ConfigError(msg) => {
                assert!(msg.contains("missing field `endpoint`"));
            }
            _ => panic!("Expected ConfigError for missing endpoint"),
        }
    }

    #[test]
    fn test_validate_empty_endpoint() {
        let settings = ProcessorSettings {
            endpoint: "   ".to_string(),
            size_ceiling_bytes: DEFAULT_SIZE_CEILING_BYTES,
        };
        match settings.validate() {
            Err(PipelineError::ConfigValidationError(msg)) => {
                assert!(msg.contains("endpoint"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_validate_zero_size_ceiling() {
        let settings = ProcessorSettings {
            endpoint: "https://content.internal/api".to_string(),
            size_ceiling_bytes: 0,
        };
        match settings.validate() {
            Err(PipelineError::ConfigValidationError(msg)) => {
                assert!(msg.contains("size_ceiling_bytes"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_settings_rejects_zero_ceiling() {
        let yaml_content = r#"
endpoint: "https://content.internal/api"
size_ceiling_bytes: 0
        "#;
        let temp_file = create_temp_settings_file(yaml_content);
        let result = load_settings(temp_file.path());
        match result {
            Err(PipelineError::ConfigValidationError(msg)) => {
                assert!(msg.contains("size_ceiling_bytes"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other.err()),
        }
    }
}
