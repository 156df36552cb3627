use std::path::Path;

use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum FileExtensionError {
    #[error("Failed to get file extension")]
    MissingFileExtension,
    #[error("Unsupported file extension for file: {0}")]
    UnsupportedFileExtension(String),
}

pub type FileFormatResult<T> = Result<T, FileExtensionError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigParseError {
    #[error("YAML parsing failed")]
    Yaml(#[from] serde_yml::Error),
    #[error("JSON parsing failed")]
    Json(#[from] serde_json::Error),
}

pub fn get_file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|os_str| os_str.to_str())
}

/// Text formats accepted for configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> FileFormatResult<Self> {
        let ext = get_file_extension(path).ok_or(FileExtensionError::MissingFileExtension)?;

        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Ok(Self::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(FileExtensionError::UnsupportedFileExtension(
                path.display().to_string(),
            ))
        }
    }

    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, ConfigParseError> {
        match self {
            Self::Yaml => Ok(serde_yml::from_str(text)?),
            Self::Json => Ok(serde_json::from_str(text)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Sample {
        name: String,
        level: u32,
    }

    #[test]
    fn detects_format_case_insensitively() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/denoise.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("denoise.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("denoise.Json")).unwrap(),
            ConfigFormat::Json
        );
    }

    #[test]
    fn rejects_missing_and_unknown_extensions() {
        assert!(matches!(
            ConfigFormat::from_path(Path::new("denoise")),
            Err(FileExtensionError::MissingFileExtension)
        ));
        assert!(matches!(
            ConfigFormat::from_path(Path::new("denoise.toml")),
            Err(FileExtensionError::UnsupportedFileExtension(_))
        ));
    }

    #[test]
    fn parses_both_formats() {
        let expected = Sample {
            name: "median".to_string(),
            level: 3,
        };
        let yaml: Sample = ConfigFormat::Yaml.parse("name: median\nlevel: 3\n").unwrap();
        let json: Sample = ConfigFormat::Json
            .parse(r#"{"name": "median", "level": 3}"#)
            .unwrap();
        assert_eq!(yaml, expected);
        assert_eq!(json, expected);
    }

    #[test]
    fn reports_parse_errors() {
        let result: Result<Sample, _> = ConfigFormat::Json.parse("{ not json");
        assert!(matches!(result, Err(ConfigParseError::Json(_))));
    }
}
