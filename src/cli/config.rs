// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,

    #[serde(rename = "type")]
    pub output_type: Option<String>,

    pub output: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# basecontent.toml - Configuration file for basecontent
# Command line arguments will override these settings

# Input FASTA file path
input = "/path/to/sequences.fasta"

# Output type: json or tsv
type = "tsv"

# Output file path (omit to skip writing)
output = "base_content.tsv"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.input.as_deref(), Some("/path/to/sequences.fasta"));
        assert_eq!(config.output_type.as_deref(), Some("tsv"));
        assert_eq!(config.output.as_deref(), Some("base_content.tsv"));
    }

    #[test]
    fn test_from_file_accepts_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "type = \"json\"").unwrap();
        file.flush().unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.input.is_none());
        assert_eq!(config.output_type.as_deref(), Some("json"));
        assert!(config.output.is_none());
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "type = [not toml").unwrap();
        file.flush().unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
