// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Config, ContentArgs};

impl ContentArgs {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        if self.input.is_none() {
            self.input = config.input;
        }

        // Only override the default, not an explicit CLI value
        if self.output_type == "tsv" && config.output_type.is_some() {
            self.output_type = config.output_type.unwrap();
        }

        if self.output.is_none() {
            self.output = config.output;
        }

        self
    }

    /// Load a configuration file and merge it into these arguments
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: Option<&str>, output_type: &str, output: Option<&str>) -> ContentArgs {
        ContentArgs {
            input: input.map(String::from),
            output_type: output_type.to_string(),
            output: output.map(String::from),
            config: None,
            generate_config: false,
        }
    }

    fn config(input: Option<&str>, output_type: Option<&str>, output: Option<&str>) -> Config {
        Config {
            input: input.map(String::from),
            output_type: output_type.map(String::from),
            output: output.map(String::from),
        }
    }

    #[test]
    fn test_config_fills_unset_arguments() {
        let merged = args(None, "tsv", None)
            .merge_with_config(config(Some("in.fasta"), Some("json"), Some("out.json")));

        assert_eq!(merged.input.as_deref(), Some("in.fasta"));
        assert_eq!(merged.output_type, "json");
        assert_eq!(merged.output.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_cli_arguments_take_precedence() {
        let merged = args(Some("cli.fasta"), "json", Some("cli.json"))
            .merge_with_config(config(Some("cfg.fasta"), Some("tsv"), Some("cfg.tsv")));

        assert_eq!(merged.input.as_deref(), Some("cli.fasta"));
        assert_eq!(merged.output_type, "json");
        assert_eq!(merged.output.as_deref(), Some("cli.json"));
    }

    #[test]
    fn test_empty_config_changes_nothing() {
        let merged = args(Some("cli.fasta"), "tsv", None).merge_with_config(Config::new());

        assert_eq!(merged.input.as_deref(), Some("cli.fasta"));
        assert_eq!(merged.output_type, "tsv");
        assert!(merged.output.is_none());
    }
}
