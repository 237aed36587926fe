use std::fs;

use anyhow::{Context, Result};
use atom_graph::{GraphConfig, TypeDictionary};

use crate::cli::GraphOptions;

/// Resolves the effective graph configuration.
///
/// Starts from the config file (or defaults), then applies command-line
/// overrides, then validates the result.
pub fn build_graph_config(opts: &GraphOptions) -> Result<GraphConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            GraphConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => GraphConfig::default(),
    };

    if let Some(threshold) = opts.threshold {
        config.threshold = threshold;
    }

    if let Some(symbols) = &opts.vocab {
        config.vocabulary = TypeDictionary::new(symbols.iter().copied())
            .context("Invalid --vocab value")?;
    }

    config.validate().context("Invalid graph configuration")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atom_graph::ElementSymbol;
    use std::io::Write;

    fn options() -> GraphOptions {
        GraphOptions {
            config: None,
            threshold: None,
            vocab: None,
        }
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(build_graph_config(&options()).unwrap(), GraphConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 3.0\nvocabulary = [\"C\", \"O\"]").unwrap();

        let opts = GraphOptions {
            config: Some(file.path().to_path_buf()),
            threshold: Some(1.0),
            vocab: None,
        };
        let config = build_graph_config(&opts).unwrap();
        assert_eq!(config.threshold, 1.0);
        assert_eq!(
            config.vocabulary.symbols(),
            &[ElementSymbol::CARBON, ElementSymbol::OXYGEN]
        );
    }

    #[test]
    fn rejects_negative_threshold_flag() {
        let opts = GraphOptions {
            threshold: Some(-2.0),
            ..options()
        };
        assert!(build_graph_config(&opts).is_err());
    }

    #[test]
    fn rejects_duplicate_vocab_flag() {
        let opts = GraphOptions {
            vocab: Some(vec![ElementSymbol::CARBON, ElementSymbol::CARBON]),
            ..options()
        };
        assert!(build_graph_config(&opts).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let opts = GraphOptions {
            config: Some("/nonexistent/agraph.toml".into()),
            ..options()
        };
        assert!(build_graph_config(&opts).is_err());
    }
}
