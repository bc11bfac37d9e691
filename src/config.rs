//! Configuration: named experiment definitions
//!
//! Loads experiment definitions from an experiments.yml file so that
//! recurring tests can be run by name. Standalone experiment files
//! (YAML or JSON) are supported for one-off runs.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::experiment::{Experiment, Variant};
use crate::{Error, Result};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "experiments.yml";

#[derive(Debug, Default, Deserialize)]
struct YamlConfig {
    experiments: Option<HashMap<String, ExperimentSpec>>,
}

/// Raw experiment definition as written in files.
#[derive(Debug, Deserialize)]
struct ExperimentSpec {
    name: Option<String>,
    variants: Vec<Variant>,
}

impl ExperimentSpec {
    fn into_experiment(self, fallback_name: &str) -> Result<Experiment> {
        let name = self.name.unwrap_or_else(|| fallback_name.to_string());
        Experiment::from_variants(name, self.variants)
    }
}

/// Named experiment definitions.
#[derive(Debug, Default)]
pub struct Config {
    experiments: HashMap<String, Vec<Variant>>,
    names: Vec<String>,
}

impl Config {
    /// Load from the default config file, or empty when it is absent.
    pub fn new() -> Self {
        Self::load(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Load experiment definitions from a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let yaml: YamlConfig = serde_yaml::from_str(&content)?;

        let mut experiments = HashMap::new();
        let mut names = Vec::new();
        for (name, spec) in yaml.experiments.unwrap_or_default() {
            names.push(name.clone());
            experiments.insert(name, spec.variants);
        }
        names.sort();

        Ok(Self { experiments, names })
    }

    /// Look up an experiment by name, validating variant counts.
    pub fn get_experiment(&self, name: &str) -> Result<Experiment> {
        let variants = self
            .experiments
            .get(name)
            .ok_or_else(|| Error::ExperimentNotFound(name.to_string()))?;
        Experiment::from_variants(name, variants.clone())
    }

    /// Defined experiment names, sorted.
    pub fn experiment_names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

/// Load a standalone experiment file; format is chosen by extension
/// (`.yml`/`.yaml` or `.json`).
pub fn load_experiment_file(path: impl AsRef<Path>) -> Result<Experiment> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("experiment");

    let spec: ExperimentSpec = match path.extension().and_then(|e| e.to_str()) {
        Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        other => {
            return Err(Error::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ))
        }
    };

    spec.into_experiment(stem)
}

/// Sample experiment file contents, used by the `init` command.
pub const SAMPLE_EXPERIMENT: &str = "\
# Sample A/B experiment. The first variant is the control.
name: sample_experiment
variants:
  - name: Control
    visitors: 1000
    conversions: 100
  - name: Variant A
    visitors: 1000
    conversions: 120
";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_new_without_file_is_empty() {
        // The default file is absent in test runs.
        let config = Config::new();
        assert!(config.is_empty() || !config.experiment_names().is_empty());
    }

    #[test]
    fn test_config_load_experiments() {
        let file = temp_file(
            ".yml",
            r#"
experiments:
  homepage_cta:
    variants:
      - name: Control
        visitors: 1000
        conversions: 100
      - name: Variant A
        visitors: 980
        conversions: 118
  pricing_page:
    variants:
      - name: Control
        visitors: 500
        conversions: 40
      - name: Variant A
        visitors: 510
        conversions: 39
"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.experiment_names(), &["homepage_cta", "pricing_page"]);

        let exp = config.get_experiment("homepage_cta").unwrap();
        assert_eq!(exp.name, "homepage_cta");
        assert_eq!(exp.control().visitors, 1000);
        assert_eq!(exp.treatments()[0].conversions, 118);
    }

    #[test]
    fn test_config_get_unknown_experiment() {
        let config = Config::default();
        let result = config.get_experiment("missing");
        assert!(matches!(result, Err(Error::ExperimentNotFound(_))));
    }

    #[test]
    fn test_config_rejects_single_variant_experiment() {
        let file = temp_file(
            ".yml",
            r#"
experiments:
  broken:
    variants:
      - name: Control
        visitors: 100
        conversions: 10
"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert!(matches!(
            config.get_experiment("broken"),
            Err(Error::TooFewVariants { .. })
        ));
    }

    #[test]
    fn test_load_experiment_file_yaml() {
        let file = temp_file(".yaml", SAMPLE_EXPERIMENT);
        let exp = load_experiment_file(file.path()).unwrap();

        assert_eq!(exp.name, "sample_experiment");
        assert_eq!(exp.len(), 2);
        assert_eq!(exp.treatments()[0].conversions, 120);
    }

    #[test]
    fn test_load_experiment_file_json() {
        let file = temp_file(
            ".json",
            r#"{
                "variants": [
                    {"name": "Control", "visitors": 100, "conversions": 10},
                    {"name": "Variant A", "visitors": 100, "conversions": 20}
                ]
            }"#,
        );

        let exp = load_experiment_file(file.path()).unwrap();
        // Name falls back to the file stem.
        assert!(!exp.name.is_empty());
        assert_eq!(exp.treatments()[0].conversions, 20);
    }

    #[test]
    fn test_load_experiment_file_unknown_extension() {
        let file = temp_file(".toml", "variants = []");
        let result = load_experiment_file(file.path());
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_experiment_file_missing() {
        let result = load_experiment_file("no/such/file.yml");
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_sample_experiment_parses() {
        let spec: ExperimentSpec = serde_yaml::from_str(SAMPLE_EXPERIMENT).unwrap();
        let exp = spec.into_experiment("fallback").unwrap();
        assert_eq!(exp.name, "sample_experiment");
    }
}
