use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::JojoError;
use crate::metrics::{DEFAULT_MARKERS, DEFAULT_SATURATION};
use crate::sentiment::LexiconEntry;
use crate::Result;

/// Highest supported number of decimals in reports.
pub const MAX_PRECISION: u32 = 6;

/// File settings. Every section is optional; missing values use defaults.
///
/// ```toml
/// keywords = ["joy metric", "flow"]
///
/// [labels]
/// first = "GPT-4o"
/// second = "Claude"
///
/// [opportunity]
/// markers = ["recommend", "you should"]
/// saturation = 4.0
///
/// [resonance]
/// subjectivity_weight = 0.7
/// polarity_weight = 0.3
///
/// [output]
/// precision = 3
///
/// [sentiment.lexicon]
/// delightful = { polarity = 0.9, subjectivity = 0.9 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub keywords: Vec<String>,
    pub labels: Labels,
    pub opportunity: OpportunityConfig,
    pub resonance: ResonanceConfig,
    pub output: OutputConfig,
    pub sentiment: SentimentConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub first: String,
    pub second: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: "ChatGPT".to_string(),
            second: "Claude".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpportunityConfig {
    pub markers: Vec<String>,
    pub saturation: f64,
}

impl Default for OpportunityConfig {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            saturation: DEFAULT_SATURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResonanceConfig {
    pub subjectivity_weight: f64,
    pub polarity_weight: f64,
}

impl Default for ResonanceConfig {
    fn default() -> Self {
        Self {
            subjectivity_weight: 1.0,
            polarity_weight: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub precision: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SentimentConfig {
    /// Extra or overriding opinion words.
    pub lexicon: HashMap<String, LexiconEntry>,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `~/.config/jojo/config.toml`, when a home directory is known.
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("jojo")
                    .join("config.toml")
            })
    }

    /// Load config from an explicit path, the central config, or defaults.
    /// Priority: explicit path > ~/.config/jojo/config.toml > defaults.
    /// An explicit path that cannot be read is an error; a missing central
    /// config is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .map_err(|e| JojoError::file_access(path, e))?;
            debug!(path = %path.display(), "loaded config");
            return Self::from_toml_str(&content);
        }

        if let Some(central) = Self::central_config_path() {
            if central.is_file() {
                let content = std::fs::read_to_string(&central)
                    .map_err(|e| JojoError::file_access(&central, e))?;
                debug!(path = %central.display(), "loaded central config");
                return Self::from_toml_str(&content);
            }
        }

        debug!("no config file, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        let saturation = self.opportunity.saturation;
        if !saturation.is_finite() || saturation <= 0.0 {
            return Err(JojoError::config(format!(
                "opportunity saturation must be positive, got {saturation}"
            )));
        }
        if self.opportunity.markers.iter().any(|m| m.trim().is_empty()) {
            return Err(JojoError::config(
                "opportunity markers must not contain empty entries",
            ));
        }

        for (name, weight) in [
            ("subjectivity_weight", self.resonance.subjectivity_weight),
            ("polarity_weight", self.resonance.polarity_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(JojoError::config(format!(
                    "resonance {name} must be finite and non-negative, got {weight}"
                )));
            }
        }

        if self.output.precision > MAX_PRECISION {
            return Err(JojoError::config(format!(
                "output precision must be at most {MAX_PRECISION}, got {}",
                self.output.precision
            )));
        }

        for (word, entry) in &self.sentiment.lexicon {
            if word.trim().is_empty() {
                return Err(JojoError::config("sentiment lexicon words must not be empty"));
            }
            if !(-1.0..=1.0).contains(&entry.polarity)
                || !(0.0..=1.0).contains(&entry.subjectivity)
            {
                return Err(JojoError::config(format!(
                    "sentiment lexicon entry '{word}' out of range (polarity -1..1, subjectivity 0..1)"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_values_match_expected() {
        let cfg = Config::default();

        assert!(cfg.keywords.is_empty());
        assert_eq!(cfg.labels.first, "ChatGPT");
        assert_eq!(cfg.labels.second, "Claude");
        assert_eq!(cfg.opportunity.markers.len(), DEFAULT_MARKERS.len());
        assert!((cfg.opportunity.saturation - 5.0).abs() < f64::EPSILON);
        assert!((cfg.resonance.subjectivity_weight - 1.0).abs() < f64::EPSILON);
        assert!(cfg.resonance.polarity_weight.abs() < f64::EPSILON);
        assert_eq!(cfg.output.precision, 2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = Config::from_toml_str(
            r#"
keywords = ["flow", "joy metric"]

[labels]
first = "GPT-4o"

[resonance]
polarity_weight = 0.5
"#,
        )
        .expect("parse config");

        assert_eq!(cfg.keywords, vec!["flow", "joy metric"]);
        assert_eq!(cfg.labels.first, "GPT-4o");
        assert_eq!(cfg.labels.second, "Claude");
        assert!((cfg.resonance.subjectivity_weight - 1.0).abs() < f64::EPSILON);
        assert!((cfg.resonance.polarity_weight - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.output.precision, 2);
    }

    #[test]
    fn lexicon_entries_parse_as_inline_tables() {
        let cfg = Config::from_toml_str(
            r#"
[sentiment.lexicon]
delightful = { polarity = 0.9, subjectivity = 0.8 }
"#,
        )
        .expect("parse config");
        let entry = cfg.sentiment.lexicon.get("delightful").expect("entry");
        assert!((entry.polarity - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_toml_str("treshold = 0.5\n").unwrap_err();
        assert!(matches!(err, JojoError::Toml(_)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut cfg = Config::default();
        cfg.opportunity.saturation = 0.0;
        assert!(cfg.validate().unwrap_err().to_string().contains("saturation"));

        let mut cfg = Config::default();
        cfg.resonance.polarity_weight = -1.0;
        assert!(cfg.validate().unwrap_err().to_string().contains("polarity_weight"));

        let mut cfg = Config::default();
        cfg.output.precision = 9;
        assert!(cfg.validate().unwrap_err().to_string().contains("precision"));

        let mut cfg = Config::default();
        cfg.opportunity.markers.push("  ".to_string());
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.sentiment.lexicon.insert(
            "meh".to_string(),
            LexiconEntry {
                polarity: 2.0,
                subjectivity: 0.5,
            },
        );
        assert!(cfg.validate().unwrap_err().to_string().contains("meh"));
    }

    #[test]
    fn load_reads_explicit_path() {
        let mut file = NamedTempFile::new().expect("temp config");
        writeln!(file, "[output]\nprecision = 4").expect("write config");

        let cfg = Config::load(Some(file.path())).expect("load config");
        assert_eq!(cfg.output.precision, 4);
    }

    #[test]
    fn load_fails_for_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/definitely/not/here/jojo.toml"))).unwrap_err();
        assert!(matches!(err, JojoError::FileAccess { .. }));
    }
}
