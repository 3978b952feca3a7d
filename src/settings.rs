use std::path::Path;

use jojo_lib::{load_keywords, Config, JojoError, KeywordSet};
use tracing::debug;

use crate::cli::KeywordArgs;

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub first_label: String,
    pub second_label: String,
    pub keywords: KeywordSet,
}

/// Merge CLI arguments with config file, preferring CLI when flags are present.
///
/// Keywords given on the command line (inline and/or from a file) replace the
/// config keywords rather than adding to them.
pub fn resolve_settings(
    cli_first_label: Option<String>,
    cli_second_label: Option<String>,
    cli_keywords: &KeywordArgs,
    config: &Config,
) -> Result<ResolvedSettings, JojoError> {
    let keywords = if cli_keywords.keywords.is_some() || cli_keywords.keywords_file.is_some() {
        let mut set: KeywordSet = cli_keywords.keywords.iter().flatten().collect();
        if let Some(path) = &cli_keywords.keywords_file {
            set.extend(load_keywords(path)?.display_names());
        }
        set
    } else {
        config.keywords.iter().collect()
    };

    Ok(ResolvedSettings {
        first_label: cli_first_label.unwrap_or_else(|| config.labels.first.clone()),
        second_label: cli_second_label.unwrap_or_else(|| config.labels.second.clone()),
        keywords,
    })
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/jojo/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, JojoError> {
    let cfg = Config::load(path).map_err(|e| match e {
        JojoError::Toml(err) => {
            let loc = path
                .map(|p| p.display().to_string())
                .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
                .unwrap_or_else(|| "defaults".to_string());
            JojoError::Config(format!("Failed to parse config {}: {}", loc, err))
        }
        other => other,
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        JojoError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective config as a single-line string.
pub fn format_effective_config(
    settings: &ResolvedSettings,
    config: &Config,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: labels={}/{}, keywords=[{}], markers={}, saturation={:.2}, resonance: subjectivity={:.2}, polarity={:.2}, precision={}, lexicon_overrides={}",
        settings.first_label,
        settings.second_label,
        settings.keywords.display_names().join(", "),
        config.opportunity.markers.len(),
        config.opportunity.saturation,
        config.resonance.subjectivity_weight,
        config.resonance.polarity_weight,
        config.output.precision,
        config.sentiment.lexicon.len(),
    )
}

/// Log effective config (visible with --verbose).
pub fn log_effective_config(
    settings: &ResolvedSettings,
    config: &Config,
    config_source: Option<&Path>,
) {
    debug!("{}", format_effective_config(settings, config, config_source));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn keyword_args(inline: Option<&[&str]>, file: Option<PathBuf>) -> KeywordArgs {
        KeywordArgs {
            keywords: inline.map(|k| k.iter().map(|s| s.to_string()).collect()),
            keywords_file: file,
        }
    }

    #[test]
    fn resolve_settings_prefers_config_when_flags_absent() {
        let mut cfg = Config::default();
        cfg.labels.first = "GPT".to_string();
        cfg.labels.second = "Sonnet".to_string();
        cfg.keywords = vec!["flow".to_string(), "Flow".to_string(), "joy".to_string()];

        let resolved =
            resolve_settings(None, None, &keyword_args(None, None), &cfg).expect("resolve");

        assert_eq!(resolved.first_label, "GPT");
        assert_eq!(resolved.second_label, "Sonnet");
        assert_eq!(resolved.keywords.display_names(), vec!["flow", "joy"]);
    }

    #[test]
    fn resolve_settings_prefers_cli_when_flags_present() {
        let mut cfg = Config::default();
        cfg.keywords = vec!["from-config".to_string()];

        let mut file = NamedTempFile::new().expect("keyword file");
        writeln!(file, "# extra\nactionable suggestions\nflow").expect("write keywords");

        let resolved = resolve_settings(
            Some("A".to_string()),
            Some("B".to_string()),
            &keyword_args(Some(&["flow", " joy metric "]), Some(file.path().to_path_buf())),
            &cfg,
        )
        .expect("resolve");

        assert_eq!(resolved.first_label, "A");
        assert_eq!(resolved.second_label, "B");
        assert_eq!(
            resolved.keywords.display_names(),
            vec!["flow", "joy metric", "actionable suggestions"]
        );
    }

    #[test]
    fn resolve_settings_surfaces_missing_keyword_file() {
        let err = resolve_settings(
            None,
            None,
            &keyword_args(None, Some(PathBuf::from("no-such-keywords.txt"))),
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, JojoError::FileAccess { .. }));
    }

    #[test]
    fn load_config_wraps_validation_errors() {
        let mut file = NamedTempFile::new().expect("config file");
        writeln!(file, "[output]\nprecision = 12").expect("write config");

        let err = load_config(Some(file.path())).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid config"), "got: {msg}");
        assert!(msg.contains("precision"), "got: {msg}");
    }

    #[test]
    fn load_config_wraps_parse_errors() {
        let mut file = NamedTempFile::new().expect("config file");
        writeln!(file, "keywords = [").expect("write config");

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn format_effective_config_includes_all_fields() {
        let cfg = Config::default();
        let settings = ResolvedSettings {
            first_label: "ChatGPT".to_string(),
            second_label: "Claude".to_string(),
            keywords: KeywordSet::parse_list("flow,joy"),
        };
        let summary = format_effective_config(&settings, &cfg, Some(Path::new("jojo.toml")));
        assert!(summary.contains("jojo.toml"));
        assert!(summary.contains("labels=ChatGPT/Claude"));
        assert!(summary.contains("keywords=[flow, joy]"));
        assert!(summary.contains("saturation=5.00"));
        assert!(summary.contains("subjectivity=1.00"));
        assert!(summary.contains("precision=2"));
    }
}
