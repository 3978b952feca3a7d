use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jojo_lib::{
    load_text, CompareOutput, ComparisonSummary, Evaluation, JojoError, JojoOutput, MetricEngine,
    JOJO_OUTPUT_VERSION,
};
use tracing::{debug, info};

use crate::cli::{KeywordArgs, OutputArgs};
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_config, resolve_settings, ResolvedSettings};

/// Run the compare command.
pub fn run_compare(
    config_path: Option<PathBuf>,
    first: PathBuf,
    second: PathBuf,
    first_label: Option<String>,
    second_label: Option<String>,
    keywords: KeywordArgs,
    output: OutputArgs,
) -> ExitCode {
    let body = match build_compare_output(
        config_path.as_deref(),
        &first,
        &second,
        first_label,
        second_label,
        &keywords,
    ) {
        Ok(body) => body,
        Err(err) => return render_error(err, output.format, output.output),
    };

    if let Err(err) = write_output(&body, output.format, output.output.clone()) {
        return render_error(err, output.format, output.output);
    }
    ExitCode::SUCCESS
}

fn build_compare_output(
    config_path: Option<&Path>,
    first: &Path,
    second: &Path,
    first_label: Option<String>,
    second_label: Option<String>,
    keywords: &KeywordArgs,
) -> Result<JojoOutput, JojoError> {
    let config = load_config(config_path)?;
    let settings = resolve_settings(first_label, second_label, keywords, &config)?;
    log_effective_config(&settings, &config, config_path);

    let engine = MetricEngine::from_config(&config)?;

    // Both files are read before scoring so a missing second file fails fast.
    let first_text = load_text(first)?;
    let second_text = load_text(second)?;

    let ResolvedSettings {
        first_label,
        second_label,
        keywords,
    } = settings;

    debug!(label = %first_label, "scoring first response");
    let first_eval = Evaluation {
        label: first_label,
        path: first.to_path_buf(),
        metrics: engine.evaluate(&first_text, &keywords)?,
        matched_keywords: keywords.matched_in(&first_text),
    };
    debug!(label = %second_label, "scoring second response");
    let second_eval = Evaluation {
        label: second_label,
        path: second.to_path_buf(),
        metrics: engine.evaluate(&second_text, &keywords)?,
        matched_keywords: keywords.matched_in(&second_text),
    };

    let summary = ComparisonSummary::between(&first_eval.metrics, &second_eval.metrics);
    info!(
        first = %first_eval.label,
        second = %second_eval.label,
        keywords = keywords.len(),
        "comparison complete"
    );

    Ok(JojoOutput::Compare(CompareOutput {
        version: JOJO_OUTPUT_VERSION.to_string(),
        keywords: keywords.display_names(),
        first: first_eval,
        second: second_eval,
        summary,
    }))
}
