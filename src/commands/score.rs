use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jojo_lib::{
    load_text, Evaluation, JojoError, JojoOutput, MetricEngine, ScoreOutput, JOJO_OUTPUT_VERSION,
};

use crate::cli::{KeywordArgs, OutputArgs};
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, log_effective_config, resolve_settings};

/// Run the score command.
pub fn run_score(
    config_path: Option<PathBuf>,
    input: PathBuf,
    label: String,
    keywords: KeywordArgs,
    output: OutputArgs,
) -> ExitCode {
    let body = match build_score_output(config_path.as_deref(), &input, label, &keywords) {
        Ok(body) => body,
        Err(err) => return render_error(err, output.format, output.output),
    };

    if let Err(err) = write_output(&body, output.format, output.output.clone()) {
        return render_error(err, output.format, output.output);
    }
    ExitCode::SUCCESS
}

fn build_score_output(
    config_path: Option<&Path>,
    input: &Path,
    label: String,
    keywords: &KeywordArgs,
) -> Result<JojoOutput, JojoError> {
    let config = load_config(config_path)?;
    let settings = resolve_settings(Some(label.clone()), None, keywords, &config)?;
    log_effective_config(&settings, &config, config_path);

    let engine = MetricEngine::from_config(&config)?;
    let text = load_text(input)?;

    let evaluation = Evaluation {
        label,
        path: input.to_path_buf(),
        metrics: engine.evaluate(&text, &settings.keywords)?,
        matched_keywords: settings.keywords.matched_in(&text),
    };

    Ok(JojoOutput::Score(ScoreOutput {
        version: JOJO_OUTPUT_VERSION.to_string(),
        keywords: settings.keywords.display_names(),
        evaluation,
    }))
}
