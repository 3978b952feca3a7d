use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jojo_lib::{
    ErrorOutput, Evaluation, JojoError, JojoOutput, Leader, MetricKind, MetricResult,
    JOJO_OUTPUT_VERSION,
};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &JojoOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), JojoError> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the fatal exit code.
pub fn render_error(err: JojoError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    tracing::debug!(error = ?err, "run failed");
    let payload = JojoOutput::Error(ErrorOutput {
        version: JOJO_OUTPUT_VERSION.to_string(),
        error: err.to_payload(),
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            let colorize = io::stderr().is_terminal();
            eprintln!("{}", format_pretty(&payload, colorize));
        }
    };

    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(body: &JojoOutput, output: Option<&Path>) -> Result<(), JojoError> {
    let content = serde_json::to_string_pretty(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write the human-readable report to file or stdout. Colors only on a tty.
fn write_pretty_output(body: &JojoOutput, output: Option<&Path>) -> io::Result<()> {
    let colorize = output.is_none() && io::stdout().is_terminal();
    let content = format_pretty(body, colorize);
    if let Some(path) = output {
        std::fs::write(path, format!("{content}\n"))?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption.
pub fn format_pretty(body: &JojoOutput, colorize: bool) -> String {
    match body {
        JojoOutput::Compare(out) => {
            let mut buf = String::new();
            write_evaluation(&mut buf, &out.first, &out.keywords, colorize);
            writeln!(buf).ok();
            write_evaluation(&mut buf, &out.second, &out.keywords, colorize);
            writeln!(buf).ok();

            writeln!(buf, "{}", color("=== Comparison ===", "1", colorize)).ok();
            let leaders = [
                (MetricKind::Joy, out.summary.joy),
                (MetricKind::Outcomes, out.summary.outcomes),
                (MetricKind::Journey, out.summary.journey),
                (MetricKind::Opportunity, out.summary.opportunity),
                (MetricKind::EmotionalResonance, out.summary.emotional_resonance),
            ];
            for (kind, leader) in leaders {
                let name = match leader {
                    Leader::First => out.first.label.as_str(),
                    Leader::Second => out.second.label.as_str(),
                    Leader::Tie => "tie",
                };
                writeln!(buf, "{}: {}", kind.label(), name).ok();
            }
            buf.trim_end().to_string()
        }
        JojoOutput::Score(out) => {
            let mut buf = String::new();
            write_evaluation(&mut buf, &out.evaluation, &out.keywords, colorize);
            buf.trim_end().to_string()
        }
        JojoOutput::Error(err) => {
            let mut buf = String::new();
            let label = color("Error", "31", colorize);
            writeln!(buf, "{label}: {}", err.error.message).ok();
            if let Some(hint) = &err.error.remediation {
                writeln!(buf, "Hint: {hint}").ok();
            }
            buf.trim_end().to_string()
        }
    }
}

/// One response block, fields in fixed report order.
fn write_evaluation(buf: &mut String, eval: &Evaluation, keywords: &[String], colorize: bool) {
    let header = format!("=== {} Evaluation ===", eval.label);
    writeln!(buf, "{}", color(&header, "1", colorize)).ok();
    let m: &MetricResult = &eval.metrics;

    for kind in MetricKind::all() {
        let value = kind.value_in(m);
        let rendered = if matches!(kind, MetricKind::Outcomes) {
            format!(
                "{} ({} of {} keywords)",
                fmt_value(value),
                eval.matched_keywords.len(),
                keywords.len()
            )
        } else {
            color(&fmt_value(value), score_color_code(value), colorize)
        };
        writeln!(buf, "{}: {}", kind.label(), rendered).ok();
    }
    writeln!(buf, "Polarity: {}", fmt_value(m.polarity)).ok();
    writeln!(buf, "Subjectivity: {}", fmt_value(m.subjectivity)).ok();
    writeln!(buf, "Coverage: {}", fmt_value(m.coverage)).ok();
    if !eval.matched_keywords.is_empty() {
        writeln!(buf, "Matched keywords: {}", eval.matched_keywords.join(", ")).ok();
    }
}

/// Already-rounded values print in shortest form, keeping one decimal.
fn fmt_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn score_color_code(score: f64) -> &'static str {
    if score >= 7.0 {
        "32"
    } else if score >= 4.0 {
        "33"
    } else {
        "31"
    }
}

fn color(text: &str, code: &str, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{code}m{text}\u{1b}[0m")
    } else {
        text.to_string()
    }
}
