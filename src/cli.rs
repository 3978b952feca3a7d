use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jojo")]
#[command(
    version,
    about = "JOJO metrics - Compare two AI model responses side by side",
    long_about = "JOJO metrics\n\nScores model responses on Joy (tone), Outcomes (keyword coverage), Journey (readability), Opportunity (actionable suggestions) and Emotional Resonance, plus polarity/subjectivity.\n\nModes:\n- compare: score two response files side by side.\n- score: score a single response file.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose (debug) logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) for labels/keywords/markers/weights/precision; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct KeywordArgs {
    #[arg(
        long,
        alias = "ref_points",
        value_delimiter = ',',
        help = "Comma-separated target keywords (case-insensitive)"
    )]
    pub keywords: Option<Vec<String>>,

    #[arg(
        long,
        value_name = "PATH",
        help = "File with one keyword per line ('#' starts a comment)"
    )]
    pub keywords_file: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value = "pretty", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, short, help = "Output file path (stdout if omitted)")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score two responses side by side
    Compare {
        #[arg(long, alias = "chatgpt_path", help = "First response file (UTF-8 text)")]
        first: PathBuf,

        #[arg(long, alias = "claude_path", help = "Second response file (UTF-8 text)")]
        second: PathBuf,

        #[arg(long, help = "Report label for the first response [default: ChatGPT]")]
        first_label: Option<String>,

        #[arg(long, help = "Report label for the second response [default: Claude]")]
        second_label: Option<String>,

        #[command(flatten)]
        keywords: KeywordArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score a single response
    Score {
        #[arg(long, help = "Response file (UTF-8 text)")]
        input: PathBuf,

        #[arg(long, default_value = "Response", help = "Report label")]
        label: String,

        #[command(flatten)]
        keywords: KeywordArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, OutputFormat};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn compare_command_uses_defaults() {
        let cli = Cli::parse_from([
            "jojo",
            "compare",
            "--first",
            "chatgpt_out.txt",
            "--second",
            "claude_out.txt",
        ]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());

        match cli.command {
            Commands::Compare {
                first,
                second,
                first_label,
                second_label,
                keywords,
                output,
            } => {
                assert_eq!(first, Path::new("chatgpt_out.txt"));
                assert_eq!(second, Path::new("claude_out.txt"));
                assert!(first_label.is_none());
                assert!(second_label.is_none());
                assert!(keywords.keywords.is_none());
                assert!(keywords.keywords_file.is_none());
                assert!(matches!(output.format, OutputFormat::Pretty));
                assert!(output.output.is_none());
            }
            _ => panic!("expected compare command"),
        }
    }

    #[test]
    fn compare_command_respects_overrides() {
        let cli = Cli::parse_from([
            "jojo",
            "compare",
            "--first",
            "a.txt",
            "--second",
            "b.txt",
            "--first-label",
            "GPT-4o",
            "--second-label",
            "Sonnet",
            "--keywords",
            "joy metric,flow",
            "--keywords-file",
            "targets.txt",
            "--format",
            "json",
            "--output",
            "report.json",
            "--config",
            "jojo.toml",
        ]);

        assert_eq!(cli.config.as_deref(), Some(Path::new("jojo.toml")));
        match cli.command {
            Commands::Compare {
                first_label,
                second_label,
                keywords,
                output,
                ..
            } => {
                assert_eq!(first_label.as_deref(), Some("GPT-4o"));
                assert_eq!(second_label.as_deref(), Some("Sonnet"));
                assert_eq!(
                    keywords.keywords,
                    Some(vec![String::from("joy metric"), String::from("flow")])
                );
                assert_eq!(
                    keywords.keywords_file.as_deref(),
                    Some(Path::new("targets.txt"))
                );
                assert!(matches!(output.format, OutputFormat::Json));
                assert_eq!(output.output.as_deref(), Some(Path::new("report.json")));
            }
            _ => panic!("expected compare command with overrides"),
        }
    }

    #[test]
    fn compare_command_accepts_legacy_flag_names() {
        let cli = Cli::parse_from([
            "jojo",
            "compare",
            "--chatgpt_path",
            "chatgpt_out.txt",
            "--claude_path",
            "claude_out.txt",
            "--ref_points",
            "joy metric,flow,actionable suggestions",
        ]);

        match cli.command {
            Commands::Compare {
                first,
                second,
                keywords,
                ..
            } => {
                assert_eq!(first, Path::new("chatgpt_out.txt"));
                assert_eq!(second, Path::new("claude_out.txt"));
                assert_eq!(keywords.keywords.map(|k| k.len()), Some(3));
            }
            _ => panic!("expected compare command"),
        }
    }

    #[test]
    fn score_command_sets_verbose() {
        let cli = Cli::parse_from(["jojo", "--verbose", "score", "--input", "answer.txt"]);

        assert!(cli.verbose);

        match cli.command {
            Commands::Score {
                input,
                label,
                keywords,
                output,
            } => {
                assert_eq!(input, Path::new("answer.txt"));
                assert_eq!(label, "Response");
                assert!(keywords.keywords.is_none());
                assert!(matches!(output.format, OutputFormat::Pretty));
            }
            _ => panic!("expected score command"),
        }
    }

    #[test]
    fn compare_requires_both_files() {
        let result = Cli::try_parse_from(["jojo", "compare", "--first", "a.txt"]);
        assert!(result.is_err());
    }
}
