//! Command-line arguments.

use clap::Parser;

use crate::output::OutputMode;

/// Exposes the labels of the triggering pull request as the `prLabels` step
/// output.
///
/// Inputs are read from the environment the runner provides:
/// `INPUT_GITHUB_TOKEN`, `INPUT_PR_NUMBER`, `GITHUB_REPOSITORY`, `GITHUB_REF`
/// and `GITHUB_EVENT_NAME`.
#[derive(Debug, Clone, Parser)]
#[command(name = "pr-labels", version, about)]
pub struct Cli {
    /// How to publish the step output.
    #[arg(long, value_enum, default_value_t = OutputMode::Auto)]
    pub output_mode: OutputMode,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::Cli;
    use crate::output::OutputMode;

    #[rstest]
    #[case(&["pr-labels"], OutputMode::Auto)]
    #[case(&["pr-labels", "--output-mode", "workflow-command"], OutputMode::WorkflowCommand)]
    #[case(&["pr-labels", "--output-mode", "environment-file"], OutputMode::EnvironmentFile)]
    fn parses_output_mode(#[case] args: &[&str], #[case] expected: OutputMode) {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        assert_eq!(cli.output_mode, expected);
    }

    #[rstest]
    fn rejects_unknown_output_mode() {
        assert!(Cli::try_parse_from(["pr-labels", "--output-mode", "stdout"]).is_err());
    }
}
