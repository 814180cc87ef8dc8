//! Publishing step outputs to the CI runner.
//!
//! Two mechanisms are supported and chosen at runtime:
//!
//! - the legacy `::set-output name=<name>::<value>` workflow command on stdout
//! - a `name=value` entry appended to the file named by `GITHUB_OUTPUT`

mod render;

pub use render::render_label_list;

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use clap::ValueEnum;

use crate::config::OUTPUT_FILE_VAR;
use crate::github::LabelsError;

/// Name of the step output carrying the rendered labels.
pub const PR_LABELS_OUTPUT: &str = "prLabels";

/// How the output channel is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Use the output file when the runner provides one, else the command.
    #[default]
    Auto,
    /// Always print the `::set-output` workflow command.
    WorkflowCommand,
    /// Always append to the output file; fails when none is configured.
    EnvironmentFile,
}

/// Destination for step outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputChannel {
    /// `::set-output` line on stdout.
    WorkflowCommand,
    /// `name=value` line appended to this file.
    EnvironmentFile(Utf8PathBuf),
}

impl OutputChannel {
    /// Picks the channel for `mode` given the runner's output file, if any.
    ///
    /// # Errors
    ///
    /// Returns [`LabelsError::MissingConfiguration`] when `mode` requires an
    /// output file and none is configured.
    pub fn select(mode: OutputMode, output_file: Option<&Utf8PathBuf>) -> Result<Self, LabelsError> {
        match (mode, output_file) {
            (OutputMode::WorkflowCommand, _) | (OutputMode::Auto, None) => Ok(Self::WorkflowCommand),
            (OutputMode::Auto | OutputMode::EnvironmentFile, Some(path)) => {
                Ok(Self::EnvironmentFile(path.clone()))
            }
            (OutputMode::EnvironmentFile, None) => Err(LabelsError::missing(OUTPUT_FILE_VAR)),
        }
    }

    /// Publishes one named output.
    ///
    /// # Errors
    ///
    /// Returns [`LabelsError::Io`] when stdout or the output file cannot be
    /// written.
    pub fn publish(&self, name: &str, value: &str) -> Result<(), LabelsError> {
        match self {
            Self::WorkflowCommand => {
                let mut stdout = io::stdout().lock();
                write_workflow_command_to(&mut stdout, name, value)
            }
            Self::EnvironmentFile(path) => {
                let mut file = open_for_append(path)?;
                write_environment_entry_to(&mut file, name, value)
            }
        }
    }
}

/// Writes `::set-output name=<name>::<value>` to `writer`.
///
/// # Errors
///
/// Returns [`LabelsError::Io`] when the write fails.
pub fn write_workflow_command_to<W: Write>(
    writer: &mut W,
    name: &str,
    value: &str,
) -> Result<(), LabelsError> {
    writeln!(
        writer,
        "::set-output name={}::{}",
        escape_property(name),
        escape_data(value)
    )
    .map_err(|error| io_error(&error))
}

/// Writes a `name=value` output file entry to `writer`.
///
/// # Errors
///
/// Returns [`LabelsError::Io`] when the write fails, or when `value` spans
/// several lines and so cannot be written in the single-line form.
pub fn write_environment_entry_to<W: Write>(
    writer: &mut W,
    name: &str,
    value: &str,
) -> Result<(), LabelsError> {
    if value.contains(['\n', '\r']) {
        return Err(LabelsError::Io {
            message: format!("output {name} must be a single line"),
        });
    }
    writeln!(writer, "{name}={value}").map_err(|error| io_error(&error))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

fn open_for_append(path: &Utf8Path) -> Result<cap_std::fs_utf8::File, LabelsError> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| LabelsError::Io {
        message: format!("invalid output file path '{path}': no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        LabelsError::Io {
            message: format!("failed to open output directory '{parent}': {error}"),
        }
    })?;

    let mut options = OpenOptions::new();
    options.append(true).create(true);
    dir.open_with(file_name, &options)
        .map_err(|error| LabelsError::Io {
            message: format!("failed to open output file '{path}': {error}"),
        })
}

/// Converts an I/O error to a [`LabelsError::Io`].
pub(crate) fn io_error(error: &io::Error) -> LabelsError {
    LabelsError::Io {
        message: error.to_string(),
    }
}
