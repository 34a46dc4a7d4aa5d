//! Command-line argument parsing
//!
//! Supports:
//! - Applying an edit script to a file (stdout, `--output` or `--in-place`)
//! - Previewing where the caret lands without editing
//! - Printing the compiled edit batch

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Backend, DocEditConfig};

/// Apply a batch of edits expressed against a document snapshot
#[derive(Parser, Debug)]
#[command(
    name = "docedit",
    version,
    about = "Apply a batch of document edits in one pass"
)]
pub struct CliArgs {
    /// Document the script's offsets refer to
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Edit script (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Only report where the caret would land
    #[arg(short, long)]
    pub preview: bool,

    /// Write the edited document back to FILE
    #[arg(short, long, conflicts_with = "output")]
    pub in_place: bool,

    /// Write the edited document to this path instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Insert this marker at the resulting caret (stdout only)
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Document backend (overrides config)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Print the compiled edit batch to stderr
    #[arg(long)]
    pub print_edits: bool,
}

/// Where the edited document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout { marker: Option<String> },
    File(PathBuf),
    InPlace,
}

/// What a run does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Compute the resulting caret only
    Preview,
    /// Apply the edits and write the result
    Apply(OutputTarget),
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub script: PathBuf,
    pub mode: RunMode,
    pub backend: Backend,
    pub print_edits: bool,
}

impl CliArgs {
    /// Merge parsed CLI args with persisted configuration.
    /// Command-line values win over config values.
    pub fn into_config(self, config: &DocEditConfig) -> Result<RunConfig, String> {
        let mode = if self.preview {
            if self.in_place || self.output.is_some() {
                return Err("--preview does not write the document".to_string());
            }
            RunMode::Preview
        } else if self.in_place {
            RunMode::Apply(OutputTarget::InPlace)
        } else if let Some(path) = self.output {
            RunMode::Apply(OutputTarget::File(path))
        } else {
            let marker = self.marker.or_else(|| config.cursor_marker.clone());
            RunMode::Apply(OutputTarget::Stdout { marker })
        };

        Ok(RunConfig {
            file: self.file,
            script: self.script,
            mode,
            backend: self.backend.unwrap_or(config.backend),
            print_edits: self.print_edits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            file: PathBuf::from("doc.txt"),
            script: PathBuf::from("edits.yaml"),
            preview: false,
            in_place: false,
            output: None,
            marker: None,
            backend: None,
            print_edits: false,
        }
    }

    #[test]
    fn test_default_writes_stdout() {
        let config = args().into_config(&DocEditConfig::default()).unwrap();
        assert_eq!(
            config.mode,
            RunMode::Apply(OutputTarget::Stdout { marker: None })
        );
        assert_eq!(config.backend, Backend::Rope);
    }

    #[test]
    fn test_preview_mode() {
        let config = CliArgs {
            preview: true,
            ..args()
        }
        .into_config(&DocEditConfig::default())
        .unwrap();
        assert_eq!(config.mode, RunMode::Preview);
    }

    #[test]
    fn test_preview_with_output_is_rejected() {
        let result = CliArgs {
            preview: true,
            in_place: true,
            ..args()
        }
        .into_config(&DocEditConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_marker_falls_back_to_config() {
        let config = DocEditConfig {
            cursor_marker: Some("|".to_string()),
            backend: Backend::String,
            ..DocEditConfig::default()
        };
        let run = args().into_config(&config).unwrap();
        assert_eq!(
            run.mode,
            RunMode::Apply(OutputTarget::Stdout {
                marker: Some("|".to_string())
            })
        );
        assert_eq!(run.backend, Backend::String);

        let run = CliArgs {
            marker: Some("<>".to_string()),
            backend: Some(Backend::Rope),
            ..args()
        }
        .into_config(&config)
        .unwrap();
        assert_eq!(
            run.mode,
            RunMode::Apply(OutputTarget::Stdout {
                marker: Some("<>".to_string())
            })
        );
        assert_eq!(run.backend, Backend::Rope);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "docedit",
            "doc.txt",
            "--script",
            "edits.json",
            "--output",
            "out.txt",
            "--backend",
            "string",
        ])
        .unwrap();
        let run = args.into_config(&DocEditConfig::default()).unwrap();
        assert_eq!(
            run.mode,
            RunMode::Apply(OutputTarget::File(PathBuf::from("out.txt")))
        );
        assert_eq!(run.backend, Backend::String);
        assert_eq!(run.script, PathBuf::from("edits.json"));
    }

    #[test]
    fn test_in_place_conflicts_with_output() {
        let result = CliArgs::try_parse_from([
            "docedit", "doc.txt", "-s", "e.yaml", "-i", "-o", "out.txt",
        ]);
        assert!(result.is_err());
    }
}
