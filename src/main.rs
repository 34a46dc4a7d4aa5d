use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use docedit::cli::{CliArgs, OutputTarget, RunConfig, RunMode};
use docedit::config::Backend;
use docedit::{DocEditConfig, EditScript, RopeBuffer, StringBuffer, TextBufferMut};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = DocEditConfig::load();
    docedit::tracing::init(config.file_logging);

    let run = args.into_config(&config).map_err(anyhow::Error::msg)?;
    tracing::info!(
        "Editing {} with script {} ({:?})",
        run.file.display(),
        run.script.display(),
        run.mode
    );

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run.backend {
        Backend::Rope => execute::<RopeBuffer>(&run, &mut stdout.lock(), &mut stderr.lock()),
        Backend::String => execute::<StringBuffer>(&run, &mut stdout.lock(), &mut stderr.lock()),
    }
}

/// Load the document, compile the script against it, then preview or apply.
///
/// Edited text goes to `out` when no output file is configured; caret reports
/// and the `--print-edits` listing go to `report`.
fn execute<D>(run: &RunConfig, out: &mut dyn Write, report: &mut dyn Write) -> Result<()>
where
    D: TextBufferMut + for<'a> From<&'a str>,
{
    let text = std::fs::read_to_string(&run.file)
        .with_context(|| format!("Failed to read {}", run.file.display()))?;
    let mut doc = D::from(text.as_str());

    let script = EditScript::load(&run.script)
        .with_context(|| format!("Failed to load edit script {}", run.script.display()))?;
    let edits = script
        .compile(&doc)
        .with_context(|| format!("Edit script does not fit {}", run.file.display()))?;

    if run.print_edits {
        writeln!(report, "{}", edits)?;
    }

    let target = match &run.mode {
        RunMode::Preview => {
            match edits.compute_resulting_selection() {
                Some(offset) => writeln!(out, "{}", offset)?,
                None => writeln!(out, "unknown")?,
            }
            return Ok(());
        }
        RunMode::Apply(target) => target,
    };

    let selection = edits
        .apply(&mut doc)
        .with_context(|| format!("Failed to apply edits to {}", run.file.display()))?;

    if let Some(offset) = selection {
        let (line, column) = doc.offset_to_position(offset);
        writeln!(report, "caret: {} ({}:{})", offset, line + 1, column + 1)?;
    }

    match target {
        OutputTarget::Stdout { marker } => {
            if let (Some(marker), Some(offset)) = (marker, selection) {
                doc.replace(offset, 0, marker)?;
            }
            out.write_all(doc.content().as_bytes())?;
        }
        OutputTarget::File(path) => {
            std::fs::write(path, doc.content())
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        OutputTarget::InPlace => {
            std::fs::write(&run.file, doc.content())
                .with_context(|| format!("Failed to write {}", run.file.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn run_config(dir: &Path, doc: &str, script: &str, mode: RunMode) -> RunConfig {
        let file = dir.join("doc.txt");
        let script_path = dir.join("edits.yaml");
        std::fs::write(&file, doc).unwrap();
        std::fs::write(&script_path, script).unwrap();
        RunConfig {
            file,
            script: script_path,
            mode,
            backend: Backend::Rope,
            print_edits: false,
        }
    }

    const RENAME: &str = "edits:\n  - op: replace\n    start: 3\n    end: 6\n    text: main\n";

    #[test]
    fn test_apply_to_stdout_with_marker() {
        let dir = tempfile::tempdir().unwrap();
        let run = run_config(
            dir.path(),
            "fn foo() {}\n",
            RENAME,
            RunMode::Apply(OutputTarget::Stdout {
                marker: Some("|".to_string()),
            }),
        );

        let (mut out, mut report) = (Vec::new(), Vec::new());
        execute::<RopeBuffer>(&run, &mut out, &mut report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "fn main|() {}\n");
        assert_eq!(String::from_utf8(report).unwrap(), "caret: 7 (1:8)\n");
    }

    #[test]
    fn test_preview_does_not_touch_file() {
        let dir = tempfile::tempdir().unwrap();
        let run = run_config(dir.path(), "fn foo() {}\n", RENAME, RunMode::Preview);

        let (mut out, mut report) = (Vec::new(), Vec::new());
        execute::<StringBuffer>(&run, &mut out, &mut report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "7\n");
        assert_eq!(std::fs::read_to_string(&run.file).unwrap(), "fn foo() {}\n");
    }

    #[test]
    fn test_in_place_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let run = run_config(
            dir.path(),
            "a\nb\nc\n",
            "edits:\n  - op: delete_line_backward\n    line: 1\n",
            RunMode::Apply(OutputTarget::InPlace),
        );

        let (mut out, mut report) = (Vec::new(), Vec::new());
        execute::<RopeBuffer>(&run, &mut out, &mut report).unwrap();
        assert!(out.is_empty());
        assert_eq!(std::fs::read_to_string(&run.file).unwrap(), "a\nc\n");
    }

    #[test]
    fn test_stale_script_fails() {
        let dir = tempfile::tempdir().unwrap();
        let run = run_config(
            dir.path(),
            "short",
            "edits:\n  - op: delete\n    start: 2\n    end: 40\n",
            RunMode::Apply(OutputTarget::Stdout { marker: None }),
        );

        let (mut out, mut report) = (Vec::new(), Vec::new());
        let err = execute::<RopeBuffer>(&run, &mut out, &mut report).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid offset"));
        assert!(out.is_empty());
    }
}
