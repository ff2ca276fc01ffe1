//! Uptest script execution and result collection.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;

/// Outcome of a single uptest script run.
///
/// Field names are capitalized on the wire; the deploy tooling that consumes
/// the JSON matches on `Name`/`Output`/`Passed`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UptestResult {
    pub name: String,
    pub output: String,
    pub passed: bool,
}

/// Execute one uptest script with `host` and `port` as its two arguments,
/// blocking until it exits.
///
/// Never fails at this level: a launch error and a non-zero exit both fold
/// into a `passed = false` result instead of propagating.
pub fn run_script(path: &Path, host: &str, port: &str) -> UptestResult {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match Command::new(path).arg(host).arg(port).output() {
        Ok(out) => {
            let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&out.stderr));
            // Pass/fail must come from the exit status itself, not from the
            // launch having succeeded; a script can start fine and still fail.
            let passed = out.status.success();
            if combined.is_empty() && !passed {
                // Nothing was printed, so show the exit status instead of an
                // empty string.
                combined = out.status.to_string();
            }
            UptestResult {
                name,
                output: combined,
                passed,
            }
        }
        // Launch failure produced no output at all; surface the OS error
        // ("permission denied", ...) where the script output would have been.
        Err(err) => UptestResult {
            name,
            output: err.to_string(),
            passed: false,
        },
    }
}

/// Run every non-hidden entry of `folder` sequentially, in filename order.
///
/// Entries whose name starts with `.` are skipped, hidden directories
/// included. Anything else, subdirectories too, is handed to the OS to
/// execute; an entry that cannot run is recorded as a failed result rather
/// than filtered out ahead of time. One broken script never stops the rest.
pub fn run_all(folder: &Path, host: &str, port: &str) -> Result<Vec<UptestResult>> {
    let dir = fs::read_dir(folder)
        .with_context(|| format!("reading uptest folder {}", folder.display()))?;

    let mut names = Vec::new();
    for entry in dir {
        let entry =
            entry.with_context(|| format!("reading uptest folder {}", folder.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        results.push(run_script(&folder.join(&name), host, port));
    }
    Ok(results)
}
