//! Bridge that evaluates scripts through the `Rscript` executable.
//!
//! Each evaluation spawns a fresh, short-lived R process: no interpreter
//! state is shared between calls, so there is nothing to initialize
//! globally and nothing to tear down on drop.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HarvestError, Result};
use crate::foreign::RFrame;

use super::script;
use super::RBridge;

/// Matches the version number in `Rscript --version` banners, which
/// differ across R releases ("R scripting front-end version 4.2.1" vs
/// "Rscript (R) version 4.3.1 ...").
static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"version\s+(\d+\.\d+\.\d+)").unwrap());

/// Counter for unique temp script names within one process.
static SCRIPT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Evaluates R fragments by invoking `Rscript` on a temporary script
/// file and parsing the JSON payload it writes to stdout.
pub struct RscriptBridge {
    rscript: PathBuf,
    r_home: Option<PathBuf>,
    oauth_token: Option<String>,
    packages: Vec<String>,
}

impl RscriptBridge {
    /// Create a bridge using `Rscript` from `PATH` and the default
    /// package set.
    pub fn new() -> Self {
        Self {
            rscript: PathBuf::from("Rscript"),
            r_home: None,
            oauth_token: None,
            packages: vec!["jsonlite".to_string(), "surveymonkey".to_string()],
        }
    }

    /// Use a specific `Rscript` executable.
    pub fn with_rscript(mut self, path: impl Into<PathBuf>) -> Self {
        self.rscript = path.into();
        self
    }

    /// Set `R_HOME` for spawned processes.
    pub fn with_r_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.r_home = Some(path.into());
        self
    }

    /// Set the SurveyMonkey OAuth token passed to the R session.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.oauth_token = Some(token.into());
        self
    }

    /// Replace the packages loaded (and installed if absent) by the
    /// session prelude.
    pub fn with_packages(mut self, packages: Vec<String>) -> Self {
        self.packages = packages;
        self
    }

    /// Probe the R installation and return its version string.
    pub fn version(&self) -> Result<String> {
        let output = Command::new(&self.rscript)
            .arg("--version")
            .output()
            .map_err(|e| {
                HarvestError::Bridge(format!(
                    "failed to run '{}': {}",
                    self.rscript.display(),
                    e
                ))
            })?;

        // Older Rscript prints the banner on stderr.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        VERSION_RE
            .captures(&text)
            .map(|c| c[1].to_string())
            .ok_or_else(|| {
                HarvestError::Bridge(format!(
                    "could not parse Rscript version from: {}",
                    text.trim()
                ))
            })
    }

    fn prelude(&self) -> String {
        script::prelude(&self.packages, self.oauth_token.as_deref())
    }

    /// Run a complete script and return its stdout.
    fn run_source(&self, source: &str) -> Result<String> {
        let path = temp_script_path();
        std::fs::write(&path, source).map_err(|e| HarvestError::Io {
            path: path.clone(),
            source: e,
        })?;

        let output = run_rscript(&self.rscript, self.r_home.as_deref(), &path);
        let _ = std::fs::remove_file(&path);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HarvestError::Bridge(format!(
                "Rscript exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for RscriptBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl RBridge for RscriptBridge {
    fn eval_frame(&self, fragment: &str) -> Result<RFrame> {
        let source = script::assemble(&self.prelude(), fragment);
        let stdout = self.run_source(&source)?;

        // Package chatter can precede the payload; the emitter writes a
        // single JSON object, so start at the first brace.
        let payload = match stdout.find('{') {
            Some(idx) => &stdout[idx..],
            None => stdout.as_str(),
        };

        serde_json::from_str(payload.trim()).map_err(|e| {
            HarvestError::Protocol(format!(
                "bridge payload is not a valid frame: {} (payload starts: {:.80})",
                e,
                payload.trim()
            ))
        })
    }

    fn name(&self) -> &str {
        "rscript"
    }
}

fn temp_script_path() -> PathBuf {
    let seq = SCRIPT_SEQ.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("harvest-{}-{}.R", std::process::id(), seq))
}

fn run_rscript(
    rscript: &Path,
    r_home: Option<&Path>,
    script_path: &Path,
) -> Result<std::process::Output> {
    let mut cmd = Command::new(rscript);
    cmd.arg("--vanilla").arg(script_path);
    if let Some(home) = r_home {
        cmd.env("R_HOME", home);
    }
    cmd.output().map_err(|e| {
        HarvestError::Bridge(format!("failed to run '{}': {}", rscript.display(), e))
    })
}
