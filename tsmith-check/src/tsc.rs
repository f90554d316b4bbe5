//! Out-of-process validation through the TypeScript compiler.

use std::{
    fs,
    io::Read,
    path::Path,
    process::{Child, Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use eyre::{Result, WrapErr, eyre};
use serde_json::json;
use tsmith_core::{Checker, Diagnostic};

use crate::parse::parse_tsc_output;

/// Fixed name of the source file inside the validation project.
const SOURCE_FILE: &str = "input.ts";
/// Fixed name of the project config inside the validation project.
const CONFIG_FILE: &str = "tsconfig.json";

const TOOL: &str = "tsc";
const RUNNER: &str = "npx";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Validates emitted source by running `tsc --noEmit` over a throwaway
/// single-file project.
///
/// Each call owns one uniquely named temp directory holding the source
/// and a minimal strict-mode config scoped to that file; the directory
/// is removed best-effort on every exit path, including timeouts. Calls
/// share no state, so batch validation parallelizes freely.
///
/// Tool resolution is an ordered fallback: `tsc` on the path, then
/// `npx tsc` for project-local installs, then `tsc` once more so the
/// terminal failure reports a clear not-found error instead of silently
/// skipping validation.
#[derive(Debug, Clone)]
pub struct TscChecker {
    timeout: Duration,
}

impl TscChecker {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the bounded process wait. There is no retry; a hang
    /// surfaces whatever partial output was captured.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn run_check(&self, source: &str) -> Result<Vec<Diagnostic>> {
        let dir = tempfile::Builder::new()
            .prefix("tsmith-check-")
            .tempdir()
            .wrap_err("failed to create validation directory")?;
        fs::write(dir.path().join(SOURCE_FILE), source)
            .wrap_err("failed to write source under validation")?;
        fs::write(dir.path().join(CONFIG_FILE), project_config()?)
            .wrap_err("failed to write validation project config")?;

        let args = [
            "--noEmit".to_string(),
            "--pretty".to_string(),
            "false".to_string(),
            "-p".to_string(),
            CONFIG_FILE.to_string(),
        ];
        let (status, output) = self.run_tool(&args, Some(dir.path()), self.timeout)?;

        let diagnostics = match status {
            Some(status) if status.success() => Vec::new(),
            Some(_) => {
                let mut diagnostics = parse_tsc_output(&output);
                if !diagnostics.iter().any(Diagnostic::is_error) {
                    diagnostics.push(Diagnostic::error(
                        "tsc exited with a failure status but reported no errors",
                    ));
                }
                diagnostics
            }
            None => {
                let mut diagnostics = parse_tsc_output(&output);
                diagnostics.push(Diagnostic::error(format!(
                    "tsc did not finish within {:?}",
                    self.timeout
                )));
                diagnostics
            }
        };

        // Drop would also remove the directory; closing eagerly keeps the
        // deletion on the happy path. Failures are not correctness-critical.
        let _ = dir.close();
        Ok(diagnostics)
    }

    /// Spawn the compiler through the resolution fallback and drain it.
    fn run_tool(
        &self,
        args: &[String],
        cwd: Option<&Path>,
        timeout: Duration,
    ) -> Result<(Option<ExitStatus>, String)> {
        let mut last_error = None;
        for attempt in 0..3 {
            let mut cmd = candidate(attempt, args);
            if let Some(dir) = cwd {
                cmd.current_dir(dir);
            }
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
            match cmd.spawn() {
                Ok(child) => return wait_with_timeout(child, timeout),
                Err(err) => last_error = Some(err),
            }
        }
        match last_error {
            Some(err) => Err(eyre!("TypeScript compiler not found: {err}")),
            None => Err(eyre!("TypeScript compiler not found")),
        }
    }
}

impl Default for TscChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for TscChecker {
    fn check(&self, source: &str) -> Vec<Diagnostic> {
        match self.run_check(source) {
            Ok(diagnostics) => diagnostics,
            Err(err) => vec![Diagnostic::error(format!("validation could not run: {err}"))],
        }
    }

    fn is_available(&self) -> bool {
        self.run_tool(&["--version".to_string()], None, PROBE_TIMEOUT)
            .is_ok_and(|(status, _)| status.is_some_and(|s| s.success()))
    }
}

/// Build the nth resolution candidate: bare tool, package runner, bare
/// tool again.
fn candidate(attempt: usize, args: &[String]) -> Command {
    if attempt == 1 {
        let mut cmd = Command::new(RUNNER);
        cmd.arg(TOOL);
        cmd.args(args);
        cmd
    } else {
        let mut cmd = Command::new(TOOL);
        cmd.args(args);
        cmd
    }
}

/// Minimal strict-mode project restricting compilation to the one file,
/// with library/ambient checking relaxed to avoid unrelated noise.
fn project_config() -> Result<String> {
    let config = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "lib": ["ESNext"],
            "strict": true,
            "noEmit": true,
            "skipLibCheck": true,
            "types": [],
        },
        "files": [SOURCE_FILE],
    });
    serde_json::to_string_pretty(&config).wrap_err("failed to render tsconfig")
}

/// Wait for the child within `timeout`, draining stdout and stderr on
/// reader threads. On timeout the child is killed and whatever output
/// was captured is returned with a `None` status.
fn wait_with_timeout(mut child: Child, timeout: Duration) -> Result<(Option<ExitStatus>, String)> {
    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child
            .try_wait()
            .wrap_err("failed to poll compiler process")?
        {
            Some(status) => break Some(status),
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
            None => thread::sleep(Duration::from_millis(25)),
        }
    };

    let mut combined = stdout_reader.join().unwrap_or_default();
    combined.push_str(&stderr_reader.join().unwrap_or_default());
    Ok((status, combined))
}

fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buffer = String::new();
        if let Some(mut source) = source {
            let _ = source.read_to_string(&mut buffer);
        }
        buffer
    })
}
