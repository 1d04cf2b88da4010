//! # Process Execution
//!
//! Every backend talks to its VCS exclusively through the [`ProcessRunner`]
//! trait: given a program, its arguments and a working directory, run it to
//! completion and hand back the captured output.
//!
//! [`SystemRunner`] is the real implementation. It spawns the executable with
//! `std::process::Command`, captures stdout and stderr in full and enforces an
//! optional wall-clock timeout, killing the child when it expires.
//!
//! Tests substitute a scripted runner so the parsing and decision logic of the
//! backends can be exercised without any VCS installed.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
            exit_code: Some(0),
        }
    }

    /// Failed output with the given stderr and exit code 1.
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
            exit_code: Some(1),
        }
    }

    /// Stdout followed by stderr.
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !combined.is_empty() && !combined.ends_with('\n') {
                combined.push('\n');
            }
            combined.push_str(&self.stderr);
        }
        combined
    }
}

/// Runs external programs on behalf of the backends.
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` in `dir` and wait for it to finish.
    ///
    /// A program that cannot be found yields [`Error::ToolNotFound`]. A
    /// program that runs and fails is *not* an error here: the returned
    /// output has `success == false`.
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput>;
}

/// Runs programs on the host with an optional timeout.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(Some(Duration::from_secs(
            crate::defaults::DEFAULT_TIMEOUT_SECS,
        )))
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
        // A missing working directory also surfaces as NotFound from spawn,
        // which must not be mistaken for a missing executable.
        if !dir.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("working directory '{}' does not exist", dir.display()),
            )));
        }

        let mut child = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ToolNotFound {
                        tool: program.to_string(),
                    }
                } else {
                    Error::Io(e)
                }
            })?;

        let stdout_reader = child.stdout.take().map(spawn_reader);
        let stderr_reader = child.stderr.take().map(spawn_reader);

        let status = match self.timeout {
            None => child.wait()?,
            Some(limit) => {
                let deadline = Instant::now() + limit;
                loop {
                    if let Some(status) = child.try_wait()? {
                        break status;
                    }
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        // The pipes close with the child, so the readers finish.
                        for reader in [stdout_reader, stderr_reader].into_iter().flatten() {
                            let _ = reader.join();
                        }
                        return Err(Error::Timeout {
                            tool: program.to_string(),
                            args: args.iter().map(|a| a.to_string()).collect(),
                            limit,
                        });
                    }
                    thread::sleep(POLL_INTERVAL);
                }
            }
        };

        let stdout = stdout_reader
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default();
        let stderr = stderr_reader
            .map(|h| h.join().unwrap_or_default())
            .unwrap_or_default();

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            success: status.success(),
            exit_code: status.code(),
        })
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

/// Run a command, logging it, and turn an unsuccessful exit into
/// [`Error::CommandFailed`] carrying the combined output.
pub fn run_checked(
    runner: &dyn ProcessRunner,
    program: &str,
    args: &[&str],
    dir: &Path,
) -> Result<CommandOutput> {
    debug!("{} {} (cwd={})", program, args.join(" "), dir.display());
    let output = runner.run(program, args, dir)?;
    debug!("out={}", output.combined());

    if output.success {
        Ok(output)
    } else {
        Err(Error::CommandFailed {
            tool: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            exit_code: output.exit_code,
            output: output.combined(),
        })
    }
}
