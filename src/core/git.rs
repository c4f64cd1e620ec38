//! Git subprocess invocations and the working-tree precondition check.
//!
//! The status check never interprets repository internals itself; it shells
//! out to the `git` CLI and hands the captured text to the section splitter
//! and record parser. Only the precondition check goes through `git2`, which
//! validates that a directory is a usable working tree without spawning a
//! process.
//!
//! # Public API
//! - [`is_git_worktree`]: Precondition check for a target directory
//! - [`run_status_queries`]: Combined, sentinel-delimited summary invocation
//! - [`stream_branch_status`]: Line-streamed verbose invocation

use crate::core::error::{RepoStatError, Result};
use crate::core::sections::SECTION_SENTINEL;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;

/// Captured output is capped to bound memory use against pathological
/// repositories
pub const MAX_OUTPUT_BYTES: usize = 1024 * 1024;

/// Everything captured from one combined invocation
#[derive(Debug)]
pub struct QueryOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Whether `path` is a usable git working tree.
///
/// Opens the exact path rather than discovering upward, so a subdirectory of
/// a repository does not pass the check for itself.
pub fn is_git_worktree(path: &Path) -> bool {
    git2::Repository::open(path).is_ok()
}

/// Run the three chained status queries in one shell invocation and capture
/// the combined output.
///
/// The queries are separated by echoed sentinels so the caller can split the
/// blob back into sections. Output beyond [`MAX_OUTPUT_BYTES`] fails the
/// invocation with [`RepoStatError::BufferExceeded`] instead of being
/// silently truncated into parsing.
pub fn run_status_queries(path: &Path) -> Result<QueryOutput> {
    let script = format!(
        "git status --branch --porcelain && echo \"{sentinel}\" && \
         git stash list && echo \"{sentinel}\" && git status",
        sentinel = SECTION_SENTINEL,
    );

    log::debug!("running status queries in {}", path.display());

    let child = Command::new("sh")
        .arg("-c")
        .arg(&script)
        .current_dir(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let output = capture_query_output(child)?;
    log::debug!(
        "status queries in {} finished with {} bytes of output",
        path.display(),
        output.stdout.len()
    );

    Ok(output)
}

/// Capture both streams of a spawned child, enforcing the output cap.
///
/// stderr is drained on its own thread; a child that fills the stderr pipe
/// while the parent blocks reading stdout would otherwise wedge both
/// processes permanently.
fn capture_query_output(mut child: Child) -> Result<QueryOutput> {
    let stderr = child.stderr.take();
    let stderr_reader = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut stderr) = stderr {
            let _ = stderr.read_to_end(&mut buf);
        }
        buf
    });

    let mut stdout_raw = Vec::new();
    take_stdout(&mut child)?
        .take((MAX_OUTPUT_BYTES + 1) as u64)
        .read_to_end(&mut stdout_raw)?;

    if stdout_raw.len() > MAX_OUTPUT_BYTES {
        let _ = child.kill();
        let _ = child.wait();
        let _ = stderr_reader.join();
        return Err(RepoStatError::BufferExceeded {
            limit: MAX_OUTPUT_BYTES,
        });
    }

    let status = child.wait()?;
    let stderr_raw = stderr_reader.join().unwrap_or_default();

    Ok(QueryOutput {
        stdout: String::from_utf8_lossy(&stdout_raw).into_owned(),
        stderr: String::from_utf8_lossy(&stderr_raw).into_owned(),
        success: status.success(),
    })
}

/// Stream git's own colorized short-branch status straight to stdout, line
/// by line, returning whether the subprocess exited successfully.
pub fn stream_branch_status(path: &Path) -> Result<bool> {
    log::debug!("streaming verbose status for {}", path.display());

    let mut child = Command::new("git")
        .args(["-c", "color.status=always", "status", "-sb"])
        .current_dir(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()?;

    let reader = BufReader::new(take_stdout(&mut child)?);
    for line in reader.lines() {
        println!("{}", line?);
    }

    Ok(child.wait()?.success())
}

fn take_stdout(child: &mut Child) -> Result<std::process::ChildStdout> {
    child.stdout.take().ok_or_else(|| {
        RepoStatError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "child stdout was not captured",
        ))
    })
}
