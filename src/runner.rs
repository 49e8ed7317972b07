//! Subprocess execution behind a small trait so tests can substitute a
//! recording fake instead of spawning real build tools.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::task::Task;
use crate::{blog_debug, Error, Result};

/// Executes one task and reports its exit code.
pub trait Runner {
    fn execute(&mut self, task: &Task) -> Result<i32>;
}

/// Runs tasks as real child processes, inheriting stdout/stderr so the
/// wrapped tools' own output streams through.
pub struct ProcessRunner {
    repo_root: PathBuf,
}

impl ProcessRunner {
    pub fn new(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
        }
    }

    /// Verify that every distinct executable in `tasks` resolves on PATH.
    /// Fails before anything is spawned.
    pub fn preflight(tasks: &[Task]) -> Result<()> {
        let mut checked: Vec<&str> = Vec::new();
        for task in tasks {
            if checked.contains(&task.program.as_str()) {
                continue;
            }
            checked.push(&task.program);
            if which::which(&task.program).is_err() {
                return Err(Error::ToolNotFound(task.program.clone()));
            }
        }
        Ok(())
    }
}

impl Runner for ProcessRunner {
    fn execute(&mut self, task: &Task) -> Result<i32> {
        let cwd = match &task.cwd {
            Some(rel) => self.repo_root.join(rel),
            None => self.repo_root.clone(),
        };
        blog_debug!(
            "ProcessRunner::execute program={} args={:?} cwd={}",
            task.program,
            task.args,
            cwd.display()
        );
        let status = Command::new(&task.program)
            .args(&task.args)
            .current_dir(&cwd)
            .status()?;
        match status.code() {
            Some(code) => Ok(code),
            // Killed by a signal on unix
            None => Err(Error::TaskTerminated {
                task: task.display(),
            }),
        }
    }
}
