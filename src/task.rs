//! Task data model for the build dispatcher.
//!
//! A Task is one external command invocation with a fixed executable,
//! argument list, and working directory. Tasks are built once per run
//! from the static part dispatch table and never persisted.

use serde::Serialize;
use std::path::PathBuf;

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Executable name, resolved through PATH by the runner.
    pub program: String,
    /// Ordered argument list.
    pub args: Vec<String>,
    /// Working directory relative to the repository root.
    /// None means the repository root itself.
    pub cwd: Option<PathBuf>,
}

impl Task {
    pub fn new(program: &str, args: &[&str], cwd: Option<&str>) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: cwd.map(PathBuf::from),
        }
    }

    /// A `cargo build` invocation at the repository root, optionally
    /// filtered to one workspace package.
    pub fn cargo_build(cargo: &str, package: Option<&str>, release: bool) -> Self {
        let mut args = vec!["build".to_string()];
        if let Some(package) = package {
            args.push(format!("--package={}", package));
        }
        if release {
            args.push("--release".to_string());
        }
        Self {
            program: cargo.to_string(),
            args,
            cwd: None,
        }
    }

    /// An npm invocation in the given directory.
    pub fn npm(npm: &str, args: &[&str], cwd: &str) -> Self {
        Self::new(npm, args, Some(cwd))
    }

    /// Human-readable form for logs and error messages.
    pub fn display(&self) -> String {
        let mut s = self.program.clone();
        for arg in &self.args {
            s.push(' ');
            s.push_str(arg);
        }
        if let Some(cwd) = &self.cwd {
            s.push_str(&format!(" (in {})", cwd.display()));
        }
        s
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// An ordered run of tasks with an optional status label, printed
/// before the group executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub label: Option<&'static str>,
    pub tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn new(label: &'static str, tasks: Vec<Task>) -> Self {
        Self {
            label: Some(label),
            tasks,
        }
    }

    pub fn unlabeled(tasks: Vec<Task>) -> Self {
        Self { label: None, tasks }
    }
}

/// The exit code of one executed task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
    #[serde(flatten)]
    pub task: Task,
    pub exit_code: i32,
}

impl TaskReport {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}
