//! The build dispatcher: resolves a part to its task plan and runs the
//! tasks strictly in order, one at a time.

use crate::config::Config;
use crate::part::Part;
use crate::runner::Runner;
use crate::task::TaskReport;
use crate::{blog, blog_warn, Error, Result};

/// Print a status line the way bob talks.
pub fn say(msg: &str) {
    println!("[👷🏼‍♂️ Bob]: {}", msg);
}

pub struct Dispatcher<R: Runner> {
    runner: R,
    /// Run the whole plan even when a task fails, and report success
    /// regardless. This was the only behavior of the original build
    /// script; the default now halts on the first failure.
    keep_going: bool,
}

impl<R: Runner> Dispatcher<R> {
    pub fn new(runner: R, keep_going: bool) -> Self {
        Self { runner, keep_going }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute the plan for `part` sequentially, waiting on each task
    /// before starting the next.
    ///
    /// Returns a report per executed task. With `keep_going` off, the
    /// first non-zero exit halts the sequence and surfaces as
    /// [`Error::TaskFailed`] carrying that exit code.
    pub fn run(&mut self, part: Part, config: &Config, release: bool) -> Result<Vec<TaskReport>> {
        let plan = part.plan(config, release);
        blog!(
            "Dispatching part={} release={} groups={}",
            part,
            release,
            plan.len()
        );

        if let Some(banner) = part.banner() {
            say(banner);
        }

        let mut reports = Vec::new();
        for group in plan {
            if let Some(label) = group.label {
                say(label);
            }
            for task in group.tasks {
                blog!("Running task: {}", task);
                let exit_code = self.runner.execute(&task)?;
                reports.push(TaskReport {
                    task: task.clone(),
                    exit_code,
                });
                if exit_code != 0 {
                    if self.keep_going {
                        blog_warn!("Task failed (exit {}), continuing: {}", exit_code, task);
                        continue;
                    }
                    blog_warn!("Task failed (exit {}), halting: {}", exit_code, task);
                    return Err(Error::TaskFailed {
                        task: task.display(),
                        code: exit_code,
                    });
                }
            }
        }

        say("Done!");
        blog!("Part {} finished: {} tasks run", part, reports.len());
        Ok(reports)
    }
}
