//! Shared fixtures: a fake runner that records every task the
//! dispatcher hands it and plays back scripted exit codes.

use bob::runner::Runner;
use bob::{Result, Task};

pub struct RecordingRunner {
    pub executed: Vec<Task>,
    exit_codes: Vec<i32>,
}

impl RecordingRunner {
    /// Every task succeeds.
    pub fn new() -> Self {
        Self {
            executed: Vec::new(),
            exit_codes: Vec::new(),
        }
    }

    /// The nth executed task exits with the nth code; tasks past the
    /// end of the script succeed.
    pub fn with_exit_codes(codes: &[i32]) -> Self {
        Self {
            executed: Vec::new(),
            exit_codes: codes.to_vec(),
        }
    }
}

impl Runner for RecordingRunner {
    fn execute(&mut self, task: &Task) -> Result<i32> {
        let code = self
            .exit_codes
            .get(self.executed.len())
            .copied()
            .unwrap_or(0);
        self.executed.push(task.clone());
        Ok(code)
    }
}
