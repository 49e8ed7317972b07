use std::process::ExitCode;

use clap::{Parser, Subcommand};

use bob::config::Config;
use bob::dispatch::{say, Dispatcher};
use bob::runner::ProcessRunner;
use bob::{blog, blog_error, Error, Part, Result, TaskReport};

/// Bob - build orchestrator for the many moving parts of Linkage
#[derive(Parser, Debug)]
#[command(name = "bob")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    BOB_DEBUG=1     Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.bob/bob.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build a moving part of linkage
    Build {
        /// The part of linkage to build
        #[arg(value_enum)]
        part: Part,

        /// Pass --release to cargo builds in the plan
        #[arg(long)]
        release: bool,

        /// Run every task even when one fails, and exit 0 regardless
        #[arg(long)]
        keep_going: bool,

        /// Print a JSON summary of the run
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    bob::log::init(cli.debug);
    blog!("Bob starting");

    let Command::Build {
        part,
        release,
        keep_going,
        json,
    } = cli.command;

    match run_build(part, release, keep_going, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::TaskFailed { task, code }) => {
            say(&format!("ERROR: {} failed with exit code {}", task, code));
            blog_error!("Task failed: {} (exit {})", task, code);
            // Propagate the failing tool's exit code where it fits.
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
        Err(e) => {
            say(&format!("ERROR: {}", e));
            blog_error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_build(part: Part, release: bool, keep_going: bool, json: bool) -> Result<()> {
    let config = Config::load()?;
    let repo_root = config.effective_repo_root()?;
    blog!(
        "Build: part={} release={} keep_going={} root={}",
        part,
        release,
        keep_going,
        repo_root.display()
    );

    let plan = part.tasks(&config, release);
    ProcessRunner::preflight(&plan)?;

    let runner = ProcessRunner::new(&repo_root);
    let keep_going = keep_going || config.keep_going;
    let mut dispatcher = Dispatcher::new(runner, keep_going);
    let reports = dispatcher.run(part, &config, release)?;

    if json {
        print_summary(part, &reports)?;
    }
    Ok(())
}

fn summary(part: Part, reports: &[TaskReport]) -> serde_json::Value {
    serde_json::json!({
        "part": part,
        "tasks": reports,
        "status": if reports.iter().all(TaskReport::succeeded) { "ok" } else { "failed" },
    })
}

fn print_summary(part: Part, reports: &[TaskReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&summary(part, reports))?);
    Ok(())
}
