//! The part dispatch table.
//!
//! A Part is a named logical build target selectable on the command line.
//! Each part resolves once to a flat, ordered list of task groups; there is
//! no branching on intermediate results. Composite parts (`all`, `cockpit`,
//! `lib-examples`) are concatenations of the simple parts' groups, with no
//! deduplication.

use clap::ValueEnum;
use serde::Serialize;

use crate::config::Config;
use crate::task::{Task, TaskGroup};

const FRONTEND_DIR: &str = "cockpit/frontend/web";
const LIB_DIR: &str = "lib/linkage-node";
const LIB_EXAMPLES_DIR: &str = "examples/lib/linkage-node";
const LIB_PACKAGE: &str = "@impossiblerobotics/linkage";

/// A named build target. Unknown names are rejected by clap before
/// any task is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Part {
    All,
    Cockpit,
    CockpitFrontend,
    CockpitBackend,
    Runtime,
    Carburetor,
    Lib,
    LibExamples,
    LibExamplesOnly,
}

impl Part {
    /// Every part the CLI accepts, in display order.
    pub const ALL: [Part; 9] = [
        Part::All,
        Part::Cockpit,
        Part::CockpitFrontend,
        Part::CockpitBackend,
        Part::Runtime,
        Part::Carburetor,
        Part::Lib,
        Part::LibExamples,
        Part::LibExamplesOnly,
    ];

    /// Banner printed before a composite part's groups run. Simple parts
    /// rely on their single group's label instead.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Part::All => Some("Building all parts..."),
            Part::Cockpit => Some("Building cockpit frontend and backend..."),
            Part::LibExamples => Some("Building linkage lib and its examples..."),
            _ => None,
        }
    }

    /// Resolve this part to its ordered task groups.
    ///
    /// `release` applies `--release` to every cargo task in the plan;
    /// npm tasks are unaffected.
    pub fn plan(&self, config: &Config, release: bool) -> Vec<TaskGroup> {
        let cargo = config.effective_cargo();
        let npm = config.effective_npm();
        match self {
            Part::All => vec![
                frontend(npm),
                workspace(cargo, release),
                lib(npm),
                lib_examples(npm),
            ],
            Part::Cockpit => vec![frontend(npm), backend(cargo, release)],
            Part::CockpitFrontend => vec![frontend(npm)],
            Part::CockpitBackend => vec![backend(cargo, release)],
            Part::Runtime => vec![TaskGroup::new(
                "Building runtime...",
                vec![Task::cargo_build(cargo, Some("runtime"), release)],
            )],
            Part::Carburetor => vec![TaskGroup::new(
                "Building carburetor...",
                vec![Task::cargo_build(cargo, Some("carburetor"), release)],
            )],
            Part::Lib => vec![lib(npm)],
            Part::LibExamples => vec![lib(npm), lib_examples(npm)],
            Part::LibExamplesOnly => vec![lib_examples(npm)],
        }
    }

    /// All tasks of the plan in execution order, groups flattened.
    pub fn tasks(&self, config: &Config, release: bool) -> Vec<Task> {
        self.plan(config, release)
            .into_iter()
            .flat_map(|group| group.tasks)
            .collect()
    }
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // ValueEnum names are the CLI-facing kebab-case names.
        let value = self.to_possible_value().expect("no skipped variants");
        write!(f, "{}", value.get_name())
    }
}

fn frontend(npm: &str) -> TaskGroup {
    TaskGroup::new(
        "Building frontend...",
        vec![
            Task::npm(npm, &["install"], FRONTEND_DIR),
            Task::npm(npm, &["run", "build"], FRONTEND_DIR),
        ],
    )
}

fn backend(cargo: &str, release: bool) -> TaskGroup {
    TaskGroup::new(
        "Building backend...",
        vec![Task::cargo_build(cargo, Some("cockpit-backend"), release)],
    )
}

fn workspace(cargo: &str, release: bool) -> TaskGroup {
    TaskGroup::unlabeled(vec![Task::cargo_build(cargo, None, release)])
}

fn lib(npm: &str) -> TaskGroup {
    TaskGroup::new(
        "Building linkage lib...",
        vec![
            Task::npm(npm, &["install"], LIB_DIR),
            Task::npm(npm, &["run", "build"], LIB_DIR),
        ],
    )
}

fn lib_examples(npm: &str) -> TaskGroup {
    TaskGroup::new(
        "Building linkage lib examples...",
        vec![
            Task::npm(npm, &["link"], LIB_DIR),
            Task::npm(npm, &["link", LIB_PACKAGE, "--save"], LIB_EXAMPLES_DIR),
            Task::npm(npm, &["run", "build"], LIB_EXAMPLES_DIR),
        ],
    )
}
