//! Verifies that every part the CLI accepts dispatches its exact task
//! sequence: order, arguments, and working directories.

use std::path::PathBuf;

use bob::config::Config;
use bob::dispatch::Dispatcher;
use bob::{Part, Task};
use clap::ValueEnum;

use crate::fixtures::RecordingRunner;

fn dispatch(part: Part) -> Vec<Task> {
    let mut dispatcher = Dispatcher::new(RecordingRunner::new(), false);
    let reports = dispatcher
        .run(part, &Config::default(), false)
        .expect("all tasks succeed");
    reports.into_iter().map(|r| r.task).collect()
}

fn npm(args: &[&str], cwd: &str) -> Task {
    Task::npm("npm", args, cwd)
}

#[test]
fn cockpit_frontend_installs_then_builds_the_web_app() {
    assert_eq!(
        dispatch(Part::CockpitFrontend),
        vec![
            npm(&["install"], "cockpit/frontend/web"),
            npm(&["run", "build"], "cockpit/frontend/web"),
        ]
    );
}

#[test]
fn cockpit_backend_is_a_filtered_cargo_build() {
    assert_eq!(
        dispatch(Part::CockpitBackend),
        vec![Task::cargo_build("cargo", Some("cockpit-backend"), false)]
    );
}

#[test]
fn cockpit_runs_frontend_then_backend() {
    assert_eq!(
        dispatch(Part::Cockpit),
        vec![
            npm(&["install"], "cockpit/frontend/web"),
            npm(&["run", "build"], "cockpit/frontend/web"),
            Task::cargo_build("cargo", Some("cockpit-backend"), false),
        ]
    );
}

#[test]
fn runtime_and_carburetor_build_their_packages() {
    assert_eq!(
        dispatch(Part::Runtime),
        vec![Task::cargo_build("cargo", Some("runtime"), false)]
    );
    assert_eq!(
        dispatch(Part::Carburetor),
        vec![Task::cargo_build("cargo", Some("carburetor"), false)]
    );
}

#[test]
fn lib_installs_then_builds_linkage_node() {
    assert_eq!(
        dispatch(Part::Lib),
        vec![
            npm(&["install"], "lib/linkage-node"),
            npm(&["run", "build"], "lib/linkage-node"),
        ]
    );
}

#[test]
fn lib_examples_only_links_and_builds_the_examples() {
    assert_eq!(
        dispatch(Part::LibExamplesOnly),
        vec![
            npm(&["link"], "lib/linkage-node"),
            npm(
                &["link", "@impossiblerobotics/linkage", "--save"],
                "examples/lib/linkage-node"
            ),
            npm(&["run", "build"], "examples/lib/linkage-node"),
        ]
    );
}

#[test]
fn lib_examples_runs_lib_then_examples_without_dedup() {
    let tasks = dispatch(Part::LibExamples);
    assert_eq!(tasks.len(), 5);
    let mut expected = dispatch(Part::Lib);
    expected.extend(dispatch(Part::LibExamplesOnly));
    assert_eq!(tasks, expected);
}

#[test]
fn all_runs_eight_tasks_in_order() {
    let tasks = dispatch(Part::All);
    assert_eq!(tasks.len(), 8);

    let mut expected = dispatch(Part::CockpitFrontend);
    expected.push(Task::cargo_build("cargo", None, false));
    expected.extend(dispatch(Part::Lib));
    expected.extend(dispatch(Part::LibExamplesOnly));
    assert_eq!(tasks, expected);
}

#[test]
fn every_part_dispatches_at_least_one_task() {
    for part in Part::ALL {
        assert!(
            !dispatch(part).is_empty(),
            "part {} dispatched no tasks",
            part
        );
    }
}

#[test]
fn npm_tasks_always_carry_a_working_directory() {
    for part in Part::ALL {
        for task in dispatch(part) {
            if task.program == "npm" {
                assert!(task.cwd.is_some(), "npm task without cwd in {}", part);
            } else {
                // cargo runs at the repository root
                assert_eq!(task.cwd, None::<PathBuf>);
            }
        }
    }
}

#[test]
fn unknown_part_never_reaches_the_dispatcher() {
    // Unknown names fail enum parsing, so no plan and no task can
    // ever be constructed for them.
    assert!(Part::from_str("bogus", true).is_err());
    assert!(Part::from_str("deploy", true).is_err());
}

#[test]
fn release_flag_only_touches_cargo_tasks() {
    let mut dispatcher = Dispatcher::new(RecordingRunner::new(), false);
    let reports = dispatcher
        .run(Part::All, &Config::default(), true)
        .expect("all tasks succeed");
    for report in reports {
        if report.task.program == "cargo" {
            assert!(report.task.args.contains(&"--release".to_string()));
        } else {
            assert!(!report.task.args.contains(&"--release".to_string()));
        }
    }
}
