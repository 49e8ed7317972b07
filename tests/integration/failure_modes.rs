//! Failure semantics: the default halts on the first non-zero exit and
//! propagates its code; --keep-going restores the historical behavior
//! of running everything and reporting success.

use bob::config::Config;
use bob::dispatch::Dispatcher;
use bob::{Error, Part};

use crate::fixtures::RecordingRunner;

#[test]
fn first_failure_halts_and_carries_the_exit_code() {
    let runner = RecordingRunner::with_exit_codes(&[0, 0, 101]);
    let mut dispatcher = Dispatcher::new(runner, false);
    let result = dispatcher.run(Part::All, &Config::default(), false);

    match result {
        Err(Error::TaskFailed { task, code }) => {
            assert_eq!(code, 101);
            assert!(task.starts_with("cargo build"), "unexpected task: {}", task);
        }
        other => panic!("expected TaskFailed, got {:?}", other),
    }
}

#[test]
fn tasks_after_a_failure_are_skipped() {
    let runner = RecordingRunner::with_exit_codes(&[1]);
    let mut dispatcher = Dispatcher::new(runner, false);
    let result = dispatcher.run(Part::LibExamples, &Config::default(), false);
    assert!(result.is_err());

    // Only the failing first task ran; the remaining four were skipped.
    assert_eq!(dispatcher.runner().executed.len(), 1);
    assert_eq!(Part::LibExamples.tasks(&Config::default(), false).len(), 5);
}

#[test]
fn keep_going_runs_the_full_plan_despite_failures() {
    let runner = RecordingRunner::with_exit_codes(&[1, 2, 3]);
    let mut dispatcher = Dispatcher::new(runner, true);
    let reports = dispatcher
        .run(Part::LibExamples, &Config::default(), false)
        .expect("keep-going never fails the run");

    assert_eq!(reports.len(), 5);
    assert_eq!(reports[0].exit_code, 1);
    assert_eq!(reports[1].exit_code, 2);
    assert_eq!(reports[2].exit_code, 3);
    assert!(reports[3].succeeded());
    assert!(reports[4].succeeded());
}

#[test]
fn successful_runs_report_every_task_as_succeeded() {
    let mut dispatcher = Dispatcher::new(RecordingRunner::new(), false);
    let reports = dispatcher
        .run(Part::Cockpit, &Config::default(), false)
        .unwrap();
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.succeeded()));
}
