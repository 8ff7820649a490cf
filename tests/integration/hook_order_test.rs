//! Integration tests for serial execution of hook chains.

mod helpers;

use recordhook_core::types::{Patch, UpdateOptions};

use helpers::{CallLog, RecordingExecutor};

#[tokio::test(start_paused = true)]
async fn test_after_hooks_complete_in_registration_order() {
    let log = CallLog::default();
    let mut entity = helpers::entity_with(RecordingExecutor::echo());

    // Slowest first: a concurrent runner would finish hook3 first.
    entity
        .register_after_update_hook("hook1", helpers::recording_hook(&log, "hook1", 400))
        .unwrap();
    entity
        .register_after_update_hook("hook2", helpers::recording_hook(&log, "hook2", 200))
        .unwrap();
    entity
        .register_after_update_hook("hook3", helpers::recording_hook(&log, "hook3", 100))
        .unwrap();

    entity
        .update(&Patch::new(), &UpdateOptions::new())
        .await
        .unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["hook1", "hook2", "hook3"]);
}

#[tokio::test(start_paused = true)]
async fn test_before_hooks_complete_in_registration_order() {
    let log = CallLog::default();
    let mut entity = helpers::entity_with(RecordingExecutor::echo());

    entity
        .register_before_update_hook("slow", helpers::recording_hook(&log, "slow", 300))
        .unwrap();
    entity
        .register_before_update_hook("fast", helpers::recording_hook(&log, "fast", 10))
        .unwrap();

    entity
        .update(&Patch::new(), &UpdateOptions::new())
        .await
        .unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["slow", "fast"]);
}

#[tokio::test]
async fn test_every_after_hook_runs_once() {
    let log = CallLog::default();
    let mut entity = helpers::entity_with(RecordingExecutor::echo());
    let names = [
        "doSomethingAfterCallback",
        "doSomethingElseAfterCallback",
        "doOneOtherThing",
    ];
    for name in names {
        entity
            .register_after_update_hook(name, helpers::recording_hook(&log, name, 0))
            .unwrap();
    }

    entity
        .update(
            &Patch::new().with_string("name", "johanna"),
            &UpdateOptions::new().with_string("updatingUser", "jared"),
        )
        .await
        .unwrap();

    assert_eq!(*log.lock().unwrap(), names.to_vec());
}

#[tokio::test]
async fn test_duplicate_names_both_run() {
    let log = CallLog::default();
    let mut entity = helpers::entity_with(RecordingExecutor::echo());
    entity
        .register_after_update_hook("audit", helpers::recording_hook(&log, "first", 0))
        .unwrap();
    entity
        .register_after_update_hook("audit", helpers::recording_hook(&log, "second", 0))
        .unwrap();

    entity
        .update(&Patch::new(), &UpdateOptions::new())
        .await
        .unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
}
