//! Integration tests for failure short-circuiting and hook attribution.

mod helpers;

use recordhook_core::error::{AppError, ErrorKind};
use recordhook_core::types::{Patch, UpdateOptions};

use helpers::{CallLog, RecordingExecutor};

#[tokio::test]
async fn test_before_hook_failure_aborts_update() {
    let log = CallLog::default();
    let executor = RecordingExecutor::echo();
    let mut entity = helpers::entity_with(executor.clone());

    entity
        .register_before_update_hook("normalize", helpers::recording_hook(&log, "normalize", 0))
        .unwrap();
    entity
        .register_before_update_hook("validateAge", helpers::failing_hook("age must be positive"))
        .unwrap();
    entity
        .register_before_update_hook("unreached", helpers::recording_hook(&log, "unreached", 0))
        .unwrap();
    entity
        .register_after_update_hook("after", helpers::recording_hook(&log, "after", 0))
        .unwrap();

    let err = entity
        .update(&Patch::new().with_int("age", -1), &UpdateOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.callback_name(), Some("validateAge"));
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "age must be positive");
    assert_eq!(executor.calls(), 0);
    assert_eq!(*log.lock().unwrap(), vec!["normalize"]);
}

#[tokio::test]
async fn test_executor_failure_skips_after_hooks() {
    let log = CallLog::default();
    let executor = RecordingExecutor::failing(AppError::persistence("connection reset"));
    let mut entity = helpers::entity_with(executor.clone());

    entity
        .register_before_update_hook("before", helpers::recording_hook(&log, "before", 0))
        .unwrap();
    entity
        .register_after_update_hook("after", helpers::recording_hook(&log, "after", 0))
        .unwrap();

    let err = entity
        .update(&Patch::new(), &UpdateOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Persistence);
    assert_eq!(err.callback_name(), None);
    assert!(!err.is_hook_failure());
    assert_eq!(executor.calls(), 1);
    assert_eq!(*log.lock().unwrap(), vec!["before"]);
}

#[tokio::test]
async fn test_after_hook_failure_is_reported_after_write() {
    let log = CallLog::default();
    let executor = RecordingExecutor::echo();
    let mut entity = helpers::entity_with(executor.clone());

    entity
        .register_after_update_hook("sendEmail", helpers::failing_hook("smtp down"))
        .unwrap();
    entity
        .register_after_update_hook("unreached", helpers::recording_hook(&log, "unreached", 0))
        .unwrap();

    let err = entity
        .update(&Patch::new(), &UpdateOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.callback_name(), Some("sendEmail"));
    assert_eq!(executor.calls(), 1);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failure_reports_first_of_duplicate_names() {
    let mut entity = helpers::entity_with(RecordingExecutor::echo());
    entity
        .register_before_update_hook("check", helpers::failing_hook("first check"))
        .unwrap();
    entity
        .register_before_update_hook("check", helpers::failing_hook("second check"))
        .unwrap();

    let err = entity
        .update(&Patch::new(), &UpdateOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.callback_name(), Some("check"));
    assert_eq!(err.message, "first check");
}
