//! Integration tests for argument propagation to hooks and the executor.

mod helpers;

use std::sync::Arc;

use recordhook_core::types::{Patch, UpdateOptions};

use helpers::{ArgCapture, RecordingExecutor, addr};

#[tokio::test]
async fn test_hooks_receive_the_callers_patch_and_options() {
    let executor = RecordingExecutor::echo();
    let before = Arc::new(ArgCapture::default());
    let after = Arc::new(ArgCapture::default());

    let mut entity = helpers::entity_with(executor.clone());
    entity
        .register_before_update_hook("doSomethingBeforeCallback", before.clone())
        .unwrap();
    entity
        .register_after_update_hook("doSomethingAfterCallback", after.clone())
        .unwrap();
    entity
        .register_after_update_hook("doSomethingElseAfterCallback", after.clone())
        .unwrap();

    let patch = Patch::new().with_string("name", "johanna");
    let options = UpdateOptions::new().with_string("updatingUser", "jared");
    entity.update(&patch, &options).await.unwrap();

    let expected = (addr(&patch), addr(&options));
    assert_eq!(before.seen(), vec![expected]);
    assert_eq!(after.seen(), vec![expected, expected]);
    assert_eq!(executor.seen(), vec![(entity.id(), addr(&patch))]);
}

#[tokio::test]
async fn test_patch_contents_reach_hooks_unchanged() {
    let mut entity = helpers::entity_with(RecordingExecutor::echo());
    entity
        .register_before_update_fn("check", |patch, options| {
            let ok = patch.get_string("name") == Some("johanna")
                && options.get_string("updatingUser") == Some("jared");
            futures::FutureExt::boxed(async move {
                if ok {
                    Ok(())
                } else {
                    Err(recordhook_core::error::AppError::hook("unexpected arguments"))
                }
            })
        })
        .unwrap();

    let result = entity
        .update(
            &Patch::new().with_string("name", "johanna"),
            &UpdateOptions::new().with_string("updatingUser", "jared"),
        )
        .await;

    assert!(result.is_ok());
}
