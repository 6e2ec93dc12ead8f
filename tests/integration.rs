// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, DEFAULT_REFRESH_THRESHOLD};
use iced_gallery::effects::refresh::{run_sequence, Controller};
use iced_gallery::error::{Error, RefreshError};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn config_round_trip_preserves_tunables() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let written = Config {
        theme: Some("dark".to_string()),
        refresh_threshold: Some(140.0),
        settle_delay_ms: Some(750),
        shimmer_speed: Some(1.5),
    };
    config::save_to_path(&written, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    assert_eq!(loaded.theme.as_deref(), Some("dark"));
    assert_eq!(loaded.refresh_threshold(), 140.0);
    assert_eq!(loaded.settle_delay_ms(), 750);
    assert_eq!(loaded.shimmer_speed(), 1.5);

    dir.close().expect("failed to close temporary directory");
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("absent.toml");

    assert!(config::load_from_path(&path).is_err());
    let fallback = config::load_from_path(&path).unwrap_or_default();
    assert_eq!(fallback.refresh_threshold(), DEFAULT_REFRESH_THRESHOLD);
}

#[tokio::test]
async fn full_refresh_cycle_arms_runs_and_resets() {
    let mut controller = Controller::new(100.0);

    controller.on_drag(130.0);
    let generation = controller.on_drag_end().expect("gesture should arm");
    assert!(controller.is_refreshing());

    let result = run_sequence(Duration::from_millis(20), || async {
        Ok::<(), Error>(())
    })
    .await;
    assert!(result.is_ok());

    assert!(controller.finish(generation));
    assert!(!controller.is_refreshing());
    assert_eq!(controller.progress(), 0.0);
}

#[tokio::test]
async fn failed_callback_surfaces_but_still_resets() {
    let mut controller = Controller::new(100.0);

    controller.on_drag(200.0);
    let generation = controller.on_drag_end().expect("gesture should arm");

    let result = run_sequence(Duration::from_millis(5), || async {
        Err::<(), Error>(Error::Io("feed unavailable".into()))
    })
    .await;
    let err = result.expect_err("callback failure must surface");
    assert!(matches!(err, RefreshError::CallbackFailed(ref msg) if msg.contains("feed unavailable")));

    // The completion still funnels through the single reset path.
    assert!(controller.finish(generation));
    assert!(!controller.is_refreshing());
}

#[tokio::test]
async fn settle_delay_elapses_before_the_callback_runs() {
    let started = Instant::now();
    let mut callback_at = None;

    let _ = run_sequence(Duration::from_millis(80), || {
        callback_at = Some(started.elapsed());
        async { Ok::<(), Error>(()) }
    })
    .await;

    let elapsed = callback_at.expect("callback should run");
    assert!(elapsed >= Duration::from_millis(80));
}

#[tokio::test]
async fn completion_after_unmount_is_discarded() {
    let mut controller = Controller::new(100.0);

    controller.on_drag(150.0);
    let generation = controller.on_drag_end().expect("gesture should arm");

    let sequence = tokio::spawn(run_sequence(Duration::from_millis(10), || async {
        Ok::<(), Error>(())
    }));

    controller.on_unmount();
    let result = sequence.await.expect("sequence task should not panic");
    assert!(result.is_ok());

    // The landing completion must not mutate the unmounted controller.
    assert!(!controller.finish(generation));
    let snapshot = controller.snapshot();
    assert!(snapshot.refreshing, "state is frozen, not reset");
    assert!(!controller.is_mounted());
}

#[tokio::test]
async fn stale_generation_cannot_finish_a_new_cycle() {
    let mut controller = Controller::new(100.0);

    controller.on_drag(150.0);
    let first = controller.on_drag_end().expect("first gesture should arm");
    assert!(controller.finish(first));

    controller.on_drag(150.0);
    let second = controller.on_drag_end().expect("second gesture should arm");
    assert_ne!(first, second);

    // A completion from the first cycle races in late.
    assert!(!controller.finish(first));
    assert!(controller.is_refreshing(), "second cycle still in flight");

    assert!(controller.finish(second));
    assert!(!controller.is_refreshing());
}
