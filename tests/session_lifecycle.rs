//! Integration tests for the workout session state machine and ticker

use repset::session::{SessionPhase, SessionTicker, WorkoutSession};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

#[test]
fn test_full_session_lifecycle() {
    let mut session = WorkoutSession::new("Strength Circuit", 8);
    assert_eq!(session.phase(), SessionPhase::Running);

    session.tick();
    session.tick();
    assert_eq!(session.elapsed_seconds(), 2);

    session.toggle_pause();
    assert_eq!(session.phase(), SessionPhase::Paused);

    // the clock is frozen the instant the session pauses
    session.tick();
    assert_eq!(session.elapsed_seconds(), 2);

    session.toggle_pause();
    session.tick();
    assert_eq!(session.elapsed_seconds(), 3);

    session.stop();
    assert_eq!(session.phase(), SessionPhase::Ended);
    session.tick();
    assert_eq!(session.elapsed_seconds(), 3);
}

#[test]
fn test_rep_input_drives_progress() {
    let mut session = WorkoutSession::new("Ab Burner", 20);
    assert_eq!(session.progress(), 1.0);

    session.set_current_rep(5);
    assert!((session.progress() - 0.25).abs() < f64::EPSILON);

    session.set_current_rep(40);
    assert_eq!(session.progress(), 1.0);
}

#[tokio::test]
async fn test_ticker_advances_a_running_session() {
    let mut session = WorkoutSession::new("Endurance Run", 8);
    let (tx, mut rx) = mpsc::channel(4);
    let _ticker = SessionTicker::spawn(tx);

    let tick = timeout(Duration::from_secs(3), rx.recv())
        .await
        .expect("first tick within the timeout");
    assert!(tick.is_some());

    session.tick();
    assert_eq!(session.elapsed_seconds(), 1);
}

#[tokio::test]
async fn test_ticker_does_not_outlive_its_handle() {
    let (tx, mut rx) = mpsc::channel(4);
    let ticker = SessionTicker::spawn(tx);

    drop(ticker);

    // the aborted task drops its sender, so the stream ends
    let drained = timeout(Duration::from_secs(3), async {
        while rx.recv().await.is_some() {}
    })
    .await;
    assert!(drained.is_ok());
}

#[tokio::test]
async fn test_paused_session_ignores_delivered_ticks() {
    let mut session = WorkoutSession::new("Free Session", 8);
    let (tx, mut rx) = mpsc::channel(4);
    let _ticker = SessionTicker::spawn(tx);

    session.toggle_pause();

    if timeout(Duration::from_secs(3), rx.recv()).await.is_ok() {
        // a tick that raced the pause must not advance the clock
        session.tick();
    }
    assert_eq!(session.elapsed_seconds(), 0);
}
