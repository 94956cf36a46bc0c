//! Session clock ticker
//!
//! A cancellable periodic task that emits one tick per second over a
//! channel while the session view is alive. The task is aborted on stop
//! and again on drop, so a ticker can never outlive its session.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

/// Marker event emitted once per second of wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTick;

/// Handle to the spawned clock task
#[derive(Debug)]
pub struct SessionTicker {
    handle: JoinHandle<()>,
}

impl SessionTicker {
    /// Spawn the clock task, sending a tick on `tx` every second
    ///
    /// Sending stops as soon as the receiver is dropped.
    pub fn spawn(tx: mpsc::Sender<SessionTick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut clock = interval(Duration::from_secs(1));
            clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // the first tick resolves immediately; the clock starts at zero
            clock.tick().await;

            loop {
                clock.tick().await;
                if tx.send(SessionTick).await.is_err() {
                    break;
                }
            }
        });

        debug!("session ticker started");
        Self { handle }
    }

    /// Cancel the clock task immediately
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether the task has finished or been cancelled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SessionTicker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("session ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_ticker_emits_ticks() {
        let (tx, mut rx) = mpsc::channel(4);
        let _ticker = SessionTicker::spawn(tx);

        let tick = timeout(Duration::from_secs(3), rx.recv())
            .await
            .expect("tick should arrive within the timeout");
        assert_eq!(tick, Some(SessionTick));
    }

    #[tokio::test]
    async fn test_stop_cancels_the_task() {
        let (tx, mut rx) = mpsc::channel(4);
        let ticker = SessionTicker::spawn(tx);

        ticker.stop();

        // the aborted task drops its sender, closing the channel
        let closed = timeout(Duration::from_secs(3), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(closed.is_ok());
    }

    #[tokio::test]
    async fn test_drop_cancels_the_task() {
        let (tx, mut rx) = mpsc::channel(4);
        drop(SessionTicker::spawn(tx));

        let closed = timeout(Duration::from_secs(3), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(closed.is_ok());
    }
}
