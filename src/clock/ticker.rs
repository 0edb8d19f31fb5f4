//! Recurring clock tick
//!
//! The ticker only produces timestamps. Whoever owns the [`TaskStore`]
//! receives them and applies them with `tick`, so no state is shared with the
//! background task.
//!
//! [`TaskStore`]: crate::task::TaskStore

use chrono::{Local, NaiveDateTime};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Where "now" comes from
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub NaiveDateTime);

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Handle to a running ticker. Dropping it stops the ticker.
#[derive(Debug)]
pub struct TickHandle {
    task: JoinHandle<()>,
}

impl TickHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct Ticker;

impl Ticker {
    /// Start sending a snapshot of `source` every `period`, the first one
    /// immediately. Must be called from within a tokio runtime.
    pub fn spawn(
        period: Duration,
        source: impl TimeSource,
    ) -> (TickHandle, mpsc::UnboundedReceiver<NaiveDateTime>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(source.now()).is_err() {
                    tracing::debug!("Tick receiver dropped, stopping ticker");
                    break;
                }
            }
        });
        (TickHandle { task }, rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_ticker_delivers_snapshots() {
        let (_handle, mut rx) = Ticker::spawn(Duration::from_millis(10), FixedTime(fixed()));
        for _ in 0..3 {
            let now = tokio::time::timeout(Duration::from_secs(2), rx.recv())
                .await
                .expect("tick within timeout");
            assert_eq!(now, Some(fixed()));
        }
    }

    #[tokio::test]
    async fn test_cancel_closes_channel() {
        let (handle, mut rx) = Ticker::spawn(Duration::from_millis(10), FixedTime(fixed()));
        handle.cancel();

        let drained = tokio::time::timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok(), "channel should close after cancel");
    }

    #[tokio::test]
    async fn test_dropping_receiver_stops_ticker() {
        let (handle, rx) = Ticker::spawn(Duration::from_millis(5), FixedTime(fixed()));
        drop(rx);

        let stopped = tokio::time::timeout(Duration::from_secs(2), async {
            while !handle.is_finished() {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(stopped.is_ok(), "ticker should stop once nobody listens");
    }

    #[test]
    fn test_system_clock_advances() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }
}
