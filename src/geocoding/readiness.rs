use crate::geocoding::sdk::SdkSlot;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Read side of the SDK readiness signal
#[derive(Debug, Clone)]
pub struct ReadinessFlag {
    rx: watch::Receiver<bool>,
}

impl ReadinessFlag {
    /// A flag that never changes, mostly for callers that load the SDK
    /// synchronously.
    pub fn fixed(ready: bool) -> Self {
        let (_tx, rx) = watch::channel(ready);
        Self { rx }
    }

    pub fn from_receiver(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the flag turns true. Returns `false` if the poller
    /// stopped (deadline or drop) while the SDK was still missing.
    pub async fn wait_ready(&mut self) -> bool {
        self.rx.wait_for(|ready| *ready).await.is_ok()
    }
}

/// Polls an [`SdkSlot`] until it is loaded or a deadline passes.
///
/// Dropping the poller stops polling; the flag keeps its last value.
pub struct ReadinessPoller {
    flag: ReadinessFlag,
    task: JoinHandle<()>,
}

impl ReadinessPoller {
    pub fn spawn(slot: SdkSlot, poll_every: Duration, deadline: Duration) -> Self {
        let (tx, rx) = watch::channel(slot.is_loaded());
        let task = tokio::spawn(poll(slot, tx, poll_every, deadline));
        Self {
            flag: ReadinessFlag { rx },
            task,
        }
    }

    pub fn flag(&self) -> ReadinessFlag {
        self.flag.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ReadinessPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn poll(slot: SdkSlot, tx: watch::Sender<bool>, poll_every: Duration, deadline: Duration) {
    if *tx.borrow() {
        return;
    }

    let give_up_at = Instant::now() + deadline;
    let mut ticker = interval(poll_every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if slot.is_loaded() {
            info!("Map SDK ready");
            let _ = tx.send(true);
            return;
        }
        if Instant::now() >= give_up_at {
            warn!("Map SDK did not load within {:?}, geocoding disabled", deadline);
            return;
        }
        debug!("Map SDK not ready yet");
    }
}
