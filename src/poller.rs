//! Periodic refresh task.
//!
//! [`Poller`] runs one [`StatusSync`] tick immediately, then one per
//! interval, until its [`CancellationToken`] fires. Ticks never overlap: the
//! next sleep only starts once the previous tick has been applied.
//!
//! ```rust,ignore
//! let handle = Poller::new(sync, view.clone(), TokioClock, interval).spawn();
//! // ...
//! handle.stop().await;
//! ```

use crate::sync::{StatusSync, TickReport};
use crate::view::NodeView;
use peerster_api::NodeApi;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Source of delays between ticks.
pub trait Clock: Send + Sync + 'static {
    /// Complete after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Wall-clock delays via the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// The refresh loop for one view.
pub struct Poller<A, C> {
    sync: StatusSync<A>,
    view: Arc<Mutex<NodeView>>,
    clock: C,
    interval: Duration,
    cancel: CancellationToken,
    reports: Option<mpsc::UnboundedSender<TickReport>>,
}

impl<A, C> Poller<A, C>
where
    A: NodeApi + 'static,
    C: Clock,
{
    pub fn new(sync: StatusSync<A>, view: Arc<Mutex<NodeView>>, clock: C, interval: Duration) -> Self {
        Self {
            sync,
            view,
            clock,
            interval,
            cancel: CancellationToken::new(),
            reports: None,
        }
    }

    /// Use `cancel` (typically a child of an application token) to stop the loop.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Send a [`TickReport`] after every applied tick.
    pub fn with_reports(mut self, tx: mpsc::UnboundedSender<TickReport>) -> Self {
        self.reports = Some(tx);
        self
    }

    /// Start the loop on the current tokio runtime.
    pub fn spawn(self) -> PollerHandle {
        let cancel = self.cancel.clone();
        let task = tokio::spawn(self.run());
        PollerHandle { cancel, task }
    }

    /// Run until cancelled.
    pub async fn run(mut self) {
        info!(interval_ms = self.interval.as_millis() as u64, "status poller started");

        loop {
            let snapshot = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                snapshot = self.sync.fetch() => snapshot,
            };
            if self.cancel.is_cancelled() {
                debug!("discarding snapshot fetched after stop");
                break;
            }

            let report = self.sync.apply_shared(snapshot, &self.view);
            if let Some(tx) = &self.reports {
                if tx.send(report).is_err() {
                    warn!("tick report receiver dropped");
                    self.reports = None;
                }
            }

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = self.clock.sleep(self.interval) => {}
            }
        }

        info!(ticks = self.sync.ticks(), "status poller stopped");
    }
}

/// Control handle for a spawned [`Poller`].
pub struct PollerHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Token that stops the poller when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Returns true once the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel the loop and wait for it to exit.
    ///
    /// No tick mutates the view after this returns.
    pub async fn stop(self) {
        self.cancel.cancel();
        if let Err(e) = self.task.await {
            warn!(error = %e, "status poller task failed");
        }
    }
}
