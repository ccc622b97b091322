//! Reveal plumbing: the page-fetch seam and the sentinel trigger source.
//!
//! The listing already holds every item in memory, so "fetching" a page
//! is only a deliberate pause. It still goes through [`PageFetch`] so
//! tests can resolve it immediately or under a paused clock.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use crate::model::Listable;
use crate::view::ListView;

/// Default pause before a revealed page appears
pub const DEFAULT_REVEAL_LATENCY: Duration = Duration::from_millis(500);

/// Which page is being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Items already visible
    pub offset: usize,
    /// Items the page adds
    pub page_size: usize,
}

/// Asynchronous page fetch (the single suspend point of a reveal)
#[async_trait]
pub trait PageFetch: Send + Sync {
    async fn fetch_page(&self, request: PageRequest);
}

/// Waits a fixed delay before the page resolves
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_LATENCY)
    }
}

#[async_trait]
impl PageFetch for SimulatedLatency {
    async fn fetch_page(&self, request: PageRequest) {
        debug!(offset = request.offset, delay_ms = self.delay.as_millis() as u64, "simulating page fetch");
        tokio::time::sleep(self.delay).await;
    }
}

/// Resolves without suspending
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

#[async_trait]
impl PageFetch for Immediate {
    async fn fetch_page(&self, _request: PageRequest) {}
}

/// Source of "sentinel crossed into view" notifications
#[async_trait]
pub trait RevealTrigger: Send {
    /// Wait for the next crossing. `None` once the source is closed.
    async fn next_crossing(&mut self) -> Option<()>;
}

/// Trigger fed by [`TriggerHandle::fire`]
#[derive(Debug)]
pub struct ChannelTrigger {
    rx: mpsc::UnboundedReceiver<()>,
}

/// Sending side of a [`ChannelTrigger`]. Dropping every handle closes it.
#[derive(Debug, Clone)]
pub struct TriggerHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl ChannelTrigger {
    pub fn new() -> (TriggerHandle, ChannelTrigger) {
        let (tx, rx) = mpsc::unbounded_channel();
        (TriggerHandle { tx }, ChannelTrigger { rx })
    }
}

impl TriggerHandle {
    /// Report a sentinel crossing. Returns false if nobody is listening.
    pub fn fire(&self) -> bool {
        self.tx.send(()).is_ok()
    }
}

#[async_trait]
impl RevealTrigger for ChannelTrigger {
    async fn next_crossing(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

/// Subscribe `view` to `trigger`.
///
/// Every crossing that arrives while the sentinel is showing spawns a
/// `request_more`; the view's own loading guard absorbs bursts. Returns
/// when the trigger closes or the view is unmounted.
pub async fn drive<T, R>(view: ListView<T>, mut trigger: R)
where
    T: Listable,
    R: RevealTrigger,
{
    while trigger.next_crossing().await.is_some() {
        if !view.is_mounted() {
            break;
        }
        if !view.sentinel_visible() {
            debug!("sentinel crossing ignored");
            continue;
        }

        let handle = view.clone();
        tokio::spawn(async move {
            let outcome = handle.request_more().await;
            debug!(?outcome, "reveal finished");
        });
    }
    debug!("reveal trigger loop ended");
}
