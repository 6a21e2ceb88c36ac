use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::{DeferredRecordStore, RecordStore};

/// Injected latency in front of a lookup. Swapping the implementation moves
/// a store between simulated and wall-clock delays.
pub trait Delay {
    fn wait(&self) -> impl Future<Output = ()>;
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Suspends the caller exactly once before resolving. Models "the value is
/// not there yet" without pulling in a timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldDelay;

impl Delay for YieldDelay {
    fn wait(&self) -> impl Future<Output = ()> {
        Yield { suspended: false }
    }
}

struct Yield {
    suspended: bool,
}

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.suspended {
            return Poll::Ready(());
        }

        self.suspended = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Wall-clock delay on the tokio timer.
#[cfg(feature = "tokio-delay")]
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(std::time::Duration);

#[cfg(feature = "tokio-delay")]
impl FixedDelay {
    pub fn new(duration: std::time::Duration) -> Self {
        Self(duration)
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(std::time::Duration::from_millis(millis))
    }
}

#[cfg(feature = "tokio-delay")]
impl Delay for FixedDelay {
    fn wait(&self) -> impl Future<Output = ()> {
        tokio::time::sleep(self.0)
    }
}

/// Wraps an immediate store and a [`Delay`] into a deferred store: every
/// lookup waits, then reads.
#[derive(Debug, Clone)]
pub struct Delayed<S, D> {
    store: S,
    delay: D,
}

impl<S, D> Delayed<S, D> {
    pub fn new(store: S, delay: D) -> Self {
        Self { store, delay }
    }
}

impl<S: RecordStore, D: Delay> DeferredRecordStore for Delayed<S, D> {
    type Record = S::Record;

    async fn get(&self, table: &str, key: u64) -> Option<S::Record> {
        self.delay.wait().await;
        self.store.get(table, key)
    }
}
