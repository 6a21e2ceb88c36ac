use std::future::{ready, Future};

use pullseq_core::{DeferredPullSource, PullSource, Step};

/// Lifts an immediate source into the deferred protocol; every advance
/// resolves without suspending.
pub struct ReadySource<S> {
    inner: S,
}

impl<S> ReadySource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PullSource> DeferredPullSource for ReadySource<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> impl Future<Output = Step<S::Item, S::Error>> {
        ready(self.inner.advance())
    }
}
