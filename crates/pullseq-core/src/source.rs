use std::future::Future;

use crate::{Never, Step};

/// A sequence source driven by its caller: each advance computes one
/// [`Step`] and moves the private cursor. After `End`, every further advance
/// must return `End` again.
pub trait PullSource {
    type Item;
    type Error;

    fn advance(&mut self) -> Step<Self::Item, Self::Error>;
}

impl<S: PullSource + ?Sized> PullSource for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> Step<S::Item, S::Error> {
        (**self).advance()
    }
}

/// Async variant of [`PullSource`]. The result of an advance only becomes
/// usable once the returned future resolves; the `&mut` borrow keeps at most
/// one advance in flight per instance.
pub trait DeferredPullSource {
    type Item;
    type Error;

    fn advance(&mut self) -> impl Future<Output = Step<Self::Item, Self::Error>>;
}

impl<S: DeferredPullSource> DeferredPullSource for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn advance(&mut self) -> impl Future<Output = Step<S::Item, S::Error>> {
        (**self).advance()
    }
}

pub trait PullSourceExt: PullSource {
    /// Adapts an infallible source to `std::iter::Iterator`.
    fn pulls(self) -> Pulls<Self>
    where
        Self: Sized,
    {
        Pulls { source: self }
    }
}

impl<S: PullSource> PullSourceExt for S {}

pub struct Pulls<S> {
    source: S,
}

impl<S> Pulls<S> {
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: PullSource<Error = Never>> Iterator for Pulls<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        match self.source.advance() {
            Step::Value(v) => Some(v),
            Step::End => None,
            Step::Failed(e) => e.never(),
        }
    }
}

impl<S: PullSource<Error = Never>> std::iter::FusedIterator for Pulls<S> {}
