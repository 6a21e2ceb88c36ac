use std::iter::Fuse;

use pullseq_core::{Never, PullSource, Step};

/// Immediate source over any finite iterable. The inner iterator is fused,
/// so advancing past the final element stays at `End`.
pub struct IterSource<I: IntoIterator> {
    iter: Fuse<I::IntoIter>,
}

impl<I: IntoIterator> IterSource<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: IntoIterator> PullSource for IterSource<I> {
    type Item = I::Item;
    type Error = Never;

    fn advance(&mut self) -> Step<Self::Item> {
        match self.iter.next() {
            Some(item) => Step::Value(item),
            None => Step::End,
        }
    }
}
