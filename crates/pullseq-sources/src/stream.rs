use futures::Stream;
use pullseq_core::{DeferredPullSource, Step};

/// Bridges a deferred source to a `futures::Stream`. `End` closes the
/// stream; `Failed` surfaces as an `Err` item without closing it.
pub fn into_stream<S>(source: S) -> impl Stream<Item = Result<S::Item, S::Error>>
where
    S: DeferredPullSource,
{
    futures::stream::unfold(source, |mut source| async move {
        match source.advance().await {
            Step::Value(item) => Some((Ok(item), source)),
            Step::End => None,
            Step::Failed(e) => Some((Err(e), source)),
        }
    })
}
