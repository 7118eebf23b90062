//! Bounded-concurrency processing of independent documents.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// Runs `processor` over every item with at most `concurrency` futures in flight.
///
/// Results come back in input order, whatever order the futures complete in.
/// A `concurrency` of zero is treated as one.
///
/// # Examples
///
/// ```
/// # use docs_ltx::docs_gen::batch::process_bounded;
/// # #[tokio::main]
/// # async fn main() {
/// let ids = vec!["intro", "guides/setup"];
/// let lengths = process_bounded(ids, |id| async move { id.len() }, 4).await;
/// assert_eq!(lengths, vec![5, 12]);
/// # }
/// ```
pub async fn process_bounded<T, F, Fut, R>(items: impl IntoIterator<Item = T>, processor: F, concurrency: usize) -> Vec<R>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = R>,
{
    stream::iter(items)
        .map(processor)
        .buffered(concurrency.max(1))
        .collect()
        .await
}
