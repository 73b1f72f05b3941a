//! Live queries over the local store.
//!
//! Writers bump a version counter held in a `tokio::sync::watch` channel.
//! Every subscription owns a receiver: it runs its query once when first
//! polled, then again after each version bump, and only yields when the
//! result differs from what it yielded last. Dropping the stream drops the
//! receiver, which is all the cleanup a subscription needs.

use futures::stream::BoxStream;
use futures::StreamExt;
use gamedge_data::StoreError;
use tokio::sync::watch;

/// Broadcasts "something changed" to live queries.
#[derive(Debug)]
pub struct ChangeNotifier {
    version: watch::Sender<u64>,
}

impl ChangeNotifier {
    /// Create a notifier at version 0.
    #[must_use]
    pub fn new() -> Self {
        let (version, _) = watch::channel(0);
        Self { version }
    }

    /// Signal that stored data changed.
    pub fn notify(&self) {
        self.version.send_modify(|version| *version = version.wrapping_add(1));
    }

    /// Register a new listener.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.version.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

struct LiveQuery<T, Q> {
    changes: watch::Receiver<u64>,
    query: Q,
    last: Option<Vec<T>>,
    started: bool,
}

/// Turn a query into a stream that re-runs it on every change.
pub fn live_query<T, Q>(
    changes: watch::Receiver<u64>,
    query: Q,
) -> BoxStream<'static, Result<Vec<T>, StoreError>>
where
    T: Clone + PartialEq + Send + 'static,
    Q: FnMut() -> Result<Vec<T>, StoreError> + Send + 'static,
{
    let state = LiveQuery {
        changes,
        query,
        last: None,
        started: false,
    };

    futures::stream::unfold(state, |mut state| async move {
        loop {
            if state.started {
                // The notifier outlives every store handle; closing means shutdown.
                if state.changes.changed().await.is_err() {
                    return None;
                }
            } else {
                state.started = true;
                state.changes.mark_unchanged();
            }

            match (state.query)() {
                Ok(rows) => {
                    if state.last.as_ref() == Some(&rows) {
                        continue;
                    }
                    state.last = Some(rows.clone());
                    return Some((Ok(rows), state));
                }
                Err(error) => {
                    tracing::warn!(error = %error, "Live query failed");
                    return Some((Err(error), state));
                }
            }
        }
    })
    .boxed()
}
