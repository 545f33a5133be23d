//! Periodic refresh tasks.
//!
//! [`every`] turns a fetch function into a stream of periodic results, while
//! [`Poller`] runs such refreshes as tokio tasks that all stop on a shared
//! cancellation signal, either explicitly or when the poller is dropped.

use std::{fmt::Display, future::Future, time::Duration};

use futures::{Stream, stream};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

/// Returns stream of `fetch` results, the first one immediately and then
/// one per `period`.
///
/// `sleep` is the timer to wait with, e.g. [`tokio::time::sleep`].
pub fn every<T, F, Fut, S, SFut>(period: Duration, fetch: F, sleep: S) -> impl Stream<Item = T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = T>,
    S: Fn(Duration) -> SFut + Copy,
    SFut: Future<Output = ()>,
{
    stream::unfold((fetch, true), move |(fetch, first)| async move {
        if !first {
            sleep(period).await;
        }
        let item = fetch().await;
        Some((item, (fetch, false)))
    })
}

/// Receiving side of the poller's cancellation signal.
#[derive(Clone, Debug)]
pub struct CancelToken(watch::Receiver<bool>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolves once cancellation is requested or the poller is gone.
    pub async fn cancelled(&mut self) {
        while !self.is_cancelled() {
            if self.0.changed().await.is_err() {
                return;
            }
        }
    }
}

/// Set of named periodic tasks sharing one cancellation signal.
#[derive(Debug)]
pub struct Poller {
    shutdown: watch::Sender<bool>,
    tasks: Vec<(&'static str, JoinHandle<()>)>,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}

impl Poller {
    pub fn new() -> Self {
        Self {
            shutdown: watch::Sender::new(false),
            tasks: vec![],
        }
    }

    pub fn token(&self) -> CancelToken {
        CancelToken(self.shutdown.subscribe())
    }

    /// Spawns a task calling `fetch` immediately and then every `period`,
    /// passing successful results to `on_update`.
    ///
    /// Failed fetches are logged and retried on the next tick. A fetch in
    /// flight is abandoned on cancellation.
    pub fn spawn<T, E, F, Fut, H>(
        &mut self,
        name: &'static str,
        period: Duration,
        fetch: F,
        mut on_update: H,
    ) where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Display + Send + 'static,
        H: FnMut(T) + Send + 'static,
    {
        let mut token = self.token();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            while !token.is_cancelled() {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {}
                }
                tokio::select! {
                    _ = token.cancelled() => break,
                    result = fetch() => match result {
                        Ok(value) => on_update(value),
                        Err(e) => warn!(task = name, %e, "refresh failed"),
                    },
                }
            }
            debug!(task = name, "refresh task stopped");
        });
        self.tasks.push((name, handle));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Signals every task to stop, without waiting for them.
    pub fn cancel(&self) {
        self.shutdown.send_replace(true);
    }

    /// Signals every task to stop and waits until they finish.
    pub async fn shutdown(mut self) {
        self.cancel();
        for (name, task) in self.tasks.drain(..) {
            if let Err(e) = task.await {
                warn!(task = name, %e, "refresh task failed");
            }
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        convert::Infallible,
        future,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use futures::StreamExt;

    use super::*;

    #[tokio::test]
    async fn test_every_yields_in_order() {
        let counter = Arc::new(AtomicUsize::new(0));
        let items = every(
            Duration::from_secs(60),
            || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                future::ready(n)
            },
            |_| future::ready(()),
        )
        .take(3)
        .collect::<Vec<_>>()
        .await;
        assert_eq!(items, vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_stops_on_shutdown() {
        let fetched = Arc::new(AtomicUsize::new(0));
        let updated = Arc::new(AtomicUsize::new(0));

        let mut poller = Poller::new();
        let f = fetched.clone();
        let u = updated.clone();
        poller.spawn(
            "counter",
            Duration::from_secs(10),
            move || {
                let f = f.clone();
                async move { Ok::<_, Infallible>(f.fetch_add(1, Ordering::SeqCst)) }
            },
            move |_| {
                u.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert_eq!(poller.len(), 1);

        time::sleep(Duration::from_secs(35)).await;
        let seen = fetched.load(Ordering::SeqCst);
        assert!(seen >= 3, "fetched {seen} times");
        assert_eq!(updated.load(Ordering::SeqCst), seen);

        let token = poller.token();
        poller.shutdown().await;
        assert!(token.is_cancelled());

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(fetched.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_keeps_going_after_errors() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let mut poller = Poller::new();
        let a = attempts.clone();
        poller.spawn(
            "failing",
            Duration::from_secs(1),
            move || {
                let a = a.clone();
                async move {
                    a.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>("unreachable node")
                }
            },
            |_| {},
        );
        time::sleep(Duration::from_millis(3500)).await;
        assert!(attempts.load(Ordering::SeqCst) >= 3);
        drop(poller);
    }
}
