use parking_lot::Mutex;
use std::{collections::HashMap, future::Future, time::Duration};
use tokio::{task::JoinHandle, time};

/// Trailing-edge debouncer keyed by logical operation (cart-item id, search
/// box). Scheduling a key aborts the pending timer task for that key, so only
/// the last call inside the window runs. A request that already went out is
/// not cancelled; cancellation only covers the not-yet-fired timer.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub fn call<F>(&self, key: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            future.await;
        });

        if let Some(previous) = self.pending.lock().insert(key.to_string(), handle) {
            previous.abort();
        }
    }

    pub fn cancel(&self, key: &str) {
        if let Some(handle) = self.pending.lock().remove(key) {
            handle.abort();
        }
    }

    pub fn cancel_all(&self) {
        for (_, handle) in self.pending.lock().drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    #[tokio::test(start_paused = true)]
    async fn only_the_last_call_within_the_window_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let fired = Arc::new(AtomicU32::new(0));

        for value in [2, 3, 4] {
            let fired = fired.clone();
            debouncer.call("c-1", async move {
                fired.store(value, Ordering::SeqCst);
            });
        }

        time::sleep(Duration::from_millis(600)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_keys_are_independent() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let count = Arc::new(AtomicU32::new(0));

        for key in ["c-1", "c-2"] {
            let count = count.clone();
            debouncer.call(key, async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        time::sleep(Duration::from_millis(600)).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_the_pending_call() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let count = Arc::new(AtomicU32::new(0));

        {
            let count = count.clone();
            debouncer.call("c-1", async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel("c-1");

        time::sleep(Duration::from_millis(600)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn a_new_window_opens_after_the_delay_elapses() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let count = Arc::new(AtomicU32::new(0));

        {
            let count = count.clone();
            debouncer.call("c-1", async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        time::sleep(Duration::from_millis(600)).await;

        {
            let count = count.clone();
            debouncer.call("c-1", async move {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        time::sleep(Duration::from_millis(600)).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
