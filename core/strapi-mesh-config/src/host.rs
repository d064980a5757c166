//! Host state primitives.
//!
//! The host platform owns persisted values and hands out a getter, an
//! updater-style setter and change notifications. [`LocalStore`] provides the
//! same contract in-process on top of a `tokio::sync::watch` channel.

use tokio::sync::watch;

/// A single persisted host value.
pub trait HostStore<T>: Send + Sync {
    /// Current value.
    fn get(&self) -> T;

    /// Replaces the value with `update(current)` as one write.
    fn set_with<F>(&self, update: F)
    where
        F: FnOnce(&T) -> T;

    /// Receiver notified on every write.
    fn subscribe(&self) -> watch::Receiver<T>;
}

/// In-process [`HostStore`].
#[derive(Debug)]
pub struct LocalStore<T> {
    tx: watch::Sender<T>,
}

impl<T> LocalStore<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }
}

impl<T: Default> Default for LocalStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> HostStore<T> for LocalStore<T>
where
    T: Clone + Send + Sync,
{
    fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    fn set_with<F>(&self, update: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.tx.send_modify(|value| *value = update(value));
    }

    fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T, S> HostStore<T> for std::sync::Arc<S>
where
    S: HostStore<T>,
{
    fn get(&self) -> T {
        (**self).get()
    }

    fn set_with<F>(&self, update: F)
    where
        F: FnOnce(&T) -> T,
    {
        (**self).set_with(update)
    }

    fn subscribe(&self) -> watch::Receiver<T> {
        (**self).subscribe()
    }
}
