//! Runs [`PreferenceStore`] calls on background threads.
//!
//! Results come back over a channel that the UI polls each frame while work is
//! outstanding. Once the worker is dropped the receiving end closes and late
//! results are discarded by the sending thread.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
#[cfg(test)]
use std::time::Duration;

use crate::preferences::{PreferenceStore, SettingsPatch, SystemPreferences};

/// Completed background call.
#[derive(Debug)]
pub enum PreferenceEvent {
    Loaded(anyhow::Result<Option<SystemPreferences>>),
    Saved(anyhow::Result<()>),
}

pub struct PreferenceWorker {
    store: Arc<dyn PreferenceStore>,
    tx: Sender<PreferenceEvent>,
    rx: Receiver<PreferenceEvent>,
    in_flight: usize,
}

impl PreferenceWorker {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { store, tx, rx, in_flight: 0 }
    }

    /// Whether any spawned call has not been collected yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn spawn_load(&mut self) {
        self.spawn(|store| PreferenceEvent::Loaded(store.read()));
    }

    pub fn spawn_save(&mut self, patch: SettingsPatch) {
        self.spawn(move |store| PreferenceEvent::Saved(store.write(&patch)));
    }

    /// The thread yields whether its result was delivered.
    fn spawn<F>(&mut self, call: F) -> JoinHandle<bool>
    where
        F: FnOnce(&dyn PreferenceStore) -> PreferenceEvent + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let event = call(store.as_ref());
            let delivered = tx.send(event).is_ok();
            if !delivered {
                log::debug!("Preference result dropped, receiver is gone");
            }
            delivered
        })
    }

    /// Next completed call, without blocking.
    pub fn try_next(&mut self) -> Option<PreferenceEvent> {
        match self.rx.try_recv() {
            Ok(event) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(event)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Next completed call, waiting up to `timeout`.
    #[cfg(test)]
    pub fn next_timeout(&mut self, timeout: Duration) -> Option<PreferenceEvent> {
        let event = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }
}
