use std::cell::{Cell, RefCell};

use futures::Future;
use futures::future::{AbortHandle, Abortable};
use futures_signals::signal::{Mutable, Signal};
use wasm_bindgen_futures::spawn_local;

/// Holds the in-flight request of one screen action.
///
/// Spawning into a busy slot aborts the request already running there, so
/// actions that must not cancel each other get a slot each. Screens cancel
/// their slots when they are removed.
#[derive(Default)]
pub struct RequestSlot {
    generation: Cell<u64>,
    handle: RefCell<Option<AbortHandle>>,
    running: Mutable<Option<u64>>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&self, request: F)
    where
        F: Future<Output = ()> + 'static,
    {
        spawn_local(self.track(request));
    }

    /// Register `request` as the slot's current request, aborting the
    /// previous one. Resolves once the request finished or was aborted.
    pub fn track<F>(&self, request: F) -> impl Future<Output = ()> + 'static + use<F>
    where
        F: Future<Output = ()> + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.handle.replace(Some(handle)) {
            previous.abort();
        }

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.running.set(Some(generation));

        let running = self.running.clone();
        async move {
            if Abortable::new(request, registration).await.is_err() {
                debug!("request {} aborted", generation);
            }

            let mut running = running.lock_mut();
            if *running == Some(generation) {
                *running = None;
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.running.set(None);
    }

    pub fn is_busy(&self) -> impl Signal<Item = bool> + use<> {
        self.running.signal_ref(|running| running.is_some())
    }
}
