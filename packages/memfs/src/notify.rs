//! Debounced change-event batching.
//!
//! Events arriving within the debounce window coalesce into one batch before
//! the sink sees them, so a burst of writes does not flood the consumer.
//! Every new event restarts the window.

use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use repofs_core::{ChangeEvent, ChangeSink};

/// Default quiet period before a batch is published.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(5);

#[derive(Default)]
struct State {
    buffered: Vec<ChangeEvent>,
    epoch: u64,
    shutdown: bool,
}

struct Shared {
    sink: Arc<dyn ChangeSink>,
    window: Duration,
    state: Mutex<State>,
    wakeup: Condvar,
}

impl Shared {
    fn run(&self) {
        let mut state = self.state.lock().unwrap();
        loop {
            while state.buffered.is_empty() && !state.shutdown {
                state = self.wakeup.wait(state).unwrap();
            }
            if state.shutdown {
                // Drop publishes whatever is left
                return;
            }

            // hold off until a full window passes with no new event
            loop {
                let epoch = state.epoch;
                let (next, timeout) = self.wakeup.wait_timeout(state, self.window).unwrap();
                state = next;
                if state.shutdown {
                    return;
                }
                if timeout.timed_out() && state.epoch == epoch {
                    break;
                }
            }

            let batch = std::mem::take(&mut state.buffered);
            drop(state);
            log::debug!("publishing {} change events", batch.len());
            self.sink.publish(batch);
            state = self.state.lock().unwrap();
        }
    }
}

/// Buffers change events and publishes them as coalesced batches.
pub struct ChangeNotifier {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl ChangeNotifier {
    pub fn new(sink: Arc<dyn ChangeSink>, window: Duration) -> Self {
        let shared = Arc::new(Shared {
            sink,
            window,
            state: Mutex::new(State::default()),
            wakeup: Condvar::new(),
        });

        let worker = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.run())
        };

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn with_default_window(sink: Arc<dyn ChangeSink>) -> Self {
        Self::new(sink, DEFAULT_DEBOUNCE)
    }

    /// Queue events for the next batch and restart the debounce window.
    pub fn emit(&self, events: impl IntoIterator<Item = ChangeEvent>) {
        let mut state = self.shared.state.lock().unwrap();
        state.buffered.extend(events);
        state.epoch += 1;
        self.shared.wakeup.notify_all();
    }
}

impl Drop for ChangeNotifier {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.shutdown = true;
            self.shared.wakeup.notify_all();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }

        let remaining = std::mem::take(&mut self.shared.state.lock().unwrap().buffered);
        if !remaining.is_empty() {
            self.shared.sink.publish(remaining);
        }
    }
}
