// Readiness signal
// One-shot transition out of Probing, observed by any number of waiters

use tokio::sync::watch;

use crate::domain::ProbeState;

/// Write side, owned by the probe. Publishes a terminal state at most once.
pub struct ReadinessSignal {
    tx: watch::Sender<ProbeState>,
}

impl ReadinessSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ProbeState::Probing);
        Self { tx }
    }

    /// Move to a terminal state
    ///
    /// Returns false (and leaves the state untouched) if a terminal state was
    /// already published or `state` is `Probing`.
    pub fn publish(&self, state: ProbeState) -> bool {
        if !state.is_terminal() {
            return false;
        }
        self.tx.send_if_modified(|current| {
            if current.is_terminal() {
                return false;
            }
            *current = state;
            true
        })
    }

    /// Snapshot of the current state
    pub fn current(&self) -> ProbeState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> ReadinessToken {
        ReadinessToken {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ReadinessSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side handed to waiters
#[derive(Clone)]
pub struct ReadinessToken {
    rx: watch::Receiver<ProbeState>,
}

impl ReadinessToken {
    pub fn is_terminal(&self) -> bool {
        self.rx.borrow().is_terminal()
    }

    /// Wait until a terminal state is published and return it
    ///
    /// Returns None if the signal was dropped while still probing.
    pub async fn wait(&mut self) -> Option<ProbeState> {
        self.rx
            .wait_for(ProbeState::is_terminal)
            .await
            .ok()
            .map(|state| (*state).clone())
    }
}
