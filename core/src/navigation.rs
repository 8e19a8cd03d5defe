//! Tokio implementation of [`NavigationBoundary`].
//!
//! Each scheduled navigation is a task that sleeps for its delay, calls the [`Launcher`] and
//! reports its [`CancelToken`] on the "fired" channel. Cancelling aborts the task, so a
//! superseded navigation never reaches the launcher.
//!
//! Must be used from within a tokio runtime.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::ports::{CancelToken, Launcher, NavigationBoundary};

pub struct TimedNavigation<L> {
    launcher: Arc<L>,
    next_token: u64,
    pending: HashMap<CancelToken, JoinHandle<()>>,
    fired_tx: UnboundedSender<CancelToken>,
}

impl<L: Launcher> TimedNavigation<L> {
    /// Returns the boundary together with the receiver of fired tokens.
    pub fn new(launcher: L) -> (Self, UnboundedReceiver<CancelToken>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let navigation = Self {
            launcher: Arc::new(launcher),
            next_token: 0,
            pending: HashMap::new(),
            fired_tx,
        };
        (navigation, fired_rx)
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Number of navigations scheduled and neither fired nor cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending.values().filter(|h| !h.is_finished()).count()
    }
}

impl<L: Launcher> NavigationBoundary for TimedNavigation<L> {
    fn navigate_after(&mut self, url: &str, delay: Duration) -> CancelToken {
        self.pending.retain(|_, handle| !handle.is_finished());

        self.next_token += 1;
        let token = CancelToken(self.next_token);
        let launcher = Arc::clone(&self.launcher);
        let fired_tx = self.fired_tx.clone();
        let url = url.to_string();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = launcher.launch(&url) {
                error!("Failed to open {url}: {e:#}");
            }
            let _ = fired_tx.send(token);
        });

        debug!("Scheduled navigation {token} in {}ms", delay.as_millis());
        self.pending.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: CancelToken) {
        if let Some(handle) = self.pending.remove(&token) {
            handle.abort();
            debug!("Cancelled navigation {token}");
        }
    }
}

impl<L> Drop for TimedNavigation<L> {
    fn drop(&mut self) {
        for handle in self.pending.values() {
            handle.abort();
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
