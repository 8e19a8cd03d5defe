//! Event loop of a single user session.
//!
//! Clicks and "navigation fired" notifications are both funnelled into one task and handled
//! one at a time, which is the only ordering guarantee the navigator relies on.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::navigator::ClickNavigator;
use crate::ports::{CancelToken, NavigationBoundary, StatusChannel};
use crate::render::RawClick;

/// Drives `navigator` until the click channel closes and any pending navigation has fired.
pub async fn run<N, S>(
    mut navigator: ClickNavigator<N, S>,
    mut clicks: UnboundedReceiver<RawClick>,
    mut fired: UnboundedReceiver<CancelToken>,
) -> ClickNavigator<N, S>
where
    N: NavigationBoundary,
    S: StatusChannel,
{
    loop {
        tokio::select! {
            click = clicks.recv() => {
                match click {
                    Some(raw) => {
                        let outcome = navigator.handle_raw(raw);
                        debug!("Click handled: {outcome:?}");
                    }
                    None => break,
                }
            }
            Some(token) = fired.recv() => {
                navigator.navigation_fired(token);
            }
        }
    }

    while navigator.pending().is_some() {
        match fired.recv().await {
            Some(token) => {
                navigator.navigation_fired(token);
            }
            None => break,
        }
    }

    navigator
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
