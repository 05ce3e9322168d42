//! The currently mounted view.

use tokio::sync::watch;

use crate::routing::ResolvedRoute;

/// Owner of the mounted route.
///
/// Publishes every change on a watch channel so the rendering layer can
/// observe it without holding a reference to the Navigator.
#[derive(Debug)]
pub struct MountState {
    current: Option<ResolvedRoute>,
    tx: watch::Sender<Option<ResolvedRoute>>,
}

impl MountState {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { current: None, tx }
    }

    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ResolvedRoute>> {
        self.tx.subscribe()
    }

    /// Swap in `route`. Returns false when it is already mounted.
    pub fn mount(&mut self, route: ResolvedRoute) -> bool {
        if self.current.as_ref() == Some(&route) {
            return false;
        }

        if let Some(previous) = self.current.take() {
            previous.view().unmount();
        }
        route.view().mount();

        self.current = Some(route.clone());
        self.tx.send_replace(Some(route));
        true
    }
}

impl Default for MountState {
    fn default() -> Self {
        Self::new()
    }
}
