use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    Online,
    Offline,
}

/// Passive Online/Offline signal source. It never acts on a transition
/// itself; subscribers (the sync worker) decide what a reconnect means.
/// Redundant sets do not wake subscribers.
pub struct ConnectivityMonitor {
    tx: watch::Sender<ConnectivityState>,
}

impl ConnectivityMonitor {
    /// Initial state is whatever the platform reported at startup.
    pub fn new(initial: ConnectivityState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn state(&self) -> ConnectivityState {
        *self.tx.borrow()
    }

    pub fn is_online(&self) -> bool {
        self.state() == ConnectivityState::Online
    }

    pub fn set_state(&self, next: ConnectivityState) {
        let changed = self.tx.send_if_modified(|state| {
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        });

        if changed {
            tracing::info!(state = ?next, "connectivity changed");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.tx.subscribe()
    }
}

/// Active liveness check feeding the monitor. The monitor itself stays
/// passive; a headless agent has no platform online/offline events, so it
/// probes instead.
#[async_trait::async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn check(&self) -> bool;
}

pub fn spawn_prober(
    monitor: Arc<ConnectivityMonitor>,
    probe: Arc<dyn ConnectivityProbe>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let state = if probe.check().await {
                ConnectivityState::Online
            } else {
                ConnectivityState::Offline
            };
            monitor.set_state(state);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let monitor = ConnectivityMonitor::new(ConnectivityState::Offline);
        assert!(!monitor.is_online());

        let monitor = ConnectivityMonitor::new(ConnectivityState::Online);
        assert!(monitor.is_online());
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let monitor = ConnectivityMonitor::new(ConnectivityState::Offline);
        let mut rx = monitor.subscribe();

        monitor.set_state(ConnectivityState::Online);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ConnectivityState::Online);

        monitor.set_state(ConnectivityState::Offline);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ConnectivityState::Offline);
    }

    #[tokio::test]
    async fn test_redundant_set_does_not_notify() {
        let monitor = ConnectivityMonitor::new(ConnectivityState::Online);
        let mut rx = monitor.subscribe();
        rx.borrow_and_update();

        monitor.set_state(ConnectivityState::Online);
        assert!(!rx.has_changed().unwrap());
    }
}
