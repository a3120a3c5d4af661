//! Navigator adapters
//!
//! The client has no UI of its own. [`ChannelNavigator`] publishes navigation
//! requests on a broadcast channel so whatever renders the UI can subscribe
//! and react; [`NoopNavigator`] drops them.

use atrium_core::Navigator;
use atrium_domain::LOGIN_ROUTE;
use tokio::sync::broadcast;
use tracing::debug;

const CHANNEL_CAPACITY: usize = 16;

/// A navigation request emitted by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Show the login screen
    Login,
}

impl NavigationEvent {
    pub const fn route(self) -> &'static str {
        match self {
            Self::Login => LOGIN_ROUTE,
        }
    }
}

/// Publishes navigation requests to subscribers
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: broadcast::Sender<NavigationEvent>,
}

impl ChannelNavigator {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Receive every navigation request issued after this call
    pub fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChannelNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to_login(&self) {
        let event = NavigationEvent::Login;
        // No subscribers is fine: nothing is rendering a UI.
        let receivers = self.sender.send(event).unwrap_or(0);
        debug!(route = event.route(), receivers, "navigation requested");
    }
}

/// Ignores navigation requests
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to_login(&self) {
        debug!(route = LOGIN_ROUTE, "navigation requested with no navigator attached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_login_requests() {
        let navigator = ChannelNavigator::new();
        let mut first = navigator.subscribe();
        let mut second = navigator.subscribe();

        navigator.navigate_to_login();

        assert_eq!(first.recv().await.unwrap(), NavigationEvent::Login);
        assert_eq!(second.recv().await.unwrap(), NavigationEvent::Login);
    }

    #[test]
    fn navigating_without_subscribers_does_not_fail() {
        ChannelNavigator::default().navigate_to_login();
        NoopNavigator.navigate_to_login();
    }

    #[test]
    fn login_event_maps_to_login_route() {
        assert_eq!(NavigationEvent::Login.route(), "/login");
    }
}
