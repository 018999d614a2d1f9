// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::host;
use iced::Subscription;

/// Listens to the host's render-data stream while it is connected.
///
/// Standalone (demo) runs and closed channels have nothing to listen to.
pub fn create_host_subscription(listening: bool) -> Subscription<Message> {
    if listening {
        host::subscription::render_data().map(Message::Host)
    } else {
        Subscription::none()
    }
}
