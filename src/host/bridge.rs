// SPDX-License-Identifier: MPL-2.0
//! Outbound channel from the widget to the host.

use super::protocol::OutboundMessage;
use crate::error::{Error, Result};
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

/// Sink for messages addressed to the host.
///
/// Delivery is fire-and-forget: the host never acknowledges a message.
pub trait HostBridge: Send + Sync {
    fn send(&self, message: &OutboundMessage) -> Result<()>;

    /// Announces that the widget is mounted and ready for render data.
    fn component_ready(&self) -> Result<()> {
        self.send(&OutboundMessage::component_ready())
    }

    /// Reports the current selection, in insertion order.
    fn set_component_value(&self, value: &[usize]) -> Result<()> {
        self.send(&OutboundMessage::component_value(value))
    }
}

/// Writes one JSON line per message to stdout.
#[derive(Debug, Default)]
pub struct StdioBridge;

impl StdioBridge {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl HostBridge for StdioBridge {
    fn send(&self, message: &OutboundMessage) -> Result<()> {
        let line = message.to_line()?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }
}

/// Keeps every message in memory. Used by tests and headless embedding.
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl RecordingBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages sent so far.
    #[must_use]
    pub fn messages(&self) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the component values, in transmission order.
    #[must_use]
    pub fn values(&self) -> Vec<Vec<usize>> {
        self.messages()
            .into_iter()
            .filter_map(|message| match message {
                OutboundMessage::SetComponentValue { value, .. } => Some(value),
                OutboundMessage::ComponentReady { .. } => None,
            })
            .collect()
    }
}

impl HostBridge for RecordingBridge {
    fn send(&self, message: &OutboundMessage) -> Result<()> {
        self.sent
            .lock()
            .map_err(|_| Error::Io("recording bridge poisoned".to_string()))?
            .push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_bridge_keeps_values_in_order() {
        let bridge = RecordingBridge::new();
        bridge.component_ready().unwrap();
        bridge.set_component_value(&[0]).unwrap();
        bridge.set_component_value(&[0, 1]).unwrap();

        assert_eq!(bridge.messages().len(), 3);
        assert_eq!(bridge.values(), vec![vec![0], vec![0, 1]]);
    }

    #[test]
    fn clones_share_the_same_log() {
        let bridge = RecordingBridge::new();
        let shared: Arc<dyn HostBridge> = Arc::new(bridge.clone());
        shared.set_component_value(&[3]).unwrap();
        assert_eq!(bridge.values(), vec![vec![3]]);
    }
}
