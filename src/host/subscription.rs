// SPDX-License-Identifier: MPL-2.0
//! Iced subscription delivering the host's render data.
//!
//! The host writes one JSON message per line on our stdin. Each render
//! message becomes an [`Event::RenderData`]; anything else is logged and
//! dropped. The stream ends with [`Event::Disconnected`] once stdin closes.

use super::protocol::{parse_inbound, InboundMessage, RenderData};
use crate::error::ProtocolError;
use iced::futures::{SinkExt, Stream};
use iced::{stream, Subscription};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Events produced by the render-data stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A new render payload, or the reason the last one was unusable.
    RenderData(Result<RenderData, ProtocolError>),
    /// The host closed the channel. The last payload stays on screen.
    Disconnected,
}

/// Subscribes to render data written by the host on stdin.
pub fn render_data() -> Subscription<Event> {
    Subscription::run(stdin_events)
}

fn stdin_events() -> impl Stream<Item = Event> {
    stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<Event>| async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if let Some(event) = event_for_line(&line) {
                        if output.send(event).await.is_err() {
                            break;
                        }
                    }
                }
                Ok(None) => {
                    tracing::info!("host closed the render-data channel");
                    let _ = output.send(Event::Disconnected).await;
                    break;
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to read from host");
                    let _ = output.send(Event::Disconnected).await;
                    break;
                }
            }
        }
    })
}

/// Maps one inbound line to the event the widget should see, if any.
///
/// Lines that are not render messages at all are only logged; render
/// messages with unusable arguments are forwarded so the widget can clear
/// itself.
pub fn event_for_line(line: &str) -> Option<Event> {
    if line.trim().is_empty() {
        return None;
    }

    match parse_inbound(line) {
        Ok(InboundMessage::Render(data)) => Some(Event::RenderData(Ok(data))),
        Ok(InboundMessage::Other(kind)) => {
            tracing::debug!(%kind, "ignoring host message");
            None
        }
        Err(ProtocolError::MalformedMessage(reason)) => {
            tracing::warn!(%reason, "dropping malformed host message");
            None
        }
        Err(err) => Some(Event::RenderData(Err(err))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ImageDescriptor;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(event_for_line(""), None);
        assert_eq!(event_for_line("   "), None);
    }

    #[test]
    fn render_lines_become_render_events() {
        let line = r#"{"type":"streamlit:render","args":{"images":[{"src":"a.png","name":"A"}]}}"#;
        let Some(Event::RenderData(Ok(data))) = event_for_line(line) else {
            panic!("expected render data");
        };
        assert_eq!(data.images, vec![ImageDescriptor::new("a.png", "A")]);
    }

    #[test]
    fn invalid_render_arguments_are_forwarded() {
        let line = r#"{"type":"streamlit:render","args":{}}"#;
        assert_eq!(
            event_for_line(line),
            Some(Event::RenderData(Err(ProtocolError::MissingImages)))
        );
    }

    #[test]
    fn malformed_and_foreign_lines_are_dropped() {
        assert_eq!(event_for_line("{oops"), None);
        assert_eq!(event_for_line(r#"{"type":"streamlit:other"}"#), None);
    }
}
