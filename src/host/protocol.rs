// SPDX-License-Identifier: MPL-2.0
//! Wire format exchanged with the host, one JSON object per line.
//!
//! Inbound render messages look like:
//!
//! ```json
//! {"type":"streamlit:render","args":{"images":[{"src":"a.png","name":"A"}]},
//!  "disabled":false,"theme":{"primaryColor":"#ff4b4b","base":"light"}}
//! ```
//!
//! Outbound messages carry `"isStreamlitMessage": true` next to their `type`.

use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `type` of the inbound message carrying render arguments.
pub const RENDER_EVENT: &str = "streamlit:render";

/// Protocol version announced in `componentReady`.
pub const API_VERSION: u32 = 1;

/// One image offered for selection. Identified only by its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Locator for the image bytes (file path or `data:` URI).
    #[serde(default)]
    pub src: String,
    /// Display label, also used as the image's alternate text.
    #[serde(default)]
    pub name: String,
}

impl ImageDescriptor {
    pub fn new(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            name: name.into(),
        }
    }

    /// Lenient conversion: anything that is not a well-formed descriptor
    /// becomes an empty one so it renders as a broken image.
    fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|_| {
            tracing::debug!(?value, "malformed image descriptor");
            Self::default()
        })
    }
}

/// Styling hints sent by hosts that support theming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl HostTheme {
    /// Whether the host declared a dark base palette.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.base
            .as_deref()
            .is_some_and(|base| base.eq_ignore_ascii_case("dark"))
    }
}

/// Arguments for one render cycle. Replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderData {
    pub images: Vec<ImageDescriptor>,
    pub theme: Option<HostTheme>,
    pub disabled: bool,
}

/// A decoded inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    Render(RenderData),
    /// Any message type this widget does not act upon.
    Other(String),
}

/// Parses one inbound line.
pub fn parse_inbound(line: &str) -> Result<InboundMessage, ProtocolError> {
    let value: Value = serde_json::from_str(line)
        .map_err(|err| ProtocolError::MalformedMessage(err.to_string()))?;

    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ProtocolError::MalformedMessage("missing `type`".to_string()))?;

    if kind != RENDER_EVENT {
        return Ok(InboundMessage::Other(kind.to_string()));
    }

    parse_render(&value).map(InboundMessage::Render)
}

fn parse_render(value: &Value) -> Result<RenderData, ProtocolError> {
    let images = match value.get("args").and_then(|args| args.get("images")) {
        None | Some(Value::Null) => return Err(ProtocolError::MissingImages),
        Some(images) => images
            .as_array()
            .ok_or(ProtocolError::ImagesNotSequence)?
            .iter()
            .map(ImageDescriptor::from_value)
            .collect(),
    };

    // Older hosts send no theme; an unreadable one is treated the same way.
    let theme = value
        .get("theme")
        .filter(|theme| !theme.is_null())
        .and_then(|theme| serde_json::from_value(theme.clone()).ok());

    let disabled = value
        .get("disabled")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Ok(RenderData {
        images,
        theme,
        disabled,
    })
}

/// How the host should interpret a component value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Json,
}

/// Messages sent to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    #[serde(rename = "streamlit:componentReady", rename_all = "camelCase")]
    ComponentReady { api_version: u32 },
    #[serde(rename = "streamlit:setComponentValue", rename_all = "camelCase")]
    SetComponentValue { value: Vec<usize>, data_type: DataType },
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "isStreamlitMessage")]
    is_host_message: bool,
    #[serde(flatten)]
    message: &'a OutboundMessage,
}

impl OutboundMessage {
    #[must_use]
    pub fn component_ready() -> Self {
        OutboundMessage::ComponentReady {
            api_version: API_VERSION,
        }
    }

    #[must_use]
    pub fn component_value(value: &[usize]) -> Self {
        OutboundMessage::SetComponentValue {
            value: value.to_vec(),
            data_type: DataType::Json,
        }
    }

    /// Serializes the message as a single line, without the trailing newline.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Envelope {
            is_host_message: true,
            message: self,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_line(body: Value) -> String {
        let mut message = json!({ "type": RENDER_EVENT });
        if let (Some(target), Value::Object(extra)) = (message.as_object_mut(), body) {
            target.extend(extra);
        }
        message.to_string()
    }

    #[test]
    fn parses_images_and_theme() {
        let line = render_line(json!({
            "args": { "images": [
                { "src": "a.png", "name": "A" },
                { "src": "b.png", "name": "B" }
            ]},
            "theme": { "primaryColor": "#ff4b4b", "base": "dark" }
        }));

        let InboundMessage::Render(data) = parse_inbound(&line).unwrap() else {
            panic!("expected render message");
        };
        assert_eq!(
            data.images,
            vec![
                ImageDescriptor::new("a.png", "A"),
                ImageDescriptor::new("b.png", "B")
            ]
        );
        let theme = data.theme.expect("theme should be parsed");
        assert_eq!(theme.primary_color.as_deref(), Some("#ff4b4b"));
        assert!(theme.is_dark());
        assert!(!data.disabled);
    }

    #[test]
    fn missing_theme_is_accepted() {
        let line = render_line(json!({ "args": { "images": [] } }));
        let InboundMessage::Render(data) = parse_inbound(&line).unwrap() else {
            panic!("expected render message");
        };
        assert!(data.images.is_empty());
        assert!(data.theme.is_none());
    }

    #[test]
    fn missing_images_is_reported() {
        let line = render_line(json!({ "args": {} }));
        assert_eq!(parse_inbound(&line), Err(ProtocolError::MissingImages));

        let line = render_line(json!({ "args": { "images": null } }));
        assert_eq!(parse_inbound(&line), Err(ProtocolError::MissingImages));
    }

    #[test]
    fn non_sequence_images_is_reported() {
        let line = render_line(json!({ "args": { "images": "a.png" } }));
        assert_eq!(parse_inbound(&line), Err(ProtocolError::ImagesNotSequence));
    }

    #[test]
    fn malformed_descriptors_become_empty() {
        let line = render_line(json!({
            "args": { "images": [ { "src": "a.png" }, 42, { "name": "only name" } ] }
        }));
        let InboundMessage::Render(data) = parse_inbound(&line).unwrap() else {
            panic!("expected render message");
        };
        assert_eq!(data.images[0], ImageDescriptor::new("a.png", ""));
        assert_eq!(data.images[1], ImageDescriptor::default());
        assert_eq!(data.images[2], ImageDescriptor::new("", "only name"));
    }

    #[test]
    fn disabled_flag_is_read() {
        let line = render_line(json!({ "args": { "images": [] }, "disabled": true }));
        let InboundMessage::Render(data) = parse_inbound(&line).unwrap() else {
            panic!("expected render message");
        };
        assert!(data.disabled);
    }

    #[test]
    fn unknown_types_are_passed_through() {
        let parsed = parse_inbound(r#"{"type":"streamlit:somethingElse"}"#).unwrap();
        assert_eq!(
            parsed,
            InboundMessage::Other("streamlit:somethingElse".to_string())
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            parse_inbound("not json"),
            Err(ProtocolError::MalformedMessage(_))
        ));
        assert!(matches!(
            parse_inbound(r#"{"args":{}}"#),
            Err(ProtocolError::MalformedMessage(_))
        ));
    }

    #[test]
    fn component_value_serializes_in_insertion_order() {
        let line = OutboundMessage::component_value(&[2, 0, 1]).to_line().unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value,
            json!({
                "isStreamlitMessage": true,
                "type": "streamlit:setComponentValue",
                "value": [2, 0, 1],
                "dataType": "json"
            })
        );
    }

    #[test]
    fn component_ready_announces_api_version() {
        let line = OutboundMessage::component_ready().to_line().unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], "streamlit:componentReady");
        assert_eq!(value["apiVersion"], API_VERSION);
        assert_eq!(value["isStreamlitMessage"], true);
    }
}
