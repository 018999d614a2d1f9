// SPDX-License-Identifier: MPL-2.0
//! Everything that crosses the boundary with the embedding host.
//!
//! - [`protocol`] - JSON line format for render data and outbound values
//! - [`bridge`] - [`HostBridge`] trait for reporting values back
//! - [`subscription`] - Iced subscription over the host's render-data stream
//! - [`encode`] - inlining image files as `data:` URIs and reading them back

pub mod bridge;
pub mod encode;
pub mod protocol;
pub mod subscription;

pub use bridge::{HostBridge, RecordingBridge, StdioBridge};
pub use protocol::{HostTheme, ImageDescriptor, OutboundMessage, RenderData};
pub use subscription::Event;
