// SPDX-License-Identifier: MPL-2.0
//! Multi-select image grid.
//!
//! The component is a pure function of the last render payload plus its own
//! selection and focus state. Every toggle yields an [`Effect::ReportValue`]
//! carrying the complete selection, which the application forwards to the
//! host before handling the next event.

pub mod component;
mod view;

pub use component::{Effect, Figure, Message, State};
pub use view::view;
