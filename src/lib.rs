// SPDX-License-Identifier: MPL-2.0
//! `image_selector` is a multi-select image grid built with the Iced GUI
//! framework and driven by an embedding host.
//!
//! The host sends render data (images and an optional theme) as JSON lines on
//! stdin; every change of selection is reported back on stdout as the ordered
//! list of selected indices.

#![doc(html_root_url = "https://docs.rs/image_selector/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod selection;
pub mod ui;
