// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`selector`] - The image grid and its selection state
//! - [`styles`] - Container styles for the grid and figures
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Host theme mapping and Light/Dark/System fallback

pub mod design_tokens;
pub mod selector;
pub mod styles;
pub mod theming;
