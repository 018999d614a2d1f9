// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Longest side, in pixels, of thumbnails produced when inlining files.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

/// Smallest accepted thumbnail side.
pub const MIN_THUMBNAIL_SIZE: u32 = 16;

/// Largest accepted thumbnail side.
pub const MAX_THUMBNAIL_SIZE: u32 = 2048;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Width of one figure in the selector grid (logical pixels).
pub const DEFAULT_FIGURE_WIDTH: f32 = 160.0;

/// Smallest figure width the grid will lay out.
pub const MIN_FIGURE_WIDTH: f32 = 48.0;

/// Largest figure width the grid will lay out.
pub const MAX_FIGURE_WIDTH: f32 = 1024.0;

/// Whether the focus-reactive border is drawn when the host sends a theme.
pub const DEFAULT_FOCUS_BORDER: bool = false;
