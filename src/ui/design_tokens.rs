// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the selector grid.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (4px steps)
//! - **Sizing**: Figure and window sizes
//! - **Typography**: Font size scale
//! - **Border**: Border width scale
//! - **Radius**: Border radii
//!
//! ```
//! use image_selector::ui::design_tokens::{palette, spacing, opacity};
//! use iced::Color;
//!
//! let highlight = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::PRIMARY_500
//! };
//! let padding = spacing::SM; // 12px
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Neutral border used when the grid is not focused.
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);

    /// Focus border when the host theme has no usable primary colour.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Tint behind a selected figure.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height reserved for a figure's image.
    pub const FIGURE_IMAGE_HEIGHT: f32 = 120.0;

    /// Default window size when running standalone.
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Caption - Figure captions
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Grid outline
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Selected figure outline
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);

    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < 1.0);

    assert!(sizing::FIGURE_IMAGE_HEIGHT < sizing::WINDOW_HEIGHT);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::MD > radius::SM);
};
