// SPDX-License-Identifier: MPL-2.0
//! Container styles for the selector grid and its figures.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Outer surface of the grid.
///
/// `outline` is the focus-reactive border colour; `None` draws no border.
pub fn selector(theme: &Theme, outline: Option<Color>) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: match outline {
            Some(color) => Border {
                color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            None => Border::default(),
        },
        ..Default::default()
    }
}

/// One figure card. Selected figures get a tinted surface and a primary
/// outline; the rest stay flat.
pub fn figure(theme: &Theme, selected: bool) -> container::Style {
    let palette = theme.extended_palette();

    if selected {
        let primary = palette.primary.strong.color;
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..primary
            })),
            border: Border {
                color: primary,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    } else {
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                color: Color::TRANSPARENT,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_figure_has_primary_border() {
        let theme = Theme::Light;
        let style = figure(&theme, true);
        assert_eq!(
            style.border.color,
            theme.extended_palette().primary.strong.color
        );
        assert!(style.border.width > 0.0);
    }

    #[test]
    fn unselected_figure_border_is_invisible() {
        let style = figure(&Theme::Dark, false);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn selector_outline_is_optional() {
        let without = selector(&Theme::Light, None);
        assert_eq!(without.border.width, 0.0);

        let with = selector(&Theme::Light, Some(Color::BLACK));
        assert_eq!(with.border.color, Color::BLACK);
        assert_eq!(with.border.width, border::WIDTH_SM);
    }
}
