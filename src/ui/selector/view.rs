// SPDX-License-Identifier: MPL-2.0
//! Rendering of the selector grid.

use super::component::{Figure, Message, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{mouse_area, Column, Container, Image, Row, Scrollable, Text};
use iced::{mouse, ContentFit, Element, Length, Theme};

/// Renders every figure in a wrapping row inside the selector surface.
pub fn view(state: &State) -> Element<'_, Message> {
    let figures: Vec<Element<'_, Message>> = state
        .figures()
        .into_iter()
        .map(|figure| figure_view(state, figure))
        .collect();

    let grid = Row::with_children(figures)
        .spacing(spacing::SM)
        .wrap();

    let outline = state.focus_border_color();

    Container::new(Scrollable::new(grid).width(Length::Fill))
        .padding(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| styles::container::selector(theme, outline))
        .into()
}

fn figure_view<'a>(state: &'a State, figure: Figure<'a>) -> Element<'a, Message> {
    let width = state.figure_width();

    let picture: Element<'a, Message> = match state.handle(figure.index) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::FIGURE_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        // Nothing displayable in `src`: the name stands in for the picture.
        None => Container::new(Text::new(figure.name).size(typography::CAPTION))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(sizing::FIGURE_IMAGE_HEIGHT))
            .into(),
    };

    let caption = Text::new(figure.name)
        .size(typography::CAPTION)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let card = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(width))
        .push(picture)
        .push(caption);

    let selected = figure.selected;
    let styled = Container::new(card)
        .padding(spacing::XS)
        .style(move |theme: &Theme| styles::container::figure(theme, selected));

    mouse_area(styled)
        .on_press(Message::Toggle(figure.index))
        .on_enter(Message::Focused)
        .on_exit(Message::Blurred)
        .interaction(mouse::Interaction::Pointer)
        .into()
}
