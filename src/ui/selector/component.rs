// SPDX-License-Identifier: MPL-2.0
//! Selector component encapsulating state and update logic.

use crate::host::encode::{decode_src, ImageSource};
use crate::host::{HostTheme, ImageDescriptor, RenderData};
use crate::selection::Selection;
use crate::ui::theming;
use iced::widget::image::Handle;
use iced::Color;

/// Messages emitted by the grid's figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A figure was clicked.
    Toggle(usize),
    /// The pointer entered a figure.
    Focused,
    /// The pointer left a figure.
    Blurred,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The selection changed; the host must receive this value.
    ReportValue(Vec<usize>),
}

/// Render model of one figure, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure<'a> {
    pub index: usize,
    pub src: &'a str,
    pub name: &'a str,
    pub selected: bool,
}

/// Local state of one selector instance.
#[derive(Debug, Clone)]
pub struct State {
    images: Vec<ImageDescriptor>,
    /// Decoded image handles, parallel to `images`. `None` when the `src`
    /// carries nothing displayable.
    handles: Vec<Option<Handle>>,
    theme: Option<HostTheme>,
    selection: Selection,
    is_focused: bool,
    focus_border: bool,
    figure_width: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(false, crate::config::DEFAULT_FIGURE_WIDTH)
    }
}

impl State {
    #[must_use]
    pub fn new(focus_border: bool, figure_width: f32) -> Self {
        Self {
            images: Vec::new(),
            handles: Vec::new(),
            theme: None,
            selection: Selection::new(),
            is_focused: false,
            focus_border,
            figure_width,
        }
    }

    /// Replaces images and theme with a fresh payload.
    ///
    /// The selection is left untouched, including indices that now point
    /// past the end of the image list. The host's `disabled` flag does not
    /// gate clicks.
    pub fn apply_render_data(&mut self, data: RenderData) {
        let RenderData {
            images,
            theme,
            disabled,
        } = data;

        let stale = self.selection.stale_indices(images.len());
        if !stale.is_empty() {
            tracing::debug!(?stale, images = images.len(), "selection outlives image list");
        }
        if disabled {
            tracing::debug!("host marked the widget disabled, clicks stay active");
        }

        // Same src at the same position keeps its handle and cache id.
        let handles = images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                match (self.images.get(index), self.handles.get(index)) {
                    (Some(previous), Some(handle)) if previous.src == image.src => handle.clone(),
                    _ => handle_for(&image.src),
                }
            })
            .collect();

        self.handles = handles;
        self.images = images;
        self.theme = theme;
        if self.images.is_empty() {
            self.is_focused = false;
        }
    }

    /// Drops the current images so nothing is rendered.
    ///
    /// Also drops focus: no figure is left to emit a pointer exit.
    pub fn clear_images(&mut self) {
        self.images.clear();
        self.handles.clear();
        self.is_focused = false;
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Toggle(index) => {
                let value = self.selection.toggle(index).to_vec();
                Effect::ReportValue(value)
            }
            Message::Focused => {
                self.is_focused = true;
                Effect::None
            }
            Message::Blurred => {
                self.is_focused = false;
                Effect::None
            }
        }
    }

    /// One entry per image, in the order the host supplied them.
    #[must_use]
    pub fn figures(&self) -> Vec<Figure<'_>> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, image)| Figure {
                index,
                src: &image.src,
                name: &image.name,
                selected: self.selection.contains(index),
            })
            .collect()
    }

    /// Border colour of the grid, when the focus border is enabled and the
    /// host supplied a theme.
    #[must_use]
    pub fn focus_border_color(&self) -> Option<Color> {
        if !self.focus_border {
            return None;
        }
        theming::focus_border_color(self.theme.as_ref(), self.is_focused)
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    #[must_use]
    pub fn theme(&self) -> Option<&HostTheme> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    #[must_use]
    pub fn figure_width(&self) -> f32 {
        self.figure_width
    }

    /// Image handle of the figure at `index`, if its `src` is displayable.
    pub(super) fn handle(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index).and_then(Option::as_ref)
    }
}

fn handle_for(src: &str) -> Option<Handle> {
    if src.is_empty() {
        return None;
    }
    match decode_src(src) {
        ImageSource::Bytes(bytes) if bytes.is_empty() => None,
        ImageSource::Bytes(bytes) => Some(Handle::from_bytes(bytes)),
        ImageSource::Path(path) => Some(Handle::from_path(path)),
    }
}
