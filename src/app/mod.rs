// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the selector to the host and mounts the window.
//!
//! The host pushes render data through [`subscription`]; the selector turns
//! clicks into [`selector::Effect::ReportValue`], which `App::update` hands to
//! the [`HostBridge`] before the next message is processed.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, paths, Config};
use crate::host::encode::encode_files;
use crate::host::{self, HostBridge, RenderData, StdioBridge};
use crate::ui::design_tokens::sizing;
use crate::ui::selector;
use crate::ui::theming::{self, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    selector: selector::State,
    bridge: Arc<dyn HostBridge>,
    theme_mode: ThemeMode,
    /// Whether the host's render-data stream should be listened to.
    listening: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.selector.images().len())
            .field("selected", &self.selector.selection().indices())
            .field("listening", &self.listening)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs`: connects to the host and mounts the
/// widget. Runs once per process.
pub fn start(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());
    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default settings");
    }
    if flags.focus_border {
        config.display.focus_border = Some(true);
    }
    if let Some(size) = flags.thumbnail_size {
        config.display.thumbnail_size = Some(size);
    }

    let bridge: Arc<dyn HostBridge> = Arc::new(StdioBridge::new());

    // iced 0.14 requires a Fn boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((config, flags.demo_files)));
    let boot = move || {
        let (config, demo_files) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::boot(&config, Arc::clone(&bridge), demo_files)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates an app that listens to the host and reports through `bridge`.
    #[must_use]
    pub fn with_bridge(config: &Config, bridge: Arc<dyn HostBridge>) -> Self {
        Self {
            selector: selector::State::new(
                config.display.focus_border(),
                config.display.figure_width(),
            ),
            bridge,
            theme_mode: config.general.theme_mode,
            listening: true,
        }
    }

    /// Announces readiness to the host and, in demo mode, queues the local
    /// files as the first render payload.
    fn boot(
        config: &Config,
        bridge: Arc<dyn HostBridge>,
        demo_files: Vec<PathBuf>,
    ) -> (Self, Task<Message>) {
        let mut app = Self::with_bridge(config, bridge);

        if let Err(err) = app.bridge.component_ready() {
            tracing::warn!(%err, "failed to announce readiness to host");
        }

        if demo_files.is_empty() {
            return (app, Task::none());
        }

        app.listening = false;
        match encode_files(&demo_files, config.display.thumbnail_size()) {
            Ok(images) => {
                tracing::info!(count = images.len(), "showing local files");
                let data = RenderData {
                    images,
                    ..RenderData::default()
                };
                (
                    app,
                    Task::done(Message::Host(host::Event::RenderData(Ok(data)))),
                )
            }
            Err(err) => {
                tracing::error!(%err, "failed to load local files");
                (app, Task::none())
            }
        }
    }

    pub fn title(&self) -> String {
        "Image Selector".to_string()
    }

    pub fn theme(&self) -> Theme {
        theming::resolve_theme(self.theme_mode, self.selector.theme())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Selector(message) => {
                if let selector::Effect::ReportValue(value) =
                    self.selector.handle_message(message)
                {
                    self.report(&value);
                }
            }
            Message::Host(host::Event::RenderData(Ok(data))) => {
                self.selector.apply_render_data(data);
            }
            Message::Host(host::Event::RenderData(Err(err))) => {
                tracing::warn!(%err, "render payload rejected, showing nothing");
                self.selector.clear_images();
            }
            Message::Host(host::Event::Disconnected) => {
                self.listening = false;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        selector::view(&self.selector).map(Message::Selector)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_host_subscription(self.listening)
    }

    /// Current selector state.
    #[must_use]
    pub fn selector(&self) -> &selector::State {
        &self.selector
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    fn report(&self, value: &[usize]) {
        tracing::debug!(?value, "reporting selection");
        if let Err(err) = self.bridge.set_component_value(value) {
            tracing::warn!(%err, "failed to report selection to host");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ImageDescriptor, RecordingBridge};

    #[test]
    fn boot_announces_readiness_once() {
        let bridge = RecordingBridge::new();
        let (app, _task) = App::boot(&Config::default(), Arc::new(bridge.clone()), Vec::new());

        assert!(app.is_listening());
        assert_eq!(
            bridge.messages(),
            vec![host::OutboundMessage::component_ready()]
        );
    }

    #[test]
    fn demo_mode_stops_listening_to_host() {
        let bridge = RecordingBridge::new();
        let (app, _task) = App::boot(
            &Config::default(),
            Arc::new(bridge),
            vec![PathBuf::from("/definitely/missing.png")],
        );
        assert!(!app.is_listening());
        assert!(app.selector().images().is_empty());
    }

    #[test]
    fn disconnect_stops_listening() {
        let mut app = App::with_bridge(&Config::default(), Arc::new(RecordingBridge::new()));
        let _ = app.update(Message::Host(host::Event::Disconnected));
        assert!(!app.is_listening());
    }

    #[test]
    fn rejected_payload_clears_the_grid() {
        let mut app = App::with_bridge(&Config::default(), Arc::new(RecordingBridge::new()));
        let _ = app.update(Message::Host(host::Event::RenderData(Ok(RenderData {
            images: vec![ImageDescriptor::new("a.png", "A")],
            ..RenderData::default()
        }))));
        assert_eq!(app.selector().figures().len(), 1);

        let _ = app.update(Message::Host(host::Event::RenderData(Err(
            crate::error::ProtocolError::MissingImages,
        ))));
        assert!(app.selector().figures().is_empty());
    }
}
