// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the reference alerts.
//!
//! The `App` owns the window host and every alert that is currently mounted.
//! Alert messages are routed by [`AlertId`](crate::domain::alert::AlertId);
//! alerts are dropped once they are back to idle.

pub mod host;
mod message;
mod view;

pub use host::WindowHost;
pub use message::{Demo, Flags, Message};

use crate::application::port::SurfaceSize;
use crate::config;
use crate::ui::alert::{Alert, AlertBuilder, StyleConfig};
use iced::{window, Color, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 240;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Number of callback events kept on screen.
const EVENT_LOG_CAPACITY: usize = 8;

const ALERT_TITLE: &str = "Notice";
const ALERT_MESSAGE: &str =
    "Your account was signed in on another device. Please make sure your account is secure.";
const CANCEL_TITLE: &str = "Exit";
const SIGN_IN_TITLE: &str = "Sign in again";
const CHANGE_PASSWORD_TITLE: &str = "Change password";

const ORANGE: Color = Color::from_rgb(1.0, 0.5, 0.0);

/// Recent callback invocations, shared with the alert callbacks.
type EventLog = Rc<RefCell<Vec<String>>>;

fn record(events: &EventLog, entry: String) {
    log::info!("{entry}");
    let mut events = events.borrow_mut();
    events.push(entry);
    let overflow = events.len().saturating_sub(EVENT_LOG_CAPACITY);
    events.drain(..overflow);
}

/// Root Iced application state of the demo.
pub struct App {
    host: WindowHost,
    alerts: Vec<Alert>,
    events: EventLog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("host", &self.host)
            .field("alerts", &self.alerts.len())
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the style settings and installs them as the global style.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let style = loaded
            .and_then(|config| config.style_config())
            .unwrap_or_else(|err| {
                log::warn!("Using the default alert style: {err}");
                StyleConfig::default()
            });
        StyleConfig::set_global(style);

        let app = Self {
            host: WindowHost::new(SurfaceSize::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            )),
            alerts: Vec::new(),
            events: EventLog::default(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Alert")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Launch(demo) => self.launch(demo),
            Message::Alert(id, message) => {
                if let Some(alert) = self.alerts.iter_mut().find(|alert| alert.id() == id) {
                    alert.update(message, &mut self.host);
                }
                self.alerts.retain(|alert| alert.state().is_mounted());
            }
            // The host starts at the requested window size; the real one may
            // differ (scaling, tiling window managers).
            Message::WindowOpened(id) => {
                return window::size(id).map(Message::WindowResized);
            }
            Message::WindowResized(size) => {
                self.host.resize(SurfaceSize::new(size.width, size.height));
                for alert in &mut self.alerts {
                    alert.relayout(&self.host);
                }
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let alerts = self.alerts.iter().map(|alert| {
            alert
                .subscription()
                .with(alert.id())
                .map(|(id, message)| Message::Alert(id, message))
        });
        let window_events = [
            window::open_events().map(Message::WindowOpened),
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
        ];

        Subscription::batch(alerts.chain(window_events))
    }

    fn launch(&mut self, demo: Demo) {
        let base = Alert::builder(CANCEL_TITLE)
            .title(ALERT_TITLE)
            .message(ALERT_MESSAGE);

        let alert = match demo {
            Demo::OneButton => base.show(&mut self.host),
            Demo::TwoButtons => {
                let mut alert = self
                    .with_logging_callbacks(base.other_button(SIGN_IN_TITLE))
                    .show(&mut self.host);
                alert.set_destructive_indices(Some([0].into_iter().collect()));
                alert
            }
            Demo::ThreeButtons => {
                StyleConfig::set_global(StyleConfig::global().with_hair_color(ORANGE));
                let events = Rc::clone(&self.events);
                let events_did = Rc::clone(&self.events);
                let builder = base
                    .other_buttons([SIGN_IN_TITLE, CHANGE_PASSWORD_TITLE])
                    .destructive_indices([0])
                    .destructive_color(ORANGE)
                    .will_present(move |alert| {
                        record(
                            &events,
                            format!("will_present, cancel {}", alert.cancel_button_index()),
                        );
                    })
                    .did_present(move |alert| {
                        record(
                            &events_did,
                            format!("did_present, cancel {}", alert.cancel_button_index()),
                        );
                    });
                self.with_logging_callbacks(builder).show(&mut self.host)
            }
        };

        if alert.state().is_mounted() {
            self.alerts.push(alert);
        }
    }

    fn with_logging_callbacks(&self, builder: AlertBuilder) -> AlertBuilder {
        let clicked = Rc::clone(&self.events);
        let will_dismiss = Rc::clone(&self.events);
        let did_dismiss = Rc::clone(&self.events);

        builder
            .on_clicked(move |alert, tag| {
                record(
                    &clicked,
                    format!("clicked {tag}, cancel {}", alert.cancel_button_index()),
                );
            })
            .will_dismiss(move |alert, tag| {
                record(
                    &will_dismiss,
                    format!("will_dismiss {tag}, cancel {}", alert.cancel_button_index()),
                );
            })
            .did_dismiss(move |alert, tag| {
                record(
                    &did_dismiss,
                    format!("did_dismiss {tag}, cancel {}", alert.cancel_button_index()),
                );
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::PresentationState;

    fn app() -> App {
        App {
            host: WindowHost::new(SurfaceSize::new(420.0, 720.0)),
            alerts: Vec::new(),
            events: EventLog::default(),
        }
    }

    #[test]
    fn launching_mounts_one_layer_per_alert() {
        let mut app = app();
        let _ = app.update(Message::Launch(Demo::OneButton));
        let _ = app.update(Message::Launch(Demo::TwoButtons));

        assert_eq!(app.alerts.len(), 2);
        assert_eq!(app.host.layers().len(), 2);
        assert!(app
            .alerts
            .iter()
            .all(|alert| alert.state() == PresentationState::Presenting));
    }

    #[test]
    fn two_button_demo_marks_cancel_destructive() {
        let mut app = app();
        let _ = app.update(Message::Launch(Demo::TwoButtons));

        let alert = &app.alerts[0];
        assert_eq!(alert.button_color(0), Some(alert.style().destructive_color));
        assert_eq!(alert.button_color(1), Some(alert.style().button_text_color));
    }

    #[test]
    fn resize_relayouts_mounted_alerts() {
        let mut app = app();
        let _ = app.update(Message::Launch(Demo::OneButton));
        let _ = app.update(Message::WindowResized(iced::Size::new(600.0, 720.0)));

        assert_eq!(app.alerts[0].layout().map(|l| l.width), Some(520.0));
    }

    #[test]
    fn opened_window_queries_its_size() {
        let mut app = app();
        let task = app.update(Message::WindowOpened(window::Id::unique()));
        assert_eq!(task.units(), 1);
    }

    #[test]
    fn reported_size_is_used_by_the_next_alert() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(iced::Size::new(300.0, 720.0)));
        let _ = app.update(Message::Launch(Demo::OneButton));

        assert_eq!(app.alerts[0].layout().map(|l| l.width), Some(220.0));
    }

    #[test]
    fn event_log_keeps_latest_entries() {
        let events = EventLog::default();
        for i in 0..(EVENT_LOG_CAPACITY + 3) {
            record(&events, format!("event {i}"));
        }

        let events = events.borrow();
        assert_eq!(events.len(), EVENT_LOG_CAPACITY);
        assert_eq!(events[0], "event 3");
    }
}
