// SPDX-License-Identifier: MPL-2.0
//! Presentation controller of one alert.
//!
//! The [`Alert`] drives the `Idle → Presenting → Shown → Dismissing → Idle`
//! cycle. Mounting goes through the [`Host`] port; animation progress
//! arrives as [`Message::Tick`] and the phase changes (with their `did_*`
//! callbacks) run inside the tick that sees the transition finish.

use super::style::StyleConfig;
use super::transition::{Transition, TransitionKind, VisualState};
use crate::application::port::{measure_label, Host, TextMeasure};
use crate::domain::alert::{
    container_width, AlertId, AlertLayout, AlertSpec, Button, LayoutInput, PresentationState,
};
use crate::ui::color;
use iced::widget::image::Handle;
use iced::{Color, Subscription};
use std::collections::BTreeSet;
use std::fmt;
use std::time::Instant;

/// Called with the tag of the tapped button, before the exit animation.
pub type ClickedCallback = Box<dyn FnMut(&Alert, usize)>;
/// Called around the entrance animation.
pub type PresentCallback = Box<dyn FnMut(&Alert)>;
/// Called around the exit animation with the tag that triggered it.
pub type DismissCallback = Box<dyn FnMut(&Alert, usize)>;

/// Messages handled by [`Alert::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The button carrying this tag was tapped.
    ButtonPressed(usize),
    /// Animation frame.
    Tick(Instant),
}

/// Why [`Alert::try_show`] did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowError {
    /// The alert is not idle.
    AlreadyShowing(PresentationState),
    /// The host has no surface to mount into.
    NoRootView,
}

impl fmt::Display for ShowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowError::AlreadyShowing(state) => {
                write!(f, "alert is already showing (state: {state:?})")
            }
            ShowError::NoRootView => write!(f, "no root view to mount the alert into"),
        }
    }
}

impl std::error::Error for ShowError {}

#[derive(Default)]
struct Callbacks {
    on_clicked: Option<ClickedCallback>,
    will_present: Option<PresentCallback>,
    did_present: Option<PresentCallback>,
    will_dismiss: Option<DismissCallback>,
    did_dismiss: Option<DismissCallback>,
}

/// A built button and the text color it renders with.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedButton {
    pub button: Button,
    pub color: Color,
}

/// View tree of a mounted alert.
#[derive(Debug, Clone)]
pub(crate) struct Mounted {
    pub(crate) layout: AlertLayout,
    pub(crate) buttons: Vec<MountedButton>,
    pub(crate) visual: VisualState,
    /// Single pixel stretched over every hairline frame.
    pub(crate) hairline: Handle,
}

/// Modal alert with a title, a message and one or more buttons.
pub struct Alert {
    id: AlertId,
    spec: AlertSpec,
    style: StyleConfig,
    destructive_indices: Option<BTreeSet<usize>>,
    destructive_color: Color,
    callbacks: Callbacks,
    state: PresentationState,
    transition: Option<Transition>,
    mounted: Option<Mounted>,
}

impl fmt::Debug for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alert")
            .field("id", &self.id)
            .field("spec", &self.spec)
            .field("state", &self.state)
            .field("destructive_indices", &self.destructive_indices)
            .field("destructive_color", &self.destructive_color)
            .field("transition", &self.transition)
            .field("mounted", &self.mounted.is_some())
            .finish_non_exhaustive()
    }
}

impl Alert {
    /// Creates an idle alert. Nothing is mounted until [`Alert::show`].
    #[must_use]
    pub fn new(spec: AlertSpec, style: StyleConfig) -> Self {
        Self {
            id: AlertId::new(),
            spec,
            destructive_color: style.destructive_color,
            style,
            destructive_indices: None,
            callbacks: Callbacks::default(),
            state: PresentationState::Idle,
            transition: None,
            mounted: None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn spec(&self) -> &AlertSpec {
        &self.spec
    }

    #[must_use]
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn button_count(&self) -> usize {
        self.spec.button_count()
    }

    /// Tag of the cancel button.
    #[must_use]
    pub fn cancel_button_index(&self) -> usize {
        self.spec.cancel_button_index()
    }

    #[must_use]
    pub fn destructive_indices(&self) -> Option<&BTreeSet<usize>> {
        self.destructive_indices.as_ref()
    }

    #[must_use]
    pub fn destructive_color(&self) -> Color {
        self.destructive_color
    }

    /// Geometry of the mounted alert.
    #[must_use]
    pub fn layout(&self) -> Option<&AlertLayout> {
        self.mounted.as_ref().map(|m| &m.layout)
    }

    /// Built buttons, ordered by tag. Empty while idle.
    #[must_use]
    pub fn buttons(&self) -> &[MountedButton] {
        self.mounted
            .as_ref()
            .map(|m| m.buttons.as_slice())
            .unwrap_or_default()
    }

    /// Text color of the button carrying `tag`, while mounted.
    #[must_use]
    pub fn button_color(&self, tag: usize) -> Option<Color> {
        self.buttons()
            .iter()
            .find(|b| b.button.tag() == tag)
            .map(|b| b.color)
    }

    /// Current animated properties, while mounted.
    #[must_use]
    pub fn visual_state(&self) -> Option<VisualState> {
        self.mounted.as_ref().map(|m| m.visual)
    }

    pub(crate) fn mounted(&self) -> Option<&Mounted> {
        self.mounted.as_ref()
    }

    // ------------------------------------------------------------------
    // Callback slots
    // ------------------------------------------------------------------

    pub fn set_on_clicked(&mut self, callback: impl FnMut(&Alert, usize) + 'static) {
        self.callbacks.on_clicked = Some(Box::new(callback));
    }

    pub fn set_will_present(&mut self, callback: impl FnMut(&Alert) + 'static) {
        self.callbacks.will_present = Some(Box::new(callback));
    }

    pub fn set_did_present(&mut self, callback: impl FnMut(&Alert) + 'static) {
        self.callbacks.did_present = Some(Box::new(callback));
    }

    pub fn set_will_dismiss(&mut self, callback: impl FnMut(&Alert, usize) + 'static) {
        self.callbacks.will_dismiss = Some(Box::new(callback));
    }

    pub fn set_did_dismiss(&mut self, callback: impl FnMut(&Alert, usize) + 'static) {
        self.callbacks.did_dismiss = Some(Box::new(callback));
    }

    // ------------------------------------------------------------------
    // Destructive styling
    // ------------------------------------------------------------------

    /// Marks the buttons whose tag is in `indices` as destructive.
    ///
    /// Already built buttons are recolored in place; geometry is untouched.
    /// `None` restores the default button color everywhere.
    pub fn set_destructive_indices(&mut self, indices: Option<BTreeSet<usize>>) {
        self.destructive_indices = indices;
        self.recolor_buttons();
    }

    /// Changes the text color of destructive buttons.
    pub fn set_destructive_color(&mut self, color: Color) {
        self.destructive_color = color;
        self.recolor_buttons();
    }

    fn recolor_buttons(&mut self) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };
        for mounted_button in &mut mounted.buttons {
            mounted_button
                .button
                .apply_destructive(self.destructive_indices.as_ref());
            mounted_button.color = self
                .style
                .button_color(mounted_button.button.is_destructive(), self.destructive_color);
        }
    }

    fn build_buttons(&self) -> Vec<MountedButton> {
        self.spec
            .buttons()
            .into_iter()
            .map(|mut button| {
                button.apply_destructive(self.destructive_indices.as_ref());
                let color = self
                    .style
                    .button_color(button.is_destructive(), self.destructive_color);
                MountedButton { button, color }
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    fn compute_layout(&self, measure: &(impl TextMeasure + ?Sized), root_width: f32) -> AlertLayout {
        let input = LayoutInput::new(container_width(root_width), self.spec.button_count());
        let content_width = input.content_width();
        let input = input
            .with_title_height(measure_label(
                measure,
                self.spec.title(),
                self.style.title_font,
                content_width,
            ))
            .with_message_height(measure_label(
                measure,
                self.spec.message(),
                self.style.message_font,
                content_width,
            ));

        AlertLayout::compute(&input)
    }

    /// Recomputes the geometry for the host's current size.
    ///
    /// State, colors and callbacks are kept. Does nothing while idle or when
    /// the host has no root surface.
    pub fn relayout(&mut self, host: &impl Host) {
        let Some(root) = host.root_size() else {
            return;
        };
        if self.mounted.is_none() {
            return;
        }
        let layout = self.compute_layout(host, root.width);
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.layout = layout;
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Mounts the alert and starts the entrance animation.
    ///
    /// Calling it on an alert that is not idle logs a warning and does
    /// nothing; so does a host without root surface, silently.
    pub fn show(&mut self, host: &mut impl Host) -> &mut Self {
        match self.try_show(host) {
            Ok(()) => {}
            Err(err @ ShowError::AlreadyShowing(_)) => {
                log::warn!("Ignoring show() on alert {:?}: {err}", self.id);
            }
            Err(ShowError::NoRootView) => {
                log::debug!("Alert {:?} not shown: no root view", self.id);
            }
        }
        self
    }

    /// Like [`Alert::show`], reporting why nothing happened.
    ///
    /// # Errors
    ///
    /// Returns [`ShowError::AlreadyShowing`] unless the alert is idle and
    /// [`ShowError::NoRootView`] when the host has nothing to mount into.
    pub fn try_show(&mut self, host: &mut impl Host) -> Result<(), ShowError> {
        if self.state != PresentationState::Idle {
            return Err(ShowError::AlreadyShowing(self.state));
        }
        let root = host.root_size().ok_or(ShowError::NoRootView)?;

        self.mounted = Some(Mounted {
            layout: self.compute_layout(&*host, root.width),
            buttons: self.build_buttons(),
            visual: VisualState::PRESENT_START,
            hairline: color::single_pixel(self.style.hairline_color),
        });
        host.mount(self.id);
        self.state = PresentationState::Presenting;
        log::debug!("Presenting alert {:?}", self.id);

        self.fire_will_present();
        self.transition = Some(Transition::present(host.now()));
        Ok(())
    }

    /// Starts the exit animation on behalf of the button carrying `tag`.
    ///
    /// Only a shown alert can be hidden; running transitions are never
    /// interrupted.
    pub fn hide(&mut self, tag: usize, host: &impl Host) {
        if self.state != PresentationState::Shown {
            log::debug!(
                "Ignoring hide({tag}) on alert {:?} in state {:?}",
                self.id,
                self.state
            );
            return;
        }

        self.state = PresentationState::Dismissing;
        log::debug!("Dismissing alert {:?} with button {tag}", self.id);
        self.fire_will_dismiss(tag);

        let from = self.visual_state().unwrap_or(VisualState::SHOWN);
        self.transition = Some(Transition::dismiss(tag, from, host.now()));
    }

    /// Handles a message produced by the view or the subscription.
    pub fn update(&mut self, message: Message, host: &mut impl Host) {
        match message {
            Message::ButtonPressed(tag) => self.button_tapped(tag, &*host),
            Message::Tick(now) => self.tick(now, host),
        }
    }

    fn button_tapped(&mut self, tag: usize, host: &impl Host) {
        if !self.state.accepts_taps() {
            log::debug!(
                "Ignoring tap on button {tag} of alert {:?} in state {:?}",
                self.id,
                self.state
            );
            return;
        }
        if self.button_color(tag).is_none() {
            log::debug!("Ignoring tap on unknown button {tag} of alert {:?}", self.id);
            return;
        }

        self.fire_on_clicked(tag);
        self.hide(tag, host);
    }

    fn tick(&mut self, now: Instant, host: &mut impl Host) {
        let Some(transition) = self.transition.as_ref() else {
            return;
        };

        let finished = transition.is_finished(now);
        let visual = if finished {
            transition.target()
        } else {
            transition.sample(now)
        };
        let kind = transition.kind();

        if let Some(mounted) = self.mounted.as_mut() {
            mounted.visual = visual;
        }
        if !finished {
            return;
        }

        self.transition = None;
        match kind {
            TransitionKind::Present => {
                self.state = PresentationState::Shown;
                log::debug!("Alert {:?} shown", self.id);
                self.fire_did_present();
            }
            TransitionKind::Dismiss { tag } => {
                host.unmount(self.id);
                self.mounted = None;
                self.state = PresentationState::Idle;
                log::debug!("Alert {:?} dismissed", self.id);
                self.fire_did_dismiss(tag);
            }
        }
    }

    /// Animation frames, only while a transition is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.transition.is_some() {
            iced::window::frames().map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    // ------------------------------------------------------------------
    // Callback dispatch
    //
    // A callback is taken out of its slot while it runs so it can borrow
    // the alert, then put back.
    // ------------------------------------------------------------------

    fn fire_on_clicked(&mut self, tag: usize) {
        if let Some(mut callback) = self.callbacks.on_clicked.take() {
            callback(&*self, tag);
            self.callbacks.on_clicked = Some(callback);
        }
    }

    fn fire_will_present(&mut self) {
        if let Some(mut callback) = self.callbacks.will_present.take() {
            callback(&*self);
            self.callbacks.will_present = Some(callback);
        }
    }

    fn fire_did_present(&mut self) {
        if let Some(mut callback) = self.callbacks.did_present.take() {
            callback(&*self);
            self.callbacks.did_present = Some(callback);
        }
    }

    fn fire_will_dismiss(&mut self, tag: usize) {
        if let Some(mut callback) = self.callbacks.will_dismiss.take() {
            callback(&*self, tag);
            self.callbacks.will_dismiss = Some(callback);
        }
    }

    fn fire_did_dismiss(&mut self, tag: usize) {
        if let Some(mut callback) = self.callbacks.did_dismiss.take() {
            callback(&*self, tag);
            self.callbacks.did_dismiss = Some(callback);
        }
    }
}
