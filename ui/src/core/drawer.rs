//! Mobile navigation drawer: a two-state disclosure with focus capture/restore,
//! a Tab focus trap, and Escape / outside-pointer dismissal.
//!
//! The state machine is independent of the DOM. A [`DrawerView`] supplies the
//! handful of capabilities it needs, including attaching the keyboard and
//! outside-click listeners. The listener guard returned by
//! [`DrawerView::attach_listeners`] is held only while open and dropped on close,
//! so at most one pair is ever registered.

use super::focus::{trap_tab, Focusable, TabDirection};

/// What the drawer needs from the page.
pub trait DrawerView {
    type Element: Focusable + Clone;
    /// Detaches the keyboard/outside-click pair when dropped.
    type Listeners;

    /// Element currently holding focus, if any.
    fn active_element(&self) -> Option<Self::Element>;
    fn set_drawer_hidden(&self, hidden: bool);
    fn set_toggle_expanded(&self, expanded: bool);
    /// Focusable descendants of the drawer, in document order (disabled ones included).
    fn focusables(&self) -> Vec<Self::Element>;
    fn attach_listeners(&self) -> Self::Listeners;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKey {
    Escape,
    Tab { shift: bool },
    Other,
}

impl DrawerKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str, shift: bool) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab { shift },
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Dismissed,
    /// Focus was moved by the trap; the browser's default Tab handling must be suppressed.
    FocusMoved,
}

pub struct Drawer<V: DrawerView> {
    view: V,
    state: DrawerState,
    last_focus: Option<V::Element>,
    listeners: Option<V::Listeners>,
}

impl<V: DrawerView> Drawer<V> {
    /// Wrap a view and bring it into the closed state.
    pub fn new(view: V) -> Self {
        view.set_drawer_hidden(true);
        view.set_toggle_expanded(false);
        Self {
            view,
            state: DrawerState::Closed,
            last_focus: None,
            listeners: None,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn has_listeners(&self) -> bool {
        self.listeners.is_some()
    }

    pub fn toggle(&mut self) {
        match self.state {
            DrawerState::Closed => self.open(),
            DrawerState::Open => self.close(),
        }
    }

    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.last_focus = self.view.active_element();
        self.view.set_drawer_hidden(false);
        self.view.set_toggle_expanded(true);
        if let Some(first) = self.view.focusables().into_iter().find(|el| !el.is_disabled()) {
            first.focus();
        }
        self.listeners = Some(self.view.attach_listeners());
        self.state = DrawerState::Open;
        tracing::debug!("navbar drawer opened");
    }

    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.view.set_drawer_hidden(true);
        self.view.set_toggle_expanded(false);
        drop(self.listeners.take());
        self.state = DrawerState::Closed;
        if let Some(previous) = self.last_focus.take() {
            if previous.is_connected() {
                previous.focus();
            }
        }
        tracing::debug!("navbar drawer closed");
    }

    pub fn handle_key(&mut self, key: DrawerKey) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match key {
            DrawerKey::Escape => {
                self.close();
                KeyOutcome::Dismissed
            }
            DrawerKey::Tab { shift } => {
                let candidates = self.view.focusables();
                let current = self.view.active_element();
                match trap_tab(&candidates, current.as_ref(), TabDirection::from_shift(shift)) {
                    Some(idx) => {
                        candidates[idx].focus();
                        KeyOutcome::FocusMoved
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            DrawerKey::Other => KeyOutcome::Ignored,
        }
    }

    /// A pointer interaction somewhere on the page. `inside` is true when the
    /// target lies within the drawer or its toggle. Returns whether it dismissed the drawer.
    pub fn handle_pointer(&mut self, inside: bool) -> bool {
        if !self.is_open() || inside {
            return false;
        }
        self.close();
        true
    }
}
