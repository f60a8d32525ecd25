//! Bell widget controller.
//!
//! # Responsibility
//! - Derive the bell state from session, feed and panel inputs.
//! - Produce a render description with a badge that is never stale.
//!
//! # Invariants
//! - State precedence: `Hidden` > `Loading` > `Disconnected` >
//!   (`PanelOpen` | `ConnectedIdle`).
//! - The panel flag belongs to one controller instance and is cleared
//!   whenever the control is hidden.
//! - Scoping and counting run on every render; nothing is cached.

use crate::bell::badge::{format_badge, unread};
use crate::bell::config::{BellConfig, BellVariant};
use crate::model::session::{AuthSnapshot, NotificationFeed};
use crate::scope::filter::scope_for_session;
use crate::scope::observer::{LogScopeObserver, ScopeObserver};
use log::debug;
use uuid::Uuid;

/// Accessible label of the bell button.
pub const BELL_ARIA_LABEL: &str = "Notifications";

/// Visual/interaction state of one bell control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BellState {
    /// Not rendered at all.
    Hidden,
    Loading,
    ConnectedIdle,
    PanelOpen,
    /// Feed is offline; the control stays interactive.
    Disconnected,
}

impl BellState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Loading => "loading",
            Self::ConnectedIdle => "connected_idle",
            Self::PanelOpen => "panel_open",
            Self::Disconnected => "disconnected",
        }
    }
}

/// Icon shown inside the bell button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BellIcon {
    Spinner,
    Bell,
    BellOff,
}

/// Everything the host needs to draw one visible bell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellView {
    pub state: BellState,
    pub icon: BellIcon,
    pub icon_px: u32,
    pub button_px: u32,
    pub variant: BellVariant,
    pub aria_label: &'static str,
    /// Notifications visible to the actor.
    pub scoped_count: usize,
    pub unread_count: usize,
    /// `None` hides the badge.
    pub badge: Option<String>,
    pub panel_open: bool,
    /// Store error passed through for the host to surface.
    pub error: Option<String>,
}

/// Controller for one bell instance.
#[derive(Debug)]
pub struct BellController {
    instance_id: Uuid,
    config: BellConfig,
    panel_open: bool,
}

impl BellController {
    pub fn new(config: BellConfig) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            config,
            panel_open: false,
        }
    }

    /// Stable id used to correlate this instance's log lines.
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn config(&self) -> BellConfig {
        self.config
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Derives the current state without touching the panel flag.
    pub fn state(&self, auth: &AuthSnapshot, feed: &NotificationFeed) -> BellState {
        if auth.active_actor().is_none() {
            return BellState::Hidden;
        }
        if feed.is_loading {
            return BellState::Loading;
        }
        if !feed.is_connected {
            return BellState::Disconnected;
        }
        if self.panel_open {
            BellState::PanelOpen
        } else {
            BellState::ConnectedIdle
        }
    }

    /// Handles a click on the bell.
    ///
    /// Ignored while hidden; otherwise flips the panel flag.
    pub fn toggle_panel(&mut self, auth: &AuthSnapshot, feed: &NotificationFeed) -> BellState {
        if self.state(auth, feed) == BellState::Hidden {
            self.panel_open = false;
            return BellState::Hidden;
        }
        self.panel_open = !self.panel_open;
        debug!(
            "event=bell_toggle module=bell instance={} panel_open={}",
            self.instance_id, self.panel_open
        );
        self.state(auth, feed)
    }

    /// Handles click-away or a programmatic close.
    pub fn close_panel(&mut self) {
        if self.panel_open {
            debug!(
                "event=bell_close module=bell instance={}",
                self.instance_id
            );
        }
        self.panel_open = false;
    }

    /// Renders the control, logging scope decisions at debug level.
    pub fn render(&mut self, auth: &AuthSnapshot, feed: &NotificationFeed) -> Option<BellView> {
        self.render_with_observer(auth, feed, &LogScopeObserver)
    }

    /// Renders the control, reporting scope decisions to `observer`.
    ///
    /// Returns `None` when the control must not be drawn.
    pub fn render_with_observer(
        &mut self,
        auth: &AuthSnapshot,
        feed: &NotificationFeed,
        observer: &dyn ScopeObserver,
    ) -> Option<BellView> {
        let state = self.state(auth, feed);
        if state == BellState::Hidden {
            self.panel_open = false;
            debug!(
                "event=bell_render module=bell instance={} state={}",
                self.instance_id,
                state.as_str()
            );
            return None;
        }

        let scoped = scope_for_session(auth, &feed.notifications, observer);
        let scoped_count = scoped.len();
        let unread_count = unread(scoped);
        let icon = match state {
            BellState::Loading => BellIcon::Spinner,
            BellState::Disconnected => BellIcon::BellOff,
            _ => BellIcon::Bell,
        };

        debug!(
            "event=bell_render module=bell instance={} state={} scoped={} unread={}",
            self.instance_id,
            state.as_str(),
            scoped_count,
            unread_count
        );

        Some(BellView {
            state,
            icon,
            icon_px: self.config.size.icon_px(),
            button_px: self.config.size.button_px(),
            variant: self.config.variant,
            aria_label: BELL_ARIA_LABEL,
            scoped_count,
            unread_count,
            badge: format_badge(unread_count),
            panel_open: self.panel_open,
            error: feed.error.clone(),
        })
    }
}

impl Default for BellController {
    fn default() -> Self {
        Self::new(BellConfig::default())
    }
}
