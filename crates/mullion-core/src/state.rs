//! Maximize/restore and theme state for one chrome-managed window.
//!
//! The controller is deliberately not the source of truth for the maximize
//! flag: a maximize request can be rejected or deferred by the host, so the
//! flag is only ever re-derived from the host's authoritative answer when a
//! state-changed notification arrives. Commands express intent; the host
//! confirms.

use parking_lot::{Mutex, RwLock};

use crate::host::{WindowHost, WindowStateCommand};

/// Snapshot of the chrome-visible window state.
///
/// Process-local to one window instance; lives for the window's lifetime
/// and is never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeState {
    /// Whether the host reports the window as maximized.
    pub is_maximized: bool,
    /// Whether the chrome renders with the dark palette.
    pub is_dark_mode: bool,
    /// Whether the window is the active (focused) window.
    pub is_active: bool,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            is_maximized: false,
            is_dark_mode: false,
            is_active: true,
        }
    }
}

/// Why a visual refresh is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    /// The host confirmed a maximize/restore change; swap the
    /// maximize/restore icon.
    StateChanged,
    /// The light/dark theme flag changed; recolor icons and background.
    ThemeChanged,
    /// The window was activated or deactivated; controls restyle.
    ActivationChanged,
}

/// A visual-refresh request delivered to the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeRefresh {
    /// What triggered the refresh.
    pub reason: RefreshReason,
    /// The state to render.
    pub state: ChromeState,
}

type RefreshCallback = Box<dyn FnMut(ChromeRefresh) + Send>;

/// Owner of the maximize/restore and light/dark flags for one window.
///
/// # Callback re-entrancy
///
/// The refresh callback runs on the UI thread while the controller's
/// callback slot is held; it must repaint and return, not call back into
/// the controller.
#[derive(Default)]
pub struct ChromeStateController {
    state: RwLock<ChromeState>,
    refresh: Mutex<Option<RefreshCallback>>,
}

impl ChromeStateController {
    /// Create a controller in the `Normal`, light, active state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the visual-refresh callback.
    pub fn set_refresh_callback<F>(&self, callback: F)
    where
        F: FnMut(ChromeRefresh) + Send + 'static,
    {
        *self.refresh.lock() = Some(Box::new(callback));
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> ChromeState {
        *self.state.read()
    }

    /// Whether the window is currently maximized, per the last host
    /// confirmation.
    pub fn is_maximized(&self) -> bool {
        self.state.read().is_maximized
    }

    /// Whether the dark palette is active.
    pub fn is_dark_mode(&self) -> bool {
        self.state.read().is_dark_mode
    }

    /// Toggle between maximized and restored.
    ///
    /// Issues the appropriate command to the host and returns. Internal
    /// state is not flipped here; the host's state-changed notification
    /// (routed to [`on_host_state_changed`]) is what updates the flag.
    ///
    /// [`on_host_state_changed`]: Self::on_host_state_changed
    pub fn request_maximize_toggle(&self, host: &dyn WindowHost) {
        let command = if self.is_maximized() {
            WindowStateCommand::Restore
        } else {
            WindowStateCommand::Maximize
        };
        tracing::debug!(?command, "maximize toggle requested");
        host.request_window_state(command);
    }

    /// Ask the host to minimize the window.
    pub fn request_minimize(&self, host: &dyn WindowHost) {
        host.request_window_state(WindowStateCommand::Minimize);
    }

    /// Ask the host to close the window.
    pub fn request_close(&self, host: &dyn WindowHost) {
        host.request_window_state(WindowStateCommand::Close);
    }

    /// Reconcile against the host after a size/state-changed notification.
    ///
    /// This is the only place the maximize flag is written. Always followed
    /// by a refresh callback so the embedding UI can swap the
    /// maximize/restore icon.
    pub fn on_host_state_changed(&self, host: &dyn WindowHost) {
        let maximized = host.is_maximized();
        {
            let mut state = self.state.write();
            if state.is_maximized != maximized {
                tracing::debug!(maximized, "host window state changed");
            }
            state.is_maximized = maximized;
        }
        self.fire_refresh(RefreshReason::StateChanged);
    }

    /// Switch between the light and dark palette.
    ///
    /// The refresh fires unconditionally, even when the value is unchanged:
    /// a redundant call still repaints, which is wasteful but harmless.
    pub fn set_dark_mode(&self, dark: bool) {
        self.state.write().is_dark_mode = dark;
        self.fire_refresh(RefreshReason::ThemeChanged);
    }

    /// Propagate window activation/deactivation to the chrome controls.
    pub fn set_active(&self, active: bool) {
        self.state.write().is_active = active;
        self.fire_refresh(RefreshReason::ActivationChanged);
    }

    fn fire_refresh(&self, reason: RefreshReason) {
        let state = self.snapshot();
        if let Some(callback) = self.refresh.lock().as_mut() {
            callback(ChromeRefresh { reason, state });
        }
    }
}
