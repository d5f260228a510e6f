//! Host window-system boundary.
//!
//! Everything platform-specific sits behind [`WindowHost`]: one concrete
//! implementation per target host, selected at build time, so the classifier
//! and state machine stay platform-free and unit-testable. The `mullion`
//! crate ships a winit-backed implementation; [`HeadlessHost`] in this
//! module stands in for a real window system in tests.

use parking_lot::{Mutex, RwLock};

use crate::decoration::{CornerStyle, DecorationError};
use crate::geometry::{Insets, ScreenRect};

/// Fire-and-forget window state commands.
///
/// The host may reject or defer any of these; the outcome is observed only
/// through a subsequent state-changed notification, never through a return
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStateCommand {
    /// Minimize the window.
    Minimize,
    /// Maximize the window.
    Maximize,
    /// Restore the window from the maximized state.
    Restore,
    /// Close the window.
    Close,
}

/// Abstraction over the host window system for a single window.
///
/// All methods are synchronous and must not block; geometry and state
/// queries run on the input-delivery hot path.
pub trait WindowHost: Send + Sync {
    /// The window's current screen rectangle.
    ///
    /// Queried fresh for every hit test, never cached by callers. Returns
    /// [`ScreenRect::EMPTY`] if the handle is invalid or the query fails.
    fn window_rect(&self) -> ScreenRect;

    /// Set the non-client insets. Called once at setup with
    /// [`Insets::ZERO`]: the full window rectangle becomes client area.
    fn set_non_client_insets(&self, insets: Insets) -> Result<(), DecorationError>;

    /// Issue a window state command. Fire-and-forget.
    fn request_window_state(&self, command: WindowStateCommand);

    /// Authoritative answer for whether the window is maximized.
    fn is_maximized(&self) -> bool;

    /// Apply a compositor corner hint.
    fn apply_corner_style(&self, style: CornerStyle) -> Result<(), DecorationError>;

    /// Recompute the window frame after a non-client style change, without
    /// altering position, size, or z-order.
    fn recalculate_frame(&self) -> Result<(), DecorationError>;

    /// The window's current DPI scale factor.
    fn scale_factor(&self) -> f64;
}

// ============================================================================
// Headless Host
// ============================================================================

/// An in-memory [`WindowHost`] with no real window behind it.
///
/// Geometry and maximize state are plain fields under the test's control,
/// and every command and decoration call is recorded. By default state
/// commands are honored immediately (a `Maximize` command flips the
/// maximize flag); [`with_rejecting_state_commands`] models a host that
/// ignores them, which is how rejected/deferred maximize requests are
/// exercised.
///
/// [`with_rejecting_state_commands`]: HeadlessHost::with_rejecting_state_commands
#[derive(Default)]
pub struct HeadlessHost {
    rect: RwLock<ScreenRect>,
    maximized: RwLock<bool>,
    scale_factor: RwLock<f64>,
    reject_state_commands: bool,
    fail_decorations: bool,
    commands: Mutex<Vec<WindowStateCommand>>,
    insets: RwLock<Option<Insets>>,
    corner_style: RwLock<Option<CornerStyle>>,
    frame_recalculations: RwLock<u32>,
}

impl HeadlessHost {
    /// Create a headless host with an empty rectangle and scale factor 1.
    pub fn new() -> Self {
        Self {
            scale_factor: RwLock::new(1.0),
            ..Self::default()
        }
    }

    /// Set the initial window rectangle.
    pub fn with_rect(self, rect: ScreenRect) -> Self {
        *self.rect.write() = rect;
        self
    }

    /// Make every state command a silent no-op.
    pub fn with_rejecting_state_commands(mut self) -> Self {
        self.reject_state_commands = true;
        self
    }

    /// Make every decoration call fail with a platform error.
    pub fn with_failing_decorations(mut self) -> Self {
        self.fail_decorations = true;
        self
    }

    /// Set the reported scale factor.
    pub fn with_scale_factor(self, scale_factor: f64) -> Self {
        *self.scale_factor.write() = scale_factor;
        self
    }

    /// Move/resize the simulated window.
    pub fn set_rect(&self, rect: ScreenRect) {
        *self.rect.write() = rect;
    }

    /// Force the simulated maximize state, as if changed by the user or
    /// the window manager directly.
    pub fn set_maximized(&self, maximized: bool) {
        *self.maximized.write() = maximized;
    }

    /// Every state command received so far, in order.
    pub fn commands(&self) -> Vec<WindowStateCommand> {
        self.commands.lock().clone()
    }

    /// The last non-client insets applied, if any.
    pub fn non_client_insets(&self) -> Option<Insets> {
        *self.insets.read()
    }

    /// The last corner style applied, if any.
    pub fn corner_style(&self) -> Option<CornerStyle> {
        *self.corner_style.read()
    }

    /// How many frame recalculations have been requested.
    pub fn frame_recalculations(&self) -> u32 {
        *self.frame_recalculations.read()
    }
}

impl WindowHost for HeadlessHost {
    fn window_rect(&self) -> ScreenRect {
        *self.rect.read()
    }

    fn set_non_client_insets(&self, insets: Insets) -> Result<(), DecorationError> {
        if self.fail_decorations {
            return Err(DecorationError::platform_error("headless decoration failure"));
        }
        *self.insets.write() = Some(insets);
        Ok(())
    }

    fn request_window_state(&self, command: WindowStateCommand) {
        self.commands.lock().push(command);
        if self.reject_state_commands {
            return;
        }
        match command {
            WindowStateCommand::Maximize => *self.maximized.write() = true,
            WindowStateCommand::Restore => *self.maximized.write() = false,
            WindowStateCommand::Minimize | WindowStateCommand::Close => {}
        }
    }

    fn is_maximized(&self) -> bool {
        *self.maximized.read()
    }

    fn apply_corner_style(&self, style: CornerStyle) -> Result<(), DecorationError> {
        if self.fail_decorations {
            return Err(DecorationError::platform_error("headless decoration failure"));
        }
        *self.corner_style.write() = Some(style);
        Ok(())
    }

    fn recalculate_frame(&self) -> Result<(), DecorationError> {
        if self.fail_decorations {
            return Err(DecorationError::platform_error("headless decoration failure"));
        }
        *self.frame_recalculations.write() += 1;
        Ok(())
    }

    fn scale_factor(&self) -> f64 {
        *self.scale_factor.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_host_defaults() {
        let host = HeadlessHost::new();
        assert!(host.window_rect().is_empty());
        assert!(!host.is_maximized());
        assert_eq!(host.scale_factor(), 1.0);
    }

    #[test]
    fn test_state_commands_honored() {
        let host = HeadlessHost::new();
        host.request_window_state(WindowStateCommand::Maximize);
        assert!(host.is_maximized());
        host.request_window_state(WindowStateCommand::Restore);
        assert!(!host.is_maximized());
        assert_eq!(
            host.commands(),
            vec![WindowStateCommand::Maximize, WindowStateCommand::Restore]
        );
    }

    #[test]
    fn test_state_commands_rejected() {
        let host = HeadlessHost::new().with_rejecting_state_commands();
        host.request_window_state(WindowStateCommand::Maximize);
        assert!(!host.is_maximized());
        assert_eq!(host.commands(), vec![WindowStateCommand::Maximize]);
    }
}
