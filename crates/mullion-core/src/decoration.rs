//! Host-compositor decoration hints.
//!
//! After a window drops its native frame, a couple of decorator effects
//! still come from the host compositor: corner rounding and the frame
//! recalculation that must follow any non-client style change. All of it is
//! fire-and-forget: a compositor that cannot apply a hint leaves the window
//! with its default appearance, which is never an error worth surfacing to
//! the embedding application.

use std::fmt;

use crate::config::ChromeConfig;
use crate::geometry::Insets;
use crate::host::WindowHost;

// ============================================================================
// Corner Style
// ============================================================================

/// Compositor corner rendering hint.
///
/// Mirrors the DWM window corner preference on Windows; other compositors
/// map these as closely as they can or report the hint as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerStyle {
    /// Let the compositor decide.
    #[default]
    Default,
    /// Never round the corners.
    Square,
    /// Round the corners.
    Round,
    /// Round the corners with a small radius.
    RoundSmall,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for decoration operations.
///
/// Decoration failures are non-fatal by contract; callers log and continue.
#[derive(Debug, Clone)]
pub struct DecorationError {
    kind: DecorationErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecorationErrorKind {
    /// The effect is not supported on this platform or compositor.
    Unsupported,
    /// Failed to access the native window handle.
    HandleAccess,
    /// Platform-specific operation failed.
    PlatformError,
}

impl DecorationError {
    /// An effect the current platform or compositor cannot apply.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self {
            kind: DecorationErrorKind::Unsupported,
            message: message.into(),
        }
    }

    /// The native window handle could not be obtained.
    pub fn handle_access(message: impl Into<String>) -> Self {
        Self {
            kind: DecorationErrorKind::HandleAccess,
            message: message.into(),
        }
    }

    /// A platform call failed.
    pub fn platform_error(message: impl Into<String>) -> Self {
        Self {
            kind: DecorationErrorKind::PlatformError,
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the effect is not supported.
    pub fn is_unsupported(&self) -> bool {
        self.kind == DecorationErrorKind::Unsupported
    }
}

impl fmt::Display for DecorationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DecorationErrorKind::Unsupported => write!(f, "unsupported: {}", self.message),
            DecorationErrorKind::HandleAccess => {
                write!(f, "failed to access window handle: {}", self.message)
            }
            DecorationErrorKind::PlatformError => write!(f, "platform error: {}", self.message),
        }
    }
}

impl std::error::Error for DecorationError {}

// ============================================================================
// Decoration Adapter
// ============================================================================

/// Request rounded corners from the host compositor.
///
/// Failure falls back to the host's default corner appearance.
pub fn apply_rounded_corners(host: &dyn WindowHost, style: CornerStyle) {
    if let Err(err) = host.apply_corner_style(style) {
        log_decoration_failure("corner style", &err);
    }
}

/// Ask the host to recompute the window frame after a non-client style
/// change, without altering position, size, or z-order.
pub fn force_frame_recalculation(host: &dyn WindowHost) {
    if let Err(err) = host.recalculate_frame() {
        log_decoration_failure("frame recalculation", &err);
    }
}

/// Apply the one-time decorations for a freshly created frameless window:
/// zero non-client insets (the application draws the full chrome), the
/// configured corner style, and a frame recalculation to make the style
/// changes take effect.
///
/// Must not abort window creation; every failure is logged and absorbed.
pub fn apply_startup_decorations(host: &dyn WindowHost, config: &ChromeConfig) {
    if let Err(err) = host.set_non_client_insets(Insets::ZERO) {
        log_decoration_failure("non-client insets", &err);
    }
    apply_rounded_corners(host, config.corner_style());
    force_frame_recalculation(host);
}

fn log_decoration_failure(effect: &str, err: &DecorationError) {
    if err.is_unsupported() {
        tracing::debug!(effect, %err, "decoration effect unavailable");
    } else {
        tracing::warn!(effect, %err, "failed to apply decoration effect");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_startup_decorations_applied() {
        let host = HeadlessHost::new();
        apply_startup_decorations(&host, &ChromeConfig::new());

        assert_eq!(host.non_client_insets(), Some(Insets::ZERO));
        assert_eq!(host.corner_style(), Some(CornerStyle::Round));
        assert_eq!(host.frame_recalculations(), 1);
    }

    #[test]
    fn test_decoration_failure_is_absorbed() {
        init_logging();
        let host = HeadlessHost::new().with_failing_decorations();
        // Must not panic; the window keeps its default appearance.
        apply_startup_decorations(&host, &ChromeConfig::new());
        apply_rounded_corners(&host, CornerStyle::RoundSmall);
        force_frame_recalculation(&host);

        assert_eq!(host.corner_style(), None);
        assert_eq!(host.frame_recalculations(), 0);
    }

    #[test]
    fn test_error_display() {
        let err = DecorationError::unsupported("no compositor hint");
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "unsupported: no compositor hint");

        let err = DecorationError::platform_error("DwmSetWindowAttribute failed");
        assert!(!err.is_unsupported());
    }
}
