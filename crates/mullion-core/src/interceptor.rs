//! Top-level dispatch of host window-system messages.
//!
//! The interceptor sits between the host's message delivery and the chrome
//! components. Exactly three message kinds are handled; everything else is
//! declared unhandled and returns to the host's default processing. All
//! dispatch is synchronous and non-blocking: hit-test queries arrive inside
//! the host's input-event delivery, where latency shows up as input lag.

use crate::config::ChromeConfig;
use crate::geometry::{Point, ScreenPoint};
use crate::hit_test::{self, HitZone};
use crate::host::WindowHost;
use crate::regions::InteractiveRegionRegistry;
use crate::state::ChromeStateController;

/// A host window-system message, reduced to the kinds the chrome cares
/// about.
///
/// The platform adapter translates raw host messages into this enum
/// (on Windows: `WM_NCCALCSIZE`, `WM_NCHITTEST`, `WM_SIZE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMessage {
    /// The host asks how much of the window rectangle is client area.
    NonClientSizeQuery,
    /// The host asks what a screen point means.
    HitTest(ScreenPoint),
    /// The host reports that the window's size or state changed.
    StateChanged,
    /// Anything else.
    Other,
}

/// The interceptor's answer, returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageReply {
    /// Use the full window rectangle as client area (zero insets); the
    /// application draws the chrome itself.
    FullClientArea,
    /// The semantic zone of the queried point.
    Zone(HitZone),
    /// The message was consumed; no value to report.
    Handled,
    /// Not ours; continue with default processing.
    Unhandled,
}

/// Routes host messages to the chrome components.
pub struct MessageInterceptor {
    config: ChromeConfig,
}

impl MessageInterceptor {
    /// Create an interceptor with the given chrome configuration.
    pub fn new(config: ChromeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    /// Mutable access to the configuration, for runtime adjustments.
    pub fn config_mut(&mut self) -> &mut ChromeConfig {
        &mut self.config
    }

    /// Dispatch one host message.
    ///
    /// Geometry is queried fresh from the host for every hit test; the
    /// window can move or resize between messages, so nothing is cached
    /// across calls.
    pub fn dispatch(
        &self,
        host: &dyn WindowHost,
        regions: &InteractiveRegionRegistry,
        state: &ChromeStateController,
        message: HostMessage,
    ) -> MessageReply {
        match message {
            HostMessage::NonClientSizeQuery => MessageReply::FullClientArea,
            HostMessage::HitTest(point) => {
                let rect = host.window_rect();
                let scale = host.scale_factor();
                let border = self.config.scaled_border(scale);
                // Regions are registered in logical coordinates (the same
                // space as the title-bar/content bounds handed to the
                // embedding application); the local offset is physical.
                let zone = hit_test::classify(point, rect, border, |local| {
                    regions.contains(Point::new(
                        local.x / scale as f32,
                        local.y / scale as f32,
                    ))
                });
                tracing::trace!(?point, ?zone, "hit test");
                MessageReply::Zone(zone)
            }
            HostMessage::StateChanged => {
                state.on_host_state_changed(host);
                MessageReply::Handled
            }
            HostMessage::Other => MessageReply::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, ScreenRect};
    use crate::host::HeadlessHost;
    use crate::regions::FixedRegion;

    fn fixture() -> (
        MessageInterceptor,
        HeadlessHost,
        InteractiveRegionRegistry,
        ChromeStateController,
    ) {
        (
            MessageInterceptor::new(ChromeConfig::new()),
            HeadlessHost::new().with_rect(ScreenRect::new(0, 0, 500, 400)),
            InteractiveRegionRegistry::new(),
            ChromeStateController::new(),
        )
    }

    #[test]
    fn test_non_client_size_query() {
        let (interceptor, host, regions, state) = fixture();
        let reply = interceptor.dispatch(&host, &regions, &state, HostMessage::NonClientSizeQuery);
        assert_eq!(reply, MessageReply::FullClientArea);
    }

    #[test]
    fn test_hit_test_dispatch() {
        let (interceptor, host, regions, state) = fixture();
        let region = FixedRegion::new(Rect::new(200.0, 180.0, 100.0, 40.0));
        regions.register(&region);

        let hit = |x, y| {
            interceptor.dispatch(
                &host,
                &regions,
                &state,
                HostMessage::HitTest(ScreenPoint::new(x, y)),
            )
        };

        assert_eq!(hit(2, 2), MessageReply::Zone(HitZone::TopLeft));
        assert_eq!(hit(250, 2), MessageReply::Zone(HitZone::Top));
        assert_eq!(hit(250, 200), MessageReply::Zone(HitZone::Client));
        assert_eq!(hit(100, 100), MessageReply::Zone(HitZone::Caption));
    }

    #[test]
    fn test_hit_test_uses_fresh_geometry() {
        let (interceptor, host, regions, state) = fixture();
        let query = HostMessage::HitTest(ScreenPoint::new(602, 200));

        // Beyond the right edge and clear of every band: caption fallback.
        assert_eq!(
            interceptor.dispatch(&host, &regions, &state, query),
            MessageReply::Zone(HitZone::Caption)
        );

        // The window moves; the same point now sits in its left band.
        host.set_rect(ScreenRect::new(600, 0, 1100, 400));
        assert_eq!(
            interceptor.dispatch(&host, &regions, &state, query),
            MessageReply::Zone(HitZone::Left)
        );
    }

    #[test]
    fn test_hit_test_scales_border() {
        let (interceptor, _, regions, state) = fixture();
        let host = HeadlessHost::new()
            .with_rect(ScreenRect::new(0, 0, 1000, 800))
            .with_scale_factor(2.0);

        // 8 logical px at 2x scale: 12 physical px is still in the band.
        let reply = interceptor.dispatch(
            &host,
            &regions,
            &state,
            HostMessage::HitTest(ScreenPoint::new(500, 12)),
        );
        assert_eq!(reply, MessageReply::Zone(HitZone::Top));

        let reply = interceptor.dispatch(
            &host,
            &regions,
            &state,
            HostMessage::HitTest(ScreenPoint::new(500, 16)),
        );
        assert_eq!(reply, MessageReply::Zone(HitZone::Caption));
    }

    #[test]
    fn test_region_exclusion_holds_at_high_dpi() {
        // A control registered from the logical title-bar bounds must keep
        // excluding dragging when the hit test arrives in physical pixels.
        let (interceptor, _, regions, state) = fixture();
        let host = HeadlessHost::new()
            .with_rect(ScreenRect::new(0, 0, 1000, 800))
            .with_scale_factor(2.0);
        let control = FixedRegion::new(Rect::new(400.0, 0.0, 100.0, 36.0));
        regions.register(&control);

        // Physical (900, 40) is logical (450, 20), inside the control.
        let reply = interceptor.dispatch(
            &host,
            &regions,
            &state,
            HostMessage::HitTest(ScreenPoint::new(900, 40)),
        );
        assert_eq!(reply, MessageReply::Zone(HitZone::Client));

        // Just past the control's right edge (logical 500+): back to caption.
        let reply = interceptor.dispatch(
            &host,
            &regions,
            &state,
            HostMessage::HitTest(ScreenPoint::new(1004, 40)),
        );
        assert_eq!(reply, MessageReply::Zone(HitZone::Caption));
    }

    #[test]
    fn test_hit_test_on_dead_window_is_transparent() {
        let (interceptor, _, regions, state) = fixture();
        let host = HeadlessHost::new();
        let reply = interceptor.dispatch(
            &host,
            &regions,
            &state,
            HostMessage::HitTest(ScreenPoint::new(250, 200)),
        );
        assert_eq!(reply, MessageReply::Zone(HitZone::Transparent));
    }

    #[test]
    fn test_state_changed_reconciles_controller() {
        let (interceptor, host, regions, state) = fixture();
        host.set_maximized(true);

        let reply = interceptor.dispatch(&host, &regions, &state, HostMessage::StateChanged);
        assert_eq!(reply, MessageReply::Handled);
        assert!(state.is_maximized());
    }

    #[test]
    fn test_other_messages_pass_through() {
        let (interceptor, host, regions, state) = fixture();
        let reply = interceptor.dispatch(&host, &regions, &state, HostMessage::Other);
        assert_eq!(reply, MessageReply::Unhandled);
    }
}
