//! Per-window chrome context.
//!
//! `FramelessWindow` ties the chrome components to one host window: it owns
//! the configuration, the interactive-region registry, the state
//! controller, and the message interceptor, all bound to a single
//! [`WindowHost`]. It is an explicit per-window object, never a process
//! singleton, so any number of chrome-managed windows can coexist.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mullion::{FramelessWindow, HostMessage, MessageReply, WinitHost};
//!
//! let host = Arc::new(WinitHost::new(window.clone()));
//! let chrome = FramelessWindow::new(host);
//!
//! // Exclude the window-button strip from the draggable caption.
//! let buttons = chrome.register_interactive_rect(button_strip_bounds);
//!
//! // In the platform message handler:
//! match chrome.handle_message(HostMessage::HitTest(point)) {
//!     MessageReply::Zone(zone) => { /* return the zone to the host */ }
//!     _ => {}
//! }
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use mullion_core::config::ChromeConfig;
use mullion_core::decoration;
use mullion_core::geometry::Rect;
use mullion_core::host::WindowHost;
use mullion_core::interceptor::{HostMessage, MessageInterceptor, MessageReply};
use mullion_core::regions::{FixedRegion, InteractiveRegionRegistry, RegionBounds, RegionId};
use mullion_core::state::{ChromeRefresh, ChromeState, ChromeStateController};

/// Chrome management for one frameless window.
pub struct FramelessWindow {
    host: Arc<dyn WindowHost>,
    interceptor: MessageInterceptor,
    regions: InteractiveRegionRegistry,
    state: ChromeStateController,
    /// Keeps fixed regions alive; the registry itself only holds weak refs.
    fixed_regions: Mutex<Vec<(RegionId, Arc<FixedRegion>)>>,
}

impl FramelessWindow {
    /// Attach chrome management to a host window with the default
    /// configuration.
    pub fn new(host: Arc<dyn WindowHost>) -> Self {
        Self::with_config(host, ChromeConfig::new())
    }

    /// Attach chrome management with an explicit configuration.
    ///
    /// Applies the startup decorations (zero non-client insets, the
    /// configured corner style, a frame recalculation) immediately.
    /// Decoration failures are logged and never abort window creation.
    pub fn with_config(host: Arc<dyn WindowHost>, config: ChromeConfig) -> Self {
        decoration::apply_startup_decorations(host.as_ref(), &config);

        Self {
            host,
            interceptor: MessageInterceptor::new(config),
            regions: InteractiveRegionRegistry::new(),
            state: ChromeStateController::new(),
            fixed_regions: Mutex::new(Vec::new()),
        }
    }

    /// The host this chrome is bound to.
    pub fn host(&self) -> &Arc<dyn WindowHost> {
        &self.host
    }

    /// The active chrome configuration.
    pub fn config(&self) -> &ChromeConfig {
        self.interceptor.config()
    }

    // =========================================================================
    // Message Handling
    // =========================================================================

    /// Dispatch one host window-system message.
    ///
    /// See [`MessageInterceptor::dispatch`]; the reply goes straight back
    /// to the host.
    pub fn handle_message(&self, message: HostMessage) -> MessageReply {
        self.interceptor
            .dispatch(self.host.as_ref(), &self.regions, &self.state, message)
    }

    // =========================================================================
    // Interactive Regions
    // =========================================================================

    /// Register a custom control as an interactive region.
    ///
    /// Points inside the control's bounds classify as `Client` instead of
    /// `Caption`, so the control receives its events rather than starting a
    /// window drag. Registration is idempotent; the control's teardown path
    /// should call [`deregister_interactive_region`].
    ///
    /// [`deregister_interactive_region`]: Self::deregister_interactive_region
    pub fn register_interactive_region<R>(&self, region: &Arc<R>) -> RegionId
    where
        R: RegionBounds + 'static,
    {
        self.regions.register(region)
    }

    /// Register a fixed rectangle as an interactive region.
    ///
    /// The chrome keeps the region alive until it is deregistered.
    pub fn register_interactive_rect(&self, rect: Rect) -> RegionId {
        let region = FixedRegion::new(rect);
        let id = self.regions.register(&region);
        self.fixed_regions.lock().push((id, region));
        id
    }

    /// Remove a previously registered interactive region.
    pub fn deregister_interactive_region(&self, id: RegionId) -> bool {
        self.fixed_regions.lock().retain(|(rid, _)| *rid != id);
        self.regions.deregister(id)
    }

    /// The interactive-region registry itself.
    pub fn regions(&self) -> &InteractiveRegionRegistry {
        &self.regions
    }

    // =========================================================================
    // Window State
    // =========================================================================

    /// Install the visual-refresh callback.
    pub fn set_refresh_callback<F>(&self, callback: F)
    where
        F: FnMut(ChromeRefresh) + Send + 'static,
    {
        self.state.set_refresh_callback(callback);
    }

    /// Current chrome state snapshot.
    pub fn state(&self) -> ChromeState {
        self.state.snapshot()
    }

    /// Whether the window is maximized, per the last host confirmation.
    pub fn is_maximized(&self) -> bool {
        self.state.is_maximized()
    }

    /// Whether the dark palette is active.
    pub fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode()
    }

    /// Switch between the light and dark palette.
    pub fn set_dark_mode(&self, dark: bool) {
        self.state.set_dark_mode(dark);
    }

    /// Propagate window activation/deactivation to the chrome.
    pub fn set_active(&self, active: bool) {
        self.state.set_active(active);
    }

    /// Toggle between maximized and restored.
    pub fn request_maximize_toggle(&self) {
        self.state.request_maximize_toggle(self.host.as_ref());
    }

    /// Minimize the window.
    pub fn request_minimize(&self) {
        self.state.request_minimize(self.host.as_ref());
    }

    /// Close the window.
    pub fn request_close(&self) {
        self.state.request_close(self.host.as_ref());
    }

    // =========================================================================
    // Layout Areas
    // =========================================================================

    /// Bounds of the title-bar area, in window-local logical pixels.
    ///
    /// The embedding application places its custom title-bar UI here.
    /// Returns a zero rect while no geometry is available.
    pub fn title_bar_bounds(&self) -> Rect {
        let (width, _, title_height) = self.logical_layout();
        Rect::new(0.0, 0.0, width, title_height)
    }

    /// Bounds of the content area below the title bar, in window-local
    /// logical pixels.
    pub fn content_bounds(&self) -> Rect {
        let (width, height, title_height) = self.logical_layout();
        Rect::new(0.0, title_height, width, height - title_height)
    }

    fn logical_layout(&self) -> (f32, f32, f32) {
        let rect = self.host.window_rect();
        if rect.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let scale = self.host.scale_factor() as f32;
        let width = rect.width() as f32 / scale;
        let height = rect.height() as f32 / scale;
        let title_height = self.config().title_bar_height().min(height);
        (width, height, title_height)
    }
}
