//! Routing of winit window events into the chrome.
//!
//! winit delivers size and focus changes as regular window events rather
//! than interceptable platform messages, so applications call
//! [`route_window_event`] from their event handler to keep the chrome
//! state reconciled.
//!
//! # Example
//!
//! ```ignore
//! use mullion::route_window_event;
//!
//! fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
//!     route_window_event(&self.chrome, &event);
//!     // ... application handling ...
//! }
//! ```

use winit::event::WindowEvent;

use mullion_core::interceptor::HostMessage;

use crate::frameless_window::FramelessWindow;

/// Route a winit window event to the chrome.
///
/// Handles:
///
/// - `Resized`: reconciles the maximize state against the host
/// - `Focused`: propagates activation to the chrome controls
///
/// Always returns `false` so the application's own processing (surface
/// resize, repaint scheduling) still runs.
pub fn route_window_event(chrome: &FramelessWindow, event: &WindowEvent) -> bool {
    match event {
        WindowEvent::Resized(_) => {
            chrome.handle_message(HostMessage::StateChanged);
            false
        }
        WindowEvent::Focused(focused) => {
            chrome.set_active(*focused);
            false
        }
        _ => false,
    }
}
