//! Frameless window chrome for winit.
//!
//! Mullion lets an application draw its own title bar and window controls
//! while the window still moves, resizes, and maximizes like a native one.
//! The platform-free logic (hit testing, interactive regions, window
//! state) lives in `mullion-core` and is re-exported here; this crate adds
//! the winit-backed host adapter and the per-window [`FramelessWindow`]
//! context.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mullion::{FramelessWindow, HostMessage, MessageReply, WinitHost};
//!
//! // After creating an undecorated winit window:
//! let host = Arc::new(WinitHost::new(window.clone()));
//! let chrome = FramelessWindow::new(host);
//!
//! // Custom controls in the title bar opt out of window dragging:
//! chrome.register_interactive_rect(button_strip_bounds);
//!
//! // On mouse press, classify and act:
//! if let MessageReply::Zone(zone) = chrome.handle_message(HostMessage::HitTest(point)) {
//!     mullion::perform_zone_action(&window, zone);
//! }
//! ```

pub use mullion_core::*;

mod event_router;
mod frameless_window;
mod interaction;
mod winit_host;

pub use event_router::route_window_event;
pub use frameless_window::FramelessWindow;
pub use interaction::{cursor_for_zone, perform_zone_action, resize_direction};
pub use winit_host::WinitHost;
