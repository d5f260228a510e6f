//! Winit-backed implementation of the host window-system boundary.
//!
//! `WinitHost` adapts a `winit::window::Window` to the
//! [`WindowHost`] trait. Geometry and maximize state map directly onto
//! winit queries; decoration hints go through DWM on Windows and report
//! themselves unsupported elsewhere, which the decoration adapter logs and
//! absorbs.
//!
//! # Closing
//!
//! winit has no "close this window" call; windows close by being dropped
//! from the application's event loop. A [`WindowStateCommand::Close`] is
//! therefore routed to a handler installed with
//! [`WinitHost::set_close_handler`], which typically asks the event loop to
//! drop the window.

use std::sync::Arc;

use parking_lot::Mutex;
use winit::window::Window;

use mullion_core::decoration::{CornerStyle, DecorationError};
use mullion_core::geometry::{Insets, ScreenRect};
use mullion_core::host::{WindowHost, WindowStateCommand};

/// A [`WindowHost`] over a winit window.
pub struct WinitHost {
    window: Arc<Window>,
    close_handler: Mutex<Option<Box<dyn Fn() + Send>>>,
}

impl WinitHost {
    /// Wrap a winit window.
    ///
    /// On Windows this also re-adds the thick-frame and caption styles the
    /// frameless window lost, so native resize and maximize animations keep
    /// working; a following frame recalculation (part of the startup
    /// decorations) makes the change take effect.
    pub fn new(window: Arc<Window>) -> Self {
        #[cfg(target_os = "windows")]
        if let Err(err) = windows_impl::install_frame_styles(&window) {
            tracing::warn!(%err, "failed to install frame styles");
        }

        Self {
            window,
            close_handler: Mutex::new(None),
        }
    }

    /// Install the handler invoked for a close command.
    pub fn set_close_handler<F>(&self, handler: F)
    where
        F: Fn() + Send + 'static,
    {
        *self.close_handler.lock() = Some(Box::new(handler));
    }

    /// The wrapped winit window.
    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl WindowHost for WinitHost {
    fn window_rect(&self) -> ScreenRect {
        // The position query fails on handles winit no longer considers
        // alive (and on platforms without global coordinates); the empty
        // sentinel defers hit testing to the host.
        match self.window.outer_position() {
            Ok(position) => {
                let size = self.window.outer_size();
                ScreenRect::from_origin_size(
                    position.x,
                    position.y,
                    size.width as i32,
                    size.height as i32,
                )
            }
            Err(_) => ScreenRect::EMPTY,
        }
    }

    fn set_non_client_insets(&self, insets: Insets) -> Result<(), DecorationError> {
        // Zero insets means "the application draws the full chrome", which
        // for winit is simply an undecorated window.
        if !insets.is_zero() {
            return Err(DecorationError::unsupported(
                "winit windows only support zero non-client insets",
            ));
        }
        self.window.set_decorations(false);
        Ok(())
    }

    fn request_window_state(&self, command: WindowStateCommand) {
        match command {
            WindowStateCommand::Minimize => self.window.set_minimized(true),
            WindowStateCommand::Maximize => self.window.set_maximized(true),
            WindowStateCommand::Restore => self.window.set_maximized(false),
            WindowStateCommand::Close => {
                if let Some(handler) = self.close_handler.lock().as_ref() {
                    handler();
                } else {
                    tracing::warn!("close requested but no close handler is installed");
                }
            }
        }
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn apply_corner_style(&self, style: CornerStyle) -> Result<(), DecorationError> {
        #[cfg(target_os = "windows")]
        {
            windows_impl::apply_corner_style(&self.window, style)
        }

        #[cfg(not(target_os = "windows"))]
        {
            let _ = style;
            Err(DecorationError::unsupported(
                "compositor corner hints are only available on Windows",
            ))
        }
    }

    fn recalculate_frame(&self) -> Result<(), DecorationError> {
        #[cfg(target_os = "windows")]
        {
            windows_impl::recalculate_frame(&self.window)
        }

        #[cfg(not(target_os = "windows"))]
        {
            // No non-client frame to recompute outside Windows.
            Ok(())
        }
    }

    fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }
}

// ============================================================================
// Windows Implementation
// ============================================================================

#[cfg(target_os = "windows")]
mod windows_impl {
    use super::*;
    use raw_window_handle::{HasWindowHandle, RawWindowHandle};
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{
        DWM_WINDOW_CORNER_PREFERENCE, DWMWA_WINDOW_CORNER_PREFERENCE, DWMWCP_DEFAULT,
        DWMWCP_DONOTROUND, DWMWCP_ROUND, DWMWCP_ROUNDSMALL, DwmSetWindowAttribute,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        GWL_STYLE, GetWindowLongW, SWP_FRAMECHANGED, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
        SetWindowLongW, SetWindowPos, WS_CAPTION, WS_THICKFRAME,
    };

    fn get_hwnd(window: &Window) -> Result<HWND, DecorationError> {
        let handle = window
            .window_handle()
            .map_err(|e| DecorationError::handle_access(e.to_string()))?;

        match handle.as_raw() {
            RawWindowHandle::Win32(handle) => Ok(HWND(handle.hwnd.get() as *mut std::ffi::c_void)),
            _ => Err(DecorationError::handle_access(
                "expected Win32 window handle",
            )),
        }
    }

    pub fn apply_corner_style(
        window: &Window,
        style: CornerStyle,
    ) -> Result<(), DecorationError> {
        let hwnd = get_hwnd(window)?;

        let preference: DWM_WINDOW_CORNER_PREFERENCE = match style {
            CornerStyle::Default => DWMWCP_DEFAULT,
            CornerStyle::Square => DWMWCP_DONOTROUND,
            CornerStyle::Round => DWMWCP_ROUND,
            CornerStyle::RoundSmall => DWMWCP_ROUNDSMALL,
        };

        unsafe {
            DwmSetWindowAttribute(
                hwnd,
                DWMWA_WINDOW_CORNER_PREFERENCE,
                &preference as *const _ as *const std::ffi::c_void,
                std::mem::size_of::<DWM_WINDOW_CORNER_PREFERENCE>() as u32,
            )
            .map_err(|e| DecorationError::platform_error(e.to_string()))?;
        }

        Ok(())
    }

    pub fn recalculate_frame(window: &Window) -> Result<(), DecorationError> {
        let hwnd = get_hwnd(window)?;

        unsafe {
            SetWindowPos(
                hwnd,
                HWND::default(),
                0,
                0,
                0,
                0,
                SWP_NOZORDER | SWP_NOMOVE | SWP_NOSIZE | SWP_FRAMECHANGED,
            )
            .map_err(|e| DecorationError::platform_error(e.to_string()))?;
        }

        Ok(())
    }

    /// Re-add `WS_THICKFRAME | WS_CAPTION` to an undecorated window so the
    /// system still animates resize and maximize.
    pub fn install_frame_styles(window: &Window) -> Result<(), DecorationError> {
        let hwnd = get_hwnd(window)?;

        unsafe {
            let style = GetWindowLongW(hwnd, GWL_STYLE);
            SetWindowLongW(
                hwnd,
                GWL_STYLE,
                style | (WS_THICKFRAME.0 | WS_CAPTION.0) as i32,
            );
        }

        Ok(())
    }
}
