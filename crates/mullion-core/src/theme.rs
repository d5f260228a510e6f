//! Chrome palette and control glyphs.
//!
//! The chrome itself does not render anything; these are the shared
//! constants the embedding UI uses when it repaints in response to a
//! refresh callback.

use crate::state::ChromeState;

/// An sRGB color with alpha.
pub type Color = [u8; 4];

/// Window background in light mode (`#FFFFFF`).
pub const LIGHT_BACKGROUND: Color = [0xFF, 0xFF, 0xFF, 0xFF];

/// Window background in dark mode (`#1F1F1F`).
pub const DARK_BACKGROUND: Color = [0x1F, 0x1F, 0x1F, 0xFF];

/// The window background for the given state.
pub fn background(state: &ChromeState) -> Color {
    if state.is_dark_mode {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    }
}

/// Segoe MDL2 Assets glyphs for the standard window controls.
pub mod glyphs {
    use crate::state::ChromeState;

    /// Close ("ChromeClose").
    pub const CLOSE: char = '\u{E8BB}';
    /// Minimize ("ChromeMinimize").
    pub const MINIMIZE: char = '\u{E921}';
    /// Maximize ("ChromeMaximize").
    pub const MAXIMIZE: char = '\u{E922}';
    /// Restore ("ChromeRestore").
    pub const RESTORE: char = '\u{E923}';

    /// The glyph the maximize/restore button should show.
    pub fn maximize_button(state: &ChromeState) -> char {
        if state.is_maximized { RESTORE } else { MAXIMIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_follows_dark_mode() {
        let mut state = ChromeState::default();
        assert_eq!(background(&state), LIGHT_BACKGROUND);
        state.is_dark_mode = true;
        assert_eq!(background(&state), DARK_BACKGROUND);
    }

    #[test]
    fn test_maximize_glyph_swaps() {
        let mut state = ChromeState::default();
        assert_eq!(glyphs::maximize_button(&state), glyphs::MAXIMIZE);
        state.is_maximized = true;
        assert_eq!(glyphs::maximize_button(&state), glyphs::RESTORE);
    }
}
