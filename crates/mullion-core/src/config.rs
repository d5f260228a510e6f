//! Chrome configuration.

use crate::decoration::CornerStyle;
use crate::hit_test::DEFAULT_RESIZE_BORDER;

/// Default height of the title-bar area, in logical pixels.
pub const DEFAULT_TITLE_BAR_HEIGHT: f32 = 36.0;

/// Configuration for a frameless window's chrome behavior.
///
/// # Defaults
///
/// - Resize border: 8 logical pixels
/// - Title bar height: 36 logical pixels
/// - Corner style: [`CornerStyle::Round`]
///
/// # Example
///
/// ```
/// use mullion_core::config::ChromeConfig;
/// use mullion_core::decoration::CornerStyle;
///
/// let config = ChromeConfig::new()
///     .with_resize_border(6.0)
///     .with_title_bar_height(40.0)
///     .with_corner_style(CornerStyle::RoundSmall);
/// ```
#[derive(Debug, Clone)]
pub struct ChromeConfig {
    /// Width of the resize-sensitive band at the window edges, in logical
    /// pixels. Clamped to a minimum of 1.
    resize_border: f32,

    /// Height of the title-bar area the embedding application fills with
    /// its own controls, in logical pixels.
    title_bar_height: f32,

    /// Compositor corner hint applied at startup.
    corner_style: CornerStyle,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            resize_border: DEFAULT_RESIZE_BORDER,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            corner_style: CornerStyle::Round,
        }
    }

    /// Set the resize border thickness in logical pixels.
    ///
    /// The border must stay smaller than half the window's minimum
    /// dimension, otherwise opposite border bands overlap and the corner
    /// priority rule decides every contested point.
    pub fn with_resize_border(mut self, border: f32) -> Self {
        self.resize_border = border.max(1.0);
        self
    }

    /// Set the title-bar height in logical pixels.
    pub fn with_title_bar_height(mut self, height: f32) -> Self {
        self.title_bar_height = height.max(0.0);
        self
    }

    /// Set the compositor corner style applied at startup.
    pub fn with_corner_style(mut self, style: CornerStyle) -> Self {
        self.corner_style = style;
        self
    }

    /// Set the resize border thickness at runtime.
    pub fn set_resize_border(&mut self, border: f32) {
        self.resize_border = border.max(1.0);
    }

    /// Set the title-bar height at runtime.
    pub fn set_title_bar_height(&mut self, height: f32) {
        self.title_bar_height = height.max(0.0);
    }

    /// Get the resize border thickness in logical pixels.
    pub fn resize_border(&self) -> f32 {
        self.resize_border
    }

    /// Get the title-bar height in logical pixels.
    pub fn title_bar_height(&self) -> f32 {
        self.title_bar_height
    }

    /// Get the startup corner style.
    pub fn corner_style(&self) -> CornerStyle {
        self.corner_style
    }

    /// The resize border in physical pixels for the given scale factor.
    ///
    /// Scaling policy: the border is specified in logical pixels and
    /// multiplied by the window's current scale factor at classification
    /// time, so the grab band keeps the same apparent width on high-DPI
    /// displays. Rounded to the nearest pixel, never below 1.
    pub fn scaled_border(&self, scale_factor: f64) -> i32 {
        let scaled = (self.resize_border as f64 * scale_factor).round() as i32;
        scaled.max(1)
    }
}
