//! Ink planes and preview colours.
//!
//! The panel is two-tone: every drawable element goes to exactly one of two
//! monochrome planes. Inside a plane `BinaryColor::On` means "ink here" and
//! `BinaryColor::Off` means blank paper. The panel controller composites the
//! planes; the preview colours below are only used for desktop previews.
//!
//! ## Rgb565 preview format
//!
//! The simulator shows previews in Rgb565 (5 bits red, 6 bits green, 5 bits
//! blue), matching `embedded-graphics-simulator` windows.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565, RgbColor};

// =============================================================================
// Planes
// =============================================================================

/// Which plane an element is drawn on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Ink {
    /// Black ink: tally, completed counts, task text, weather.
    Primary,
    /// Accent (red) ink: title, date, headers, rules, checkboxes.
    Accent,
}

/// Pixel value for inked pixels within a plane.
pub const INK: BinaryColor = BinaryColor::On;

/// Pixel value for blank paper within a plane.
pub const PAPER: BinaryColor = BinaryColor::Off;

// =============================================================================
// Preview colours
// =============================================================================

/// Paper white.
pub const PAPER_RGB: Rgb565 = Rgb565::WHITE;

/// Primary ink.
pub const PRIMARY_RGB: Rgb565 = Rgb565::BLACK;

/// Accent ink. Accent wins where both planes are inked, as on the panel.
pub const ACCENT_RGB: Rgb565 = Rgb565::RED;

/// Composite one pixel from both planes into a preview colour.
#[inline]
pub const fn composite(
    primary: BinaryColor,
    accent: BinaryColor,
) -> Rgb565 {
    match (primary, accent) {
        (_, BinaryColor::On) => ACCENT_RGB,
        (BinaryColor::On, BinaryColor::Off) => PRIMARY_RGB,
        (BinaryColor::Off, BinaryColor::Off) => PAPER_RGB,
    }
}
