//! Board geometry and layout spacing constants.
//!
//! Every position on the board is derived at render time from these values,
//! the canvas size and the font metrics. Nothing else is hard-coded.
//!
//! The landscape composition is 800x480 (Waveshare 7.5" tri-colour panel
//! mounted in portrait); it is rotated by 270 degrees before hand-off, so the
//! planes the display receives are 480x800.

use embedded_graphics::geometry::Size;

// =============================================================================
// Canvas
// =============================================================================

/// Landscape composition width in pixels.
pub const CANVAS_WIDTH: u32 = 800;

/// Landscape composition height in pixels.
pub const CANVAS_HEIGHT: u32 = 480;

/// Default landscape canvas size.
pub const CANVAS_SIZE: Size = Size::new(CANVAS_WIDTH, CANVAS_HEIGHT);

/// Label drawn at the top of the board unless configured otherwise.
pub const DEFAULT_TITLE: &str = "Family Chores";

/// `chrono` format of the date line, e.g. "Monday, March 03, 2025".
pub const DATE_FORMAT: &str = "%A, %B %d, %Y";

// =============================================================================
// Capacity
// =============================================================================

/// Number of section columns. Sections beyond this are not drawn.
pub const MAX_SECTIONS: usize = 3;

/// Incomplete tasks drawn per column. Remaining tasks are not drawn.
pub const MAX_TASKS_PER_SECTION: usize = 5;

// =============================================================================
// Header block (title, date, tally)
// =============================================================================

/// Distance from the top edge to the title.
pub const TOP_MARGIN: i32 = 10;

/// Gap between the title and the date line.
pub const TITLE_GAP: i32 = 10;

/// Gap between the date line and the tally line.
pub const DATE_GAP: i32 = 20;

/// Gap between the tally line and the section band.
pub const TALLY_GAP: i32 = 20;

// =============================================================================
// Section columns
// =============================================================================

/// Horizontal inset of column content from the column's left edge.
pub const COLUMN_INSET: i32 = 10;

/// Gap between the bottom of a section header and its underline.
pub const UNDERLINE_GAP: i32 = 2;

/// Stroke width of every rule on the board.
pub const RULE_STROKE: u32 = 2;

/// Gap between the bottom of a section header and the "Completed" line.
pub const COMPLETED_GAP: i32 = 10;

/// Gap between the "Completed" line and the first task.
pub const TASKS_GAP: i32 = 10;

/// Horizontal room reserved around wrapped task text (checkbox and insets).
pub const TASK_TEXT_RESERVE: u32 = 40;

/// Checkbox glyph edge length.
pub const CHECKBOX_SIZE: u32 = 12;

/// Gap between the checkbox and the task text.
pub const CHECKBOX_GAP: i32 = 5;

/// Vertical spacing after each wrapped line of a task.
pub const LINE_SPACING: i32 = 5;

/// Extra vertical padding after each task.
pub const TASK_PADDING: i32 = 5;

// =============================================================================
// Footer
// =============================================================================

/// Distance of the footer separator from the bottom edge.
pub const FOOTER_OFFSET: i32 = 70;

/// Horizontal inset of the footer separator.
pub const FOOTER_INSET: i32 = 10;

/// Gap between the footer separator and the weather line.
pub const WEATHER_GAP: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fit_canvas() {
        let col_width = CANVAS_WIDTH / MAX_SECTIONS as u32;
        assert!(col_width > TASK_TEXT_RESERVE);
        assert!(COLUMN_INSET as u32 + CHECKBOX_SIZE + CHECKBOX_GAP as u32 <= TASK_TEXT_RESERVE);
    }

    #[test]
    fn test_footer_below_header_block() {
        assert!(FOOTER_OFFSET < CANVAS_HEIGHT as i32 / 2);
        assert!(WEATHER_GAP < FOOTER_OFFSET);
    }
}
