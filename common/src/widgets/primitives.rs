//! Low-level drawing primitives shared by the board layout.
//!
//! All primitives draw ink onto a single plane; picking the plane is the
//! caller's job.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, Rectangle};
use embedded_graphics::text::Text;

use crate::config::CHECKBOX_SIZE;
use crate::styles::{CHECKBOX_STYLE, RULE_STYLE, TOP_LEFT};

const CHECKBOX: Size = Size::new(CHECKBOX_SIZE, CHECKBOX_SIZE);

/// Draw `text` with its top-left corner at `origin`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    origin: Point,
    style: MonoTextStyle<'_, BinaryColor>,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_text_style(text, origin, style, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Draw a horizontal or vertical rule between two points.
pub fn draw_rule<D>(
    display: &mut D,
    start: Point,
    end: Point,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(start, end).into_styled(RULE_STYLE).draw(display).ok();
}

/// Draw an empty checkbox with its top-left corner at `origin`.
pub fn draw_checkbox<D>(
    display: &mut D,
    origin: Point,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    Rectangle::new(origin, CHECKBOX)
        .into_styled(CHECKBOX_STYLE)
        .draw(display)
        .ok();
}
