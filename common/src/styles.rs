//! Pre-computed drawing styles.
//!
//! Text and primitive styles are `const` so nothing is rebuilt per element.
//! Fonts are not fixed here; they come from the [`FontMetrics`](crate::fonts::FontMetrics)
//! in use, so only the placement style of text is shared.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};

use crate::colors::INK;
use crate::config::RULE_STROKE;

/// Text anchored at its top-left corner. All layout positions are top-left.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Stroke for underlines and the footer separator.
pub const RULE_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(INK, RULE_STROKE);

/// Outline-only checkbox, stroke kept inside the box bounds.
pub const CHECKBOX_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyleBuilder::new()
    .stroke_color(INK)
    .stroke_width(RULE_STROKE)
    .stroke_alignment(StrokeAlignment::Inside)
    .build();
