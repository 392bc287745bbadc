//! Drawing building blocks for the board.
//!
//! All widgets are generic over `DrawTarget<Color = BinaryColor>`, so they
//! draw onto a [`Plane`](crate::canvas::Plane) or any other monochrome target.

mod labels;
mod primitives;

pub use labels::{DATE_LEN, LABEL_LEN, completed_label, date_label, tally_label};
pub use primitives::{draw_checkbox, draw_rule, draw_text};
