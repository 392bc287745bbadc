//! Board layout: title, date, tally, three section columns and a weather
//! footer on a fixed landscape canvas.
//!
//! Rendering happens in two steps:
//!
//! 1. [`Board::compose`] measures everything through a
//!    [`FontMetrics`] and produces a flat display list of [`Element`]s, each
//!    tagged with the plane it belongs on. This step holds all the layout
//!    logic and is what the tests inspect.
//! 2. [`Board::render`] draws that list onto a blank [`Canvas`] and turns the
//!    result 270 degrees for the portrait-mounted panel.
//!
//! # Board
//!
//! ```text
//! +---------------------------------------------------------+
//! |                      Family Chores                (accent)
//! |                 Monday, March 03, 2025            (accent)
//! |                Weekly Completed Tasks: 4          (primary)
//! |  Kitchen            Bathroom           Yard        (accent)
//! |  ----------         ----------         ----------  (accent)
//! |  Completed - 2      Completed - 0      Completed - 1
//! |  [] Sweep floor     [] Scrub tub       [] Rake
//! |  [] Take out the                                   (boxes accent,
//! |     recycling                                       text primary)
//! |  -------------------------------------------------  (accent)
//! |                   Partly Cloudy, 54°F              (primary)
//! +---------------------------------------------------------+
//! ```
//!
//! # Capacity
//!
//! At most [`MAX_SECTIONS`] columns and [`MAX_TASKS_PER_SECTION`] tasks per
//! column are drawn; the rest is dropped without error. A task whose wrapped
//! lines would reach the footer separator is dropped along with every later
//! task of its column. Missing columns stay blank.

use chrono::NaiveDate;
use embedded_graphics::prelude::*;

use crate::canvas::Canvas;
use crate::colors::Ink;
use crate::config::{
    CANVAS_SIZE,
    CHECKBOX_GAP,
    CHECKBOX_SIZE,
    COLUMN_INSET,
    COMPLETED_GAP,
    DATE_GAP,
    DEFAULT_TITLE,
    FOOTER_INSET,
    FOOTER_OFFSET,
    LINE_SPACING,
    MAX_SECTIONS,
    MAX_TASKS_PER_SECTION,
    TALLY_GAP,
    TASK_PADDING,
    TASK_TEXT_RESERVE,
    TASKS_GAP,
    TITLE_GAP,
    TOP_MARGIN,
    UNDERLINE_GAP,
    WEATHER_GAP,
};
use crate::error::RenderError;
use crate::fonts::{FontMetrics, TextRole, text_width};
use crate::model::{SectionView, SectionViews};
use crate::tally::Tally;
use crate::text_flow::wrap;
use crate::widgets::{completed_label, date_label, draw_checkbox, draw_rule, draw_text, tally_label};

/// One positioned item of the display list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    /// Text with its top-left corner at `origin`.
    Text {
        text: String,
        origin: Point,
        role: TextRole,
        ink: Ink,
    },
    /// Straight rule between two points.
    Rule { start: Point, end: Point, ink: Ink },
    /// Empty task checkbox with its top-left corner at `origin`.
    Checkbox { origin: Point, ink: Ink },
}

impl Element {
    /// Plane this element is drawn on.
    pub const fn ink(&self) -> Ink {
        match self {
            Self::Text { ink, .. } | Self::Rule { ink, .. } | Self::Checkbox { ink, .. } => *ink,
        }
    }

    /// Text content, for text elements.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Everything one board shows.
#[derive(Clone, Copy, Debug)]
pub struct BoardData<'a> {
    pub tally: &'a Tally,
    pub sections: &'a SectionViews,
    pub date: NaiveDate,
    pub weather: &'a str,
}

/// Board geometry and fixed labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: Size,
    title: String,
}

impl Default for Board {
    fn default() -> Self { Self::new(CANVAS_SIZE) }
}

impl Board {
    /// Board on a landscape canvas of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            title: DEFAULT_TITLE.to_owned(),
        }
    }

    /// Replace the title label.
    #[must_use]
    pub fn with_title(
        mut self,
        title: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self
    }

    /// Landscape composition size (before rotation).
    pub const fn size(&self) -> Size { self.size }

    /// Size of the planes [`Board::render`] returns.
    pub const fn panel_size(&self) -> Size { Size::new(self.size.height, self.size.width) }

    /// Width of one section column.
    pub const fn column_width(&self) -> u32 { self.size.width / MAX_SECTIONS as u32 }

    /// Y of the footer separator.
    pub const fn footer_y(&self) -> i32 { self.size.height as i32 - FOOTER_OFFSET }

    /// Lay out `data` into a display list, top to bottom.
    ///
    /// Fails before measuring anything if `fonts` lacks a font for any role.
    pub fn compose<M>(
        &self,
        data: &BoardData<'_>,
        fonts: &M,
    ) -> Result<Vec<Element>, RenderError>
    where
        M: FontMetrics + ?Sized,
    {
        fonts.check()?;

        let mut out = Vec::new();

        let title_y = TOP_MARGIN;
        out.push(self.centered(fonts, &self.title, TextRole::Title, title_y, Ink::Accent)?);

        let date_y = title_y + line_height(fonts, TextRole::Title)? + TITLE_GAP;
        out.push(self.centered(fonts, date_label(data.date).as_str(), TextRole::Date, date_y, Ink::Accent)?);

        let tally_y = date_y + line_height(fonts, TextRole::Date)? + DATE_GAP;
        let tally = tally_label(data.tally.tasks_completed);
        out.push(self.centered(fonts, tally.as_str(), TextRole::Tally, tally_y, Ink::Primary)?);

        let band_y = tally_y + line_height(fonts, TextRole::Tally)? + TALLY_GAP;
        for (idx, (name, view)) in data.sections.iter().take(MAX_SECTIONS).enumerate() {
            self.compose_column(fonts, idx, name, view, band_y, &mut out)?;
        }

        let footer_y = self.footer_y();
        out.push(Element::Rule {
            start: Point::new(FOOTER_INSET, footer_y),
            end: Point::new(self.size.width as i32 - FOOTER_INSET, footer_y),
            ink: Ink::Accent,
        });
        out.push(self.centered(fonts, data.weather, TextRole::Weather, footer_y + WEATHER_GAP, Ink::Primary)?);

        Ok(out)
    }

    fn compose_column<M>(
        &self,
        fonts: &M,
        idx: usize,
        name: &str,
        view: &SectionView,
        top: i32,
        out: &mut Vec<Element>,
    ) -> Result<(), RenderError>
    where
        M: FontMetrics + ?Sized,
    {
        let col_width = self.column_width();
        let col_left = idx as i32 * col_width as i32;
        let x = col_left + COLUMN_INSET;

        out.push(Element::Text {
            text: name.to_owned(),
            origin: Point::new(x, top),
            role: TextRole::SectionHeader,
            ink: Ink::Accent,
        });

        let header_h = line_height(fonts, TextRole::SectionHeader)?;
        let underline_y = top + header_h + UNDERLINE_GAP;
        out.push(Element::Rule {
            start: Point::new(x, underline_y),
            end: Point::new(col_left + col_width as i32 - COLUMN_INSET, underline_y),
            ink: Ink::Accent,
        });

        let completed_y = top + header_h + COMPLETED_GAP;
        out.push(Element::Text {
            text: completed_label(view.completed_count).as_str().to_owned(),
            origin: Point::new(x, completed_y),
            role: TextRole::Completed,
            ink: Ink::Primary,
        });

        let task_style = fonts.style(TextRole::Task)?;
        let task_h = line_height(fonts, TextRole::Task)?;
        let wrap_width = col_width.saturating_sub(TASK_TEXT_RESERVE);
        let text_x = x + CHECKBOX_SIZE as i32 + CHECKBOX_GAP;
        let footer_y = self.footer_y();

        let mut y = completed_y + line_height(fonts, TextRole::Completed)? + TASKS_GAP;
        for task in view.incomplete.iter().take(MAX_TASKS_PER_SECTION) {
            let lines = wrap(task, |s| text_width(&task_style, s), wrap_width);

            let block_h = lines.len() as i32 * (task_h + LINE_SPACING);
            if y + block_h.max(CHECKBOX_SIZE as i32) > footer_y {
                break;
            }

            out.push(Element::Checkbox {
                origin: Point::new(x, y),
                ink: Ink::Accent,
            });
            for line in lines {
                out.push(Element::Text {
                    text: line,
                    origin: Point::new(text_x, y),
                    role: TextRole::Task,
                    ink: Ink::Primary,
                });
                y += task_h + LINE_SPACING;
            }
            y += TASK_PADDING;
        }
        Ok(())
    }

    fn centered<M>(
        &self,
        fonts: &M,
        text: &str,
        role: TextRole,
        y: i32,
        ink: Ink,
    ) -> Result<Element, RenderError>
    where
        M: FontMetrics + ?Sized,
    {
        let width = fonts.measure(text, role)? as i32;
        Ok(Element::Text {
            text: text.to_owned(),
            origin: Point::new((self.size.width as i32 - width) / 2, y),
            role,
            ink,
        })
    }

    /// Compose, draw and rotate `data` into the two panel planes.
    ///
    /// The returned planes are [`Board::panel_size`]: the landscape board
    /// turned 270 degrees. On error no canvas exists at all.
    pub fn render<M>(
        &self,
        data: &BoardData<'_>,
        fonts: &M,
    ) -> Result<Canvas, RenderError>
    where
        M: FontMetrics + ?Sized,
    {
        let elements = self.compose(data, fonts)?;
        let mut canvas = Canvas::new(self.size);
        draw_elements(&mut canvas, &elements, fonts)?;
        Ok(canvas.rotated_270())
    }
}

/// Draw a display list onto a landscape canvas.
pub fn draw_elements<M>(
    canvas: &mut Canvas,
    elements: &[Element],
    fonts: &M,
) -> Result<(), RenderError>
where
    M: FontMetrics + ?Sized,
{
    for element in elements {
        let plane = canvas.plane_mut(element.ink());
        match element {
            Element::Text { text, origin, role, .. } => draw_text(plane, text, *origin, fonts.style(*role)?),
            Element::Rule { start, end, .. } => draw_rule(plane, *start, *end),
            Element::Checkbox { origin, .. } => draw_checkbox(plane, *origin),
        }
    }
    Ok(())
}

/// Render one board with the default title.
///
/// Same as `Board::new(canvas_size).render(..)`.
pub fn render<M>(
    canvas_size: Size,
    tally: &Tally,
    sections: &SectionViews,
    date: NaiveDate,
    weather: &str,
    fonts: &M,
) -> Result<Canvas, RenderError>
where
    M: FontMetrics + ?Sized,
{
    let data = BoardData {
        tally,
        sections,
        date,
        weather,
    };
    Board::new(canvas_size).render(&data, fonts)
}

fn line_height<M>(
    fonts: &M,
    role: TextRole,
) -> Result<i32, RenderError>
where
    M: FontMetrics + ?Sized,
{
    Ok(fonts.line_height(role)? as i32)
}

// =============================================================================
// Tests
// =============================================================================
