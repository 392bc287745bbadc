//! Text roles, font lookup and the font metrics capability.
//!
//! Every piece of text on the board has a [`TextRole`]. A [`FontMetrics`]
//! implementation resolves roles to compiled-in monospace fonts; layout only
//! ever measures and draws through it.
//!
//! Fonts are chosen by name so configuration can swap them:
//!
//! | Name | Font |
//! |------|------|
//! | `profont-7` .. `profont-24` | ProFont at that point size |
//! | `6x10`, `6x13`, `7x13`, `8x13`, `9x15`, `9x18`, `10x20` | embedded-graphics ISO-8859-1 fonts |
//! | `6x13-bold`, `7x13-bold`, `8x13-bold`, `9x15-bold`, `9x18-bold` | bold variants |
//! | `6x13-italic`, `7x13-italic`, `8x13-italic` | italic variants |
//!
//! The ISO-8859-1 fonts cover `°` and accented Latin letters; ProFont sticks
//! to ASCII. Unknown glyphs render as `?`.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, iso_8859_1};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Baseline;
use embedded_graphics::text::renderer::TextRenderer;
use profont::{
    PROFONT_7_POINT,
    PROFONT_9_POINT,
    PROFONT_10_POINT,
    PROFONT_12_POINT,
    PROFONT_14_POINT,
    PROFONT_18_POINT,
    PROFONT_24_POINT,
};

use crate::colors::INK;
use crate::error::RenderError;

/// What a piece of text is, which decides its font.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum TextRole {
    /// Board title.
    Title,
    /// Date line under the title.
    Date,
    /// Weekly tally line.
    Tally,
    /// Section column header.
    SectionHeader,
    /// Emphasised "Completed - N" line.
    Completed,
    /// Wrapped task text.
    Task,
    /// Weather footer.
    Weather,
}

impl TextRole {
    /// All roles, in board order.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Date,
        Self::Tally,
        Self::SectionHeader,
        Self::Completed,
        Self::Task,
        Self::Weather,
    ];

    /// Configuration key for this role.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Tally => "tally",
            Self::SectionHeader => "section_header",
            Self::Completed => "completed",
            Self::Task => "task",
            Self::Weather => "weather",
        }
    }

    /// Role for a configuration key.
    pub fn from_key(key: &str) -> Option<Self> { Self::ALL.into_iter().find(|role| role.key() == key) }

    const fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Date => 1,
            Self::Tally => 2,
            Self::SectionHeader => 3,
            Self::Completed => 4,
            Self::Task => 5,
            Self::Weather => 6,
        }
    }
}

/// Compiled-in font by name, see the module table.
pub fn font_by_name(name: &str) -> Option<&'static MonoFont<'static>> {
    let font = match name.trim().to_ascii_lowercase().as_str() {
        "profont-7" => &PROFONT_7_POINT,
        "profont-9" => &PROFONT_9_POINT,
        "profont-10" => &PROFONT_10_POINT,
        "profont-12" => &PROFONT_12_POINT,
        "profont-14" => &PROFONT_14_POINT,
        "profont-18" => &PROFONT_18_POINT,
        "profont-24" => &PROFONT_24_POINT,
        "6x10" => &iso_8859_1::FONT_6X10,
        "6x13" => &iso_8859_1::FONT_6X13,
        "6x13-bold" => &iso_8859_1::FONT_6X13_BOLD,
        "6x13-italic" => &iso_8859_1::FONT_6X13_ITALIC,
        "7x13" => &iso_8859_1::FONT_7X13,
        "7x13-bold" => &iso_8859_1::FONT_7X13_BOLD,
        "7x13-italic" => &iso_8859_1::FONT_7X13_ITALIC,
        "8x13" => &iso_8859_1::FONT_8X13,
        "8x13-bold" => &iso_8859_1::FONT_8X13_BOLD,
        "8x13-italic" => &iso_8859_1::FONT_8X13_ITALIC,
        "9x15" => &iso_8859_1::FONT_9X15,
        "9x15-bold" => &iso_8859_1::FONT_9X15_BOLD,
        "9x18" => &iso_8859_1::FONT_9X18,
        "9x18-bold" => &iso_8859_1::FONT_9X18_BOLD,
        "10x20" => &iso_8859_1::FONT_10X20,
        _ => return None,
    };
    Some(font)
}

/// Advance width of `text` drawn in `style`.
pub fn text_width(
    style: &MonoTextStyle<'_, BinaryColor>,
    text: &str,
) -> u32 {
    let metrics = style.measure_string(text, Point::zero(), Baseline::Top);
    metrics.next_position.x.max(0) as u32
}

/// Measuring and drawing capability for board text.
///
/// Layout never touches fonts directly; a missing font for any role is a
/// [`RenderError::FontUnavailable`] and stops the render before anything is
/// drawn.
pub trait FontMetrics {
    /// Font for `role`, if one is available.
    fn font(
        &self,
        role: TextRole,
    ) -> Option<&'static MonoFont<'static>>;

    /// Ink style for `role`.
    fn style(
        &self,
        role: TextRole,
    ) -> Result<MonoTextStyle<'static, BinaryColor>, RenderError> {
        self.font(role)
            .map(|font| MonoTextStyle::new(font, INK))
            .ok_or(RenderError::FontUnavailable(role))
    }

    /// Advance width of `text` in pixels.
    fn measure(
        &self,
        text: &str,
        role: TextRole,
    ) -> Result<u32, RenderError> {
        Ok(text_width(&self.style(role)?, text))
    }

    /// Height of one line of `role` text in pixels.
    fn line_height(
        &self,
        role: TextRole,
    ) -> Result<u32, RenderError> {
        Ok(self.style(role)?.line_height())
    }

    /// Fail with the first role that has no font.
    fn check(&self) -> Result<(), RenderError> {
        TextRole::ALL
            .into_iter()
            .find(|role| self.font(*role).is_none())
            .map_or(Ok(()), |role| Err(RenderError::FontUnavailable(role)))
    }
}

/// Role to font table.
#[derive(Clone, Copy)]
pub struct FontSet {
    fonts: [&'static MonoFont<'static>; TextRole::ALL.len()],
}

impl FontSet {
    /// Table with `role` changed to the font called `name`.
    pub fn with_font(
        mut self,
        role: TextRole,
        name: &str,
    ) -> Result<Self, RenderError> {
        let font = font_by_name(name).ok_or_else(|| RenderError::UnknownFont(name.to_owned()))?;
        self.fonts[role.index()] = font;
        Ok(self)
    }

    /// Default table with each `(role key, font name)` override applied.
    pub fn from_overrides<'a, I>(overrides: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        overrides.into_iter().try_fold(Self::default(), |set, (key, name)| {
            let role = TextRole::from_key(key).ok_or_else(|| RenderError::UnknownTextRole(key.to_owned()))?;
            set.with_font(role, name)
        })
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            fonts: [
                &PROFONT_24_POINT,
                &PROFONT_18_POINT,
                &PROFONT_14_POINT,
                &PROFONT_18_POINT,
                &iso_8859_1::FONT_8X13_ITALIC,
                &iso_8859_1::FONT_9X15,
                &iso_8859_1::FONT_10X20,
            ],
        }
    }
}

impl FontMetrics for FontSet {
    fn font(
        &self,
        role: TextRole,
    ) -> Option<&'static MonoFont<'static>> {
        Some(self.fonts[role.index()])
    }
}

impl core::fmt::Debug for FontSet {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        let mut map = f.debug_map();
        for role in TextRole::ALL {
            let size = self.fonts[role.index()].character_size;
            map.entry(&role, &(size.width, size.height));
        }
        map.finish()
    }
}
