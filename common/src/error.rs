//! Render failures.

use crate::fonts::TextRole;

/// Why a board could not be rendered.
///
/// Rendering is all-or-nothing: when any of these is returned no plane has
/// been produced, so nothing partial can reach the display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// No font is available for a text role.
    #[error("no font available for {0:?} text")]
    FontUnavailable(TextRole),

    /// A configured font name does not match any compiled-in font.
    #[error("unknown font `{0}`")]
    UnknownFont(String),

    /// A font override names a text role that does not exist.
    #[error("unknown text role `{0}`")]
    UnknownTextRole(String),
}
