//! Greedy word wrapping against a pixel width.
//!
//! Wrapping only needs a way to measure a candidate line, so it works with
//! any font (or a fake one in tests):
//!
//! ```ignore
//! let lines = wrap("Take out the recycling", |s| fonts.measure(s, TextRole::Task), 200);
//! ```

/// Split `text` into lines no wider than `max_width`, breaking at whitespace.
///
/// Words are packed greedily: each word joins the current line if the line
/// (words separated by one space) still measures at most `max_width`,
/// otherwise it starts a new line. A single word wider than `max_width` is
/// kept whole on its own line. Empty or all-whitespace input gives no lines.
pub fn wrap<F>(
    text: &str,
    measure: F,
    max_width: u32,
) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let mut candidate = String::with_capacity(current.len() + 1 + word.len());
        candidate.push_str(&current);
        candidate.push(' ');
        candidate.push_str(word);

        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(core::mem::replace(&mut current, word.to_owned()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// =============================================================================
// Tests
// =============================================================================
