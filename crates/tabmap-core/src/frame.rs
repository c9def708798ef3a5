use serde::Serialize;

/// An in-memory table: ordered column names plus rows of optional cells.
///
/// A `None` cell means the source had no value there (empty CSV field,
/// empty spreadsheet cell, or a row shorter than the header).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabularFrame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl TabularFrame {
    /// Canonicalize column names so they match mapping keys reliably.
    ///
    /// Each name has every whitespace run collapsed to a single ASCII space
    /// and is trimmed. Column order and row data are left untouched.
    pub fn normalize_columns(mut self) -> TabularFrame {
        for name in &mut self.columns {
            *name = collapse_whitespace(name);
        }
        self
    }
}

/// Collapse every run of Unicode whitespace (ASCII space, NBSP, ideographic
/// space, CR, LF, tab, ...) into a single ASCII space, then trim.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = true; // start true to skip leading whitespace
    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}
