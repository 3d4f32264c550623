//! Output rendering for joined support records.
//!
//! Three mutually exclusive shapes: fixed-width table rows for bulk
//! listings, a labeled detail block for single-package lookups, and a
//! pretty-printed XML export of one statement.

mod detail;
mod table;
mod xml;

pub use detail::render_detail;
pub use table::render_table_row;
pub use xml::{render_xml, render_xml_at};

use thiserror::Error;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("XML generation failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("generated document was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Pad a cell to `width` display columns. Overlong values are kept whole;
/// alignment is a formatting nicety, content is the contract.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - current))
    }
}

/// Fill a label to exactly `width` display columns, truncating if needed.
pub(crate) fn fill_exact(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}
