use crate::models::resume::{DateRange, Dates};
use crate::render::escape::{escape_latex, escape_opt};

/// End value that always renders as the literal `Present`.
const PRESENT: &str = "present";

/// Formats a date range for the right-hand date slot of a heading.
///
/// `start -- end`, `start -- Present` for an ongoing range, `start` alone when
/// there is no end, and the empty string when both sides are missing.
pub fn format_range(range: &DateRange) -> String {
    let start = escape_opt(range.start.as_deref());
    let end = escape_opt(range.end.as_deref());

    if end.eq_ignore_ascii_case(PRESENT) {
        format!("{start} -- Present")
    } else if end.is_empty() {
        start
    } else {
        format!("{start} -- {end}")
    }
}

/// Formats either a range or a free-text label.
pub fn format_dates(dates: &Dates) -> String {
    match dates {
        Dates::Range(range) => format_range(range),
        Dates::Text(label) => escape_latex(label),
    }
}
