use crate::render::escape::escape_latex;
use crate::render::sections::Fragment;

/// Unnumbered summary paragraph.
pub fn render_summary(summary: Option<&str>) -> Fragment {
    match summary {
        Some(text) if !text.is_empty() => Fragment::Rendered(format!(
            "\\section*{{Summary}}\n  {}\n",
            escape_latex(text)
        )),
        _ => Fragment::Absent,
    }
}
