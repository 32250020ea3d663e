//! Section renderers — one per résumé section.
//!
//! Each renderer takes normalized section data and returns a `Fragment`.
//! Entries missing their identifying fields are dropped; a section whose
//! entries are all dropped is `Fragment::Absent` and emits no heading.

pub mod education;
pub mod experience;
pub mod header;
pub mod honors;
pub mod involvement;
pub mod projects;
pub mod skills;
pub mod summary;

use crate::render::escape::escape_latex;

/// Output of a section renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Rendered(String),
    Absent,
}

impl Fragment {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Fragment::Rendered(_))
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Fragment::Rendered(text) => Some(text),
            Fragment::Absent => None,
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        match self {
            Fragment::Rendered(text) => text,
            Fragment::Absent => "",
        }
    }
}

/// Wraps entry lines in a `\section{..}` with a sub-heading list.
/// No entry lines means no section.
pub(crate) fn subheading_section(heading: &str, indent: &str, body: Vec<String>) -> Fragment {
    if body.is_empty() {
        return Fragment::Absent;
    }
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(format!(r"\section{{{heading}}}"));
    lines.push(format!(r"{indent}\resumeSubHeadingListStart"));
    lines.extend(body);
    lines.push(format!(r"{indent}\resumeSubHeadingListEnd"));
    lines.push(String::new());
    Fragment::Rendered(lines.join("\n"))
}

/// Appends one `\resumeItem` per detail string, escaped. Nothing is emitted
/// for an empty list.
pub(crate) fn push_items(lines: &mut Vec<String>, indent: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(format!(r"{indent}\resumeItemListStart"));
    for item in items {
        lines.push(format!(r"{indent}  \resumeItem{{{}}}", escape_latex(item)));
    }
    lines.push(format!(r"{indent}\resumeItemListEnd"));
}

/// Two-row `\resumeSubheading` with already-escaped cells.
pub(crate) fn push_subheading(lines: &mut Vec<String>, top: [&str; 2], bottom: [&str; 2]) {
    lines.push(r"    \resumeSubheading".to_string());
    lines.push(format!("      {{{}}}{{{}}}", top[0], top[1]));
    lines.push(format!("      {{{}}}{{{}}}", bottom[0], bottom[1]));
}
