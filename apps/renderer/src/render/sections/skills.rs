//! Skills and languages — both render as compact inline lines rather than
//! sub-heading lists.

use crate::models::resume::{LanguageEntry, Skills};
use crate::render::escape::escape_latex;
use crate::render::sections::Fragment;

const INLINE_LIST_START: &str = r" \begin{itemize}[leftmargin=0.15in, label={}]";
const INLINE_LIST_END: &str = r" \end{itemize}";

fn joined(items: &[String]) -> String {
    items
        .iter()
        .map(|s| escape_latex(s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One `\textbf{Category}{: a, b}` line per non-empty category, then soft skills.
pub fn render_skills(skills: Option<&Skills>) -> Fragment {
    let Some(skills) = skills else {
        return Fragment::Absent;
    };

    let category_lines: Vec<String> = skills
        .categories
        .iter()
        .filter(|category| !category.skills.is_empty())
        .map(|category| {
            format!(
                r"     \textbf{{{}}}{{: {}}}",
                escape_latex(&category.label),
                joined(&category.skills)
            )
        })
        .collect();
    let soft_line = (!skills.soft_skills.is_empty()).then(|| {
        format!(
            r"     \textbf{{Soft Skills}}{{: {}}}",
            joined(&skills.soft_skills)
        )
    });

    if category_lines.is_empty() && soft_line.is_none() {
        return Fragment::Absent;
    }

    let mut lines = vec![
        r"\section{Technical Skills}".to_string(),
        INLINE_LIST_START.to_string(),
        r"    \small{\item{".to_string(),
    ];
    if !category_lines.is_empty() {
        lines.push(category_lines.join(r" \\ "));
        if soft_line.is_some() {
            lines.push(r" \\ ".to_string());
        }
    }
    lines.extend(soft_line);
    lines.push(r"    }}".to_string());
    lines.push(INLINE_LIST_END.to_string());
    lines.push(String::new());
    Fragment::Rendered(lines.join("\n"))
}

/// `Name (Proficiency)` items on a single comma-separated line.
pub fn render_languages(entries: &[LanguageEntry]) -> Fragment {
    let items: Vec<String> = entries
        .iter()
        .filter_map(|lang| {
            let name = escape_latex(lang.name.as_deref()?);
            Some(match &lang.proficiency {
                Some(level) => format!("{name} ({})", escape_latex(level)),
                None => name,
            })
        })
        .collect();

    if items.is_empty() {
        return Fragment::Absent;
    }

    let lines = [
        r"\section{Languages}".to_string(),
        INLINE_LIST_START.to_string(),
        format!(r"    \small{{\item{{{}}}}}", items.join(", ")),
        INLINE_LIST_END.to_string(),
        String::new(),
    ];
    Fragment::Rendered(lines.join("\n"))
}
