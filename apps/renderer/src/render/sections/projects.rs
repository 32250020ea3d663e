use crate::models::resume::ProjectEntry;
use crate::render::dates::format_dates;
use crate::render::escape::escape_latex;
use crate::render::sections::{push_items, subheading_section, Fragment};

/// Projects. An entry needs a title; technologies ride on the title line.
pub fn render_projects(entries: &[ProjectEntry]) -> Fragment {
    let mut lines = Vec::new();

    for proj in entries {
        let Some(title) = &proj.title else {
            continue;
        };

        let mut heading = format!(r"\textbf{{{}}}", escape_latex(title));
        if !proj.technologies.is_empty() {
            let tech: Vec<String> = proj.technologies.iter().map(|t| escape_latex(t)).collect();
            heading.push_str(&format!(r" $|$ \emph{{{}}}", tech.join(", ")));
        }

        lines.push(r"      \resumeProjectHeading".to_string());
        lines.push(format!(
            "          {{{heading}}}{{{}}}",
            format_dates(&proj.dates)
        ));
        push_items(&mut lines, "          ", &proj.description);
    }

    subheading_section("Projects", "    ", lines)
}
