use crate::models::resume::EducationEntry;
use crate::render::dates::format_range;
use crate::render::escape::{escape_latex, escape_opt};
use crate::render::sections::{push_items, push_subheading, subheading_section, Fragment};

/// Education entries. An entry needs both an institution and a degree.
pub fn render_education(entries: &[EducationEntry]) -> Fragment {
    let mut lines = Vec::new();

    for edu in entries {
        let (Some(institution), Some(degree)) = (&edu.institution, &edu.degree) else {
            continue;
        };

        let degree_display = match &edu.specialization {
            Some(spec) => format!("{}, {}", escape_latex(degree), escape_latex(spec)),
            None => escape_latex(degree),
        };
        push_subheading(
            &mut lines,
            [&escape_latex(institution), &escape_opt(edu.location.as_deref())],
            [&degree_display, &format_range(&edu.dates)],
        );

        let mut details = Vec::new();
        if let Some(gpa) = &edu.gpa {
            details.push(format!("GPA: {}", escape_latex(gpa)));
        }
        if let Some(honors) = &edu.honors {
            details.push(format!("Honors: {}", escape_latex(honors)));
        }
        if !details.is_empty() {
            lines.push(format!(r"    \resumeSubSubheading{{{}}}{{}}", details.join(", ")));
        }

        // Additional info takes priority over coursework; never both.
        if let Some(info) = &edu.additional_info {
            push_items(&mut lines, "      ", std::slice::from_ref(info));
        } else if !edu.relevant_coursework.is_empty() {
            let courses: Vec<String> =
                edu.relevant_coursework.iter().map(|c| escape_latex(c)).collect();
            lines.push(r"      \resumeItemListStart".to_string());
            lines.push(format!(
                r"        \resumeItem{{Relevant Coursework: {}}}",
                courses.join(", ")
            ));
            lines.push(r"      \resumeItemListEnd".to_string());
        }
    }

    subheading_section("Education", "  ", lines)
}
