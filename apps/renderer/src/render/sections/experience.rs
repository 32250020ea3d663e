use crate::models::resume::ExperienceEntry;
use crate::render::dates::format_dates;
use crate::render::escape::escape_opt;
use crate::render::sections::{push_items, push_subheading, subheading_section, Fragment};

/// Work experience. An entry needs a company or a position.
pub fn render_experience(entries: &[ExperienceEntry]) -> Fragment {
    let mut lines = Vec::new();

    for exp in entries {
        if exp.company.is_none() && exp.position.is_none() {
            continue;
        }
        push_subheading(
            &mut lines,
            [&escape_opt(exp.position.as_deref()), &format_dates(&exp.dates)],
            [
                &escape_opt(exp.company.as_deref()),
                &escape_opt(exp.location.as_deref()),
            ],
        );
        push_items(&mut lines, "      ", &exp.responsibilities);
    }

    subheading_section("Experience", "  ", lines)
}
