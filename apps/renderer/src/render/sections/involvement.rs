use crate::models::resume::{InvolvementEntry, LeadershipEvent};
use crate::render::dates::format_dates;
use crate::render::escape::{escape_latex, escape_opt};
use crate::render::sections::{push_items, push_subheading, subheading_section, Fragment};

/// Involvement / leadership list. An entry needs an organization or a position.
pub fn render_involvement(entries: &[InvolvementEntry]) -> Fragment {
    let mut lines = Vec::new();
    for item in entries {
        if item.organization.is_none() && item.position.is_none() {
            continue;
        }
        push_subheading(
            &mut lines,
            [&escape_opt(item.position.as_deref()), &format_dates(&item.dates)],
            [&escape_opt(item.organization.as_deref()), ""],
        );
        push_items(&mut lines, "      ", &item.responsibilities);
    }
    subheading_section(r"Leadership \& Involvement", "  ", lines)
}

/// Fallback for records that keep leadership under `Misc` as a mapping of
/// event name to details. Uses the single-line heading macro.
pub fn render_misc_leadership(events: &[LeadershipEvent]) -> Fragment {
    let mut lines = Vec::new();
    for event in events {
        let name = escape_latex(&event.name);
        if name.is_empty() {
            continue;
        }
        lines.push(format!(
            r"    \resumeSubheadingSingleLine{{{name}}}{{{}}}",
            format_dates(&event.dates)
        ));
        push_items(&mut lines, "      ", &event.responsibilities);
    }
    subheading_section(r"Leadership \& Activities", "  ", lines)
}
