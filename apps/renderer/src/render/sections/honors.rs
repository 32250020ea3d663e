use crate::models::resume::{AwardEntry, CertificationEntry};
use crate::render::escape::{escape_latex, escape_opt};
use crate::render::sections::{push_items, push_subheading, subheading_section, Fragment};

/// Certifications. An entry needs a certification name.
pub fn render_certifications(entries: &[CertificationEntry]) -> Fragment {
    let mut lines = Vec::new();
    for cert in entries {
        let Some(name) = &cert.name else {
            continue;
        };
        push_subheading(
            &mut lines,
            [&escape_latex(name), &escape_opt(cert.date.as_deref())],
            [&escape_opt(cert.issuer.as_deref()), ""],
        );
    }
    subheading_section("Certifications", "  ", lines)
}

/// Awards. An entry needs a title; the description becomes bullets.
pub fn render_awards(entries: &[AwardEntry]) -> Fragment {
    let mut lines = Vec::new();
    for award in entries {
        let Some(title) = &award.title else {
            continue;
        };
        push_subheading(
            &mut lines,
            [&escape_latex(title), &escape_opt(award.date.as_deref())],
            [&escape_opt(award.issuer.as_deref()), ""],
        );
        push_items(&mut lines, "      ", &award.description);
    }
    subheading_section("Awards", "  ", lines)
}
