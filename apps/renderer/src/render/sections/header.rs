use crate::models::resume::Contact;
use crate::render::escape::{escape_latex, escape_opt};
use crate::render::sections::Fragment;

const CONTACT_SEPARATOR: &str = " $|$ ";

/// Centered name line plus one `\small` line of contact parts.
///
/// Order: phone, email, profile links, location. Link and `mailto:` targets
/// use the raw value; only the display text is escaped.
pub fn render_header(contact: Option<&Contact>) -> Fragment {
    let Some(contact) = contact else {
        return Fragment::Absent;
    };

    let mut parts = Vec::new();
    if let Some(phone) = &contact.phone {
        parts.push(escape_latex(phone));
    }
    if let Some(email) = &contact.email {
        parts.push(format!(r"\href{{mailto:{email}}}{{{}}}", escape_latex(email)));
    }
    for link in &contact.links {
        parts.push(format!(r"\href{{{}}}{{{}}}", link.target(), escape_latex(&link.value)));
    }
    if let Some(location) = &contact.location {
        parts.push(escape_latex(location));
    }

    let name = escape_opt(contact.name.as_deref());
    if name.is_empty() && parts.is_empty() {
        return Fragment::Absent;
    }

    let mut lines = Vec::new();
    if !name.is_empty() {
        lines.push(r"\begin{center}".to_string());
        lines.push(format!(r"    \textbf{{\Huge \scshape {name}}} \\ \vspace{{1pt}}"));
    }
    if !parts.is_empty() {
        lines.push(format!(r"    \small {}", parts.join(CONTACT_SEPARATOR)));
    }
    if !name.is_empty() {
        lines.push(r"\end{center}".to_string());
        lines.push(String::new());
    }
    Fragment::Rendered(lines.join("\n"))
}
