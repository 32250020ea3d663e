//! LaTeX escaping for user-supplied text.
//!
//! Ten characters are special. Backslash must be replaced before anything
//! else, since every other replacement introduces a backslash of its own. A
//! single pass over the input gives that ordering for free and also keeps the
//! `{}` inside `\textbackslash{}` from being escaped a second time.

/// Replacement for each special character. Backslash first.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\\', r"\textbackslash{}"),
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
];

/// Escapes `text` for verbatim embedding in a LaTeX document body.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(special, _)| *special == c) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Missing text escapes to the empty string.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape_latex).unwrap_or_default()
}
