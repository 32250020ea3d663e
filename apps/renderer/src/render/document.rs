//! Document Assembler — preamble, page geometry, and section ordering.
//!
//! LaTeX derives the usable text area from the default letter page. When the
//! physical page is stretched taller, `\textheight` has to grow with it or the
//! text stops short of (or overflows) the visible region.

use serde::Serialize;
use serde_json::Value;

use crate::models::resume::Leadership;
use crate::render::error::RenderError;
use crate::render::report::{Section, SectionLog, SectionReport, SectionSource};
use crate::render::resolve::resolve;
use crate::render::sections::{
    education::render_education,
    experience::render_experience,
    header::render_header,
    honors::{render_awards, render_certifications},
    involvement::{render_involvement, render_misc_leadership},
    projects::render_projects,
    skills::{render_languages, render_skills},
    summary::render_summary,
    Fragment,
};

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// Physical page height in inches. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageHeight(f64);

impl PageHeight {
    pub fn new(inches: f64) -> Result<Self, RenderError> {
        if inches.is_finite() && inches > 0.0 {
            Ok(PageHeight(inches))
        } else {
            Err(RenderError::InvalidPageHeight(inches))
        }
    }

    pub fn inches(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PageHeight {
    type Error = RenderError;

    fn try_from(inches: f64) -> Result<Self, Self::Error> {
        PageHeight::new(inches)
    }
}

/// `(height above which the tier applies, \textheight addition)`, tallest first.
const TEXT_HEIGHT_TIERS: &[(f64, f64)] = &[
    (15.0, 5.0),
    (14.0, 4.5),
    (13.0, 4.0),
    (12.0, 3.0),
    (11.0, 2.0),
];

/// Addition for letter-height pages and for renders without an explicit height.
const DEFAULT_TEXT_HEIGHT_ADDITION_IN: f64 = 1.0;

/// Inches added to `\textheight` for the given page height.
pub fn text_height_addition(page_height: Option<PageHeight>) -> f64 {
    page_height
        .and_then(|h| {
            TEXT_HEIGHT_TIERS
                .iter()
                .find(|(threshold, _)| h.inches() > *threshold)
                .map(|(_, addition)| *addition)
        })
        .unwrap_or(DEFAULT_TEXT_HEIGHT_ADDITION_IN)
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed template text
// ────────────────────────────────────────────────────────────────────────────

const PREAMBLE_HEAD: &str = r"\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\usepackage{amsfonts}

\pagestyle{fancy}
\fancyhf{} % clear all header and footer fields
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

% Adjust margins
\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
";

const PREAMBLE_TAIL: &str = r"

\urlstyle{same}

\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

% Sections formatting
\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

% Ensure that generated pdf is machine readable/ATS parsable
\pdfgentounicode=1

%-------------------------
% Custom commands
\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \vspace{-2pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeSubSubheading}[2]{
    \item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \textit{\small#1} & \textit{\small #2} \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeProjectHeading}[2]{
    \item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \small#1 & #2 \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeSubItem}[1]{\resumeItem{#1}\vspace{-4pt}}

\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}

\newcommand{\resumeSubheadingSingleLine}[2]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}
";

const END_DOCUMENT: &str = "\n\\end{document}\n";

/// Fixed preamble with the `\textheight` correction for the page height.
pub fn preamble(page_height: Option<PageHeight>) -> String {
    format!(
        "{PREAMBLE_HEAD}\\addtolength{{\\textheight}}{{{:.1}in}}{PREAMBLE_TAIL}",
        text_height_addition(page_height)
    )
}

/// `\begin{document}`, followed by the physical page height when one is set.
fn begin_document(page_height: Option<PageHeight>) -> String {
    match page_height {
        Some(h) => format!(
            "\\begin{{document}}\n\\setlength{{\\pdfpageheight}}{{{:.2}in}}\n",
            h.inches()
        ),
        None => "\\begin{document}\n".to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// A complete LaTeX document and the per-section inclusion report.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDocument {
    pub latex: String,
    pub sections: Vec<SectionReport>,
}

/// Renders a raw résumé record into a complete LaTeX document.
///
/// Sections appear in canonical order: header, summary, education,
/// experience, projects, skills, languages, certifications, awards,
/// leadership. Absent sections leave no trace in the output.
pub fn render_document(
    record: &Value,
    page_height: Option<PageHeight>,
) -> Result<RenderedDocument, RenderError> {
    let data = resolve(record)?;
    let mut log = SectionLog::default();

    let fragments = [
        log.record(Section::Header, None, render_header(data.contact.as_ref())),
        log.record(Section::Summary, None, render_summary(data.summary.as_deref())),
        log.record(Section::Education, None, render_education(&data.education)),
        log.record(Section::Experience, None, render_experience(&data.experience)),
        log.record(Section::Projects, None, render_projects(&data.projects)),
        log.record(Section::Skills, None, render_skills(data.skills.as_ref())),
        log.record(Section::Languages, None, render_languages(&data.languages)),
        log.record(
            Section::Certifications,
            None,
            render_certifications(&data.certifications),
        ),
        log.record(Section::Awards, None, render_awards(&data.awards)),
        match &data.leadership {
            Leadership::Involvement(entries) => log.record(
                Section::Leadership,
                Some(SectionSource::DirectKey),
                render_involvement(entries),
            ),
            Leadership::Misc(events) => log.record(
                Section::Leadership,
                Some(SectionSource::MiscFallback),
                render_misc_leadership(events),
            ),
            Leadership::Missing => {
                log.not_found(Section::Leadership);
                Fragment::Absent
            }
        },
    ];

    let mut parts = vec![preamble(page_height), begin_document(page_height)];
    parts.extend(fragments.into_iter().filter_map(Fragment::into_text));
    parts.push(END_DOCUMENT.to_string());

    Ok(RenderedDocument {
        latex: parts.join("\n"),
        sections: log.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::report::SectionStatus;
    use serde_json::json;

    fn height(inches: f64) -> Option<PageHeight> {
        Some(PageHeight::new(inches).unwrap())
    }

    fn sample_record() -> Value {
        json!({
            "Personal Information": {
                "name": "Ruo-Yi Evelyn Liang",
                "email": "ruoyi_liang@berkeley.edu",
                "phone": "(510) 282-2716",
                "linkedin": "linkedin.com/in/Evelyn_Liang",
                "location": "Berkeley, CA",
                "github": "github.com/evelyn"
            },
            "Summary/Objective": "Turning Analytics into Action & a test of _ and % and $",
            "Education": [{
                "university": "University of California, Berkeley",
                "degree": "Master of Analytics",
                "start_date": "Aug 2025",
                "end_date": "Present",
                "gpa": "3.7/4.0"
            }],
            "Experience": [{
                "company": "Shopee Pte. Ltd.",
                "title": "Data Analysis Intern",
                "dates": {"start_date": "June 2023", "end_date": "Dec 2023"},
                "responsibilities/achievements": ["Monitored performance & saved 5% costs."]
            }],
            "Projects": [{"title": "Capstone", "technologies_used": "Linear Programming", "date": "Spring 2023"}],
            "Skills": {"Technical Skills": {"Database": ["MySQL"]}, "Soft Skills": ["Teamwork"]},
            "Languages": [{"name": "Mandarin", "proficiency": "Native"}],
            "certifications": [{"certification": "TensorFlow Developer", "institution": "Google", "date": "2022"}],
            "awards": [{"title": "Dean's List", "issuer": "NTU", "date": "2021"}],
            "involvement": [{"organization": "Analytics Club", "position": "President"}],
            "Misc": {"Leadership": {"Event General Coordinator": {}}}
        })
    }

    #[test]
    fn test_page_height_rejects_non_positive() {
        assert_eq!(PageHeight::new(0.0), Err(RenderError::InvalidPageHeight(0.0)));
        assert!(PageHeight::new(-3.0).is_err());
        assert!(PageHeight::new(f64::NAN).is_err());
        assert!(PageHeight::try_from(11.0).is_ok());
    }

    #[test]
    fn test_tiers() {
        assert_eq!(text_height_addition(height(16.0)), 5.0);
        assert_eq!(text_height_addition(height(14.5)), 4.5);
        assert_eq!(text_height_addition(height(13.5)), 4.0);
        assert_eq!(text_height_addition(height(12.5)), 3.0);
        assert_eq!(text_height_addition(height(11.5)), 2.0);
        assert_eq!(text_height_addition(height(11.0)), 1.0);
        assert_eq!(text_height_addition(height(8.5)), 1.0);
    }

    #[test]
    fn test_tier_boundaries_are_exclusive() {
        assert_eq!(text_height_addition(height(13.0)), 3.0);
        assert_eq!(text_height_addition(height(15.0)), 4.5);
    }

    #[test]
    fn test_no_height_matches_smallest_tier() {
        assert_eq!(text_height_addition(None), text_height_addition(height(10.0)));
    }

    #[test]
    fn test_page_height_command_emitted() {
        let doc = render_document(&json!({}), height(13.5)).unwrap();
        assert!(doc.latex.contains("\\setlength{\\pdfpageheight}{13.50in}"));
        assert!(doc.latex.contains("\\addtolength{\\textheight}{4.0in}"));
    }

    #[test]
    fn test_default_height_has_no_page_command() {
        let doc = render_document(&json!({}), None).unwrap();
        assert!(!doc.latex.contains("\\pdfpageheight"));
        assert!(doc.latex.contains("\\addtolength{\\textheight}{1.0in}"));
    }

    #[test]
    fn test_document_frame() {
        let doc = render_document(&json!({}), None).unwrap();
        assert!(doc.latex.starts_with("\\documentclass[letterpaper,11pt]{article}"));
        assert!(doc.latex.contains("\\begin{document}\n"));
        assert!(doc.latex.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_minimal_record_scenario() {
        let record = json!({
            "Personal Information": {"name": "A"},
            "education": [{"institution": "X", "degree": "Y"}]
        });
        let doc = render_document(&record, None).unwrap();
        assert!(doc.latex.contains("\\textbf{\\Huge \\scshape A}"));
        assert!(doc.latex.contains("\\section{Education}"));
        assert!(doc.latex.contains("      {X}{}\n      {Y}{}"));
        for absent in [
            "\\section{Experience}",
            "\\section{Projects}",
            "\\section{Technical Skills}",
            "\\section{Languages}",
            "\\section{Certifications}",
            "\\section{Awards}",
            "\\section{Leadership",
            "\\section*{Summary}",
        ] {
            assert!(!doc.latex.contains(absent), "unexpected {absent}");
        }
    }

    #[test]
    fn test_education_without_institution_leaves_no_heading() {
        let record = json!({"education": [{"degree": "BS CS"}]});
        let doc = render_document(&record, None).unwrap();
        assert!(!doc.latex.contains("\\section{Education}"));
    }

    #[test]
    fn test_dialect_equivalence_byte_identical() {
        let entries = json!([{
            "company": "Shopee",
            "position": "Intern",
            "dates": {"start_date": "Jan 2022", "end_date": "present"},
            "responsibilities": ["A/B testing"]
        }]);
        let a = render_document(&json!({"work_experience": entries.clone()}), None).unwrap();
        let b = render_document(&json!({"Experience": entries}), None).unwrap();
        assert_eq!(a.latex, b.latex);
        assert!(a.latex.contains("{Intern}{Jan 2022 -- Present}"));
    }

    #[test]
    fn test_canonical_section_order() {
        let doc = render_document(&sample_record(), None).unwrap();
        let markers = [
            "\\scshape Ruo-Yi Evelyn Liang",
            "\\section*{Summary}",
            "\\section{Education}",
            "\\section{Experience}",
            "\\section{Projects}",
            "\\section{Technical Skills}",
            "\\section{Languages}",
            "\\section{Certifications}",
            "\\section{Awards}",
            "\\section{Leadership \\& Involvement}",
            "\\end{document}",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| doc.latex.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(
            !doc.latex.contains("Leadership \\& Activities"),
            "direct involvement must win over Misc"
        );
    }

    #[test]
    fn test_report_covers_every_section() {
        let doc = render_document(&sample_record(), None).unwrap();
        assert_eq!(doc.sections.len(), 10);
        assert!(doc
            .sections
            .iter()
            .all(|r| r.status == SectionStatus::Included));
        let leadership = doc.sections.last().unwrap();
        assert_eq!(leadership.source, Some(SectionSource::DirectKey));
    }

    #[test]
    fn test_misc_fallback_used_without_involvement() {
        let record = json!({"Misc": {"Leadership": {"Coordinator": {
            "dates": {"start_date": "Apr 2023", "end_date": "May 2023"}
        }}}});
        let doc = render_document(&record, None).unwrap();
        assert!(doc.latex.contains(
            "\\resumeSubheadingSingleLine{Coordinator}{Apr 2023 -- May 2023}"
        ));
        assert_eq!(
            doc.sections.last().unwrap().source,
            Some(SectionSource::MiscFallback)
        );
    }

    #[test]
    fn test_missing_leadership_reported_not_found() {
        let doc = render_document(&json!({}), None).unwrap();
        let last = doc.sections.last().unwrap();
        assert_eq!(last.source, Some(SectionSource::NotFound));
        assert_eq!(last.status, SectionStatus::Skipped);
    }

    #[test]
    fn test_user_text_is_escaped_in_document() {
        let doc = render_document(&sample_record(), None).unwrap();
        assert!(doc
            .latex
            .contains("Turning Analytics into Action \\& a test of \\_ and \\% and \\$"));
        assert!(doc
            .latex
            .contains("\\href{mailto:ruoyi_liang@berkeley.edu}{ruoyi\\_liang@berkeley.edu}"));
    }

    #[test]
    fn test_record_not_mutated() {
        let record = json!({"name": "Top", "contact": {"email": "a@b.c"}});
        let before = record.clone();
        let doc = render_document(&record, None).unwrap();
        assert!(doc.latex.contains("\\scshape Top"));
        assert_eq!(record, before);
    }

    #[test]
    fn test_shape_error_propagates() {
        let err = render_document(&json!({"Education": "Berkeley"}), None).unwrap_err();
        assert!(matches!(err, RenderError::UnexpectedShape { ref path, .. } if path == "$.Education"));
    }
}
