//! Normalized résumé model.
//!
//! Every text field holds RAW (unescaped) input text. Escaping happens exactly
//! once, inside the section renderers. Empty strings never appear in `Option`
//! fields: the resolver maps them to `None`.

/// Contact block rendered as the centered header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Profile links in render order: LinkedIn, GitHub, website.
    pub links: Vec<ProfileLink>,
}

/// A URL-bearing contact value such as `linkedin.com/in/jane`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLink {
    pub value: String,
    /// Scheme prepended to the link target when `value` is bare.
    pub default_scheme: &'static str,
}

impl ProfileLink {
    /// Link target: the raw value, qualified with the default scheme if needed.
    pub fn target(&self) -> String {
        if self.value.starts_with("http") {
            self.value.clone()
        } else {
            format!("{}{}", self.default_scheme, self.value)
        }
    }
}

/// A `(start, end)` pair. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Dates as found in the record: a structured range or a free-text label.
#[derive(Debug, Clone, PartialEq)]
pub enum Dates {
    Range(DateRange),
    Text(String),
}

impl Default for Dates {
    fn default() -> Self {
        Dates::Range(DateRange::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub location: Option<String>,
    pub degree: Option<String>,
    pub specialization: Option<String>,
    pub dates: DateRange,
    pub gpa: Option<String>,
    pub honors: Option<String>,
    pub additional_info: Option<String>,
    pub relevant_coursework: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub dates: Dates,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectEntry {
    pub title: Option<String>,
    pub technologies: Vec<String>,
    pub dates: Dates,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCategory {
    pub label: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageEntry {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificationEntry {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwardEntry {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvolvementEntry {
    pub organization: Option<String>,
    pub position: Option<String>,
    pub dates: Dates,
    pub responsibilities: Vec<String>,
}

/// One event under `Misc` → `Leadership`, keyed by its name in the record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadershipEvent {
    pub name: String,
    pub dates: Dates,
    pub responsibilities: Vec<String>,
}

/// Where the closing leadership section comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Leadership {
    /// `involvement` / `leadership` list.
    Involvement(Vec<InvolvementEntry>),
    /// `Misc` → `Leadership` mapping, used only when no direct list exists.
    Misc(Vec<LeadershipEvent>),
    #[default]
    Missing,
}

/// The whole record after synonym resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeData {
    pub contact: Option<Contact>,
    pub summary: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Option<Skills>,
    pub languages: Vec<LanguageEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub awards: Vec<AwardEntry>,
    pub leadership: Leadership,
}
