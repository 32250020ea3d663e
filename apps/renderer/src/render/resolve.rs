//! Field Resolver — reconciles the two known record dialects into `ResumeData`.
//!
//! Every logical field has an ordered list of candidate keys. The first key
//! whose value is truthy wins; values from different dialects are never merged.
//! The caller's record is only borrowed, so nothing done here (including the
//! top-level name injection) is visible to the caller.

use serde_json::{Map, Value};

use crate::models::resume::{
    AwardEntry, CertificationEntry, Contact, DateRange, Dates, EducationEntry, ExperienceEntry,
    InvolvementEntry, LanguageEntry, Leadership, LeadershipEvent, ProfileLink, ProjectEntry,
    ResumeData, SkillCategory, Skills,
};
use crate::render::error::RenderError;

// ────────────────────────────────────────────────────────────────────────────
// Synonym tables
// ────────────────────────────────────────────────────────────────────────────

const CONTACT_KEYS: &[&str] = &["Personal Information", "contact"];
const SUMMARY_KEYS: &[&str] = &["Summary/Objective", "objective", "summary"];
const EDUCATION_KEYS: &[&str] = &["Education", "education"];
const EXPERIENCE_KEYS: &[&str] = &["Experience", "work_experience"];
const PROJECTS_KEYS: &[&str] = &["Projects", "projects"];
const SKILLS_KEYS: &[&str] = &["Skills", "skills"];
const LANGUAGES_KEYS: &[&str] = &["Languages", "languages"];
// The combined "Certifications/Awards" key is deliberately not listed.
const CERTIFICATIONS_KEYS: &[&str] = &["certifications"];
const AWARDS_KEYS: &[&str] = &["awards"];
const INVOLVEMENT_KEYS: &[&str] = &["involvement", "leadership"];
const MISC_KEYS: &[&str] = &["Misc"];
const TOP_LEVEL_NAME_KEY: &str = "name";

const LINKEDIN_KEYS: &[&str] = &["linkedin", "website/LinkedIn"];
const INSTITUTION_KEYS: &[&str] = &["institution", "university"];
const POSITION_KEYS: &[&str] = &["position", "title"];
const RESPONSIBILITIES_KEYS: &[&str] = &["responsibilities", "responsibilities/achievements"];
const LEADERSHIP_RESPONSIBILITIES_KEYS: &[&str] =
    &["responsibilities/achievements", "responsibilities"];
const EXPERIENCE_DATES_KEYS: &[&str] = &["dates"];
const PROJECT_DATES_KEYS: &[&str] = &["dates", "date"];
const INVOLVEMENT_DATES_KEYS: &[&str] = &["date", "dates"];
const TECHNOLOGIES_KEYS: &[&str] = &["technologies", "technologies_used"];
const LANGUAGE_NAME_KEYS: &[&str] = &["name", "language"];
const CERTIFICATION_NAME_KEYS: &[&str] = &["certification", "name"];
const ISSUER_KEYS: &[&str] = &["institution", "issuer"];

const TECHNICAL_SKILLS_KEY: &str = "Technical Skills";
const SOFT_SKILLS_KEY: &str = "Soft Skills";
const MISC_LEADERSHIP_KEY: &str = "Leadership";

const HTTPS: &str = "https://";
const HTTP: &str = "http://";

// ────────────────────────────────────────────────────────────────────────────
// Value helpers
// ────────────────────────────────────────────────────────────────────────────

/// Whether a value counts as "present": not null, false, zero, or empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns the first truthy value among `keys`, with the key that held it.
pub fn lookup<'a>(
    map: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter()
        .find_map(|&key| map.get(key).filter(|v| is_truthy(v)).map(|v| (key, v)))
}

/// Stringifies a scalar. Strings pass through; other values use their JSON text.
/// Empty results are `None`.
pub fn text_of(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn text_field(map: &Map<String, Value>, keys: &[&'static str]) -> Option<String> {
    lookup(map, keys).and_then(|(_, v)| text_of(v))
}

/// Sequence of strings; anything that is not an array yields nothing.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(text_of).collect(),
        _ => Vec::new(),
    }
}

/// A single string (one item) or a sequence of strings.
fn text_or_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(_)) => string_list(value),
        Some(other) => text_of(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, RenderError> {
    value.as_object().ok_or_else(|| RenderError::UnexpectedShape {
        path: path.to_string(),
        expected: "object",
        found: kind_of(value),
    })
}

/// Resolves a top-level list section, returning each entry as a mapping
/// together with its JSON path.
fn section_entries<'a>(
    record: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Result<Vec<(String, &'a Map<String, Value>)>, RenderError> {
    let Some((key, value)) = lookup(record, keys) else {
        return Ok(Vec::new());
    };
    let path = format!("$.{key}");
    let items = value.as_array().ok_or_else(|| RenderError::UnexpectedShape {
        path: path.clone(),
        expected: "array",
        found: kind_of(value),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item_path = format!("{path}[{i}]");
            expect_object(item, &item_path).map(|entry| (item_path, entry))
        })
        .collect()
}

fn date_range(map: &Map<String, Value>) -> DateRange {
    DateRange {
        start: text_field(map, &["start_date"]),
        end: text_field(map, &["end_date"]),
    }
}

/// A dates value may be a `{start_date, end_date}` mapping or a plain label.
fn dates_field(
    entry: &Map<String, Value>,
    keys: &[&'static str],
    entry_path: &str,
) -> Result<Dates, RenderError> {
    match lookup(entry, keys) {
        None => Ok(Dates::default()),
        Some((_, Value::Object(range))) => Ok(Dates::Range(date_range(range))),
        Some((key, Value::Array(_))) => Err(RenderError::UnexpectedShape {
            path: format!("{entry_path}.{key}"),
            expected: "object or string",
            found: "array",
        }),
        Some((_, scalar)) => Ok(text_of(scalar).map(Dates::Text).unwrap_or_default()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Resolves a raw record into the normalized résumé model.
///
/// Fails only when the record (or a section the renderers depend on) has the
/// wrong shape; missing data resolves to empty values.
pub fn resolve(record: &Value) -> Result<ResumeData, RenderError> {
    let record = expect_object(record, "$")?;

    let leadership = match lookup(record, INVOLVEMENT_KEYS) {
        Some(_) => Leadership::Involvement(resolve_involvement(record)?),
        None => match lookup(record, MISC_KEYS) {
            Some((_, misc)) => Leadership::Misc(resolve_misc_leadership(misc)?),
            None => Leadership::Missing,
        },
    };

    Ok(ResumeData {
        contact: resolve_contact(record)?,
        summary: text_field(record, SUMMARY_KEYS),
        education: resolve_education(record)?,
        experience: resolve_experience(record)?,
        projects: resolve_projects(record)?,
        skills: resolve_skills(record)?,
        languages: resolve_languages(record)?,
        certifications: resolve_certifications(record)?,
        awards: resolve_awards(record)?,
        leadership,
    })
}

fn resolve_contact(record: &Map<String, Value>) -> Result<Option<Contact>, RenderError> {
    let Some((key, value)) = lookup(record, CONTACT_KEYS) else {
        return Ok(None);
    };
    let info = expect_object(value, &format!("$.{key}"))?;

    let link = |keys: &[&'static str], default_scheme: &'static str| {
        text_field(info, keys).map(|value| ProfileLink {
            value,
            default_scheme,
        })
    };
    let links = [
        link(LINKEDIN_KEYS, HTTPS),
        link(&["github"], HTTPS),
        link(&["website"], HTTP),
    ]
    .into_iter()
    .flatten()
    .collect();

    Ok(Some(Contact {
        // A bare top-level name fills in for a contact block without one.
        name: text_field(info, &["name"]).or_else(|| text_field(record, &[TOP_LEVEL_NAME_KEY])),
        email: text_field(info, &["email"]),
        phone: text_field(info, &["phone"]),
        location: text_field(info, &["location"]),
        links,
    }))
}

fn resolve_education(record: &Map<String, Value>) -> Result<Vec<EducationEntry>, RenderError> {
    Ok(section_entries(record, EDUCATION_KEYS)?
        .into_iter()
        .map(|(_, edu)| EducationEntry {
            institution: text_field(edu, INSTITUTION_KEYS),
            location: text_field(edu, &["location"]),
            degree: text_field(edu, &["degree"]),
            specialization: text_field(edu, &["specialization"]),
            dates: date_range(edu),
            gpa: text_field(edu, &["gpa"]),
            honors: text_field(edu, &["honors"]),
            additional_info: text_field(edu, &["additional_info"]),
            relevant_coursework: string_list(edu.get("relevant_coursework")),
        })
        .collect())
}

fn resolve_experience(record: &Map<String, Value>) -> Result<Vec<ExperienceEntry>, RenderError> {
    section_entries(record, EXPERIENCE_KEYS)?
        .into_iter()
        .map(|(path, exp)| {
            Ok(ExperienceEntry {
                company: text_field(exp, &["company"]),
                position: text_field(exp, POSITION_KEYS),
                location: text_field(exp, &["location"]),
                dates: dates_field(exp, EXPERIENCE_DATES_KEYS, &path)?,
                responsibilities: string_list(
                    lookup(exp, RESPONSIBILITIES_KEYS).map(|(_, v)| v),
                ),
            })
        })
        .collect()
}

fn resolve_projects(record: &Map<String, Value>) -> Result<Vec<ProjectEntry>, RenderError> {
    section_entries(record, PROJECTS_KEYS)?
        .into_iter()
        .map(|(path, proj)| {
            Ok(ProjectEntry {
                title: text_field(proj, &["title"]),
                technologies: text_or_list(lookup(proj, TECHNOLOGIES_KEYS).map(|(_, v)| v)),
                dates: dates_field(proj, PROJECT_DATES_KEYS, &path)?,
                description: text_or_list(proj.get("description")),
            })
        })
        .collect()
}

fn resolve_skills(record: &Map<String, Value>) -> Result<Option<Skills>, RenderError> {
    let Some((key, value)) = lookup(record, SKILLS_KEYS) else {
        return Ok(None);
    };
    let skills = expect_object(value, &format!("$.{key}"))?;

    // A truthy "Technical Skills" that is not a mapping contributes no categories.
    let categories = match skills.get(TECHNICAL_SKILLS_KEY) {
        Some(Value::Object(technical)) => collect_categories(technical),
        Some(technical) if is_truthy(technical) => Vec::new(),
        _ => collect_categories(skills),
    };

    Ok(Some(Skills {
        categories,
        soft_skills: string_list(skills.get(SOFT_SKILLS_KEY)),
    }))
}

fn collect_categories(map: &Map<String, Value>) -> Vec<SkillCategory> {
    map.iter()
        .filter(|(label, _)| {
            label.as_str() != SOFT_SKILLS_KEY && label.as_str() != TECHNICAL_SKILLS_KEY
        })
        .map(|(label, skills)| SkillCategory {
            label: label.clone(),
            skills: string_list(Some(skills)),
        })
        .collect()
}

fn resolve_languages(record: &Map<String, Value>) -> Result<Vec<LanguageEntry>, RenderError> {
    let Some((key, value)) = lookup(record, LANGUAGES_KEYS) else {
        return Ok(Vec::new());
    };
    let path = format!("$.{key}");
    let items = value.as_array().ok_or_else(|| RenderError::UnexpectedShape {
        path: path.clone(),
        expected: "array",
        found: kind_of(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(_) => Ok(LanguageEntry {
                name: text_of(item),
                proficiency: None,
            }),
            Value::Object(lang) => Ok(LanguageEntry {
                name: text_field(lang, LANGUAGE_NAME_KEYS),
                proficiency: text_field(lang, &["proficiency"]),
            }),
            other => Err(RenderError::UnexpectedShape {
                path: format!("{path}[{i}]"),
                expected: "object or string",
                found: kind_of(other),
            }),
        })
        .collect()
}

fn resolve_certifications(
    record: &Map<String, Value>,
) -> Result<Vec<CertificationEntry>, RenderError> {
    Ok(section_entries(record, CERTIFICATIONS_KEYS)?
        .into_iter()
        .map(|(_, cert)| CertificationEntry {
            name: text_field(cert, CERTIFICATION_NAME_KEYS),
            issuer: text_field(cert, ISSUER_KEYS),
            date: text_field(cert, &["date"]),
        })
        .collect())
}

fn resolve_awards(record: &Map<String, Value>) -> Result<Vec<AwardEntry>, RenderError> {
    Ok(section_entries(record, AWARDS_KEYS)?
        .into_iter()
        .map(|(_, award)| AwardEntry {
            title: text_field(award, &["title"]),
            issuer: text_field(award, &["issuer"]),
            date: text_field(award, &["date"]),
            description: text_or_list(award.get("description")),
        })
        .collect())
}

fn resolve_involvement(record: &Map<String, Value>) -> Result<Vec<InvolvementEntry>, RenderError> {
    section_entries(record, INVOLVEMENT_KEYS)?
        .into_iter()
        .map(|(path, item)| {
            Ok(InvolvementEntry {
                organization: text_field(item, &["organization"]),
                position: text_field(item, &["position"]),
                dates: dates_field(item, INVOLVEMENT_DATES_KEYS, &path)?,
                responsibilities: string_list(
                    lookup(item, RESPONSIBILITIES_KEYS).map(|(_, v)| v),
                ),
            })
        })
        .collect()
}

/// `Misc` → `Leadership` is a mapping of event name to event body. A `Misc`
/// or `Leadership` value that is not a mapping yields no events.
fn resolve_misc_leadership(misc: &Value) -> Result<Vec<LeadershipEvent>, RenderError> {
    let Some(Value::Object(events)) = misc.as_object().and_then(|m| m.get(MISC_LEADERSHIP_KEY))
    else {
        return Ok(Vec::new());
    };

    events
        .iter()
        .map(|(name, details)| {
            let path = format!("$.Misc.Leadership.{name}");
            let details = expect_object(details, &path)?;
            Ok(LeadershipEvent {
                name: name.clone(),
                dates: dates_field(details, EXPERIENCE_DATES_KEYS, &path)?,
                responsibilities: string_list(
                    lookup(details, LEADERSHIP_RESPONSIBILITIES_KEYS).map(|(_, v)| v),
                ),
            })
        })
        .collect()
}
