//! Section inclusion report — one line per renderer call, for diagnostics.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::render::sections::Fragment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Header,
    Summary,
    Education,
    Experience,
    Projects,
    Skills,
    Languages,
    Certifications,
    Awards,
    Leadership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Included,
    Skipped,
}

/// Which record key fed the leadership section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSource {
    /// `involvement` / `leadership`.
    DirectKey,
    /// `Misc` → `Leadership`.
    MiscFallback,
    /// Neither key present.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub section: Section,
    pub status: SectionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SectionSource>,
}

impl fmt::Display for SectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match (self.section, self.source) {
            (Section::Header, _) => "Header section",
            (Section::Summary, _) => "Summary/Objective section",
            (Section::Education, _) => "Education section",
            (Section::Experience, _) => "Experience section",
            (Section::Projects, _) => "Projects section",
            (Section::Skills, _) => "Skills section",
            (Section::Languages, _) => "Languages section",
            (Section::Certifications, _) => "Certifications section",
            (Section::Awards, _) => "Awards section",
            (Section::Leadership, Some(SectionSource::MiscFallback)) => {
                "Misc/Leadership section (fallback)"
            }
            (Section::Leadership, Some(SectionSource::NotFound)) => {
                return f.write_str(
                    "Involvement/Leadership/Misc section: Skipped (no relevant data found)",
                );
            }
            (Section::Leadership, _) => "Involvement/Leadership section (direct key)",
        };
        match self.status {
            SectionStatus::Included => write!(f, "{label}: Included"),
            SectionStatus::Skipped => write!(f, "{label}: Skipped (no data or empty)"),
        }
    }
}

/// Collects reports during one render.
#[derive(Debug, Default)]
pub struct SectionLog {
    reports: Vec<SectionReport>,
}

impl SectionLog {
    /// Records the outcome of a renderer call and passes the fragment through.
    pub fn record(
        &mut self,
        section: Section,
        source: Option<SectionSource>,
        fragment: Fragment,
    ) -> Fragment {
        let status = if fragment.is_rendered() {
            SectionStatus::Included
        } else {
            SectionStatus::Skipped
        };
        self.push(SectionReport {
            section,
            status,
            source,
        });
        fragment
    }

    /// Records a section whose source keys were all missing.
    pub fn not_found(&mut self, section: Section) {
        self.push(SectionReport {
            section,
            status: SectionStatus::Skipped,
            source: Some(SectionSource::NotFound),
        });
    }

    fn push(&mut self, report: SectionReport) {
        debug!(section = ?report.section, status = ?report.status, "{report}");
        self.reports.push(report);
    }

    pub fn finish(self) -> Vec<SectionReport> {
        let included = self
            .reports
            .iter()
            .filter(|r| r.status == SectionStatus::Included)
            .count();
        info!(
            included,
            skipped = self.reports.len() - included,
            "Section generation complete"
        );
        self.reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tracks_status() {
        let mut log = SectionLog::default();
        log.record(Section::Education, None, Fragment::Rendered("x".to_string()));
        log.record(Section::Awards, None, Fragment::Absent);
        let reports = log.finish();
        assert_eq!(reports[0].status, SectionStatus::Included);
        assert_eq!(reports[1].status, SectionStatus::Skipped);
    }

    #[test]
    fn test_record_passes_fragment_through() {
        let mut log = SectionLog::default();
        let fragment = log.record(Section::Summary, None, Fragment::Rendered("s".to_string()));
        assert_eq!(fragment, Fragment::Rendered("s".to_string()));
    }

    #[test]
    fn test_report_lines() {
        let line = |section, status, source| {
            SectionReport {
                section,
                status,
                source,
            }
            .to_string()
        };
        assert_eq!(
            line(Section::Header, SectionStatus::Included, None),
            "Header section: Included"
        );
        assert_eq!(
            line(Section::Awards, SectionStatus::Skipped, None),
            "Awards section: Skipped (no data or empty)"
        );
        assert_eq!(
            line(
                Section::Leadership,
                SectionStatus::Included,
                Some(SectionSource::MiscFallback)
            ),
            "Misc/Leadership section (fallback): Included"
        );
        assert_eq!(
            line(
                Section::Leadership,
                SectionStatus::Skipped,
                Some(SectionSource::NotFound)
            ),
            "Involvement/Leadership/Misc section: Skipped (no relevant data found)"
        );
    }

    #[test]
    fn test_report_serializes_snake_case() {
        let report = SectionReport {
            section: Section::Leadership,
            status: SectionStatus::Included,
            source: Some(SectionSource::DirectKey),
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({"section": "leadership", "status": "included", "source": "direct_key"})
        );
    }
}
