//! University Compliance Checker
//!
//! Walks an institution's format requirements and reports every expected
//! section that the outline text does not mention. All checks are plain
//! substring tests on `EnhancedOutline::content`: a heading and a passing
//! mention in body prose count the same.

use rayon::prelude::*;

use super::report::{FormatViolation, UniversityComplianceReport};
use crate::methodology::ResearchMethodology;
use crate::outline::EnhancedOutline;
use crate::registry::{FormatRegistry, FormatRequirement};

/// Preliminaries that live outside the outline body and are never checked
const UNCHECKED_PRELIMINARIES: &[&str] = &["Title Page", "Approval Sheet"];

pub const PRELIMINARIES_SECTION: &str = "Preliminaries";
pub const END_MATTER_SECTION: &str = "End Matter";
pub const FORMATTING_SECTION: &str = "Formatting";
pub const METHODOLOGY_SECTION: &str = "Methodology Requirements";
pub const CHAPTER_PRESENCE_GUIDELINE: &str = "Chapter Presence";

/// Checks outlines against the formats of one registry
#[derive(Debug, Clone, Copy)]
pub struct ComplianceChecker<'a> {
    registry: &'a FormatRegistry,
}

impl<'a> ComplianceChecker<'a> {
    pub fn new(registry: &'a FormatRegistry) -> Self {
        Self { registry }
    }

    /// Checker over the built-in registry
    pub fn builtin() -> ComplianceChecker<'static> {
        ComplianceChecker::new(FormatRegistry::builtin())
    }

    pub fn registry(&self) -> &'a FormatRegistry {
        self.registry
    }

    /// Check an outline against an institution's format.
    ///
    /// Unknown institutions are checked against the default format. Empty
    /// content is not special: every expected section is reported missing.
    pub fn check(&self, outline: &EnhancedOutline, institution: &str) -> UniversityComplianceReport {
        let format = self.registry.lookup(institution);

        let mut violations = check_preliminaries(outline, format);
        violations.extend(check_chapter_structure(outline, format));
        violations.extend(check_end_matter(outline, format));
        violations.extend(check_formatting(format));

        let report = UniversityComplianceReport::from_violations(violations);
        tracing::debug!(
            "Compliance check against '{}': {} violations (compliant={})",
            format.slug,
            report.violations.len(),
            report.compliant
        );
        report
    }

    /// Base check followed by the methodology's own required sections.
    ///
    /// Methodology violations are appended after the base violations and
    /// tagged "Methodology Requirements".
    pub fn check_with_methodology(
        &self,
        outline: &EnhancedOutline,
        institution: &str,
        methodology: &ResearchMethodology,
    ) -> UniversityComplianceReport {
        self.check(outline, institution)
            .merge(check_methodology_sections(outline, methodology))
    }

    /// Check many outlines against one institution in parallel.
    ///
    /// Reports come back in input order.
    pub fn check_many(
        &self,
        outlines: &[EnhancedOutline],
        institution: &str,
    ) -> Vec<UniversityComplianceReport> {
        outlines
            .par_iter()
            .map(|outline| self.check(outline, institution))
            .collect()
    }
}

/// Check against the built-in registry
pub fn check_compliance(outline: &EnhancedOutline, institution: &str) -> UniversityComplianceReport {
    ComplianceChecker::builtin().check(outline, institution)
}

/// Methodology-aware check against the built-in registry
pub fn check_methodology_university_compliance(
    outline: &EnhancedOutline,
    institution: &str,
    methodology: &ResearchMethodology,
) -> UniversityComplianceReport {
    ComplianceChecker::builtin().check_with_methodology(outline, institution, methodology)
}

// ============================================================================
// Individual checks
// ============================================================================

/// Missing preliminaries, skipping pages that never appear in an outline
pub fn check_preliminaries(outline: &EnhancedOutline, format: &FormatRequirement) -> Vec<FormatViolation> {
    format
        .preliminaries
        .iter()
        .filter(|name| !UNCHECKED_PRELIMINARIES.contains(&name.as_str()))
        .filter(|name| !outline.mentions(name))
        .map(|name| {
            FormatViolation::new(
                PRELIMINARIES_SECTION,
                name.as_str(),
                format!("Missing required '{}' section", name),
                format!(
                    "Add a '{}' section in the preliminaries as required by {}",
                    name, format.name
                ),
            )
        })
        .collect()
}

/// Missing chapters, then missing required sections of present chapters.
///
/// A missing chapter yields exactly one violation; its sections are not checked.
pub fn check_chapter_structure(outline: &EnhancedOutline, format: &FormatRequirement) -> Vec<FormatViolation> {
    let mut violations = Vec::new();

    for chapter in &format.chapter_structure {
        let marker = chapter.marker();

        if !outline.mentions(&marker) {
            violations.push(FormatViolation::new(
                marker.as_str(),
                CHAPTER_PRESENCE_GUIDELINE,
                format!("Missing required '{}' chapter", chapter.full_title()),
                format!(
                    "Add {} titled '{}' as required by {}",
                    marker, chapter.title, format.name
                ),
            ));
            continue;
        }

        for section in &chapter.required_sections {
            if !outline.mentions(section) {
                violations.push(FormatViolation::new(
                    marker.as_str(),
                    section.as_str(),
                    format!("Missing required '{}' section in {}", section, marker),
                    format!(
                        "Add a '{}' section to {} as required by {}",
                        section, marker, format.name
                    ),
                ));
            }
        }
    }

    violations
}

/// Missing end matter, with the References / Literature Cited naming rule.
///
/// When "Literature Cited" is required but the outline has "References",
/// one naming violation is reported instead of a missing-section violation.
pub fn check_end_matter(outline: &EnhancedOutline, format: &FormatRequirement) -> Vec<FormatViolation> {
    let mut violations = Vec::new();

    for name in &format.end_matter {
        if name == "Literature Cited" && outline.mentions("References") {
            violations.push(FormatViolation::new(
                END_MATTER_SECTION,
                "Literature Cited",
                format!("{} requires 'Literature Cited' rather than 'References'", format.name),
                format!(
                    "Replace 'References' section with 'Literature Cited' as required by {}",
                    format.name
                ),
            ));
            continue;
        }

        if !outline.mentions(name) {
            violations.push(FormatViolation::new(
                END_MATTER_SECTION,
                name.as_str(),
                format!("Missing required '{}' section", name),
                format!(
                    "Add a '{}' section at the end of your thesis as required by {}",
                    name, format.name
                ),
            ));
        }
    }

    violations
}

/// Fonts, margins and pagination are not visible in outline text, so this
/// always reports the same advisory violation.
pub fn check_formatting(format: &FormatRequirement) -> Vec<FormatViolation> {
    let rules = &format.formatting;
    vec![FormatViolation::new(
        FORMATTING_SECTION,
        "Document Formatting",
        "Formatting compliance requires document-level analysis",
        format!(
            "Use the full document editor to confirm {} formatting: {} {}pt, {} spacing, \
             margins {}\" left / {}\" right / {}\" top / {}\" bottom",
            format.name,
            rules.font,
            rules.font_size,
            rules.spacing.display_text(),
            rules.margins.left,
            rules.margins.right,
            rules.margins.top,
            rules.margins.bottom,
        ),
    )]
}

/// Methodology-required sections absent from the outline text
pub fn check_methodology_sections(
    outline: &EnhancedOutline,
    methodology: &ResearchMethodology,
) -> Vec<FormatViolation> {
    let kind = methodology.methodology_type.as_str();

    methodology
        .required_sections
        .iter()
        .filter(|section| !outline.mentions(section))
        .map(|section| {
            FormatViolation::new(
                METHODOLOGY_SECTION,
                section.as_str(),
                format!("Missing required '{}' section for {} methodology", section, kind),
                format!(
                    "Add a '{}' section as required by {} methodology guidelines",
                    section, kind
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::formats::{pup, vsu};

    /// Outline text mentioning every section PUP expects
    fn full_pup_content() -> String {
        let format = pup();
        let mut lines: Vec<String> = format.preliminaries.clone();
        for chapter in &format.chapter_structure {
            lines.push(chapter.full_title());
            lines.extend(chapter.required_sections.iter().cloned());
        }
        lines.extend(format.end_matter.iter().cloned());
        lines.join("\n")
    }

    #[test]
    fn test_preliminaries_skip_title_and_approval() {
        let outline = EnhancedOutline::from_content("");
        let violations = check_preliminaries(&outline, &pup());
        assert_eq!(violations.len(), 6, "8 PUP preliminaries minus 2 unchecked");
        assert!(violations.iter().all(|v| v.guideline != "Title Page" && v.guideline != "Approval Sheet"));
        assert_eq!(violations[0].violation, "Missing required 'Abstract' section");
    }

    #[test]
    fn test_missing_chapter_suppresses_section_checks() {
        let outline = EnhancedOutline::from_content("Chapter 1\nIntroduction");
        let violations = check_chapter_structure(&outline, &pup());

        let chapter_two: Vec<_> = violations.iter().filter(|v| v.section == "Chapter 2").collect();
        assert_eq!(chapter_two.len(), 1);
        assert_eq!(chapter_two[0].guideline, CHAPTER_PRESENCE_GUIDELINE);
        assert_eq!(
            chapter_two[0].violation,
            "Missing required 'Chapter 2: REVIEW OF RELATED LITERATURE' chapter"
        );
    }

    #[test]
    fn test_missing_section_in_present_chapter() {
        let content = full_pup_content().replace("Synthesis", "");
        let violations = check_chapter_structure(&EnhancedOutline::from_content(content), &pup());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].section, "Chapter 2");
        assert_eq!(violations[0].guideline, "Synthesis");
    }

    #[test]
    fn test_references_instead_of_literature_cited() {
        let outline = EnhancedOutline::from_content("References\nAppendices");
        let violations = check_end_matter(&outline, &vsu());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].guideline, "Literature Cited");
        assert!(violations[0].violation.contains("rather than 'References'"));
    }

    #[test]
    fn test_literature_cited_missing_without_references() {
        let outline = EnhancedOutline::from_content("Appendices");
        let violations = check_end_matter(&outline, &vsu());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].violation, "Missing required 'Literature Cited' section");
    }

    #[test]
    fn test_formatting_advisory_is_permanent() {
        let violations = check_formatting(&pup());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].section, FORMATTING_SECTION);
        assert_eq!(violations[0].guideline, "Document Formatting");
        assert!(violations[0].suggestion.contains("Times New Roman"));
    }

    #[test]
    fn test_full_outline_leaves_only_formatting_advisory() {
        let outline = EnhancedOutline::from_content(full_pup_content());
        let report = ComplianceChecker::builtin().check(&outline, "pup");
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].section, FORMATTING_SECTION);
        assert!(!report.compliant);
    }

    #[test]
    fn test_check_many_preserves_order() {
        let outlines = vec![
            EnhancedOutline::from_content(""),
            EnhancedOutline::from_content(full_pup_content()),
        ];
        let reports = ComplianceChecker::builtin().check_many(&outlines, "pup");
        assert_eq!(reports.len(), 2);
        assert!(reports[0].violations.len() > reports[1].violations.len());
        assert_eq!(reports[1].violations.len(), 1);
    }
}
