//! Compliance Report Types
//!
//! Violations are data, not errors: a report is always produced, and is
//! compliant exactly when it holds no violations.

use serde::{Deserialize, Serialize};

use super::checker::FORMATTING_SECTION;

/// One mismatch between an outline and a format requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatViolation {
    /// Where the problem is ("Preliminaries", "Chapter 2", "End Matter", ...)
    pub section: String,
    /// Which rule was broken (usually the missing section name)
    pub guideline: String,
    pub violation: String,
    pub suggestion: String,
}

impl FormatViolation {
    pub fn new(
        section: impl Into<String>,
        guideline: impl Into<String>,
        violation: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            guideline: guideline.into(),
            violation: violation.into(),
            suggestion: suggestion.into(),
        }
    }

    /// The formatting advisory, which no outline text can clear
    pub fn is_advisory(&self) -> bool {
        self.section == FORMATTING_SECTION
    }

    /// Report-level suggestion line derived from section and guideline
    pub fn summary_suggestion(&self) -> String {
        format!(
            "Address the {} requirement in the {} section.",
            self.guideline, self.section
        )
    }
}

/// Result of checking one outline against one institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityComplianceReport {
    pub compliant: bool,
    pub violations: Vec<FormatViolation>,
    /// One line per violation, same order
    pub suggestions: Vec<String>,
}

impl UniversityComplianceReport {
    /// Build a report, deriving `compliant` and `suggestions` from the violations
    pub fn from_violations(violations: Vec<FormatViolation>) -> Self {
        let suggestions = violations
            .iter()
            .map(FormatViolation::summary_suggestion)
            .collect();

        Self {
            compliant: violations.is_empty(),
            violations,
            suggestions,
        }
    }

    /// Append violations from a later checking phase.
    ///
    /// Existing violations keep their position; the result is compliant only
    /// if both phases were.
    pub fn merge(mut self, extra: Vec<FormatViolation>) -> Self {
        self.compliant = self.compliant && extra.is_empty();
        self.suggestions
            .extend(extra.iter().map(FormatViolation::summary_suggestion));
        self.violations.extend(extra);
        self
    }

    /// Violations other than the formatting advisory
    pub fn structural_violations(&self) -> impl Iterator<Item = &FormatViolation> {
        self.violations.iter().filter(|v| !v.is_advisory())
    }

    /// True when the only remaining violation is the formatting advisory
    pub fn is_structurally_compliant(&self) -> bool {
        self.structural_violations().next().is_none()
    }

    /// Violations tagged with the given section label
    pub fn violations_in<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a FormatViolation> + 'a {
        self.violations.iter().filter(move |v| v.section == section)
    }
}

/// An unchecked outline has nothing to report
impl Default for UniversityComplianceReport {
    fn default() -> Self {
        Self::from_violations(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(section: &str, guideline: &str) -> FormatViolation {
        FormatViolation::new(section, guideline, "missing", "add it")
    }

    #[test]
    fn test_empty_report_is_compliant() {
        let report = UniversityComplianceReport::from_violations(vec![]);
        assert!(report.compliant);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_follow_violations() {
        let report = UniversityComplianceReport::from_violations(vec![
            violation("Preliminaries", "Abstract"),
            violation("Chapter 2", "Synthesis"),
        ]);
        assert!(!report.compliant);
        assert_eq!(
            report.suggestions,
            vec![
                "Address the Abstract requirement in the Preliminaries section.",
                "Address the Synthesis requirement in the Chapter 2 section.",
            ]
        );
    }

    #[test]
    fn test_merge_keeps_base_first() {
        let base = UniversityComplianceReport::from_violations(vec![violation("End Matter", "Appendices")]);
        let merged = base.merge(vec![violation("Methodology Requirements", "Randomization")]);
        assert!(!merged.compliant);
        assert_eq!(merged.violations[0].section, "End Matter");
        assert_eq!(merged.violations[1].section, "Methodology Requirements");
        assert_eq!(merged.suggestions.len(), 2);
    }

    #[test]
    fn test_structural_view_ignores_formatting_advisory() {
        let report = UniversityComplianceReport::from_violations(vec![violation(FORMATTING_SECTION, "Document Formatting")]);
        assert!(!report.compliant);
        assert!(report.is_structurally_compliant());
        assert_eq!(report.structural_violations().count(), 0);
    }

    #[test]
    fn test_merge_of_compliant_phases_stays_compliant() {
        let merged = UniversityComplianceReport::default().merge(vec![]);
        assert!(merged.compliant);
    }
}
