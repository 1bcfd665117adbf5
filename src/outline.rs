//! Enhanced Outline
//!
//! Working document for one outline generation session. The engine never
//! persists it; callers own it and receive updated copies back.

use serde::{Deserialize, Serialize};

use crate::compliance::UniversityComplianceReport;

/// Guidance block generated for a research methodology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodologySection {
    pub title: String,
    pub content: String,
    pub purpose: String,
}

impl MethodologySection {
    pub fn new(title: &str, content: impl Into<String>, purpose: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.into(),
            purpose: purpose.to_string(),
        }
    }
}

/// Outline plus everything the adapter and checker attach to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnhancedOutline {
    /// Raw outline text; the surface every compliance check scans
    pub content: String,

    /// Narrative on how the outline fits the methodology (replaced on each adaptation)
    pub methodology_alignment: String,

    pub research_questions: Vec<String>,
    pub data_sources: Vec<String>,
    pub timeline_estimate: String,

    /// "<challenge>: <mitigation>" lines, accumulated across adaptations
    pub potential_challenges: Vec<String>,

    /// Methodology guidance blocks (replaced on each adaptation)
    pub methodology_specific_sections: Vec<MethodologySection>,

    /// Latest compliance report (replaced on each check)
    pub university_compliance: UniversityComplianceReport,
}

impl EnhancedOutline {
    /// Outline holding only raw content
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Substring test used by every compliance check
    pub fn mentions(&self, name: &str) -> bool {
        self.content.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_leaves_other_fields_empty() {
        let outline = EnhancedOutline::from_content("Chapter 1: Introduction");
        assert_eq!(outline.content, "Chapter 1: Introduction");
        assert!(outline.potential_challenges.is_empty());
        assert!(outline.methodology_specific_sections.is_empty());
        assert!(outline.methodology_alignment.is_empty());
    }

    #[test]
    fn test_mentions_is_plain_substring() {
        let outline = EnhancedOutline::from_content("we test the Hypothesis in passing");
        assert!(outline.mentions("Hypothesis"));
        assert!(!outline.mentions("hypothesis testing"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(EnhancedOutline::from_content("x")).unwrap();
        assert!(json.get("methodologySpecificSections").is_some());
        assert!(json.get("universityCompliance").is_some());
        assert!(json.get("potentialChallenges").is_some());
    }

    #[test]
    fn test_deserializes_partial_document() {
        let outline: EnhancedOutline =
            serde_json::from_str(r#"{"content": "Chapter 1", "potentialChallenges": ["a: b"]}"#).unwrap();
        assert_eq!(outline.content, "Chapter 1");
        assert_eq!(outline.potential_challenges, vec!["a: b"]);
        assert!(outline.university_compliance.violations.is_empty());
    }
}
